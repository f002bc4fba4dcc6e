//! In-memory reservation store.

use chrono::NaiveDate;
use dashmap::DashMap;
use pitlane_core::reservation::{Reservation, ReservationStore};
use pitlane_shared::types::{ClientId, ReservationId};

/// Reservation store keyed by reservation id.
#[derive(Default)]
pub struct ReservationRepository {
    reservations: DashMap<ReservationId, Reservation>,
}

impl ReservationRepository {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReservationStore for ReservationRepository {
    fn find(&self, id: ReservationId) -> Option<Reservation> {
        self.reservations.get(&id).map(|entry| entry.value().clone())
    }

    fn all(&self) -> Vec<Reservation> {
        self.reservations
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }

    fn find_by_date(&self, date: NaiveDate) -> Vec<Reservation> {
        self.reservations
            .iter()
            .filter(|entry| entry.value().date == date)
            .map(|entry| entry.value().clone())
            .collect()
    }

    fn find_by_client(&self, client_id: &ClientId) -> Vec<Reservation> {
        self.reservations
            .iter()
            .filter(|entry| entry.value().client_id == *client_id)
            .map(|entry| entry.value().clone())
            .collect()
    }

    fn save(&self, reservation: Reservation) -> Reservation {
        self.reservations.insert(reservation.id, reservation.clone());
        reservation
    }

    fn delete(&self, id: ReservationId) -> bool {
        self.reservations.remove(&id).is_some()
    }
}
