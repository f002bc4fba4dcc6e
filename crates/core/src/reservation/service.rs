//! Reservation service for booking and window maintenance.

use std::sync::Arc;

use chrono::NaiveDate;
use pitlane_shared::types::{ClientId, ReservationId};

use super::error::ReservationError;
use super::store::ReservationStore;
use super::types::{
    CreateReservationInput, Reservation, UpdateReservationInput, session_length,
};
use crate::client::ClientDirectory;

/// Reservation service for booking and window maintenance.
///
/// Deliberately knows nothing about receipts: receipt generation is invoked
/// by the orchestration layer after booking, and reservation deletion routes
/// through the receipt service so aggregate contributions are reversed first.
pub struct ReservationService {
    clients: Arc<dyn ClientDirectory>,
    store: Arc<dyn ReservationStore>,
}

impl ReservationService {
    /// Creates a service over the given directory and store.
    #[must_use]
    pub fn new(clients: Arc<dyn ClientDirectory>, store: Arc<dyn ReservationStore>) -> Self {
        Self { clients, store }
    }

    /// Books a session for an existing client.
    ///
    /// The duration is taken from the input when positive, otherwise
    /// computed from the time window.
    pub fn create(&self, input: CreateReservationInput) -> Result<Reservation, ReservationError> {
        if self.clients.find(&input.client_id).is_none() {
            return Err(ReservationError::ClientNotFound(input.client_id));
        }

        let duration_minutes = match input.duration_minutes {
            Some(minutes) if minutes > 0 => minutes,
            _ => session_length(input.start_time, input.end_time),
        };

        let reservation = Reservation {
            id: ReservationId::new(),
            client_id: input.client_id,
            date: input.date,
            start_time: input.start_time,
            end_time: input.end_time,
            duration_minutes,
            companions: input.companions,
        };

        Ok(self.store.save(reservation))
    }

    /// Applies a partial update and recomputes the duration from the
    /// resulting time window.
    pub fn update(
        &self,
        id: ReservationId,
        input: UpdateReservationInput,
    ) -> Result<Reservation, ReservationError> {
        let mut reservation = self
            .store
            .find(id)
            .ok_or(ReservationError::NotFound(id))?;

        if let Some(date) = input.date {
            reservation.date = date;
        }
        if let Some(start) = input.start_time {
            reservation.start_time = Some(start);
        }
        if let Some(end) = input.end_time {
            reservation.end_time = Some(end);
        }
        if let Some(companions) = input.companions {
            reservation.companions = companions;
        }

        reservation.duration_minutes =
            session_length(reservation.start_time, reservation.end_time);

        Ok(self.store.save(reservation))
    }

    /// Finds a reservation by id.
    #[must_use]
    pub fn find(&self, id: ReservationId) -> Option<Reservation> {
        self.store.find(id)
    }

    /// Returns all reservations.
    #[must_use]
    pub fn all(&self) -> Vec<Reservation> {
        self.store.all()
    }

    /// Returns reservations on the given day.
    #[must_use]
    pub fn on_day(&self, date: NaiveDate) -> Vec<Reservation> {
        self.store.find_by_date(date)
    }

    /// Returns reservations booked by the given client.
    #[must_use]
    pub fn by_client(&self, client_id: &ClientId) -> Vec<Reservation> {
        self.store.find_by_client(client_id)
    }
}
