//! Reservation store seam.

use chrono::NaiveDate;
use pitlane_shared::types::{ClientId, ReservationId};

use super::types::Reservation;

/// Lookup and persistence seam for reservations.
pub trait ReservationStore: Send + Sync {
    /// Finds a reservation by id.
    fn find(&self, id: ReservationId) -> Option<Reservation>;

    /// Returns all reservations.
    fn all(&self) -> Vec<Reservation>;

    /// Returns reservations on the given day.
    fn find_by_date(&self, date: NaiveDate) -> Vec<Reservation>;

    /// Returns reservations booked by the given client.
    fn find_by_client(&self, client_id: &ClientId) -> Vec<Reservation>;

    /// Inserts or replaces a reservation, returning the stored value.
    fn save(&self, reservation: Reservation) -> Reservation;

    /// Deletes a reservation; returns true when a row was removed.
    fn delete(&self, id: ReservationId) -> bool;
}
