//! Reservation error types.

use pitlane_shared::AppError;
use pitlane_shared::types::{ClientId, ReservationId};
use thiserror::Error;

/// Reservation-related errors.
#[derive(Debug, Error)]
pub enum ReservationError {
    /// Reservation not found.
    #[error("Reservation not found: {0}")]
    NotFound(ReservationId),

    /// Principal client does not exist in the directory.
    #[error("Client not found: {0}")]
    ClientNotFound(ClientId),
}

impl From<ReservationError> for AppError {
    fn from(err: ReservationError) -> Self {
        match err {
            ReservationError::NotFound(_) | ReservationError::ClientNotFound(_) => {
                Self::NotFound(err.to_string())
            }
        }
    }
}
