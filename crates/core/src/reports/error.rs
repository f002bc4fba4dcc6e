//! Report error types.

use pitlane_shared::AppError;
use pitlane_shared::types::{ReservationId, TariffId};
use thiserror::Error;

use super::types::ReportKey;

/// Errors that can occur while aggregating receipts.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The receipt's reservation no longer exists.
    #[error("Reservation not found: {0}")]
    ReservationNotFound(ReservationId),

    /// The receipt's tariff no longer exists.
    #[error("Tariff not found: {0}")]
    TariffNotFound(TariffId),

    /// A removal targeted a bucket that has no row.
    #[error("No aggregate row to remove from: {0}")]
    BucketMissing(ReportKey),
}

impl From<ReportError> for AppError {
    fn from(err: ReportError) -> Self {
        match err {
            ReportError::ReservationNotFound(_) | ReportError::TariffNotFound(_) => {
                Self::NotFound(err.to_string())
            }
            ReportError::BucketMissing(_) => Self::InvalidState(err.to_string()),
        }
    }
}
