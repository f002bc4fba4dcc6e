//! Receipt error types.

use pitlane_shared::AppError;
use pitlane_shared::types::{ClientId, ReceiptId, ReservationId};
use thiserror::Error;

use crate::reports::ReportError;

/// Errors that can occur in the receipt lifecycle.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// Reservation not found.
    #[error("Reservation not found: {0}")]
    ReservationNotFound(ReservationId),

    /// Receipt not found.
    #[error("Receipt not found: {0}")]
    NotFound(ReceiptId),

    /// The reservation references a principal that is not in the directory.
    #[error("Reservation {reservation} references unknown principal client {client}")]
    PrincipalUnknown {
        /// The reservation being priced.
        reservation: ReservationId,
        /// The unresolvable principal.
        client: ClientId,
    },

    /// The tariff catalog has nothing to price the session with.
    #[error("No tariff in the catalog covers a {0}-minute session")]
    NoTariffConfigured(u32),

    /// Aggregate bookkeeping failed.
    #[error(transparent)]
    Report(#[from] ReportError),
}

impl From<ReceiptError> for AppError {
    fn from(err: ReceiptError) -> Self {
        match err {
            ReceiptError::ReservationNotFound(_) | ReceiptError::NotFound(_) => {
                Self::NotFound(err.to_string())
            }
            ReceiptError::PrincipalUnknown { .. } => Self::InvalidState(err.to_string()),
            ReceiptError::NoTariffConfigured(_) => Self::Configuration(err.to_string()),
            ReceiptError::Report(report) => report.into(),
        }
    }
}
