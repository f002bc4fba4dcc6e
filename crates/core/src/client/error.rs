//! Client error types.

use pitlane_shared::AppError;
use pitlane_shared::types::ClientId;
use thiserror::Error;

/// Client-related errors.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Client not found.
    #[error("Client not found: {0}")]
    NotFound(ClientId),
}

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::NotFound(_) => Self::NotFound(err.to_string()),
        }
    }
}
