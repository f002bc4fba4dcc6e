//! Receipt lifecycle: idempotent generation, deletion, backfill.

pub mod error;
pub mod service;
pub mod store;
pub mod types;

pub use error::ReceiptError;
pub use service::ReceiptService;
pub use store::{InsertOutcome, ReceiptStore};
pub use types::Receipt;
