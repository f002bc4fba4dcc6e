//! Receipt store seam.

use pitlane_shared::types::{ClientId, ReceiptId, ReservationId};

use super::types::Receipt;

/// Outcome of an atomic receipt insert.
#[derive(Debug, Clone)]
pub enum InsertOutcome {
    /// The receipt was stored; the reservation had none before.
    Created(Receipt),
    /// A receipt already existed for the reservation; nothing was written
    /// and the existing receipt is returned.
    Duplicate(Receipt),
}

/// Persistence seam for receipts.
pub trait ReceiptStore: Send + Sync {
    /// Inserts the receipt unless its reservation already has one.
    ///
    /// Must be atomic: two concurrent inserts for the same reservation
    /// yield exactly one `Created`.
    fn insert_unique(&self, receipt: Receipt) -> InsertOutcome;

    /// Finds a receipt by id.
    fn find(&self, id: ReceiptId) -> Option<Receipt>;

    /// Finds the receipt for a reservation, if one exists.
    fn find_by_reservation(&self, reservation_id: ReservationId) -> Option<Receipt>;

    /// Returns the receipts issued to a client.
    fn find_by_client(&self, client_id: &ClientId) -> Vec<Receipt>;

    /// Returns every receipt.
    fn all(&self) -> Vec<Receipt>;

    /// Removes a receipt, returning it when it existed.
    fn remove(&self, id: ReceiptId) -> Option<Receipt>;
}
