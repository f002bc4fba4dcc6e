//! In-memory receipt store.

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use pitlane_core::receipt::{InsertOutcome, Receipt, ReceiptStore};
use pitlane_shared::types::{ClientId, ReceiptId, ReservationId};

/// Receipt store keyed by reservation.
///
/// One receipt per reservation is the primary invariant, so rows live
/// under the reservation key and a secondary index maps receipt ids back.
/// `insert_unique` races resolve on the reservation entry lock.
#[derive(Default)]
pub struct ReceiptRepository {
    by_reservation: DashMap<ReservationId, Receipt>,
    id_index: DashMap<ReceiptId, ReservationId>,
}

impl ReceiptRepository {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReceiptStore for ReceiptRepository {
    fn insert_unique(&self, receipt: Receipt) -> InsertOutcome {
        match self.by_reservation.entry(receipt.reservation_id) {
            Entry::Occupied(existing) => InsertOutcome::Duplicate(existing.get().clone()),
            Entry::Vacant(slot) => {
                self.id_index.insert(receipt.id, receipt.reservation_id);
                slot.insert(receipt.clone());
                InsertOutcome::Created(receipt)
            }
        }
    }

    fn find(&self, id: ReceiptId) -> Option<Receipt> {
        let reservation_id = self.id_index.get(&id).map(|entry| *entry.value())?;
        self.by_reservation
            .get(&reservation_id)
            .map(|entry| entry.value().clone())
    }

    fn find_by_reservation(&self, reservation_id: ReservationId) -> Option<Receipt> {
        self.by_reservation
            .get(&reservation_id)
            .map(|entry| entry.value().clone())
    }

    fn find_by_client(&self, client_id: &ClientId) -> Vec<Receipt> {
        self.by_reservation
            .iter()
            .filter(|entry| entry.value().client_id == *client_id)
            .map(|entry| entry.value().clone())
            .collect()
    }

    fn all(&self) -> Vec<Receipt> {
        self.by_reservation
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }

    fn remove(&self, id: ReceiptId) -> Option<Receipt> {
        let (_, reservation_id) = self.id_index.remove(&id)?;
        self.by_reservation
            .remove(&reservation_id)
            .map(|(_, receipt)| receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn make_receipt(reservation_id: ReservationId) -> Receipt {
        Receipt {
            id: ReceiptId::new(),
            client_id: ClientId::parse("12345678-5").unwrap(),
            reservation_id,
            tariff_id: pitlane_shared::types::TariffId::new(),
            base_amount: dec!(5000),
            group_discount: dec!(0),
            frequent_discount: dec!(0),
            birthday_discount: dec!(0),
            final_amount: dec!(5000),
            tax: dec!(950),
            total_amount: dec!(5950),
        }
    }

    #[test]
    fn test_second_insert_for_reservation_is_duplicate() {
        let repo = ReceiptRepository::new();
        let reservation_id = ReservationId::new();

        let first = match repo.insert_unique(make_receipt(reservation_id)) {
            InsertOutcome::Created(receipt) => receipt,
            InsertOutcome::Duplicate(_) => panic!("first insert must create"),
        };

        match repo.insert_unique(make_receipt(reservation_id)) {
            InsertOutcome::Duplicate(existing) => assert_eq!(existing.id, first.id),
            InsertOutcome::Created(_) => panic!("second insert must not create"),
        }
        assert_eq!(repo.all().len(), 1);
    }

    #[test]
    fn test_remove_clears_both_indexes() {
        let repo = ReceiptRepository::new();
        let reservation_id = ReservationId::new();
        let InsertOutcome::Created(receipt) = repo.insert_unique(make_receipt(reservation_id))
        else {
            panic!("insert must create");
        };

        assert!(repo.remove(receipt.id).is_some());
        assert!(repo.find(receipt.id).is_none());
        assert!(repo.find_by_reservation(reservation_id).is_none());
        assert!(repo.remove(receipt.id).is_none());
    }
}
