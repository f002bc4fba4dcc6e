//! Receipt lifecycle orchestration.

use std::sync::Arc;

use pitlane_shared::types::{ClientId, ReceiptId, ReservationId};
use tracing::{info, warn};

use super::error::ReceiptError;
use super::store::{InsertOutcome, ReceiptStore};
use super::types::Receipt;
use crate::client::{Client, ClientDirectory};
use crate::pricing::PricingEngine;
use crate::reports::{ReportAggregator, ReportOp};
use crate::reservation::ReservationStore;
use crate::tariff::TariffCatalog;

/// Orchestrates receipt generation, deletion, and the tie to reservations.
///
/// All collaborators are passed in explicitly; nothing here owns the
/// reservation logic, so there is no cycle between booking and billing.
pub struct ReceiptService {
    clients: Arc<dyn ClientDirectory>,
    tariffs: Arc<dyn TariffCatalog>,
    reservations: Arc<dyn ReservationStore>,
    receipts: Arc<dyn ReceiptStore>,
    aggregator: ReportAggregator,
    engine: PricingEngine,
}

impl ReceiptService {
    /// Creates a service over the given seams.
    #[must_use]
    pub fn new(
        clients: Arc<dyn ClientDirectory>,
        tariffs: Arc<dyn TariffCatalog>,
        reservations: Arc<dyn ReservationStore>,
        receipts: Arc<dyn ReceiptStore>,
        aggregator: ReportAggregator,
        engine: PricingEngine,
    ) -> Self {
        Self {
            clients,
            tariffs,
            reservations,
            receipts,
            aggregator,
            engine,
        }
    }

    /// Generates the receipt for a reservation, idempotently.
    ///
    /// A reservation that already has a receipt gets the stored one back
    /// unchanged; nothing is recomputed and the aggregates are untouched.
    /// Concurrent calls race on an atomic insert: exactly one creates the
    /// receipt and applies the aggregate contribution, the rest receive
    /// the winner's receipt.
    pub fn generate(&self, reservation_id: ReservationId) -> Result<Receipt, ReceiptError> {
        if let Some(existing) = self.receipts.find_by_reservation(reservation_id) {
            return Ok(existing);
        }

        let reservation = self
            .reservations
            .find(reservation_id)
            .ok_or(ReceiptError::ReservationNotFound(reservation_id))?;
        let principal = self.clients.find(&reservation.client_id).ok_or_else(|| {
            ReceiptError::PrincipalUnknown {
                reservation: reservation_id,
                client: reservation.client_id.clone(),
            }
        })?;
        let tariff = self
            .tariffs
            .find_for_duration(reservation.duration_minutes)
            .ok_or(ReceiptError::NoTariffConfigured(reservation.duration_minutes))?;

        // Companions that do not resolve are skipped: they still count in
        // headcount but contribute no per-person discounts.
        let companions: Vec<Client> = reservation
            .companions
            .iter()
            .filter_map(|id| self.clients.find(id))
            .collect();

        let breakdown = self
            .engine
            .price(&reservation, &principal, &companions, &tariff);
        let receipt = Receipt::from_breakdown(
            reservation.client_id.clone(),
            reservation_id,
            tariff.id,
            &breakdown,
        );

        match self.receipts.insert_unique(receipt) {
            InsertOutcome::Created(receipt) => {
                self.aggregator.apply(&receipt, ReportOp::Add)?;
                info!(
                    receipt = %receipt.id,
                    reservation = %reservation_id,
                    total = %receipt.total_amount,
                    "receipt generated"
                );
                Ok(receipt)
            }
            // Lost the insert race; the winner applied the aggregates.
            InsertOutcome::Duplicate(existing) => Ok(existing),
        }
    }

    /// Deletes a receipt, reversing its aggregate contribution first.
    pub fn delete(&self, receipt_id: ReceiptId) -> Result<(), ReceiptError> {
        let receipt = self
            .receipts
            .find(receipt_id)
            .ok_or(ReceiptError::NotFound(receipt_id))?;
        self.aggregator.apply(&receipt, ReportOp::Remove)?;
        self.receipts.remove(receipt_id);
        info!(receipt = %receipt_id, "receipt deleted");
        Ok(())
    }

    /// Deletes a reservation, detaching its receipt first.
    ///
    /// The receipt (and its aggregate contribution) must go before the
    /// reservation row: once the reservation is gone the contribution can
    /// no longer be resolved.
    pub fn delete_reservation(&self, reservation_id: ReservationId) -> Result<(), ReceiptError> {
        if let Some(receipt) = self.receipts.find_by_reservation(reservation_id) {
            self.delete(receipt.id)?;
        }
        if self.reservations.delete(reservation_id) {
            Ok(())
        } else {
            Err(ReceiptError::ReservationNotFound(reservation_id))
        }
    }

    /// Generates receipts for reservations that lack one.
    ///
    /// Per-reservation failures are logged and skipped so one broken
    /// reservation does not block the sweep. Returns how many receipts
    /// were created.
    pub fn generate_missing(&self) -> usize {
        let mut generated = 0;
        for reservation in self.reservations.all() {
            if self.receipts.find_by_reservation(reservation.id).is_some() {
                continue;
            }
            match self.generate(reservation.id) {
                Ok(_) => generated += 1,
                Err(err) => {
                    warn!(reservation = %reservation.id, %err, "skipping receipt backfill");
                }
            }
        }
        if generated > 0 {
            info!(generated, "backfilled missing receipts");
        }
        generated
    }

    /// Finds a receipt by id.
    #[must_use]
    pub fn find(&self, id: ReceiptId) -> Option<Receipt> {
        self.receipts.find(id)
    }

    /// Finds the receipt for a reservation.
    #[must_use]
    pub fn for_reservation(&self, reservation_id: ReservationId) -> Option<Receipt> {
        self.receipts.find_by_reservation(reservation_id)
    }

    /// Returns the receipts issued to a client.
    #[must_use]
    pub fn for_client(&self, client_id: &ClientId) -> Vec<Receipt> {
        self.receipts.find_by_client(client_id)
    }

    /// Returns every receipt.
    #[must_use]
    pub fn all(&self) -> Vec<Receipt> {
        self.receipts.all()
    }
}
