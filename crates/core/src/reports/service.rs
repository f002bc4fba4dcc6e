//! Incremental monthly aggregation over receipts.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use super::error::ReportError;
use super::store::ReportStore;
use super::types::{HeadcountBand, MonthlyReport, ReceiptFacts, ReportKey, ReportOp, ReportType};
use crate::receipt::Receipt;
use crate::reservation::ReservationStore;
use crate::tariff::TariffCatalog;

/// Keeps monthly aggregate rows in sync with receipt lifecycle events.
///
/// Each receipt contributes to exactly two buckets (one per report type)
/// for its reservation's month. `apply` must be called exactly once per
/// lifecycle event; the receipt service owns that discipline.
#[derive(Clone)]
pub struct ReportAggregator {
    store: Arc<dyn ReportStore>,
    tariffs: Arc<dyn TariffCatalog>,
    reservations: Arc<dyn ReservationStore>,
}

impl ReportAggregator {
    /// Creates an aggregator over the given stores.
    #[must_use]
    pub fn new(
        store: Arc<dyn ReportStore>,
        tariffs: Arc<dyn TariffCatalog>,
        reservations: Arc<dyn ReservationStore>,
    ) -> Self {
        Self {
            store,
            tariffs,
            reservations,
        }
    }

    /// Applies one receipt to both of its monthly buckets.
    ///
    /// `Remove` must run while the receipt's reservation and tariff still
    /// exist; callers reverse contributions before deleting either.
    pub fn apply(&self, receipt: &Receipt, op: ReportOp) -> Result<(), ReportError> {
        let facts = self.facts_for(receipt)?;
        self.store
            .apply(ReportKey::for_date(ReportType::ByLaps, facts.date), &facts, op)?;
        self.store.apply(
            ReportKey::for_date(ReportType::ByHeadcount, facts.date),
            &facts,
            op,
        )?;
        debug!(receipt = %receipt.id, ?op, month = %facts.date.format("%Y-%m"),
            "applied receipt to monthly aggregates");
        Ok(())
    }

    /// Recomputes every aggregate row from a full receipt set and replaces
    /// the store's contents.
    ///
    /// The repair pass for drift after partial failures: correct whenever
    /// `receipts` is the complete current set, at the cost of a full scan.
    /// Returns the number of rows written.
    pub fn rebuild_from(&self, receipts: &[Receipt]) -> Result<usize, ReportError> {
        let mut rows: HashMap<ReportKey, MonthlyReport> = HashMap::new();
        for receipt in receipts {
            let facts = self.facts_for(receipt)?;
            for report_type in [ReportType::ByLaps, ReportType::ByHeadcount] {
                let key = ReportKey::for_date(report_type, facts.date);
                rows.entry(key)
                    .or_insert_with(|| MonthlyReport::empty(key))
                    .absorb(&facts);
            }
        }
        let count = rows.len();
        self.store.replace_all(rows.into_values().collect());
        Ok(count)
    }

    /// Finds the row at a key.
    #[must_use]
    pub fn find(&self, key: &ReportKey) -> Option<MonthlyReport> {
        self.store.find(key)
    }

    /// Returns every row of one report type.
    #[must_use]
    pub fn for_type(&self, report_type: ReportType) -> Vec<MonthlyReport> {
        self.store.for_type(report_type)
    }

    /// Returns the rows for a month.
    #[must_use]
    pub fn for_month(&self, month: u32, year: i32) -> Vec<MonthlyReport> {
        self.store.for_month(month, year)
    }

    /// Returns the rows for a year.
    #[must_use]
    pub fn for_year(&self, year: i32) -> Vec<MonthlyReport> {
        self.store.for_year(year)
    }

    /// Returns every row.
    #[must_use]
    pub fn all(&self) -> Vec<MonthlyReport> {
        self.store.all()
    }

    /// Resolves the receipt's reservation and tariff into bucket facts.
    fn facts_for(&self, receipt: &Receipt) -> Result<ReceiptFacts, ReportError> {
        let reservation = self
            .reservations
            .find(receipt.reservation_id)
            .ok_or(ReportError::ReservationNotFound(receipt.reservation_id))?;
        let tariff = self
            .tariffs
            .find(receipt.tariff_id)
            .ok_or(ReportError::TariffNotFound(receipt.tariff_id))?;

        Ok(ReceiptFacts {
            date: reservation.date,
            revenue: receipt.total_amount,
            laps: tariff.laps,
            band: HeadcountBand::for_headcount(reservation.headcount()),
        })
    }
}
