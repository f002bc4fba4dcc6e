//! In-memory monthly report store.

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use pitlane_core::reports::{
    MonthlyReport, ReceiptFacts, ReportError, ReportKey, ReportOp, ReportStore, ReportType,
};

/// Monthly aggregate rows keyed by (type, month, year).
///
/// Every mutation runs under the bucket's entry lock, so two receipts
/// landing in the same month can never lose each other's update.
#[derive(Default)]
pub struct ReportRepository {
    rows: DashMap<ReportKey, MonthlyReport>,
}

impl ReportRepository {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReportStore for ReportRepository {
    fn apply(
        &self,
        key: ReportKey,
        facts: &ReceiptFacts,
        op: ReportOp,
    ) -> Result<(), ReportError> {
        match (self.rows.entry(key), op) {
            (Entry::Occupied(mut row), ReportOp::Add) => {
                row.get_mut().absorb(facts);
            }
            (Entry::Vacant(slot), ReportOp::Add) => {
                let mut row = MonthlyReport::empty(key);
                row.absorb(facts);
                slot.insert(row);
            }
            (Entry::Occupied(mut row), ReportOp::Remove) => {
                if row.get_mut().release(facts) {
                    row.remove();
                }
            }
            (Entry::Vacant(_), ReportOp::Remove) => {
                return Err(ReportError::BucketMissing(key));
            }
        }
        Ok(())
    }

    fn find(&self, key: &ReportKey) -> Option<MonthlyReport> {
        self.rows.get(key).map(|entry| entry.value().clone())
    }

    fn for_type(&self, report_type: ReportType) -> Vec<MonthlyReport> {
        self.rows
            .iter()
            .filter(|entry| entry.key().report_type == report_type)
            .map(|entry| entry.value().clone())
            .collect()
    }

    fn for_month(&self, month: u32, year: i32) -> Vec<MonthlyReport> {
        self.rows
            .iter()
            .filter(|entry| entry.key().month == month && entry.key().year == year)
            .map(|entry| entry.value().clone())
            .collect()
    }

    fn for_year(&self, year: i32) -> Vec<MonthlyReport> {
        self.rows
            .iter()
            .filter(|entry| entry.key().year == year)
            .map(|entry| entry.value().clone())
            .collect()
    }

    fn all(&self) -> Vec<MonthlyReport> {
        self.rows
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }

    fn replace_all(&self, rows: Vec<MonthlyReport>) {
        self.rows.clear();
        for row in rows {
            self.rows.insert(row.key(), row);
        }
    }
}
