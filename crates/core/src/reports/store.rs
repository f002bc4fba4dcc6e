//! Report store seam.

use super::error::ReportError;
use super::types::{MonthlyReport, ReceiptFacts, ReportKey, ReportOp, ReportType};

/// Persistence seam for monthly aggregate rows.
pub trait ReportStore: Send + Sync {
    /// Applies one receipt's contribution to the row at `key`.
    ///
    /// Must be an atomic read-modify-write per key: concurrent applies to
    /// the same bucket must not lose updates. `Add` creates the row when
    /// absent; `Remove` deletes it when the last contributor leaves and
    /// fails with [`ReportError::BucketMissing`] when there is no row.
    fn apply(&self, key: ReportKey, facts: &ReceiptFacts, op: ReportOp)
    -> Result<(), ReportError>;

    /// Finds the row at a key.
    fn find(&self, key: &ReportKey) -> Option<MonthlyReport>;

    /// Returns every row of one report type.
    fn for_type(&self, report_type: ReportType) -> Vec<MonthlyReport>;

    /// Returns the rows (any type) for a month.
    fn for_month(&self, month: u32, year: i32) -> Vec<MonthlyReport>;

    /// Returns the rows (any type) for a year.
    fn for_year(&self, year: i32) -> Vec<MonthlyReport>;

    /// Returns every row.
    fn all(&self) -> Vec<MonthlyReport>;

    /// Replaces the entire contents with freshly computed rows.
    fn replace_all(&self, rows: Vec<MonthlyReport>);
}
