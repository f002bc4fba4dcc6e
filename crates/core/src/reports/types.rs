//! Report data types.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How receipts are grouped for monthly revenue reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportType {
    /// Grouped by the tariff's lap count.
    ByLaps,
    /// Grouped by headcount band.
    ByHeadcount,
}

impl std::fmt::Display for ReportType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ByLaps => write!(f, "by_laps"),
            Self::ByHeadcount => write!(f, "by_headcount"),
        }
    }
}

/// Key of one monthly aggregate row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReportKey {
    /// Report type of the row.
    pub report_type: ReportType,
    /// Calendar month (1-12).
    pub month: u32,
    /// Calendar year.
    pub year: i32,
}

impl ReportKey {
    /// Builds the key for a report type and a reservation date.
    #[must_use]
    pub fn for_date(report_type: ReportType, date: NaiveDate) -> Self {
        Self {
            report_type,
            month: date.month(),
            year: date.year(),
        }
    }
}

impl std::fmt::Display for ReportKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}/{}", self.report_type, self.month, self.year)
    }
}

/// Headcount band used by headcount-based reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadcountBand {
    /// Smallest headcount in the band.
    pub min: u32,
    /// Largest headcount in the band.
    pub max: u32,
}

impl HeadcountBand {
    /// Returns the band a headcount falls into: 1-2, 3-5, 6-10 or 11-20.
    #[must_use]
    pub fn for_headcount(headcount: u32) -> Self {
        match headcount {
            0..=2 => Self { min: 1, max: 2 },
            3..=5 => Self { min: 3, max: 5 },
            6..=10 => Self { min: 6, max: 10 },
            _ => Self { min: 11, max: 20 },
        }
    }
}

/// Operation to apply to the aggregates for one receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportOp {
    /// The receipt starts contributing to its buckets.
    Add,
    /// The receipt's contribution is reversed.
    Remove,
}

/// The resolved facts one receipt contributes to the aggregates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptFacts {
    /// Reservation date (selects the month/year bucket).
    pub date: NaiveDate,
    /// Tax-inclusive total of the receipt.
    pub revenue: Decimal,
    /// Lap count of the receipt's tariff.
    pub laps: u32,
    /// Headcount band of the reservation.
    pub band: HeadcountBand,
}

/// A monthly aggregate row.
///
/// Invariant: `revenue_total` and `receipt_count` equal the sums over the
/// receipts currently attributed to the bucket. Rows with no contributors
/// are deleted, never kept at zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyReport {
    /// Report type of the row.
    pub report_type: ReportType,
    /// Calendar month (1-12).
    pub month: u32,
    /// Calendar year.
    pub year: i32,
    /// Running tax-inclusive revenue.
    pub revenue_total: Decimal,
    /// Number of contributing receipts.
    pub receipt_count: u32,
    /// Running lap total (lap-based rows only).
    pub total_laps: u32,
    /// Summed band minimums (headcount-based rows only).
    pub total_band_min: u32,
    /// Summed band maximums (headcount-based rows only).
    pub total_band_max: u32,
}

impl MonthlyReport {
    /// Creates an empty row for the given key.
    #[must_use]
    pub fn empty(key: ReportKey) -> Self {
        Self {
            report_type: key.report_type,
            month: key.month,
            year: key.year,
            revenue_total: Decimal::ZERO,
            receipt_count: 0,
            total_laps: 0,
            total_band_min: 0,
            total_band_max: 0,
        }
    }

    /// Returns the row's bucket key.
    #[must_use]
    pub fn key(&self) -> ReportKey {
        ReportKey {
            report_type: self.report_type,
            month: self.month,
            year: self.year,
        }
    }

    /// Adds one receipt's contribution.
    pub fn absorb(&mut self, facts: &ReceiptFacts) {
        self.revenue_total += facts.revenue;
        self.receipt_count += 1;
        match self.report_type {
            ReportType::ByLaps => self.total_laps += facts.laps,
            ReportType::ByHeadcount => {
                self.total_band_min += facts.band.min;
                self.total_band_max += facts.band.max;
            }
        }
    }

    /// Reverses one receipt's contribution.
    ///
    /// Returns true when no contributors remain and the row must be
    /// deleted rather than persisted.
    pub fn release(&mut self, facts: &ReceiptFacts) -> bool {
        self.revenue_total -= facts.revenue;
        self.receipt_count = self.receipt_count.saturating_sub(1);
        match self.report_type {
            ReportType::ByLaps => {
                self.total_laps = self.total_laps.saturating_sub(facts.laps);
            }
            ReportType::ByHeadcount => {
                self.total_band_min = self.total_band_min.saturating_sub(facts.band.min);
                self.total_band_max = self.total_band_max.saturating_sub(facts.band.max);
            }
        }
        self.receipt_count == 0
    }
}
