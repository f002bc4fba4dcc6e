//! Pricing data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Itemized result of pricing one reservation.
///
/// All amounts are whole currency units, rounded half-up where a rule
/// produces fractions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    /// People on the track (principal plus companion ids, resolved or not).
    pub headcount: u32,
    /// Per-person price times headcount, before discounts.
    pub base_amount: Decimal,
    /// Group-size discount amount.
    pub group_discount: Decimal,
    /// Summed frequent-client discount across resolved people.
    pub frequent_discount: Decimal,
    /// Summed birthday discount across beneficiaries.
    pub birthday_discount: Decimal,
    /// Sum of the three discounts.
    pub discount_total: Decimal,
    /// Base minus discounts, floored at zero.
    pub final_amount: Decimal,
    /// Tax on the final amount.
    pub tax: Decimal,
    /// Final amount plus tax.
    pub total_amount: Decimal,
}
