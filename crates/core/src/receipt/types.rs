//! Receipt data types.

use pitlane_shared::types::{ClientId, ReceiptId, ReservationId, TariffId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::pricing::PriceBreakdown;

/// A finalized payment receipt for one reservation.
///
/// Created exactly once per reservation and never mutated afterward,
/// except by full deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// Unique identifier.
    pub id: ReceiptId,
    /// Principal client.
    pub client_id: ClientId,
    /// Priced reservation.
    pub reservation_id: ReservationId,
    /// Tariff the pricing used.
    pub tariff_id: TariffId,
    /// Per-person price times headcount.
    pub base_amount: Decimal,
    /// Group-size discount amount.
    pub group_discount: Decimal,
    /// Frequent-client discount amount.
    pub frequent_discount: Decimal,
    /// Birthday discount amount.
    pub birthday_discount: Decimal,
    /// Base minus discounts, floored at zero.
    pub final_amount: Decimal,
    /// Tax on the final amount.
    pub tax: Decimal,
    /// Final amount plus tax.
    pub total_amount: Decimal,
}

impl Receipt {
    /// Materializes a receipt from a price breakdown.
    #[must_use]
    pub fn from_breakdown(
        client_id: ClientId,
        reservation_id: ReservationId,
        tariff_id: TariffId,
        breakdown: &PriceBreakdown,
    ) -> Self {
        Self {
            id: ReceiptId::new(),
            client_id,
            reservation_id,
            tariff_id,
            base_amount: breakdown.base_amount,
            group_discount: breakdown.group_discount,
            frequent_discount: breakdown.frequent_discount,
            birthday_discount: breakdown.birthday_discount,
            final_amount: breakdown.final_amount,
            tax: breakdown.tax,
            total_amount: breakdown.total_amount,
        }
    }

    /// Sum of the three discount amounts.
    #[must_use]
    pub fn discount_total(&self) -> Decimal {
        self.group_discount + self.frequent_discount + self.birthday_discount
    }
}
