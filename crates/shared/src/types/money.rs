//! Currency amount helpers with decimal precision.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts are `rust_decimal::Decimal` in whole currency units; the domain
//! has no fractional unit, so every rounding step is half-up to zero
//! decimal places.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds an amount half-up to a whole currency unit.
#[must_use]
pub fn round_to_unit(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Converts an integer percentage (e.g. `20`) into a multiplier (`0.20`).
#[must_use]
pub fn percent(pct: u8) -> Decimal {
    Decimal::from(pct) / Decimal::ONE_HUNDRED
}

/// Applies a rate to an amount, rounding half-up to a whole unit.
#[must_use]
pub fn rated_amount(amount: Decimal, rate: Decimal) -> Decimal {
    round_to_unit(amount * rate)
}
