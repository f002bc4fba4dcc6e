//! Tariff data types.

use pitlane_shared::types::TariffId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A priced track package: laps, time ceiling, and per-person price.
///
/// Immutable once selected for pricing; edits go through the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tariff {
    /// Unique identifier.
    pub id: TariffId,
    /// Number of laps included.
    pub laps: u32,
    /// Maximum track time in minutes this tariff covers.
    pub max_minutes: u32,
    /// Base price per person, in whole currency units.
    pub price_per_person: Decimal,
    /// Reservation slot length granted, in minutes.
    pub session_minutes: u32,
}
