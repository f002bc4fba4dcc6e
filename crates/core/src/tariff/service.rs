//! Tariff selection and catalog operations.

use std::sync::Arc;

use pitlane_shared::types::TariffId;

use super::catalog::TariffCatalog;
use super::types::Tariff;

/// Tariff service for duration-based selection and catalog maintenance.
pub struct TariffService {
    catalog: Arc<dyn TariffCatalog>,
}

impl TariffService {
    /// Creates a service over the given catalog.
    #[must_use]
    pub fn new(catalog: Arc<dyn TariffCatalog>) -> Self {
        Self { catalog }
    }

    /// Picks the tariff for a session duration: the smallest time ceiling
    /// that still covers it, falling back to the largest ceiling overall.
    ///
    /// This is a closest-fit-from-above rule, not nearest-match. Returns
    /// `None` only when `tariffs` is empty.
    #[must_use]
    pub fn pick_for_duration(tariffs: &[Tariff], minutes: u32) -> Option<&Tariff> {
        tariffs
            .iter()
            .filter(|t| t.max_minutes >= minutes)
            .min_by_key(|t| t.max_minutes)
            .or_else(|| tariffs.iter().max_by_key(|t| t.max_minutes))
    }

    /// Finds a tariff by id.
    #[must_use]
    pub fn find(&self, id: TariffId) -> Option<Tariff> {
        self.catalog.find(id)
    }

    /// Finds the tariff covering the given duration.
    #[must_use]
    pub fn find_for_duration(&self, minutes: u32) -> Option<Tariff> {
        self.catalog.find_for_duration(minutes)
    }

    /// Returns all tariffs ordered by per-person price.
    #[must_use]
    pub fn all_by_price(&self) -> Vec<Tariff> {
        let mut tariffs = self.catalog.all();
        tariffs.sort_by_key(|t| t.price_per_person);
        tariffs
    }

    /// Inserts or replaces a tariff.
    pub fn save(&self, tariff: Tariff) -> Tariff {
        self.catalog.save(tariff)
    }

    /// Deletes a tariff; returns true when a row was removed.
    pub fn delete(&self, id: TariffId) -> bool {
        self.catalog.delete(id)
    }
}
