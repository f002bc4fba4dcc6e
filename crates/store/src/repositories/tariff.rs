//! In-memory tariff catalog.

use dashmap::DashMap;
use pitlane_core::tariff::{Tariff, TariffCatalog};
use pitlane_shared::types::TariffId;

/// Tariff catalog keyed by tariff id.
///
/// `find_for_duration` comes from the trait's default closest-fit rule.
#[derive(Default)]
pub struct TariffRepository {
    tariffs: DashMap<TariffId, Tariff>,
}

impl TariffRepository {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TariffCatalog for TariffRepository {
    fn find(&self, id: TariffId) -> Option<Tariff> {
        self.tariffs.get(&id).map(|entry| entry.value().clone())
    }

    fn all(&self) -> Vec<Tariff> {
        self.tariffs
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }

    fn save(&self, tariff: Tariff) -> Tariff {
        self.tariffs.insert(tariff.id, tariff.clone());
        tariff
    }

    fn delete(&self, id: TariffId) -> bool {
        self.tariffs.remove(&id).is_some()
    }
}
