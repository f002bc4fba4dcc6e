//! Tariff catalog seam.

use pitlane_shared::types::TariffId;

use super::service::TariffService;
use super::types::Tariff;

/// Lookup and persistence seam for tariffs.
pub trait TariffCatalog: Send + Sync {
    /// Finds a tariff by id.
    fn find(&self, id: TariffId) -> Option<Tariff>;

    /// Returns all tariffs.
    fn all(&self) -> Vec<Tariff>;

    /// Inserts or replaces a tariff, returning the stored value.
    fn save(&self, tariff: Tariff) -> Tariff;

    /// Deletes a tariff; returns true when a row was removed.
    fn delete(&self, id: TariffId) -> bool;

    /// Finds the tariff covering a session of the given duration.
    ///
    /// Smallest time ceiling that still covers the duration; when nothing
    /// covers it, the largest ceiling overall. `None` only for an empty
    /// catalog.
    fn find_for_duration(&self, minutes: u32) -> Option<Tariff> {
        let tariffs = self.all();
        TariffService::pick_for_duration(&tariffs, minutes).cloned()
    }
}
