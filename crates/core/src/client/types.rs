//! Client data types.

use chrono::NaiveDate;
use pitlane_shared::types::ClientId;
use serde::{Deserialize, Serialize};

/// A registered client, keyed by national ID.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    /// National ID (natural key).
    pub id: ClientId,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Visits in the current month; zeroed at the month boundary.
    pub monthly_visits: u32,
    /// Birth date, if known.
    pub birth_date: Option<NaiveDate>,
    /// Frequent-client discount percentage, derived from `monthly_visits`.
    ///
    /// Always one of 0, 10, 20, 30. Maintained by `ClientService`; a
    /// hand-set value does not survive a save.
    pub frequent_discount_pct: u8,
}
