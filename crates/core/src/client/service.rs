//! Client service for visit tracking and discount-tier maintenance.

use std::sync::Arc;

use pitlane_shared::types::ClientId;

use super::directory::ClientDirectory;
use super::error::ClientError;
use super::types::Client;

/// Visits needed for the 30% tier.
const VERY_FREQUENT_VISITS: u32 = 7;
/// Visits needed for the 20% tier.
const FREQUENT_VISITS: u32 = 5;
/// Visits needed for the 10% tier.
const REGULAR_VISITS: u32 = 2;

/// Client service for visit tracking and discount-tier maintenance.
pub struct ClientService {
    directory: Arc<dyn ClientDirectory>,
}

impl ClientService {
    /// Creates a service over the given directory.
    #[must_use]
    pub fn new(directory: Arc<dyn ClientDirectory>) -> Self {
        Self { directory }
    }

    /// Returns the frequent-client discount percentage for a visit count.
    ///
    /// Thresholds: 7+ visits -> 30%, 5+ -> 20%, 2+ -> 10%, otherwise 0%.
    #[must_use]
    pub fn discount_for_visits(visits: u32) -> u8 {
        if visits >= VERY_FREQUENT_VISITS {
            30
        } else if visits >= FREQUENT_VISITS {
            20
        } else if visits >= REGULAR_VISITS {
            10
        } else {
            0
        }
    }

    /// Saves a client, recomputing the discount tier from the visit counter.
    ///
    /// A caller-set `frequent_discount_pct` does not survive a save.
    pub fn save(&self, mut client: Client) -> Client {
        client.frequent_discount_pct = Self::discount_for_visits(client.monthly_visits);
        self.directory.save(client)
    }

    /// Records a visit, bumping the counter and retiering the discount.
    pub fn record_visit(&self, id: &ClientId) -> Result<Client, ClientError> {
        let mut client = self
            .directory
            .find(id)
            .ok_or_else(|| ClientError::NotFound(id.clone()))?;
        client.monthly_visits += 1;
        Ok(self.save(client))
    }

    /// Zeroes every visit counter at the month boundary.
    ///
    /// Returns the number of clients touched.
    pub fn reset_monthly_visits(&self) -> usize {
        let clients = self.directory.all();
        let count = clients.len();
        for mut client in clients {
            client.monthly_visits = 0;
            self.save(client);
        }
        count
    }

    /// Finds a client by national ID.
    #[must_use]
    pub fn find(&self, id: &ClientId) -> Option<Client> {
        self.directory.find(id)
    }

    /// Finds a client by email.
    #[must_use]
    pub fn find_by_email(&self, email: &str) -> Option<Client> {
        self.directory.find_by_email(email)
    }

    /// Returns clients whose visit counter falls in the inclusive range.
    #[must_use]
    pub fn with_visits_between(&self, min: u32, max: u32) -> Vec<Client> {
        self.directory
            .all()
            .into_iter()
            .filter(|c| (min..=max).contains(&c.monthly_visits))
            .collect()
    }

    /// Deletes a client.
    pub fn delete(&self, id: &ClientId) -> Result<(), ClientError> {
        if self.directory.delete(id) {
            Ok(())
        } else {
            Err(ClientError::NotFound(id.clone()))
        }
    }
}
