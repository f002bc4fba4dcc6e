//! In-memory client directory.

use dashmap::DashMap;
use pitlane_core::client::{Client, ClientDirectory};
use pitlane_shared::types::ClientId;

/// Client directory keyed by national ID.
#[derive(Default)]
pub struct ClientRepository {
    clients: DashMap<ClientId, Client>,
}

impl ClientRepository {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClientDirectory for ClientRepository {
    fn find(&self, id: &ClientId) -> Option<Client> {
        self.clients.get(id).map(|entry| entry.value().clone())
    }

    fn find_by_email(&self, email: &str) -> Option<Client> {
        self.clients
            .iter()
            .find(|entry| entry.value().email == email)
            .map(|entry| entry.value().clone())
    }

    fn all(&self) -> Vec<Client> {
        self.clients
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }

    fn save(&self, client: Client) -> Client {
        self.clients.insert(client.id.clone(), client.clone());
        client
    }

    fn delete(&self, id: &ClientId) -> bool {
        self.clients.remove(id).is_some()
    }
}
