//! Client directory seam.

use pitlane_shared::types::ClientId;

use super::types::Client;

/// Lookup and persistence seam for clients.
///
/// Implementations must be safe for concurrent use. The pricing engine and
/// receipt service only ever read through this trait.
pub trait ClientDirectory: Send + Sync {
    /// Finds a client by national ID.
    fn find(&self, id: &ClientId) -> Option<Client>;

    /// Finds a client by email.
    fn find_by_email(&self, email: &str) -> Option<Client>;

    /// Returns all clients.
    fn all(&self) -> Vec<Client>;

    /// Inserts or replaces a client, returning the stored value.
    fn save(&self, client: Client) -> Client;

    /// Deletes a client; returns true when a row was removed.
    fn delete(&self, id: &ClientId) -> bool;
}
