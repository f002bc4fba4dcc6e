//! Clients, visit counters, and frequent-discount tiers.

pub mod directory;
pub mod error;
pub mod service;
pub mod types;

pub use directory::ClientDirectory;
pub use error::ClientError;
pub use service::ClientService;
pub use types::Client;
