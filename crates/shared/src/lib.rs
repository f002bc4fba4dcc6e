//! Shared types, errors, and configuration for Pitlane.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for type-safe entity references
//! - The validated national-ID client identifier
//! - Currency rounding helpers with decimal precision
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
