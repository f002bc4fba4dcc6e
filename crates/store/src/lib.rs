//! In-memory store layer implementing the core data seams.
//!
//! Backed by `dashmap`, whose per-key entry locking provides the atomic
//! guarantees the seams demand: one receipt per reservation even under
//! concurrent generation, and lost-update-free read-modify-write on
//! monthly aggregate rows.

pub mod repositories;

pub use repositories::{
    ClientRepository, ReceiptRepository, ReportRepository, ReservationRepository,
    TariffRepository,
};
