//! Reservations and session-duration rules.

pub mod error;
pub mod service;
pub mod store;
pub mod types;

pub use error::ReservationError;
pub use service::ReservationService;
pub use store::ReservationStore;
pub use types::{
    CreateReservationInput, DEFAULT_SESSION_MINUTES, Reservation, UpdateReservationInput,
    session_length,
};
