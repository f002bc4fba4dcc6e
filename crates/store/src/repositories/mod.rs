//! Repository implementations of the core store seams.

pub mod client;
pub mod receipt;
pub mod report;
pub mod reservation;
pub mod tariff;

pub use client::ClientRepository;
pub use receipt::ReceiptRepository;
pub use report::ReportRepository;
pub use reservation::ReservationRepository;
pub use tariff::TariffRepository;
