//! Shared wiring for store integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use chrono::NaiveDate;
use pitlane_core::client::{Client, ClientService};
use pitlane_core::pricing::PricingEngine;
use pitlane_core::receipt::ReceiptService;
use pitlane_core::reports::ReportAggregator;
use pitlane_core::reservation::{CreateReservationInput, Reservation, ReservationService};
use pitlane_core::tariff::{Tariff, TariffCatalog};
use pitlane_shared::config::PricingConfig;
use pitlane_shared::types::{ClientId, TariffId};
use pitlane_store::{
    ClientRepository, ReceiptRepository, ReportRepository, ReservationRepository,
    TariffRepository,
};
use rust_decimal::Decimal;

/// Fully wired services over fresh in-memory repositories.
pub struct World {
    pub clients: Arc<ClientRepository>,
    pub tariffs: Arc<TariffRepository>,
    pub reservations: Arc<ReservationRepository>,
    pub receipts: Arc<ReceiptRepository>,
    pub reports: Arc<ReportRepository>,
    pub client_service: ClientService,
    pub reservation_service: ReservationService,
    pub receipt_service: Arc<ReceiptService>,
    pub aggregator: ReportAggregator,
}

/// Wires a world with default pricing configuration (19% tax).
pub fn setup() -> World {
    setup_with(PricingConfig::default())
}

/// Wires a world with the given pricing configuration.
pub fn setup_with(config: PricingConfig) -> World {
    let clients = Arc::new(ClientRepository::new());
    let tariffs = Arc::new(TariffRepository::new());
    let reservations = Arc::new(ReservationRepository::new());
    let receipts = Arc::new(ReceiptRepository::new());
    let reports = Arc::new(ReportRepository::new());

    let aggregator =
        ReportAggregator::new(reports.clone(), tariffs.clone(), reservations.clone());
    let receipt_service = Arc::new(ReceiptService::new(
        clients.clone(),
        tariffs.clone(),
        reservations.clone(),
        receipts.clone(),
        aggregator.clone(),
        PricingEngine::new(config),
    ));
    let client_service = ClientService::new(clients.clone());
    let reservation_service = ReservationService::new(clients.clone(), reservations.clone());

    World {
        clients,
        tariffs,
        reservations,
        receipts,
        reports,
        client_service,
        reservation_service,
        receipt_service,
        aggregator,
    }
}

/// Parses a national ID fixture.
pub fn rut(raw: &str) -> ClientId {
    ClientId::parse(raw).unwrap()
}

/// The session day used across tests.
pub fn session_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
}

/// Registers a client through the service so the discount tier derives
/// from the visit counter.
pub fn register_client(
    world: &World,
    id: &str,
    visits: u32,
    birth_date: Option<NaiveDate>,
) -> Client {
    world.client_service.save(Client {
        id: rut(id),
        name: format!("Client {id}"),
        email: format!("{id}@example.com"),
        monthly_visits: visits,
        birth_date,
        frequent_discount_pct: 0,
    })
}

/// Seeds one tariff into the catalog.
pub fn seed_tariff(world: &World, laps: u32, max_minutes: u32, price: Decimal) -> Tariff {
    world.tariffs.save(Tariff {
        id: TariffId::new(),
        laps,
        max_minutes,
        price_per_person: price,
        session_minutes: max_minutes,
    })
}

/// Books a reservation on `date` with the default 30-minute window.
pub fn book(
    world: &World,
    client_id: &str,
    date: NaiveDate,
    companions: Vec<ClientId>,
) -> Reservation {
    world
        .reservation_service
        .create(CreateReservationInput {
            client_id: rut(client_id),
            date,
            start_time: None,
            end_time: None,
            duration_minutes: None,
            companions,
        })
        .unwrap()
}
