//! End-to-end pricing walkthrough for Pitlane development.
//!
//! Wires the in-memory stores, seeds clients and tariffs, books a few
//! reservations, generates receipts, and prints the monthly aggregate
//! rows. Useful for eyeballing the discount rules without a test harness.
//!
//! Usage: cargo run --bin demo

use std::sync::Arc;

use chrono::NaiveDate;
use pitlane_core::client::{Client, ClientService};
use pitlane_core::pricing::PricingEngine;
use pitlane_core::receipt::ReceiptService;
use pitlane_core::reports::ReportAggregator;
use pitlane_core::reservation::{CreateReservationInput, ReservationService};
use pitlane_core::tariff::{Tariff, TariffCatalog};
use pitlane_shared::AppConfig;
use pitlane_shared::types::{ClientId, TariffId};
use pitlane_store::{
    ClientRepository, ReceiptRepository, ReportRepository, ReservationRepository,
    TariffRepository,
};
use rust_decimal::Decimal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pitlane=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load().expect("Failed to load configuration");
    info!(tax_rate = %config.pricing.tax_rate, "configuration loaded");

    let clients = Arc::new(ClientRepository::new());
    let tariffs = Arc::new(TariffRepository::new());
    let reservations = Arc::new(ReservationRepository::new());
    let receipts = Arc::new(ReceiptRepository::new());
    let reports = Arc::new(ReportRepository::new());

    let aggregator =
        ReportAggregator::new(reports.clone(), tariffs.clone(), reservations.clone());
    let receipt_service = ReceiptService::new(
        clients.clone(),
        tariffs.clone(),
        reservations.clone(),
        receipts,
        aggregator.clone(),
        PricingEngine::new(config.pricing),
    );
    let client_service = ClientService::new(clients.clone());
    let reservation_service = ReservationService::new(clients, reservations);

    let session_date = NaiveDate::from_ymd_opt(2026, 3, 14).expect("valid date");

    println!("Seeding clients...");
    for (id, name, visits, birth_date) in [
        ("12345678-5", "Emilia Reyes", 5u32, None),
        (
            "11111111-1",
            "Tomas Soto",
            0,
            NaiveDate::from_ymd_opt(1994, 3, 14),
        ),
        ("8888888-K", "Valentina Munoz", 2, None),
    ] {
        let client = client_service.save(Client {
            id: ClientId::parse(id).expect("valid seed id"),
            name: name.to_string(),
            email: format!("{name}@example.com").replace(' ', "."),
            monthly_visits: visits,
            birth_date,
            frequent_discount_pct: 0,
        });
        println!(
            "  {} ({} visits, {}% frequent discount)",
            client.name, client.monthly_visits, client.frequent_discount_pct
        );
    }

    println!("Seeding tariffs...");
    for (laps, max_minutes, price) in [(10u32, 10u32, 15_000i64), (15, 15, 20_000), (20, 20, 25_000)] {
        tariffs.save(Tariff {
            id: TariffId::new(),
            laps,
            max_minutes,
            price_per_person: Decimal::from(price),
            session_minutes: 30,
        });
        println!("  {laps} laps / {max_minutes} min at ${price} per person");
    }

    println!("Booking reservations...");
    let solo = reservation_service
        .create(CreateReservationInput {
            client_id: ClientId::parse("12345678-5").expect("valid seed id"),
            date: session_date,
            start_time: None,
            end_time: None,
            duration_minutes: Some(10),
            companions: vec![],
        })
        .expect("booking must succeed");
    let group = reservation_service
        .create(CreateReservationInput {
            client_id: ClientId::parse("11111111-1").expect("valid seed id"),
            date: session_date,
            start_time: None,
            end_time: None,
            duration_minutes: Some(15),
            companions: vec![
                ClientId::parse("8888888-K").expect("valid seed id"),
                // Walk-in without a directory entry: counts in headcount,
                // contributes no per-person discounts.
                ClientId::parse("1-9").expect("valid seed id"),
            ],
        })
        .expect("booking must succeed");

    println!("Generating receipts...");
    for reservation in [&solo, &group] {
        let receipt = receipt_service
            .generate(reservation.id)
            .expect("receipt generation must succeed");
        println!(
            "  reservation {}: base ${} - discounts ${} + tax ${} = ${}",
            reservation.id,
            receipt.base_amount,
            receipt.discount_total(),
            receipt.tax,
            receipt.total_amount
        );
    }

    // A reservation booked without billing, picked up by the sweep.
    reservation_service
        .create(CreateReservationInput {
            client_id: ClientId::parse("8888888-K").expect("valid seed id"),
            date: session_date,
            start_time: None,
            end_time: None,
            duration_minutes: Some(20),
            companions: vec![],
        })
        .expect("booking must succeed");
    let backfilled = receipt_service.generate_missing();
    println!("Backfilled {backfilled} receipt(s)");

    println!("Monthly report rows:");
    for row in aggregator.for_month(3, 2026) {
        println!(
            "  {} {}/{}: ${} over {} receipt(s), laps {}, band {}..{}",
            row.report_type,
            row.month,
            row.year,
            row.revenue_total,
            row.receipt_count,
            row.total_laps,
            row.total_band_min,
            row.total_band_max
        );
    }

    println!("Walkthrough complete!");
}
