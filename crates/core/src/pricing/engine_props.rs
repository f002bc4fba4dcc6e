//! Property-based tests for the pricing engine.

use chrono::NaiveDate;
use pitlane_shared::config::PricingConfig;
use pitlane_shared::types::{ClientId, ReservationId, TariffId, rated_amount};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::engine::PricingEngine;
use crate::client::Client;
use crate::reservation::Reservation;
use crate::tariff::Tariff;

/// Strategy for per-person prices in whole currency units.
fn price_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..=100_000i64).prop_map(Decimal::from)
}

/// Strategy for the derivable frequent-discount percentages.
fn discount_pct_strategy() -> impl Strategy<Value = u8> {
    prop_oneof![Just(0u8), Just(10u8), Just(20u8), Just(30u8)]
}

/// Strategy for an optional birth date that may or may not match the
/// fixed session date (2026-03-14).
fn birth_date_strategy() -> impl Strategy<Value = Option<NaiveDate>> {
    prop_oneof![
        Just(None),
        Just(NaiveDate::from_ymd_opt(1990, 3, 14)),
        Just(NaiveDate::from_ymd_opt(1990, 7, 2)),
    ]
}

fn session_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
}

fn make_person(pct: u8, birth_date: Option<NaiveDate>) -> Client {
    Client {
        id: ClientId::parse("11111111-1").unwrap(),
        name: "Rider".to_string(),
        email: "rider@example.com".to_string(),
        monthly_visits: 0,
        birth_date,
        frequent_discount_pct: pct,
    }
}

fn make_reservation(companion_slots: usize) -> Reservation {
    Reservation {
        id: ReservationId::new(),
        client_id: ClientId::parse("12345678-5").unwrap(),
        date: session_date(),
        start_time: None,
        end_time: None,
        duration_minutes: 30,
        companions: vec![ClientId::parse("11111111-1").unwrap(); companion_slots],
    }
}

fn make_tariff(price: Decimal) -> Tariff {
    Tariff {
        id: TariffId::new(),
        laps: 10,
        max_minutes: 10,
        price_per_person: price,
        session_minutes: 30,
    }
}

proptest! {
    /// The group rate is always one of the four documented tiers.
    #[test]
    fn test_group_rate_in_documented_set(headcount in 0u32..=200) {
        let rate = PricingEngine::group_discount_rate(headcount);
        prop_assert!(
            [dec!(0), dec!(0.10), dec!(0.20), dec!(0.30)].contains(&rate)
        );
    }

    /// The final amount never goes negative and the tax identities hold.
    #[test]
    fn test_amount_identities(
        price in price_strategy(),
        people in proptest::collection::vec(
            (discount_pct_strategy(), birth_date_strategy()),
            1..=20,
        ),
    ) {
        let principal = make_person(people[0].0, people[0].1);
        let companions: Vec<Client> = people[1..]
            .iter()
            .map(|(pct, birth)| make_person(*pct, *birth))
            .collect();
        let reservation = make_reservation(companions.len());

        let engine = PricingEngine::new(PricingConfig::default());
        let breakdown = engine.price(&reservation, &principal, &companions, &make_tariff(price));

        prop_assert!(breakdown.final_amount >= Decimal::ZERO);
        prop_assert_eq!(
            breakdown.total_amount,
            breakdown.final_amount + breakdown.tax
        );
        prop_assert_eq!(
            breakdown.tax,
            rated_amount(breakdown.final_amount, dec!(0.19))
        );
        prop_assert_eq!(
            breakdown.discount_total,
            breakdown.group_discount
                + breakdown.frequent_discount
                + breakdown.birthday_discount
        );
        prop_assert_eq!(
            breakdown.base_amount,
            price * Decimal::from(breakdown.headcount)
        );
    }

    /// Dropping a companion from resolution never changes base or group
    /// discount: headcount comes from the reservation, not the resolved set.
    #[test]
    fn test_unresolved_companions_keep_headcount(
        price in price_strategy(),
        slots in 1usize..=15,
        resolved in 0usize..=15,
    ) {
        let resolved = resolved.min(slots);
        let principal = make_person(0, None);
        let companions = vec![make_person(0, None); resolved];
        let reservation = make_reservation(slots);

        let engine = PricingEngine::new(PricingConfig::default());
        let breakdown = engine.price(&reservation, &principal, &companions, &make_tariff(price));

        let slots_u32 = u32::try_from(slots).unwrap();
        prop_assert_eq!(breakdown.headcount, 1 + slots_u32);
        prop_assert_eq!(breakdown.base_amount, price * Decimal::from(1 + slots_u32));
    }
}
