//! Scenario tests for the pricing engine.

use chrono::NaiveDate;
use pitlane_shared::config::{LargeGroupBirthdayPolicy, PricingConfig};
use pitlane_shared::types::{ClientId, ReservationId, TariffId};
use rstest::rstest;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::engine::PricingEngine;
use crate::client::Client;
use crate::reservation::Reservation;
use crate::tariff::Tariff;

fn client_id(raw: &str) -> ClientId {
    ClientId::parse(raw).unwrap()
}

fn make_client(id: &str, discount_pct: u8, birth_date: Option<NaiveDate>) -> Client {
    Client {
        id: client_id(id),
        name: "Test Client".to_string(),
        email: format!("{id}@example.com"),
        monthly_visits: 0,
        birth_date,
        frequent_discount_pct: discount_pct,
    }
}

fn make_tariff(price_per_person: Decimal) -> Tariff {
    Tariff {
        id: TariffId::new(),
        laps: 10,
        max_minutes: 10,
        price_per_person,
        session_minutes: 30,
    }
}

/// Reservation with `companion_ids` companion slots, resolved or not.
fn make_reservation(companion_ids: usize, date: NaiveDate) -> Reservation {
    Reservation {
        id: ReservationId::new(),
        client_id: client_id("12345678-5"),
        date,
        start_time: None,
        end_time: None,
        duration_minutes: 30,
        companions: vec![client_id("11111111-1"); companion_ids],
    }
}

fn session_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
}

fn engine() -> PricingEngine {
    PricingEngine::new(PricingConfig::default())
}

#[rstest]
#[case(1, dec!(0))]
#[case(2, dec!(0))]
#[case(3, dec!(0.10))]
#[case(5, dec!(0.10))]
#[case(6, dec!(0.20))]
#[case(10, dec!(0.20))]
#[case(11, dec!(0.30))]
#[case(12, dec!(0.30))]
fn test_group_discount_tier_boundaries(#[case] headcount: u32, #[case] expected: Decimal) {
    assert_eq!(PricingEngine::group_discount_rate(headcount), expected);
}

#[test]
fn test_single_rider_no_discounts() {
    // price 5000, headcount 1, no discounts, 19% tax
    let principal = make_client("12345678-5", 0, None);
    let breakdown = engine().price(
        &make_reservation(0, session_date()),
        &principal,
        &[],
        &make_tariff(dec!(5000)),
    );

    assert_eq!(breakdown.base_amount, dec!(5000));
    assert_eq!(breakdown.group_discount, dec!(0));
    assert_eq!(breakdown.frequent_discount, dec!(0));
    assert_eq!(breakdown.birthday_discount, dec!(0));
    assert_eq!(breakdown.final_amount, dec!(5000));
    assert_eq!(breakdown.tax, dec!(950));
    assert_eq!(breakdown.total_amount, dec!(5950));
}

#[test]
fn test_frequent_principal_with_two_companions() {
    // price 15000, principal at 20%, two companions at 0%, headcount 3
    let principal = make_client("12345678-5", 20, None);
    let companions = vec![
        make_client("11111111-1", 0, None),
        make_client("8888888-K", 0, None),
    ];
    let breakdown = engine().price(
        &make_reservation(2, session_date()),
        &principal,
        &companions,
        &make_tariff(dec!(15000)),
    );

    assert_eq!(breakdown.base_amount, dec!(45000));
    assert_eq!(breakdown.group_discount, dec!(4500));
    assert_eq!(breakdown.frequent_discount, dec!(3000));
    assert_eq!(breakdown.birthday_discount, dec!(0));
    assert_eq!(breakdown.discount_total, dec!(7500));
    assert_eq!(breakdown.final_amount, dec!(37500));
    assert_eq!(breakdown.tax, dec!(7125));
    assert_eq!(breakdown.total_amount, dec!(44625));
}

#[test]
fn test_unresolved_companion_still_counts_in_headcount() {
    // Two companion slots but only one resolved: headcount stays 3, the
    // missing person just contributes no per-person discount.
    let principal = make_client("12345678-5", 0, None);
    let resolved = vec![make_client("11111111-1", 0, None)];
    let breakdown = engine().price(
        &make_reservation(2, session_date()),
        &principal,
        &resolved,
        &make_tariff(dec!(10000)),
    );

    assert_eq!(breakdown.headcount, 3);
    assert_eq!(breakdown.base_amount, dec!(30000));
    assert_eq!(breakdown.group_discount, dec!(3000));
    assert_eq!(breakdown.frequent_discount, dec!(0));
    assert_eq!(breakdown.birthday_discount, dec!(0));
}

#[test]
fn test_zero_tax_rate_variant() {
    let config = PricingConfig {
        tax_rate: Decimal::ZERO,
        ..PricingConfig::default()
    };
    let principal = make_client("12345678-5", 0, None);
    let breakdown = PricingEngine::new(config).price(
        &make_reservation(0, session_date()),
        &principal,
        &[],
        &make_tariff(dec!(5000)),
    );

    assert_eq!(breakdown.tax, dec!(0));
    assert_eq!(breakdown.total_amount, breakdown.final_amount);
}

#[test]
fn test_frequent_discount_rounds_per_person() {
    // 10% of 15005 = 1500.5 -> 1501 per person, rounded before summing
    let principal = make_client("12345678-5", 10, None);
    let companions = vec![make_client("11111111-1", 10, None)];
    let breakdown = engine().price(
        &make_reservation(1, session_date()),
        &principal,
        &companions,
        &make_tariff(dec!(15005)),
    );

    assert_eq!(breakdown.frequent_discount, dec!(3002));
}

#[test]
fn test_birthday_principal_in_small_group() {
    let birthday = NaiveDate::from_ymd_opt(1990, 3, 14).unwrap();
    let principal = make_client("12345678-5", 0, Some(birthday));
    let companions = vec![
        make_client("11111111-1", 0, None),
        make_client("8888888-K", 0, None),
    ];
    let breakdown = engine().price(
        &make_reservation(2, session_date()),
        &principal,
        &companions,
        &make_tariff(dec!(15000)),
    );

    // Year of birth is ignored; 50% of 15000 for the one beneficiary.
    assert_eq!(breakdown.birthday_discount, dec!(7500));
}

#[test]
fn test_birthday_cap_one_for_three_to_five() {
    let birthday = NaiveDate::from_ymd_opt(2001, 3, 14).unwrap();
    let principal = make_client("12345678-5", 0, Some(birthday));
    let companions = vec![
        make_client("11111111-1", 0, Some(birthday)),
        make_client("8888888-K", 0, Some(birthday)),
    ];
    let breakdown = engine().price(
        &make_reservation(2, session_date()),
        &principal,
        &companions,
        &make_tariff(dec!(15000)),
    );

    assert_eq!(breakdown.birthday_discount, dec!(7500));
}

#[test]
fn test_birthday_cap_two_for_six_to_ten() {
    let birthday = NaiveDate::from_ymd_opt(2001, 3, 14).unwrap();
    let principal = make_client("12345678-5", 0, None);
    let mut companions = vec![make_client("11111111-1", 0, Some(birthday)); 5];
    companions.push(make_client("8888888-K", 0, Some(birthday)));
    let breakdown = engine().price(
        &make_reservation(6, session_date()),
        &principal,
        &companions,
        &make_tariff(dec!(20000)),
    );

    assert_eq!(breakdown.headcount, 7);
    assert_eq!(breakdown.birthday_discount, dec!(20000));
}

#[test]
fn test_birthday_cap_three_for_large_groups() {
    let birthday = NaiveDate::from_ymd_opt(2001, 3, 14).unwrap();
    let principal = make_client("12345678-5", 0, Some(birthday));
    let companions = vec![make_client("11111111-1", 0, Some(birthday)); 11];
    let breakdown = engine().price(
        &make_reservation(11, session_date()),
        &principal,
        &companions,
        &make_tariff(dec!(10000)),
    );

    assert_eq!(breakdown.headcount, 12);
    assert_eq!(breakdown.group_discount, dec!(36000)); // 30% tier
    assert_eq!(breakdown.birthday_discount, dec!(15000)); // three beneficiaries
}

#[test]
fn test_birthday_large_group_not_eligible_policy() {
    let config = PricingConfig {
        large_group_birthday_policy: LargeGroupBirthdayPolicy::NotEligible,
        ..PricingConfig::default()
    };
    let birthday = NaiveDate::from_ymd_opt(2001, 3, 14).unwrap();
    let principal = make_client("12345678-5", 0, Some(birthday));
    let companions = vec![make_client("11111111-1", 0, Some(birthday)); 11];
    let breakdown = PricingEngine::new(config).price(
        &make_reservation(11, session_date()),
        &principal,
        &companions,
        &make_tariff(dec!(10000)),
    );

    assert_eq!(breakdown.birthday_discount, dec!(0));
}

#[test]
fn test_birthday_none_for_pairs() {
    let birthday = NaiveDate::from_ymd_opt(2001, 3, 14).unwrap();
    let principal = make_client("12345678-5", 0, Some(birthday));
    let companions = vec![make_client("11111111-1", 0, Some(birthday))];
    let breakdown = engine().price(
        &make_reservation(1, session_date()),
        &principal,
        &companions,
        &make_tariff(dec!(15000)),
    );

    assert_eq!(breakdown.birthday_discount, dec!(0));
}

#[test]
fn test_birthday_requires_day_and_month_match() {
    let off_by_a_day = NaiveDate::from_ymd_opt(1990, 3, 15).unwrap();
    let principal = make_client("12345678-5", 0, Some(off_by_a_day));
    let breakdown = engine().price(
        &make_reservation(3, session_date()),
        &principal,
        &[],
        &make_tariff(dec!(15000)),
    );

    assert_eq!(breakdown.birthday_discount, dec!(0));
}

#[test]
fn test_all_three_discounts_stack() {
    // headcount 4: group 10%; principal frequent 30% and birthday
    let birthday = NaiveDate::from_ymd_opt(1988, 3, 14).unwrap();
    let principal = make_client("12345678-5", 30, Some(birthday));
    let companions = vec![make_client("11111111-1", 10, None); 3];
    let breakdown = engine().price(
        &make_reservation(3, session_date()),
        &principal,
        &companions,
        &make_tariff(dec!(10000)),
    );

    assert_eq!(breakdown.base_amount, dec!(40000));
    assert_eq!(breakdown.group_discount, dec!(4000));
    assert_eq!(breakdown.frequent_discount, dec!(6000)); // 3000 + 3 * 1000
    assert_eq!(breakdown.birthday_discount, dec!(5000));
    assert_eq!(breakdown.discount_total, dec!(15000));
    assert_eq!(breakdown.final_amount, dec!(25000));
    assert_eq!(breakdown.tax, dec!(4750));
    assert_eq!(breakdown.total_amount, dec!(29750));
}

#[test]
fn test_breakdown_serializes() {
    let principal = make_client("12345678-5", 0, None);
    let breakdown = engine().price(
        &make_reservation(0, session_date()),
        &principal,
        &[],
        &make_tariff(dec!(5000)),
    );

    let json = serde_json::to_value(&breakdown).unwrap();
    assert_eq!(json["total_amount"], serde_json::json!("5950"));
}
