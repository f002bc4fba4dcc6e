//! Price computation for reservations.

use chrono::{Datelike, NaiveDate};
use pitlane_shared::config::{LargeGroupBirthdayPolicy, PricingConfig};
use pitlane_shared::types::{percent, rated_amount};
use rust_decimal::Decimal;

use super::types::PriceBreakdown;
use crate::client::Client;
use crate::reservation::Reservation;
use crate::tariff::Tariff;

/// The pure pricing engine.
///
/// Holds only configuration; every lookup result is passed in by the
/// caller, so pricing is a pure function over its arguments.
pub struct PricingEngine {
    config: PricingConfig,
}

impl PricingEngine {
    /// Creates an engine with the given pricing configuration.
    #[must_use]
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    /// Prices a reservation.
    ///
    /// `companions` holds the companion ids that resolved in the client
    /// directory, in reservation order. Unresolved ids contribute nothing
    /// to the per-person discounts but still count toward headcount via
    /// the reservation's companion list.
    #[must_use]
    pub fn price(
        &self,
        reservation: &Reservation,
        principal: &Client,
        companions: &[Client],
        tariff: &Tariff,
    ) -> PriceBreakdown {
        let headcount = reservation.headcount();
        let base_amount = tariff.price_per_person * Decimal::from(headcount);

        let group_discount = rated_amount(base_amount, Self::group_discount_rate(headcount));
        let frequent_discount =
            Self::frequent_discount(principal, companions, tariff.price_per_person);
        let birthday_discount = self.birthday_discount(
            reservation.date,
            principal,
            companions,
            headcount,
            tariff.price_per_person,
        );

        let discount_total = group_discount + frequent_discount + birthday_discount;
        let final_amount = (base_amount - discount_total).max(Decimal::ZERO);
        let tax = rated_amount(final_amount, self.config.tax_rate);
        let total_amount = final_amount + tax;

        PriceBreakdown {
            headcount,
            base_amount,
            group_discount,
            frequent_discount,
            birthday_discount,
            discount_total,
            final_amount,
            tax,
            total_amount,
        }
    }

    /// Group-size discount rate: 1-2 people 0%, 3-5 10%, 6-10 20%, 11+ 30%.
    #[must_use]
    pub fn group_discount_rate(headcount: u32) -> Decimal {
        match headcount {
            0..=2 => Decimal::ZERO,
            3..=5 => Decimal::new(10, 2),
            6..=10 => Decimal::new(20, 2),
            _ => Decimal::new(30, 2),
        }
    }

    /// Maximum birthday beneficiaries for a group size.
    ///
    /// 1-2 people: none; 3-5: one; 6-10: two; over ten per the configured
    /// policy.
    #[must_use]
    pub fn birthday_limit(headcount: u32, policy: LargeGroupBirthdayPolicy) -> usize {
        match headcount {
            0..=2 => 0,
            3..=5 => 1,
            6..=10 => 2,
            _ => match policy {
                LargeGroupBirthdayPolicy::CapAtThree => 3,
                LargeGroupBirthdayPolicy::NotEligible => 0,
            },
        }
    }

    /// True when the person's birth day and month match the session date
    /// (year ignored).
    #[must_use]
    pub fn falls_on_birthday(person: &Client, date: NaiveDate) -> bool {
        person
            .birth_date
            .is_some_and(|born| born.day() == date.day() && born.month() == date.month())
    }

    /// Per-person visit-tier discount, rounded per person, summed.
    fn frequent_discount(
        principal: &Client,
        companions: &[Client],
        price_per_person: Decimal,
    ) -> Decimal {
        std::iter::once(principal)
            .chain(companions)
            .map(|person| rated_amount(price_per_person, percent(person.frequent_discount_pct)))
            .sum()
    }

    /// 50% of the per-person price for each beneficiary, principal checked
    /// first, companions in reservation order, up to the group-size cap.
    fn birthday_discount(
        &self,
        date: NaiveDate,
        principal: &Client,
        companions: &[Client],
        headcount: u32,
        price_per_person: Decimal,
    ) -> Decimal {
        let limit = Self::birthday_limit(headcount, self.config.large_group_birthday_policy);
        if limit == 0 {
            return Decimal::ZERO;
        }

        let beneficiaries = std::iter::once(principal)
            .chain(companions)
            .filter(|person| Self::falls_on_birthday(person, date))
            .take(limit)
            .count();

        let per_beneficiary = rated_amount(price_per_person, Decimal::new(50, 2));
        per_beneficiary * Decimal::from(beneficiaries)
    }
}
