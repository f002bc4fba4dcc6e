//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Pricing configuration.
    #[serde(default)]
    pub pricing: PricingConfig,
}

/// Pricing configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PricingConfig {
    /// Tax rate applied to the discounted final amount.
    #[serde(default = "default_tax_rate")]
    pub tax_rate: Decimal,
    /// Birthday-discount policy for groups of more than ten people.
    #[serde(default)]
    pub large_group_birthday_policy: LargeGroupBirthdayPolicy,
}

fn default_tax_rate() -> Decimal {
    Decimal::new(19, 2) // 19%
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            tax_rate: default_tax_rate(),
            large_group_birthday_policy: LargeGroupBirthdayPolicy::default(),
        }
    }
}

/// How the birthday discount treats groups of more than ten people.
///
/// The smaller tiers are fixed (3-5 people: one beneficiary, 6-10: two);
/// only the over-ten behavior is configurable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LargeGroupBirthdayPolicy {
    /// Up to three people with a birthday receive the discount.
    #[default]
    CapAtThree,
    /// Groups over ten people receive no birthday discount.
    NotEligible,
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("PITLANE").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
