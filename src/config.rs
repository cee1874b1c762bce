//! Pricing Config
//!
//! Prices and currency can be loaded from YAML:
//!
//! ```yaml
//! currency: GBP
//! unit_price: "2.50"
//! same_day_surcharge: "4.00"
//! ```
//!
//! Missing keys fall back to the built-in prices in USD.

use std::{fs, path::Path};

use rust_decimal::Decimal;
use rusty_money::{Findable, iso::Currency};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::pricing::{PricingError, PricingPolicy, SAME_DAY_SURCHARGE, UNIT_PRICE};

/// Config loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading the config file
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Configured prices were rejected
    #[error(transparent)]
    Pricing(#[from] PricingError),
}

/// Pricing settings for an order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PricingConfig {
    /// ISO 4217 currency code used to display prices.
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Price of a single cupcake.
    #[serde(default = "default_unit_price")]
    pub unit_price: Decimal,

    /// Surcharge for same-day pickup.
    #[serde(default = "default_same_day_surcharge")]
    pub same_day_surcharge: Decimal,
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_unit_price() -> Decimal {
    UNIT_PRICE
}

fn default_same_day_surcharge() -> Decimal {
    SAME_DAY_SURCHARGE
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            unit_price: default_unit_price(),
            same_day_surcharge: default_same_day_surcharge(),
        }
    }
}

impl PricingConfig {
    /// Parse a config from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the document is malformed or has
    /// unknown keys.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_norway::from_str(yaml)?)
    }

    /// Load a config from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if it cannot be parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path.as_ref())?;

        debug!(path = %path.as_ref().display(), "loaded pricing config");

        Self::from_yaml_str(&contents)
    }

    /// Resolve the configured currency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownCurrency`] if the code is not an ISO
    /// currency.
    pub fn currency(&self) -> Result<&'static Currency, ConfigError> {
        Currency::find(&self.currency)
            .ok_or_else(|| ConfigError::UnknownCurrency(self.currency.clone()))
    }

    /// Build the pricing policy.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Pricing`] if either amount is negative or
    /// larger than [`MAX_AMOUNT`](crate::pricing::MAX_AMOUNT).
    pub fn policy(&self) -> Result<PricingPolicy, ConfigError> {
        Ok(PricingPolicy::new(self.unit_price, self.same_day_surcharge)?)
    }
}
