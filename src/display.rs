//! Price Display
//!
//! Prices are stored as raw decimals. Rendering them with a currency symbol
//! and separators is a presentation transform applied on read.

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{Money, iso::Currency};
use thiserror::Error;

/// Errors that can occur while rendering a price.
#[derive(Debug, Error, PartialEq)]
pub enum DisplayError {
    /// The amount does not fit in the currency's minor units.
    #[error("price {price} cannot be represented in {currency} minor units")]
    OutOfRange {
        /// Amount that failed to convert.
        price: Decimal,

        /// ISO code of the target currency.
        currency: &'static str,
    },
}

/// Formats decimal prices in a fixed currency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceFormatter {
    currency: &'static Currency,
}

impl PriceFormatter {
    /// Create a formatter for the given currency.
    pub fn new(currency: &'static Currency) -> Self {
        Self { currency }
    }

    /// The currency prices are rendered in.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Converts a decimal price to money, rounding to the currency's minor unit.
    ///
    /// # Errors
    ///
    /// Returns [`DisplayError::OutOfRange`] if the amount overflows `i64`
    /// minor units.
    pub fn to_money(&self, price: Decimal) -> Result<Money<'static, Currency>, DisplayError> {
        let minor_units = 10_i64
            .checked_pow(self.currency.exponent)
            .and_then(|scale| price.checked_mul(Decimal::from(scale)))
            .and_then(|value| value.round_dp(0).to_i64())
            .ok_or(DisplayError::OutOfRange {
                price,
                currency: self.currency.iso_alpha_code,
            })?;

        Ok(Money::from_minor(minor_units, self.currency))
    }

    /// Renders a price, e.g. `$27.00`.
    ///
    /// # Errors
    ///
    /// See [`PriceFormatter::to_money`].
    pub fn format(&self, price: Decimal) -> Result<String, DisplayError> {
        Ok(self.to_money(price)?.to_string())
    }
}
