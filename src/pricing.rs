//! Pricing

use rust_decimal::Decimal;
use thiserror::Error;

/// Price for a single cupcake (2.00).
pub const UNIT_PRICE: Decimal = Decimal::from_parts(200, 0, 0, false, 2);

/// Additional cost for picking the order up on the same day (3.00).
pub const SAME_DAY_SURCHARGE: Decimal = Decimal::from_parts(300, 0, 0, false, 2);

/// Largest accepted unit price or surcharge.
///
/// Keeps `u32::MAX` cupcakes plus the surcharge well inside `Decimal` range.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Errors that can occur while building a pricing policy.
#[derive(Debug, Error, PartialEq)]
pub enum PricingError {
    /// Amount is negative or larger than [`MAX_AMOUNT`].
    #[error("invalid {field}: {amount} (expected 0 to 1000000)")]
    InvalidAmount {
        /// Name of the offending amount.
        field: &'static str,

        /// Rejected amount.
        amount: Decimal,
    },
}

/// Prices used to compute an order total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingPolicy {
    unit_price: Decimal,
    same_day_surcharge: Decimal,
}

impl PricingPolicy {
    /// Creates a policy from a unit price and a same-day surcharge.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidAmount`] if either amount is negative or
    /// larger than [`MAX_AMOUNT`].
    pub fn new(unit_price: Decimal, same_day_surcharge: Decimal) -> Result<Self, PricingError> {
        Ok(Self {
            unit_price: validate_amount("unit_price", unit_price)?,
            same_day_surcharge: validate_amount("same_day_surcharge", same_day_surcharge)?,
        })
    }

    /// Price of a single cupcake.
    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    /// Surcharge for same-day pickup.
    pub fn same_day_surcharge(&self) -> Decimal {
        self.same_day_surcharge
    }

    /// Calculates the price of `quantity` cupcakes.
    ///
    /// The surcharge is added whenever `same_day` is set, including for an
    /// empty order.
    pub fn price(&self, quantity: u32, same_day: bool) -> Decimal {
        let subtotal = Decimal::from(quantity) * self.unit_price;

        if same_day {
            subtotal + self.same_day_surcharge
        } else {
            subtotal
        }
    }
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            unit_price: UNIT_PRICE,
            same_day_surcharge: SAME_DAY_SURCHARGE,
        }
    }
}

fn validate_amount(field: &'static str, amount: Decimal) -> Result<Decimal, PricingError> {
    if amount.is_sign_negative() || amount > MAX_AMOUNT {
        Err(PricingError::InvalidAmount { field, amount })
    } else {
        Ok(amount)
    }
}
