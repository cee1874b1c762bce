//! Order Summary

use std::io;

use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};
use thiserror::Error;

use crate::{
    display::{DisplayError, PriceFormatter},
    order::OrderModel,
};

/// Errors that can occur while writing an order summary.
#[derive(Debug, Error)]
pub enum SummaryError {
    /// Writing to the output failed.
    #[error("failed to write order summary")]
    IO(#[from] io::Error),

    /// The total could not be rendered.
    #[error(transparent)]
    Display(#[from] DisplayError),
}

/// Renders an order as a table.
#[derive(Debug, Clone, Copy)]
pub struct OrderSummary<'a> {
    order: &'a OrderModel,
    formatter: PriceFormatter,
}

impl<'a> OrderSummary<'a> {
    /// Create a summary of `order` with prices rendered by `formatter`.
    pub fn new(order: &'a OrderModel, formatter: PriceFormatter) -> Self {
        Self { order, formatter }
    }

    /// Writes the summary table to `out`.
    ///
    /// # Errors
    ///
    /// Returns a [`SummaryError`] if the total cannot be rendered or the output
    /// cannot be written.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), SummaryError> {
        let state = self.order.snapshot();

        let flavor = if state.flavor.is_empty() {
            "(none)".to_string()
        } else if state.special_flavor_selected {
            format!("{} (special)", state.flavor)
        } else {
            state.flavor
        };

        let pickup = if self.order.is_same_day_pickup() {
            format!("{} (same day)", state.pickup_date)
        } else {
            state.pickup_date
        };

        let mut builder = Builder::default();

        builder.push_record(["Quantity".to_string(), state.quantity.to_string()]);
        builder.push_record(["Flavor".to_string(), flavor]);
        builder.push_record(["Pickup".to_string(), pickup]);
        builder.push_record(["Total".to_string(), self.formatter.format(state.price)?]);

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Columns::new(1..2), Alignment::right());

        writeln!(out, "{table}")?;

        Ok(())
    }
}
