//! Order
//!
//! [`OrderModel`] holds the state of a single cupcake order. Each field is an
//! [`Observable`], so bound views are pushed new values as setters run. The
//! price is derived: every setter that affects it recomputes it from the
//! quantity, the pickup date and the [`PricingPolicy`].

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::{
    clock::Clock,
    dates::{DateOptions, DateOptionsError, PickupOption},
    display::{DisplayError, PriceFormatter},
    observable::Observable,
    pricing::PricingPolicy,
};

/// Errors that can occur while creating an order.
#[derive(Debug, Error)]
pub enum OrderError {
    /// The pickup dates could not be generated.
    #[error(transparent)]
    Dates(#[from] DateOptionsError),
}

/// A point-in-time copy of an order's fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderState {
    /// Number of cupcakes.
    pub quantity: u32,

    /// Chosen flavor, empty when none has been chosen.
    pub flavor: String,

    /// Whether the special flavor is selected.
    pub special_flavor_selected: bool,

    /// Pickup date label.
    pub pickup_date: String,

    /// Order total.
    pub price: Decimal,
}

/// State holder for a cupcake order.
#[derive(Debug)]
pub struct OrderModel {
    quantity: Observable<u32>,
    flavor: Observable<String>,
    special_flavor_selected: Observable<bool>,
    pickup_date: Observable<String>,
    price: Observable<Decimal>,
    date_options: DateOptions,
    policy: PricingPolicy,
}

impl OrderModel {
    /// Create an empty order with the built-in prices, offering pickup dates
    /// starting from `clock`'s today.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::Dates`] if the pickup dates run past the end of
    /// the calendar.
    pub fn new(clock: &impl Clock) -> Result<Self, OrderError> {
        Self::with_policy(clock, PricingPolicy::default())
    }

    /// Create an empty order priced with `policy`.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::Dates`] if the pickup dates run past the end of
    /// the calendar.
    pub fn with_policy(clock: &impl Clock, policy: PricingPolicy) -> Result<Self, OrderError> {
        let date_options = DateOptions::from_today(clock.today())?;

        debug!(
            same_day = date_options.same_day().label(),
            "created order model"
        );

        Ok(Self {
            quantity: Observable::new(0),
            flavor: Observable::new(String::new()),
            special_flavor_selected: Observable::new(false),
            pickup_date: Observable::new(date_options.same_day().label().to_string()),
            price: Observable::new(Decimal::ZERO),
            date_options,
            policy,
        })
    }

    /// Set the number of cupcakes and recompute the price.
    pub fn set_quantity(&mut self, quantity: u32) {
        debug!(quantity, "setting quantity");

        self.quantity.set(quantity);
        self.update_price();
    }

    /// Set the flavor for the whole order. An empty string clears it.
    pub fn set_flavor(&mut self, flavor: impl Into<String>) {
        let flavor = flavor.into();

        debug!(flavor = %flavor, "setting flavor");

        self.flavor.set(flavor);
    }

    /// Mark whether the special flavor is selected.
    ///
    /// The special flavor cannot be picked up on the same day: selecting it
    /// while the same-day date is chosen moves pickup to the next day.
    pub fn set_special_flavor_selected(&mut self, selected: bool) {
        debug!(selected, "setting special flavor");

        self.special_flavor_selected.set(selected);

        if selected
            && self.is_same_day_pickup()
            && let Some(next) = self.date_options.get(1)
        {
            let next = next.label().to_string();

            debug!(pickup_date = %next, "moving special flavor pickup off same day");

            self.pickup_date.set(next);
            self.update_price();
        }
    }

    /// Set the pickup date and recompute the price.
    ///
    /// Labels outside [`OrderModel::date_options`] are stored as given; they
    /// never match the same-day surcharge.
    pub fn set_date(&mut self, pickup_date: impl Into<String>) {
        let pickup_date = pickup_date.into();

        if self.date_options.contains_label(&pickup_date) {
            debug!(pickup_date = %pickup_date, "setting pickup date");
        } else {
            warn!(pickup_date = %pickup_date, "pickup date is not one of the offered options");
        }

        self.pickup_date.set(pickup_date);
        self.update_price();
    }

    /// Whether no flavor has been chosen yet.
    pub fn has_no_flavor_set(&self) -> bool {
        self.flavor.get().is_empty()
    }

    /// Whether the special flavor is selected.
    pub fn is_special_flavor_selected(&self) -> bool {
        *self.special_flavor_selected.get()
    }

    /// Whether the chosen pickup date is today.
    pub fn is_same_day_pickup(&self) -> bool {
        self.date_options.is_same_day(self.pickup_date.get())
    }

    /// Return the order to its initial state.
    pub fn reset_order(&mut self) {
        debug!("resetting order");

        self.quantity.set(0);
        self.flavor.set(String::new());
        self.special_flavor_selected.set(false);
        self.pickup_date
            .set(self.date_options.same_day().label().to_string());
        self.price.set(Decimal::ZERO);
    }

    /// Pickup dates generated when the order was created.
    pub fn date_options(&self) -> &DateOptions {
        &self.date_options
    }

    /// Pickup dates that can be chosen for the current flavor selection.
    pub fn available_date_options(&self) -> impl Iterator<Item = &PickupOption> {
        self.date_options
            .iter()
            .skip(usize::from(self.is_special_flavor_selected()))
    }

    /// Prices this order is calculated with.
    pub fn policy(&self) -> &PricingPolicy {
        &self.policy
    }

    /// Quantity of cupcakes.
    pub fn quantity(&self) -> &Observable<u32> {
        &self.quantity
    }

    /// Quantity, for subscribing.
    pub fn quantity_mut(&mut self) -> &mut Observable<u32> {
        &mut self.quantity
    }

    /// Flavor of the order.
    pub fn flavor(&self) -> &Observable<String> {
        &self.flavor
    }

    /// Flavor, for subscribing.
    pub fn flavor_mut(&mut self) -> &mut Observable<String> {
        &mut self.flavor
    }

    /// Special flavor flag.
    pub fn special_flavor(&self) -> &Observable<bool> {
        &self.special_flavor_selected
    }

    /// Special flavor flag, for subscribing.
    pub fn special_flavor_mut(&mut self) -> &mut Observable<bool> {
        &mut self.special_flavor_selected
    }

    /// Pickup date label.
    pub fn pickup_date(&self) -> &Observable<String> {
        &self.pickup_date
    }

    /// Pickup date, for subscribing.
    pub fn pickup_date_mut(&mut self) -> &mut Observable<String> {
        &mut self.pickup_date
    }

    /// Order total.
    pub fn price(&self) -> &Observable<Decimal> {
        &self.price
    }

    /// Order total, for subscribing.
    pub fn price_mut(&mut self) -> &mut Observable<Decimal> {
        &mut self.price
    }

    /// Renders the current total with `formatter`.
    ///
    /// # Errors
    ///
    /// Returns a [`DisplayError`] if the total cannot be represented in the
    /// formatter's currency.
    pub fn formatted_price(&self, formatter: &PriceFormatter) -> Result<String, DisplayError> {
        formatter.format(*self.price.get())
    }

    /// Copies the current field values.
    pub fn snapshot(&self) -> OrderState {
        OrderState {
            quantity: *self.quantity.get(),
            flavor: self.flavor.get().clone(),
            special_flavor_selected: *self.special_flavor_selected.get(),
            pickup_date: self.pickup_date.get().clone(),
            price: *self.price.get(),
        }
    }

    fn update_price(&mut self) {
        let price = self
            .policy
            .price(*self.quantity.get(), self.is_same_day_pickup());

        trace!(%price, "recalculated price");

        self.price.set(price);
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use jiff::civil::date;
    use rusty_money::iso::USD;
    use testresult::TestResult;

    use crate::{clock::FixedClock, pricing::MAX_AMOUNT};

    use super::*;

    fn model() -> Result<OrderModel, OrderError> {
        OrderModel::new(&FixedClock::new(date(2026, 10, 19)))
    }

    fn label(model: &OrderModel, index: usize) -> String {
        model
            .date_options()
            .get(index)
            .map(|option| option.label().to_string())
            .unwrap_or_default()
    }

    #[test]
    fn new_order_has_defaults() -> TestResult {
        let model = model()?;

        assert_eq!(
            model.snapshot(),
            OrderState {
                quantity: 0,
                flavor: String::new(),
                special_flavor_selected: false,
                pickup_date: "Mon Oct 19".to_string(),
                price: Decimal::ZERO,
            }
        );
        assert!(model.has_no_flavor_set());
        assert!(model.is_same_day_pickup());

        Ok(())
    }

    #[test]
    fn quantity_twelve_cupcakes() -> TestResult {
        let mut model = model()?;

        model.set_quantity(12);

        assert_eq!(*model.quantity().get(), 12);

        Ok(())
    }

    #[test]
    fn price_twelve_cupcakes_same_day() -> TestResult {
        let mut model = model()?;

        model.set_quantity(12);

        assert_eq!(*model.price().get(), Decimal::new(27, 0));
        assert_eq!(model.formatted_price(&PriceFormatter::new(USD))?, "$27.00");

        Ok(())
    }

    #[test]
    fn later_pickup_drops_surcharge() -> TestResult {
        let mut model = model()?;

        model.set_quantity(12);
        model.set_date(label(&model, 2));

        assert_eq!(*model.price().get(), Decimal::new(24, 0));
        assert!(!model.is_same_day_pickup());

        model.set_date(label(&model, 0));

        assert_eq!(*model.price().get(), Decimal::new(27, 0));

        Ok(())
    }

    #[test]
    fn unknown_pickup_label_is_stored_without_surcharge() -> TestResult {
        let mut model = model()?;

        model.set_quantity(6);
        model.set_date("Someday");

        assert_eq!(model.pickup_date().get(), "Someday");
        assert_eq!(*model.price().get(), Decimal::new(12, 0));

        Ok(())
    }

    #[test]
    fn flavor_does_not_change_price() -> TestResult {
        let mut model = model()?;

        model.set_date(label(&model, 1));
        model.set_flavor("Vanilla");

        assert!(!model.has_no_flavor_set());
        assert_eq!(model.flavor().get(), "Vanilla");
        assert_eq!(*model.price().get(), Decimal::ZERO);

        model.set_flavor("");

        assert!(model.has_no_flavor_set());

        Ok(())
    }

    #[test]
    fn reset_restores_defaults() -> TestResult {
        let mut model = model()?;
        let initial = model.snapshot();

        model.set_quantity(24);
        model.set_flavor("Chocolate");
        model.set_special_flavor_selected(true);
        model.set_date(label(&model, 3));

        model.reset_order();

        assert_eq!(model.snapshot(), initial);

        model.reset_order();

        assert_eq!(model.snapshot(), initial);

        Ok(())
    }

    #[test]
    fn reset_price_is_zero_despite_same_day_pickup() -> TestResult {
        let mut model = model()?;

        model.set_quantity(1);
        model.reset_order();

        assert!(model.is_same_day_pickup());
        assert_eq!(*model.price().get(), Decimal::ZERO);

        Ok(())
    }

    #[test]
    fn special_flavor_moves_same_day_pickup() -> TestResult {
        let mut model = model()?;

        model.set_quantity(12);
        model.set_special_flavor_selected(true);

        assert!(model.is_special_flavor_selected());
        assert_eq!(model.pickup_date().get(), "Tue Oct 20");
        assert_eq!(*model.price().get(), Decimal::new(24, 0));

        Ok(())
    }

    #[test]
    fn special_flavor_keeps_later_pickup() -> TestResult {
        let mut model = model()?;

        model.set_date(label(&model, 3));
        model.set_special_flavor_selected(true);

        assert_eq!(model.pickup_date().get(), "Thu Oct 22");

        Ok(())
    }

    #[test]
    fn available_dates_exclude_same_day_for_special_flavor() -> TestResult {
        let mut model = model()?;

        assert_eq!(model.available_date_options().count(), 4);

        model.set_special_flavor_selected(true);

        let labels: Vec<&str> = model
            .available_date_options()
            .map(PickupOption::label)
            .collect();
        assert_eq!(labels, ["Tue Oct 20", "Wed Oct 21", "Thu Oct 22"]);

        model.set_special_flavor_selected(false);

        assert_eq!(model.available_date_options().count(), 4);

        Ok(())
    }

    #[test]
    fn observers_see_latest_price() -> TestResult {
        let mut model = model()?;
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        model
            .price_mut()
            .subscribe(move |price| sink.borrow_mut().push(*price));

        model.set_quantity(12);
        model.set_date(label(&model, 1));
        model.set_flavor("Lemon");
        model.reset_order();

        assert_eq!(
            *seen.borrow(),
            [Decimal::new(27, 0), Decimal::new(24, 0), Decimal::ZERO]
        );

        Ok(())
    }

    #[test]
    fn largest_policy_prices_largest_order() -> TestResult {
        let policy = PricingPolicy::new(MAX_AMOUNT, MAX_AMOUNT)?;
        let mut model = OrderModel::with_policy(&FixedClock::new(date(2026, 10, 19)), policy)?;

        model.set_quantity(u32::MAX);

        assert_eq!(
            *model.price().get(),
            Decimal::from(u32::MAX) * MAX_AMOUNT + MAX_AMOUNT
        );

        Ok(())
    }

    #[test]
    fn custom_policy_prices_order() -> TestResult {
        let policy = PricingPolicy::new(Decimal::new(350, 2), Decimal::new(5, 0))?;
        let mut model = OrderModel::with_policy(&FixedClock::new(date(2026, 10, 19)), policy)?;

        model.set_quantity(4);

        assert_eq!(*model.price().get(), Decimal::new(19, 0));
        assert_eq!(model.policy(), &policy);

        Ok(())
    }
}
