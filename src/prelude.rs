//! Cupcake prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    clock::{Clock, FixedClock, SystemClock},
    config::{ConfigError, PricingConfig},
    dates::{DateOptions, DateOptionsError, PickupOption},
    display::{DisplayError, PriceFormatter},
    observable::{Observable, ObserverKey},
    order::{OrderError, OrderModel, OrderState},
    pricing::{MAX_AMOUNT, PricingError, PricingPolicy, SAME_DAY_SURCHARGE, UNIT_PRICE},
    summary::{OrderSummary, SummaryError},
};
