//! Cupcake
//!
//! State holder for a cupcake order: quantity, flavor, pickup date and a
//! derived price, exposed as observable fields.
//!
//! ```
//! use cupcake::prelude::*;
//! use jiff::civil::date;
//! use rust_decimal::Decimal;
//!
//! let mut order = OrderModel::new(&FixedClock::new(date(2026, 10, 19)))?;
//!
//! order.set_quantity(12);
//! assert_eq!(*order.price().get(), Decimal::new(27, 0));
//!
//! order.set_date("Wed Oct 21");
//! assert_eq!(*order.price().get(), Decimal::new(24, 0));
//! # Ok::<(), OrderError>(())
//! ```

pub mod clock;
pub mod config;
pub mod dates;
pub mod display;
pub mod observable;
pub mod order;
pub mod prelude;
pub mod pricing;
pub mod summary;
