//! Clocks
//!
//! Pickup dates are generated relative to "today". The date source is injected
//! so that order models are deterministic under test.

use jiff::{Zoned, civil::Date};

/// A source for the current calendar date.
pub trait Clock {
    /// Returns today's date.
    fn today(&self) -> Date;
}

/// Reads the current date in the system time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Date {
        Zoned::now().date()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    today: Date,
}

impl FixedClock {
    /// Creates a clock fixed to the given date.
    pub fn new(today: Date) -> Self {
        Self { today }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> Date {
        self.today
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> Date {
        (**self).today()
    }
}
