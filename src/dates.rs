//! Pickup Dates

use std::{fmt, iter};

use jiff::civil::Date;
use smallvec::SmallVec;
use thiserror::Error;

/// Number of pickup dates offered, starting with today.
pub const PICKUP_OPTION_COUNT: usize = 4;

/// `strftime` pattern for pickup labels, e.g. `Mon Oct 19`.
pub const LABEL_FORMAT: &str = "%a %b %-d";

/// Errors that can occur while generating pickup dates.
#[derive(Debug, Error)]
pub enum DateOptionsError {
    /// Adding a day to the previous option overflowed the supported calendar.
    #[error("pickup dates starting on {start} run past the end of the calendar")]
    OutOfRange {
        /// First (same-day) pickup date.
        start: Date,

        /// Underlying calendar arithmetic error.
        #[source]
        source: jiff::Error,
    },
}

/// A single pickup date and the label shown for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickupOption {
    date: Date,
    label: String,
}

impl PickupOption {
    /// Creates an option for the given date, rendering its label.
    pub fn new(date: Date) -> Self {
        Self {
            date,
            label: date.strftime(LABEL_FORMAT).to_string(),
        }
    }

    /// Calendar date of this option.
    pub fn date(&self) -> Date {
        self.date
    }

    /// Human readable label, as stored in the order.
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for PickupOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// The pickup dates on offer: today followed by the next consecutive days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateOptions {
    same_day: PickupOption,
    following: SmallVec<[PickupOption; PICKUP_OPTION_COUNT - 1]>,
}

impl DateOptions {
    /// Generates the pickup dates starting from `today`.
    ///
    /// # Errors
    ///
    /// Returns [`DateOptionsError::OutOfRange`] if one of the following days
    /// lies beyond the last supported calendar date.
    pub fn from_today(today: Date) -> Result<Self, DateOptionsError> {
        let mut following = SmallVec::new();
        let mut date = today;

        for _ in 1..PICKUP_OPTION_COUNT {
            date = date
                .tomorrow()
                .map_err(|source| DateOptionsError::OutOfRange {
                    start: today,
                    source,
                })?;

            following.push(PickupOption::new(date));
        }

        Ok(Self {
            same_day: PickupOption::new(today),
            following,
        })
    }

    /// The earliest option. Picking it up incurs the same-day surcharge.
    pub fn same_day(&self) -> &PickupOption {
        &self.same_day
    }

    /// Options after the same-day one, in date order.
    pub fn after_same_day(&self) -> impl Iterator<Item = &PickupOption> {
        self.following.iter()
    }

    /// All options in date order.
    pub fn iter(&self) -> impl Iterator<Item = &PickupOption> {
        iter::once(&self.same_day).chain(self.following.iter())
    }

    /// Option at `index`, where `0` is today.
    pub fn get(&self, index: usize) -> Option<&PickupOption> {
        self.iter().nth(index)
    }

    /// Labels of all options in date order.
    pub fn labels(&self) -> Vec<&str> {
        self.iter().map(PickupOption::label).collect()
    }

    /// Number of options on offer.
    pub fn len(&self) -> usize {
        1 + self.following.len()
    }

    /// Always `false`: there is at least the same-day option.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `label` is one of the options.
    pub fn contains_label(&self, label: &str) -> bool {
        self.iter().any(|option| option.label == label)
    }

    /// Whether `label` names the same-day option.
    pub fn is_same_day(&self, label: &str) -> bool {
        self.same_day.label == label
    }
}
