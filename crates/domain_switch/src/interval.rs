//! Interval calculation
//!
//! Converts a policy's start and end dates and a switch instant into
//! whole-day counts. Both counts are ceilings, so any part of a day
//! counts as a full day.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{ceil_days, days_until, Timezone};

/// Whole-day counts for a policy term at a switch instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalResult {
    /// Length of the policy term in days; non-positive for a malformed term
    pub total_days: i64,
    /// Days of cover left after the switch; never negative
    pub days_remaining: i64,
}

impl IntervalResult {
    /// Returns true if the term has a positive length
    pub fn has_valid_term(&self) -> bool {
        self.total_days > 0
    }

    /// Days of the term already used at the switch
    pub fn days_elapsed(&self) -> i64 {
        (self.total_days - self.days_remaining).max(0)
    }
}

/// Calculates total and remaining days for a switch
///
/// The end date is read as local midnight in `timezone`, and `switch_at`
/// is compared against it on that timezone's wall clock. A switch at or
/// after the end date yields zero remaining days.
///
/// This function never fails; a term whose end is not after its start
/// produces a non-positive `total_days` that callers must reject before
/// dividing by it.
///
/// # Example
///
/// ```rust,ignore
/// let interval = calculate_interval(start, end, switch_at, &Timezone::default());
/// assert!(interval.days_remaining <= interval.total_days);
/// ```
pub fn calculate_interval(
    start_date: NaiveDate,
    end_date: NaiveDate,
    switch_at: DateTime<Utc>,
    timezone: &Timezone,
) -> IntervalResult {
    IntervalResult {
        total_days: ceil_days(end_date - start_date),
        days_remaining: days_until(end_date, switch_at, timezone),
    }
}
