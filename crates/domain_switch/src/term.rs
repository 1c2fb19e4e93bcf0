//! The customer's current policy term

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{DateRange, Money, Timezone};
use crate::error::SwitchError;
use crate::interval::{calculate_interval, IntervalResult};

/// The current policy being considered for cancellation
///
/// Fields are public so callers can carry unvalidated input; every
/// calculator re-checks the invariants before using them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyTerm {
    /// Total premium paid for the term
    pub cost: Money,
    /// First day of cover
    pub start_date: NaiveDate,
    /// Day cover ends
    pub end_date: NaiveDate,
}

impl PolicyTerm {
    /// Creates a validated policy term
    ///
    /// # Errors
    ///
    /// * `InvalidAmount` if `cost` is negative
    /// * `InvalidDateRange` if `end_date` is not after `start_date`
    pub fn new(cost: Money, start_date: NaiveDate, end_date: NaiveDate) -> Result<Self, SwitchError> {
        let term = Self { cost, start_date, end_date };
        term.validate()?;
        Ok(term)
    }

    /// Checks the term invariants
    pub fn validate(&self) -> Result<(), SwitchError> {
        require_non_negative("current_cost", self.cost)?;
        self.period()?;
        Ok(())
    }

    /// Returns the term as a validated date range
    pub fn period(&self) -> Result<DateRange, SwitchError> {
        Ok(DateRange::new(self.start_date, self.end_date)?)
    }

    /// Day counts for a switch at the given instant
    pub fn interval_at(&self, switch_at: DateTime<Utc>, timezone: &Timezone) -> IntervalResult {
        calculate_interval(self.start_date, self.end_date, switch_at, timezone)
    }

    /// Returns true if cover is still running at the given instant
    pub fn is_active_at(&self, switch_at: DateTime<Utc>, timezone: &Timezone) -> bool {
        self.interval_at(switch_at, timezone).days_remaining > 0
    }
}

/// Rejects negative currency inputs
pub fn require_non_negative(field: &'static str, amount: Money) -> Result<Money, SwitchError> {
    if amount.is_negative() {
        return Err(SwitchError::invalid_amount(field, amount.amount()));
    }
    Ok(amount)
}
