//! Pro-rata refund calculation
//!
//! The refund owed on the current policy is the share of its cost that
//! covers the days left after the switch.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use core_kernel::{Money, Timezone};
use crate::error::SwitchError;
use crate::interval::calculate_interval;
use crate::term::require_non_negative;

/// Refund owed on the unused part of the current policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProRataRefund {
    /// Refund, rounded to cents and never negative
    pub refund: Money,
    /// Days of cover left after the switch
    pub days_remaining: i64,
    /// Length of the policy term in days
    pub total_days: i64,
}

/// Calculates the pro-rata refund for cancelling a policy at `switch_at`
///
/// `refund = current_cost × days_remaining / total_days`, rounded half up
/// to cents and clamped at zero.
///
/// # Errors
///
/// * `InvalidAmount` if `current_cost` is negative
/// * `InvalidDateRange` if the term has no positive length; this is checked
///   before any division takes place
pub fn calculate_pro_rata_refund(
    current_cost: Money,
    start_date: NaiveDate,
    end_date: NaiveDate,
    switch_at: DateTime<Utc>,
    timezone: &Timezone,
) -> Result<ProRataRefund, SwitchError> {
    require_non_negative("current_cost", current_cost)?;

    let interval = calculate_interval(start_date, end_date, switch_at, timezone);
    if !interval.has_valid_term() {
        warn!(%start_date, %end_date, total_days = interval.total_days, "Rejecting policy term without positive length");
        return Err(SwitchError::invalid_date_range(start_date, end_date));
    }

    let refund = current_cost
        .prorate(interval.days_remaining, interval.total_days)?
        .round_to_currency()
        .clamp_non_negative();

    Ok(ProRataRefund {
        refund,
        days_remaining: interval.days_remaining,
        total_days: interval.total_days,
    })
}
