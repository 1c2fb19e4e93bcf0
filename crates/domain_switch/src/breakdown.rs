//! Switch breakdown assembly
//!
//! Combines the pro-rata refund, the cancellation fee and the new quote
//! into the complete cash-flow picture of switching insurer.
//!
//! # Sign conventions
//!
//! * `upfront_impact` positive: the customer nets money back today;
//!   negative: the customer pays extra today to switch.
//! * `annual_premium_delta` positive: the new policy is cheaper per year;
//!   negative: it costs more.
//!
//! Upfront impact compares the refund against the full price of the new
//! policy, since the old policy is cancelled and the new one bought outright.

use chrono::{DateTime, Utc};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::{Money, Timezone};
use crate::error::SwitchError;
use crate::quote::NewQuote;
use crate::refund::calculate_pro_rata_refund;
use crate::term::{require_non_negative, PolicyTerm};

/// Cancellation fee charged when the caller does not supply one
pub const DEFAULT_CANCELLATION_FEE: Money = Money::new(dec!(20.00));

/// The reconciliation record for switching from the current policy to a new quote
///
/// Every currency field is rounded to cents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialBreakdown {
    pub new_quote_price: Money,
    pub new_quote_insurer: String,
    pub current_cost: Money,
    pub cancellation_fee: Money,
    pub pro_rata_refund: Money,
    pub days_remaining: i64,
    /// `pro_rata_refund − cancellation_fee − new_quote_price`
    pub upfront_impact: Money,
    /// `current_cost − new_quote_price`
    pub annual_premium_delta: Money,
}

impl FinancialBreakdown {
    /// Returns true if switching today puts money back in the customer's pocket
    pub fn nets_money_upfront(&self) -> bool {
        self.upfront_impact.is_positive()
    }

    /// Returns true if the new policy is cheaper per year
    pub fn saves_annually(&self) -> bool {
        self.annual_premium_delta.is_positive()
    }

    /// Amount the customer must pay today to switch, zero if they net money back
    pub fn upfront_cost(&self) -> Money {
        (-self.upfront_impact).clamp_non_negative()
    }
}

/// Assembles the switch breakdown
///
/// # Arguments
///
/// * `quote` - The new quote being considered
/// * `current_policy` - The policy being cancelled
/// * `cancellation_fee` - Fee charged by the current insurer
/// * `switch_at` - When the switch happens; callers pass "now" explicitly
/// * `timezone` - Timezone the policy dates are expressed in
///
/// # Errors
///
/// * `InvalidAmount` if the current cost, quote price or fee is negative
/// * `InvalidDateRange` if the current term has no positive length
pub fn assemble_breakdown(
    quote: &NewQuote,
    current_policy: &PolicyTerm,
    cancellation_fee: Money,
    switch_at: DateTime<Utc>,
    timezone: &Timezone,
) -> Result<FinancialBreakdown, SwitchError> {
    let current_cost = require_non_negative("current_cost", current_policy.cost)?;
    let new_quote_price = require_non_negative("new_quote_price", quote.price)?;
    let cancellation_fee = require_non_negative("cancellation_fee", cancellation_fee)?;

    let refund = calculate_pro_rata_refund(
        current_cost,
        current_policy.start_date,
        current_policy.end_date,
        switch_at,
        timezone,
    )?;

    let upfront_impact = refund
        .refund
        .checked_sub(&cancellation_fee)?
        .checked_sub(&new_quote_price)?;
    let annual_premium_delta = current_cost.checked_sub(&new_quote_price)?;

    let breakdown = FinancialBreakdown {
        new_quote_price: new_quote_price.round_to_currency(),
        new_quote_insurer: quote.insurer_name.clone(),
        current_cost: current_cost.round_to_currency(),
        cancellation_fee: cancellation_fee.round_to_currency(),
        pro_rata_refund: refund.refund.round_to_currency(),
        days_remaining: refund.days_remaining,
        upfront_impact: upfront_impact.round_to_currency(),
        annual_premium_delta: annual_premium_delta.round_to_currency(),
    };

    debug!(
        insurer = %breakdown.new_quote_insurer,
        refund = %breakdown.pro_rata_refund,
        days_remaining = breakdown.days_remaining,
        upfront_impact = %breakdown.upfront_impact,
        annual_premium_delta = %breakdown.annual_premium_delta,
        "Assembled switch breakdown"
    );

    Ok(breakdown)
}
