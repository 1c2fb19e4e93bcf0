//! Switch domain services
//!
//! `SwitchService` carries the settings shared by every reconciliation
//! (the policy timezone and the default cancellation fee) and exposes the
//! interval, refund and breakdown calculations on top of them.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use core_kernel::{Money, Timezone};
use crate::breakdown::{assemble_breakdown, FinancialBreakdown, DEFAULT_CANCELLATION_FEE};
use crate::error::SwitchError;
use crate::interval::IntervalResult;
use crate::quote::{top_quotes, CandidateQuote, NewQuote};
use crate::refund::{calculate_pro_rata_refund, ProRataRefund};
use crate::term::{require_non_negative, PolicyTerm};

/// A ranked quote together with the cost of switching to it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteComparison {
    pub quote: CandidateQuote,
    pub breakdown: FinancialBreakdown,
}

/// Service for reconciling a policy switch
///
/// The service is immutable once built and can be shared freely between
/// threads.
///
/// # Example
///
/// ```rust,ignore
/// let service = SwitchService::new().with_timezone("Europe/London".parse()?);
/// let breakdown = service.breakdown(&quote, &current_policy, None, Utc::now())?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchService {
    timezone: Timezone,
    default_cancellation_fee: Money,
}

impl SwitchService {
    /// Creates a service using UTC and the standard cancellation fee
    pub fn new() -> Self {
        Self {
            timezone: Timezone::default(),
            default_cancellation_fee: DEFAULT_CANCELLATION_FEE,
        }
    }

    /// Sets the timezone policy dates are expressed in
    pub fn with_timezone(mut self, timezone: Timezone) -> Self {
        self.timezone = timezone;
        self
    }

    /// Sets the fee used when a request does not name one
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount` if the fee is negative
    pub fn with_default_cancellation_fee(mut self, fee: Money) -> Result<Self, SwitchError> {
        self.default_cancellation_fee = require_non_negative("cancellation_fee", fee)?;
        Ok(self)
    }

    pub fn timezone(&self) -> &Timezone {
        &self.timezone
    }

    pub fn default_cancellation_fee(&self) -> Money {
        self.default_cancellation_fee
    }

    /// The instant a switch dated `date` takes effect: local midnight
    pub fn switch_instant_for(&self, date: NaiveDate) -> Result<DateTime<Utc>, SwitchError> {
        Ok(self.timezone.start_of_day(date)?)
    }

    /// Day counts for switching away from `current_policy` at `switch_at`
    pub fn interval(&self, current_policy: &PolicyTerm, switch_at: DateTime<Utc>) -> IntervalResult {
        current_policy.interval_at(switch_at, &self.timezone)
    }

    /// Refund owed for cancelling `current_policy` at `switch_at`
    pub fn refund(
        &self,
        current_policy: &PolicyTerm,
        switch_at: DateTime<Utc>,
    ) -> Result<ProRataRefund, SwitchError> {
        calculate_pro_rata_refund(
            current_policy.cost,
            current_policy.start_date,
            current_policy.end_date,
            switch_at,
            &self.timezone,
        )
    }

    /// Full breakdown of switching to `quote`
    ///
    /// `cancellation_fee` falls back to the service default when `None`.
    #[instrument(skip_all, fields(insurer = %quote.insurer_name, switch_at = %switch_at))]
    pub fn breakdown(
        &self,
        quote: &NewQuote,
        current_policy: &PolicyTerm,
        cancellation_fee: Option<Money>,
        switch_at: DateTime<Utc>,
    ) -> Result<FinancialBreakdown, SwitchError> {
        let fee = cancellation_fee.unwrap_or(self.default_cancellation_fee);
        assemble_breakdown(quote, current_policy, fee, switch_at, &self.timezone)
    }

    /// Breakdowns for the best-scored quotes, best first
    ///
    /// Fails on the first quote whose breakdown cannot be computed.
    #[instrument(skip_all, fields(quotes = quotes.len(), limit = limit))]
    pub fn compare_quotes(
        &self,
        current_policy: &PolicyTerm,
        quotes: &[CandidateQuote],
        cancellation_fee: Option<Money>,
        switch_at: DateTime<Utc>,
        limit: usize,
    ) -> Result<Vec<QuoteComparison>, SwitchError> {
        top_quotes(quotes, limit)
            .into_iter()
            .map(|quote| {
                let breakdown = self.breakdown(
                    &quote.to_new_quote(),
                    current_policy,
                    cancellation_fee,
                    switch_at,
                )?;
                Ok(QuoteComparison {
                    quote: quote.clone(),
                    breakdown,
                })
            })
            .collect()
    }
}

impl Default for SwitchService {
    fn default() -> Self {
        Self::new()
    }
}
