//! Test Data Builders
//!
//! Provides builder patterns for constructing switch scenarios with sensible
//! defaults. Tests set only the fields they care about.

use chrono::{DateTime, NaiveDate, Utc};
use core_kernel::{Money, Timezone};
use domain_switch::{
    assemble_breakdown, FinancialBreakdown, NewQuote, PolicyTerm, SwitchError,
};
use rust_decimal::Decimal;

use crate::fixtures::{MoneyFixtures, TemporalFixtures};

/// Builder for a complete switch scenario
///
/// Defaults to the reference scenario: a 365.00 policy from 2025-01-01 to
/// 2025-12-31, a 300.00 quote, a 20.00 fee and a switch on 2025-07-01.
#[derive(Debug, Clone)]
pub struct SwitchScenarioBuilder {
    current_cost: Money,
    start_date: NaiveDate,
    end_date: NaiveDate,
    new_quote_price: Money,
    insurer_name: String,
    cancellation_fee: Money,
    switch_at: DateTime<Utc>,
    timezone: Timezone,
}

impl Default for SwitchScenarioBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SwitchScenarioBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            current_cost: MoneyFixtures::current_cost(),
            start_date: TemporalFixtures::policy_start(),
            end_date: TemporalFixtures::policy_end(),
            new_quote_price: MoneyFixtures::new_quote_price(),
            insurer_name: "Acme Mutual".to_string(),
            cancellation_fee: MoneyFixtures::cancellation_fee(),
            switch_at: TemporalFixtures::mid_term_switch(),
            timezone: Timezone::default(),
        }
    }

    /// Sets the current policy cost
    pub fn with_current_cost(mut self, cost: Decimal) -> Self {
        self.current_cost = Money::new(cost);
        self
    }

    /// Sets the current policy dates
    pub fn with_term(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }

    /// Sets the new quote price
    pub fn with_new_quote_price(mut self, price: Decimal) -> Self {
        self.new_quote_price = Money::new(price);
        self
    }

    /// Sets the insurer offering the new quote
    pub fn with_insurer(mut self, name: impl Into<String>) -> Self {
        self.insurer_name = name.into();
        self
    }

    /// Sets the cancellation fee
    pub fn with_cancellation_fee(mut self, fee: Decimal) -> Self {
        self.cancellation_fee = Money::new(fee);
        self
    }

    /// Sets the switch instant
    pub fn with_switch_at(mut self, switch_at: DateTime<Utc>) -> Self {
        self.switch_at = switch_at;
        self
    }

    /// Sets the policy timezone
    pub fn with_timezone(mut self, timezone: Timezone) -> Self {
        self.timezone = timezone;
        self
    }

    /// The current policy, without validation
    pub fn current_policy(&self) -> PolicyTerm {
        PolicyTerm {
            cost: self.current_cost,
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }

    /// The new quote
    pub fn new_quote(&self) -> NewQuote {
        NewQuote::new(self.new_quote_price, self.insurer_name.clone())
    }

    /// Runs the breakdown for the scenario
    pub fn breakdown(&self) -> Result<FinancialBreakdown, SwitchError> {
        assemble_breakdown(
            &self.new_quote(),
            &self.current_policy(),
            self.cancellation_fee,
            self.switch_at,
            &self.timezone,
        )
    }
}
