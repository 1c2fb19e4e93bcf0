//! Scheduled quote checks
//!
//! Re-runs a quote search at a fixed interval and reports, for each run
//! date, whether an acceptable quote turned up. When the customer's
//! current policy is known each match also carries the switch breakdown
//! as of that run date, since the refund shrinks as the term runs down.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;

use core_kernel::Money;
use crate::breakdown::FinancialBreakdown;
use crate::error::SwitchError;
use crate::quote::{find_best_match, CandidateQuote, MatchFailure, QuoteRequirements};
use crate::services::SwitchService;
use crate::term::PolicyTerm;

/// Number of checks run when the caller does not say
pub const DEFAULT_ITERATIONS: u32 = 10;

/// Days between checks when the caller does not say
pub const DEFAULT_INTERVAL_DAYS: u32 = 7;

/// Most checks a single run may schedule (ten years of weekly checks)
pub const MAX_ITERATIONS: u32 = 520;

fn default_iterations() -> u32 {
    DEFAULT_ITERATIONS
}

fn default_interval_days() -> u32 {
    DEFAULT_INTERVAL_DAYS
}

/// When and how often to check for quotes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    pub start_date: NaiveDate,
    #[serde(default = "default_iterations")]
    pub iterations: u32,
    #[serde(default = "default_interval_days")]
    pub interval_days: u32,
}

impl ScheduleConfig {
    pub fn new(start_date: NaiveDate) -> Self {
        Self {
            start_date,
            iterations: DEFAULT_ITERATIONS,
            interval_days: DEFAULT_INTERVAL_DAYS,
        }
    }

    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_interval_days(mut self, interval_days: u32) -> Self {
        self.interval_days = interval_days;
        self
    }

    /// Checks the schedule can be run
    ///
    /// # Errors
    ///
    /// Returns `InvalidSchedule` if `iterations` exceeds `MAX_ITERATIONS`
    /// or `interval_days` is zero
    pub fn validate(&self) -> Result<(), SwitchError> {
        if self.iterations > MAX_ITERATIONS {
            return Err(SwitchError::invalid_schedule(format!(
                "iterations {} exceeds the maximum of {}",
                self.iterations, MAX_ITERATIONS
            )));
        }
        if self.interval_days == 0 {
            return Err(SwitchError::invalid_schedule("interval_days must be at least 1"));
        }
        Ok(())
    }

    /// Dates of each check: `start_date + i × interval_days`
    ///
    /// Stops early if a date would fall outside the calendar range.
    pub fn run_dates(&self) -> Vec<NaiveDate> {
        (0..u64::from(self.iterations))
            .map_while(|i| {
                self.start_date
                    .checked_add_days(Days::new(i * u64::from(self.interval_days)))
            })
            .collect()
    }
}

/// Port for fetching quotes from the quote-search collaborator
pub trait QuoteSource {
    fn fetch_quotes(&self, run_date: NaiveDate) -> Result<Vec<CandidateQuote>, SwitchError>;
}

impl<F> QuoteSource for F
where
    F: Fn(NaiveDate) -> Result<Vec<CandidateQuote>, SwitchError>,
{
    fn fetch_quotes(&self, run_date: NaiveDate) -> Result<Vec<CandidateQuote>, SwitchError> {
        self(run_date)
    }
}

/// Result of a single check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CheckOutcome {
    Matched {
        quote: CandidateQuote,
        breakdown: Option<FinancialBreakdown>,
    },
    NoMatch {
        failure: MatchFailure,
    },
}

/// One scheduled check and what it found
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledCheck {
    pub run_date: NaiveDate,
    pub budget: Option<Money>,
    pub outcome: CheckOutcome,
}

impl ScheduledCheck {
    pub fn is_match(&self) -> bool {
        matches!(self.outcome, CheckOutcome::Matched { .. })
    }

    /// Human-readable summary of the check
    pub fn message(&self) -> String {
        match (&self.outcome, self.budget) {
            (CheckOutcome::Matched { quote, .. }, Some(budget)) => format!(
                "found {} quote for {}, below budget {} with all requested features",
                quote.insurer_name, quote.price, budget
            ),
            (CheckOutcome::Matched { quote, .. }, None) => format!(
                "found {} quote for {} with requested features",
                quote.insurer_name, quote.price
            ),
            (CheckOutcome::NoMatch { failure }, _) => failure.to_string(),
        }
    }
}

impl fmt::Display for ScheduledCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "date: {}, match_found: {}, message: {}",
            self.run_date,
            if self.is_match() { "yes" } else { "no" },
            self.message()
        )
    }
}

/// Runs every scheduled check
///
/// # Arguments
///
/// * `config` - Start date, number of checks and spacing
/// * `requirements` - Budget and features a quote must satisfy
/// * `source` - Where quotes come from
/// * `current_policy` - The customer's policy, if known, for switch breakdowns
/// * `service` - Timezone and fee settings for the breakdowns
///
/// # Errors
///
/// Rejects an invalid `config` before fetching anything, then stops at the
/// first failing quote fetch or breakdown.
pub fn run_schedule<S>(
    config: &ScheduleConfig,
    requirements: &QuoteRequirements,
    source: &S,
    current_policy: Option<&PolicyTerm>,
    service: &SwitchService,
) -> Result<Vec<ScheduledCheck>, SwitchError>
where
    S: QuoteSource + ?Sized,
{
    config.validate()?;

    let mut checks = Vec::new();

    for run_date in config.run_dates() {
        let quotes = source.fetch_quotes(run_date)?;

        let outcome = match find_best_match(&quotes, requirements) {
            Some(quote) => {
                let breakdown = match current_policy {
                    Some(term) => Some(service.breakdown(
                        &quote.to_new_quote(),
                        term,
                        None,
                        service.switch_instant_for(run_date)?,
                    )?),
                    None => None,
                };
                CheckOutcome::Matched {
                    quote: quote.clone(),
                    breakdown,
                }
            }
            None => CheckOutcome::NoMatch {
                failure: requirements.failure(),
            },
        };

        let check = ScheduledCheck {
            run_date,
            budget: requirements.budget,
            outcome,
        };
        info!(%run_date, quotes = quotes.len(), matched = check.is_match(), "Scheduled quote check");
        checks.push(check);
    }

    Ok(checks)
}
