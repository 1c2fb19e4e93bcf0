//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for the switch engine. These fixtures
//! reproduce the reference scenarios so that every crate tests against the
//! same numbers.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use core_kernel::Money;
use domain_switch::{CandidateQuote, NewQuote, PolicyTerm};
use rust_decimal_macros::dec;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// Annual cost of the reference policy: one unit per day of a 365-day year
    pub fn current_cost() -> Money {
        Money::new(dec!(365.00))
    }

    /// Price of the reference new quote
    pub fn new_quote_price() -> Money {
        Money::new(dec!(300.00))
    }

    /// The standard cancellation fee
    pub fn cancellation_fee() -> Money {
        Money::new(dec!(20.00))
    }

    /// Creates a zero amount
    pub fn zero() -> Money {
        Money::zero()
    }
}

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Standard policy start date (Jan 1, 2025)
    pub fn policy_start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    /// Standard policy end date (Dec 31, 2025), 364 days after the start
    pub fn policy_end() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()
    }

    /// Mid-term switch instant, 183 days before the end date
    pub fn mid_term_switch() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap()
    }

    /// Switch at the first instant of the term
    pub fn switch_at_start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
    }

    /// Switch at the first instant of the end date
    pub fn switch_at_end() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 12, 31, 0, 0, 0).unwrap()
    }
}

/// Fixture for policies and quotes
pub struct SwitchFixtures;

impl SwitchFixtures {
    /// The reference current policy: 365.00 for 2025-01-01 to 2025-12-31
    pub fn current_policy() -> PolicyTerm {
        PolicyTerm::new(
            MoneyFixtures::current_cost(),
            TemporalFixtures::policy_start(),
            TemporalFixtures::policy_end(),
        )
        .expect("reference policy is valid")
    }

    /// The reference new quote: 300.00 from Acme Mutual
    pub fn new_quote() -> NewQuote {
        NewQuote::new(MoneyFixtures::new_quote_price(), "Acme Mutual")
    }

    /// A spread of quotes as returned by a quote search
    pub fn candidate_quotes() -> Vec<CandidateQuote> {
        vec![
            CandidateQuote::new("Acme Mutual", Money::new(dec!(300.00)))
                .with_features(["breakdown_cover_included", "legal_cover_included"])
                .with_score(dec!(7.2)),
            CandidateQuote::new("Budget Direct", Money::new(dec!(249.99)))
                .with_features(["breakdown_cover"])
                .with_score(dec!(5.8)),
            CandidateQuote::new("Harbor Insure", Money::new(dec!(339.00)))
                .with_features(["breakdown_cover", "legal_cover", "courtesy_car", "windshield_cover"])
                .with_score(dec!(9.1)),
            CandidateQuote::new("Northgate", Money::new(dec!(410.00)))
                .with_features(["european_cover"])
                .with_score(dec!(6.4)),
        ]
    }
}
