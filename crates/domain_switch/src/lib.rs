//! Policy Switch Reconciliation Domain
//!
//! This crate answers one question for a customer holding a prepaid policy:
//! what does it cost, today and per year, to cancel it and buy a new quote?
//!
//! # Architecture
//!
//! The calculations are pure functions over value types, composed in a
//! strict order:
//!
//! ```text
//! interval (total / remaining days)
//!     -> refund (pro-rata share of the current cost)
//!         -> breakdown (refund - fee - new price, annual delta)
//! ```
//!
//! Around that core sit quote matching and ranking, free-text preference
//! extraction, and a scheduler that repeats the search over time.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_switch::{NewQuote, PolicyTerm, SwitchService};
//!
//! let current = PolicyTerm::new(Money::new(dec!(365)), start, end)?;
//! let quote = NewQuote::new(Money::new(dec!(300)), "Acme Mutual");
//! let breakdown = SwitchService::new().breakdown(&quote, &current, None, switch_at)?;
//! println!("upfront: {}, annual: {}", breakdown.upfront_impact, breakdown.annual_premium_delta);
//! ```

pub mod error;
pub mod term;
pub mod interval;
pub mod refund;
pub mod breakdown;
pub mod quote;
pub mod preferences;
pub mod schedule;
pub mod services;

pub use error::SwitchError;
pub use term::PolicyTerm;
pub use interval::{calculate_interval, IntervalResult};
pub use refund::{calculate_pro_rata_refund, ProRataRefund};
pub use breakdown::{assemble_breakdown, FinancialBreakdown, DEFAULT_CANCELLATION_FEE};
pub use quote::{
    find_best_match, normalize_feature_name, top_quotes, CandidateQuote, MatchFailure, NewQuote,
    QuoteRequirements, DEFAULT_TOP_QUOTES,
};
pub use preferences::{extract_preferences, ExtractedPreferences};
pub use schedule::{
    run_schedule, CheckOutcome, QuoteSource, ScheduleConfig, ScheduledCheck, MAX_ITERATIONS,
};
pub use services::{QuoteComparison, SwitchService};
