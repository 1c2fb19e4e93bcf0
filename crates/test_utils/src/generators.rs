//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating switch inputs that respect
//! the engine's preconditions: non-negative amounts and terms whose end
//! falls after their start.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use core_kernel::Money;
use domain_switch::PolicyTerm;
use proptest::prelude::*;

/// Earliest policy start date generated
fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
}

/// Strategy for generating non-negative amounts in minor units
pub fn non_negative_minor_strategy() -> impl Strategy<Value = i64> {
    0i64..100_000_000i64
}

/// Strategy for generating non-negative Money values
pub fn non_negative_money_strategy() -> impl Strategy<Value = Money> {
    non_negative_minor_strategy().prop_map(Money::from_minor)
}

/// Strategy for generating term lengths from one day to two years
pub fn term_length_strategy() -> impl Strategy<Value = i64> {
    1i64..=730i64
}

/// Strategy for generating valid policy terms
pub fn policy_term_strategy() -> impl Strategy<Value = PolicyTerm> {
    (non_negative_money_strategy(), 0i64..3650i64, term_length_strategy()).prop_map(
        |(cost, start_offset, length)| {
            let start_date = epoch() + Duration::days(start_offset);
            PolicyTerm {
                cost,
                start_date,
                end_date: start_date + Duration::days(length),
            }
        },
    )
}

/// Strategy for generating an instant between 90 days before the term and
/// 90 days after it, to the second
pub fn switch_instant_strategy(term: &PolicyTerm) -> impl Strategy<Value = DateTime<Utc>> {
    let window_start = (term.start_date - Duration::days(90))
        .and_time(NaiveTime::MIN)
        .and_utc();
    let window_secs = (term.end_date - term.start_date + Duration::days(180)).num_seconds();
    (0i64..=window_secs).prop_map(move |secs| window_start + Duration::seconds(secs))
}

/// Strategy for generating a policy term together with a switch instant
pub fn term_and_switch_strategy() -> impl Strategy<Value = (PolicyTerm, DateTime<Utc>)> {
    policy_term_strategy().prop_flat_map(|term| {
        let instants = switch_instant_strategy(&term);
        (Just(term), instants)
    })
}
