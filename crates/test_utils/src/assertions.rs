//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use core_kernel::Money;
use domain_switch::FinancialBreakdown;
use rust_decimal::Decimal;

/// Asserts that two Money values are approximately equal within a tolerance
///
/// # Panics
///
/// Panics if the amounts differ by more than tolerance
pub fn assert_money_approx_eq(actual: &Money, expected: &Money, tolerance: Decimal) {
    let diff = (actual.amount() - expected.amount()).abs();
    assert!(
        diff <= tolerance,
        "Money amounts differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual.amount(),
        expected.amount(),
        diff,
        tolerance
    );
}

/// Asserts that a Money value is zero
pub fn assert_money_zero(money: &Money) {
    assert!(money.is_zero(), "Expected zero money, got {}", money.amount());
}

/// Asserts that a Money value is not negative
pub fn assert_money_non_negative(money: &Money) {
    assert!(
        !money.is_negative(),
        "Expected non-negative money, got {}",
        money.amount()
    );
}

/// Asserts that a Money value carries no precision beyond cents
pub fn assert_rounded_to_cents(money: &Money) {
    assert!(
        money.is_rounded_to_currency(),
        "Expected an amount rounded to cents, got {}",
        money.amount()
    );
}

/// Asserts every currency field of a breakdown is rounded to cents
pub fn assert_breakdown_rounded(breakdown: &FinancialBreakdown) {
    for (field, money) in [
        ("new_quote_price", &breakdown.new_quote_price),
        ("current_cost", &breakdown.current_cost),
        ("cancellation_fee", &breakdown.cancellation_fee),
        ("pro_rata_refund", &breakdown.pro_rata_refund),
        ("upfront_impact", &breakdown.upfront_impact),
        ("annual_premium_delta", &breakdown.annual_premium_delta),
    ] {
        assert!(
            money.is_rounded_to_currency(),
            "Breakdown field {} is not rounded to cents: {}",
            field,
            money.amount()
        );
    }
}

/// Asserts the breakdown's derived fields agree with its inputs
///
/// Checks `upfront_impact = refund − fee − price` and
/// `annual_premium_delta = current_cost − price` to the cent.
pub fn assert_breakdown_consistent(breakdown: &FinancialBreakdown) {
    let expected_upfront = (breakdown.pro_rata_refund
        - breakdown.cancellation_fee
        - breakdown.new_quote_price)
        .round_to_currency();
    assert_eq!(
        breakdown.upfront_impact, expected_upfront,
        "upfront_impact {} does not equal refund - fee - price ({})",
        breakdown.upfront_impact, expected_upfront
    );

    let expected_delta = (breakdown.current_cost - breakdown.new_quote_price).round_to_currency();
    assert_eq!(
        breakdown.annual_premium_delta, expected_delta,
        "annual_premium_delta {} does not equal current_cost - price ({})",
        breakdown.annual_premium_delta, expected_delta
    );
}
