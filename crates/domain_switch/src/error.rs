//! Switch domain errors
//!
//! This module defines all error types that can occur while reconciling
//! a policy switch.

use core_kernel::{MoneyError, TemporalError};
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur in the switch domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SwitchError {
    /// Policy end date is not after its start date
    #[error("Invalid date range: policy end {end} must be after start {start}")]
    InvalidDateRange {
        start: String,
        end: String,
    },

    /// A currency input is negative
    #[error("Invalid amount for {field}: {amount} must not be negative")]
    InvalidAmount {
        field: &'static str,
        amount: Decimal,
    },

    /// Financial calculation error
    #[error("Financial error: {0}")]
    Money(#[from] MoneyError),

    /// Calendar conversion error
    #[error("Temporal error: {0}")]
    Temporal(TemporalError),

    /// Schedule settings cannot produce a usable run
    #[error("Invalid schedule: {0}")]
    InvalidSchedule(String),

    /// Upstream quote source failed
    #[error("Quote source error: {0}")]
    QuoteSource(String),
}

impl SwitchError {
    /// Creates a date range error
    pub fn invalid_date_range(start: impl ToString, end: impl ToString) -> Self {
        SwitchError::InvalidDateRange {
            start: start.to_string(),
            end: end.to_string(),
        }
    }

    /// Creates a negative amount error
    pub fn invalid_amount(field: &'static str, amount: Decimal) -> Self {
        SwitchError::InvalidAmount { field, amount }
    }

    /// Creates a schedule error
    pub fn invalid_schedule(message: impl Into<String>) -> Self {
        SwitchError::InvalidSchedule(message.into())
    }

    /// Creates a quote source error
    pub fn quote_source(message: impl Into<String>) -> Self {
        SwitchError::QuoteSource(message.into())
    }
}

impl From<TemporalError> for SwitchError {
    fn from(err: TemporalError) -> Self {
        match err {
            TemporalError::InvalidPeriod { start, end } => SwitchError::InvalidDateRange { start, end },
            other => SwitchError::Temporal(other),
        }
    }
}
