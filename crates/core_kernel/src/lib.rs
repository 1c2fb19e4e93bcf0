//! Core Kernel - Foundational types and utilities for the switch engine
//!
//! This crate provides the building blocks used by the domain and API crates:
//! - Money with precise decimal arithmetic and round-half-up reporting
//! - Temporal helpers for timezones, date ranges and whole-day counts

pub mod money;
pub mod temporal;

pub use money::{Money, MoneyError, CURRENCY_DECIMAL_PLACES};
pub use temporal::{ceil_days, days_until, DateRange, TemporalError, Timezone};
