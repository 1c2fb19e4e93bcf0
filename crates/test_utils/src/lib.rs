//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! switch engine test suites.
//!
//! # Modules
//!
//! - `fixtures`: Reference policies, quotes and instants
//! - `builders`: Builder for complete switch scenarios
//! - `assertions`: Custom assertion helpers for Money and breakdowns
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
