//! Calendar and day-count handling
//!
//! Policy terms are expressed as calendar dates in the policy's timezone,
//! while the moment a customer evaluates a switch is an instant in UTC.
//! This module bridges the two and counts whole days between them.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const GAP_SEARCH_STEP_MINUTES: i64 = 15;
const GAP_SEARCH_STEPS: i64 = 24 * 60 / GAP_SEARCH_STEP_MINUTES;

/// Timezone wrapper for policy jurisdictions
///
/// Wraps chrono_tz::Tz with custom serialization support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timezone(pub Tz);

impl Serialize for Timezone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.0.name())
    }
}

impl<'de> Deserialize<'de> for Timezone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl FromStr for Timezone {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tz::from_str(s)
            .map(Timezone)
            .map_err(|_| TemporalError::InvalidTimezone(s.to_string()))
    }
}

impl fmt::Display for Timezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.name())
    }
}

impl Timezone {
    pub fn new(tz: Tz) -> Self {
        Self(tz)
    }

    /// Converts a UTC instant to the wall-clock time in this timezone
    pub fn to_local_naive(&self, utc: DateTime<Utc>) -> NaiveDateTime {
        utc.with_timezone(&self.0).naive_local()
    }

    /// Gets the start of day (00:00:00) in this timezone as UTC
    ///
    /// When a DST transition skips midnight the first wall-clock time that
    /// exists on that date is used instead, searched in 15-minute steps.
    pub fn start_of_day(&self, date: NaiveDate) -> Result<DateTime<Utc>, TemporalError> {
        let midnight = date.and_time(NaiveTime::MIN);
        (0..GAP_SEARCH_STEPS)
            .map(|step| midnight + Duration::minutes(step * GAP_SEARCH_STEP_MINUTES))
            .take_while(|local| local.date() == date)
            .find_map(|local| local.and_local_timezone(self.0).earliest())
            .map(|local| local.with_timezone(&Utc))
            .ok_or_else(|| TemporalError::NonexistentLocalTime(date.to_string()))
    }
}

impl Default for Timezone {
    fn default() -> Self {
        Self(chrono_tz::UTC)
    }
}

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid period: start {start} must be before end {end}")]
    InvalidPeriod {
        start: String,
        end: String,
    },

    #[error("Local midnight does not exist on {0}")]
    NonexistentLocalTime(String),

    #[error("Unknown timezone: {0}")]
    InvalidTimezone(String),
}

/// Rounds a duration up to whole days
///
/// Partial days count as a full day in either direction, so `-1.5` days
/// becomes `-1` and `1.5` days becomes `2`.
pub fn ceil_days(duration: Duration) -> i64 {
    let whole = duration.num_days();
    if duration > Duration::days(whole) {
        whole + 1
    } else {
        whole
    }
}

/// Whole days from `instant` until local midnight at the start of `date`,
/// never negative
pub fn days_until(date: NaiveDate, instant: DateTime<Utc>, tz: &Timezone) -> i64 {
    let boundary = date.and_time(NaiveTime::MIN);
    ceil_days(boundary - tz.to_local_naive(instant)).max(0)
}

/// A calendar date range where `end` is strictly after `start`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, TemporalError> {
        if start >= end {
            return Err(TemporalError::InvalidPeriod {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}
