//! Comprehensive unit tests for the Temporal module
//!
//! Tests cover whole-day ceilings, days remaining until a date,
//! DateRange validation and Timezone handling.

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use core_kernel::temporal::{ceil_days, days_until, DateRange, TemporalError, Timezone};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

mod day_ceiling {
    use super::*;

    #[test]
    fn test_whole_days_unchanged() {
        assert_eq!(ceil_days(Duration::days(364)), 364);
    }

    #[test]
    fn test_partial_day_rounds_up() {
        assert_eq!(ceil_days(Duration::days(182) + Duration::minutes(1)), 183);
        assert_eq!(ceil_days(Duration::nanoseconds(1)), 1);
    }

    #[test]
    fn test_negative_partial_day_rounds_toward_zero() {
        assert_eq!(ceil_days(-Duration::hours(12)), 0);
        assert_eq!(ceil_days(-Duration::days(2) - Duration::hours(1)), -2);
    }
}

mod days_remaining {
    use super::*;

    #[test]
    fn test_midnight_switch_counts_exact_days() {
        let tz = Timezone::default();
        let switch_at = Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap();
        assert_eq!(days_until(date(2025, 12, 31), switch_at, &tz), 183);
    }

    #[test]
    fn test_midday_switch_counts_partial_day() {
        let tz = Timezone::default();
        let switch_at = Utc.with_ymd_and_hms(2025, 7, 1, 12, 0, 0).unwrap();
        assert_eq!(days_until(date(2025, 12, 31), switch_at, &tz), 183);
    }

    #[test]
    fn test_switch_on_end_date_is_zero() {
        let tz = Timezone::default();
        let switch_at = Utc.with_ymd_and_hms(2025, 12, 31, 0, 0, 0).unwrap();
        assert_eq!(days_until(date(2025, 12, 31), switch_at, &tz), 0);
    }

    #[test]
    fn test_switch_after_end_is_clamped() {
        let tz = Timezone::default();
        let switch_at = Utc.with_ymd_and_hms(2027, 3, 1, 9, 0, 0).unwrap();
        assert_eq!(days_until(date(2025, 12, 31), switch_at, &tz), 0);
    }

    #[test]
    fn test_dst_change_does_not_shift_day_count() {
        // The London clocks go back on 26 October 2025; a 25-hour day must
        // still count as one day.
        let tz: Timezone = "Europe/London".parse().unwrap();
        let switch_at = tz.start_of_day(date(2025, 10, 1)).unwrap();
        assert_eq!(days_until(date(2025, 11, 1), switch_at, &tz), 31);
    }
}

mod date_range {
    use super::*;

    #[test]
    fn test_new_creates_valid_range() {
        let range = DateRange::new(date(2025, 1, 1), date(2025, 12, 31)).unwrap();
        assert_eq!(range.days(), 364);
    }

    #[test]
    fn test_new_fails_when_start_after_end() {
        let result = DateRange::new(date(2025, 12, 31), date(2025, 1, 1));
        assert!(matches!(result, Err(TemporalError::InvalidPeriod { .. })));
    }

    #[test]
    fn test_new_fails_when_start_equals_end() {
        let result = DateRange::new(date(2025, 6, 15), date(2025, 6, 15));
        assert!(matches!(result, Err(TemporalError::InvalidPeriod { .. })));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let range = DateRange::new(date(2025, 1, 1), date(2025, 12, 31)).unwrap();
        assert!(range.contains(date(2025, 1, 1)));
        assert!(range.contains(date(2025, 12, 31)));
        assert!(!range.contains(date(2026, 1, 1)));
    }

    #[test]
    fn test_leap_year_length() {
        let range = DateRange::new(date(2024, 1, 1), date(2025, 1, 1)).unwrap();
        assert_eq!(range.days(), 366);
    }
}

mod timezone {
    use super::*;

    #[test]
    fn test_default_is_utc() {
        assert_eq!(Timezone::default().to_string(), "UTC");
    }

    #[test]
    fn test_start_of_day_in_utc() {
        let tz = Timezone::default();
        assert_eq!(
            tz.start_of_day(date(2025, 7, 1)).unwrap(),
            Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_start_of_day_in_summer_time() {
        let tz: Timezone = "Europe/London".parse().unwrap();
        assert_eq!(
            tz.start_of_day(date(2025, 7, 1)).unwrap(),
            Utc.with_ymd_and_hms(2025, 6, 30, 23, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_start_of_day_when_midnight_is_skipped() {
        // Santiago moves from 00:00 straight to 01:00 on 7 September 2025.
        let tz: Timezone = "America/Santiago".parse().unwrap();
        assert_eq!(
            tz.start_of_day(date(2025, 9, 7)).unwrap(),
            Utc.with_ymd_and_hms(2025, 9, 7, 4, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_days_until_from_skipped_midnight() {
        let tz: Timezone = "America/Santiago".parse().unwrap();
        let switch_at = tz.start_of_day(date(2025, 9, 7)).unwrap();
        assert_eq!(days_until(date(2025, 12, 31), switch_at, &tz), 115);
    }

    #[test]
    fn test_serde_roundtrip() {
        let tz: Timezone = "America/New_York".parse().unwrap();
        let json = serde_json::to_string(&tz).unwrap();
        assert_eq!(json, "\"America/New_York\"");
        let back: Timezone = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tz);
    }

    #[test]
    fn test_deserialize_unknown_timezone_fails() {
        let result: Result<Timezone, _> = serde_json::from_str("\"Nowhere/Land\"");
        assert!(result.is_err());
    }
}
