//! Quote Search Tests
//!
//! Covers quote filtering and ranking, preference extraction, and the
//! scheduled quote checks built on top of them.

use chrono::NaiveDate;
use core_kernel::Money;
use domain_switch::{
    extract_preferences, find_best_match, run_schedule, top_quotes, CandidateQuote,
    CheckOutcome, QuoteRequirements, QuoteSource, ScheduleConfig, SwitchError, SwitchService,
    DEFAULT_TOP_QUOTES,
};
use rust_decimal_macros::dec;
use std::cell::RefCell;
use test_utils::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ============================================================================
// QUOTE MATCHING
// ============================================================================

mod quote_matching {
    use super::*;

    #[test]
    fn test_no_requirements_picks_cheapest() {
        let quotes = SwitchFixtures::candidate_quotes();
        let best = find_best_match(&quotes, &QuoteRequirements::default()).unwrap();

        assert_eq!(best.insurer_name, "Budget Direct");
    }

    #[test]
    fn test_included_suffix_satisfies_feature() {
        let quotes = SwitchFixtures::candidate_quotes();
        let requirements = QuoteRequirements::new(
            Some(Money::new(dec!(320))),
            vec!["legal_cover".to_string()],
        );

        let best = find_best_match(&quotes, &requirements).unwrap();
        assert_eq!(best.insurer_name, "Acme Mutual");
    }

    #[test]
    fn test_budget_is_inclusive() {
        let quotes = SwitchFixtures::candidate_quotes();
        let requirements = QuoteRequirements::new(Some(Money::new(dec!(249.99))), vec![]);

        assert!(find_best_match(&quotes, &requirements).is_some());
    }

    #[test]
    fn test_missing_features_are_reported() {
        let quote = CandidateQuote::new("Budget Direct", Money::new(dec!(249.99)))
            .with_features(["breakdown_cover"]);
        let requirements = QuoteRequirements::new(
            None,
            vec!["breakdown_cover".to_string(), "courtesy_car".to_string()],
        );

        assert_eq!(requirements.missing_features(&quote), vec!["courtesy_car"]);
        assert!(!requirements.matches(&quote));
    }

    #[test]
    fn test_unmet_requirements_explain_failure() {
        let quotes = SwitchFixtures::candidate_quotes();
        let requirements = QuoteRequirements::new(
            Some(Money::new(dec!(200))),
            vec!["european_cover".to_string()],
        );

        assert!(find_best_match(&quotes, &requirements).is_none());
        assert_eq!(
            requirements.failure().to_string(),
            "no quote within budget and missing required features"
        );
    }

    #[test]
    fn test_top_quotes_default_limit() {
        let quotes = SwitchFixtures::candidate_quotes();
        let top = top_quotes(&quotes, DEFAULT_TOP_QUOTES);

        let names: Vec<&str> = top.iter().map(|q| q.insurer_name.as_str()).collect();
        assert_eq!(names, vec!["Harbor Insure", "Acme Mutual", "Northgate"]);
    }

    #[test]
    fn test_unscored_quotes_rank_last() {
        let quotes = vec![
            CandidateQuote::new("Unscored", Money::new(dec!(100))),
            CandidateQuote::new("Scored", Money::new(dec!(500))).with_score(dec!(0.5)),
        ];

        assert_eq!(top_quotes(&quotes, 1)[0].insurer_name, "Scored");
    }

    #[test]
    fn test_candidate_quote_deserializes_without_optional_fields() {
        let quote: CandidateQuote =
            serde_json::from_str(r#"{"insurer_name": "Acme Mutual", "price": "300.00"}"#).unwrap();

        assert!(quote.features.is_empty());
        assert_eq!(quote.score, None);
    }
}

// ============================================================================
// PREFERENCE EXTRACTION
// ============================================================================

mod preference_extraction {
    use super::*;

    #[test]
    fn test_preferences_become_requirements() {
        let prefs = extract_preferences("Max 340 with breakdown cover and a courtesy car");
        let requirements = prefs.requirements();

        assert_eq!(requirements.budget, Some(Money::new(dec!(340))));
        assert_eq!(requirements.required_features, vec!["courtesy_car", "breakdown_cover"]);

        let quotes = SwitchFixtures::candidate_quotes();
        let best = find_best_match(&quotes, &requirements).unwrap();
        assert_eq!(best.insurer_name, "Harbor Insure");
    }

    #[test]
    fn test_aliases_collapse_to_one_feature() {
        let prefs = extract_preferences("windshield or windscreen cover, either is fine");
        assert_eq!(prefs.features, vec!["windshield_cover"]);
    }

    #[test]
    fn test_case_is_ignored() {
        let prefs = extract_preferences("EUROPEAN COVER please");
        assert_eq!(prefs.features, vec!["european_cover"]);
    }

    #[test]
    fn test_empty_text() {
        let prefs = extract_preferences("");

        assert_eq!(prefs.budget, None);
        assert!(prefs.features.is_empty());
        assert_eq!(prefs.requirements(), QuoteRequirements::default());
    }

    #[test]
    fn test_raw_text_is_kept() {
        let prefs = extract_preferences("under 300");
        assert_eq!(prefs.raw_text, "under 300");
    }
}

// ============================================================================
// SCHEDULED CHECKS
// ============================================================================

mod scheduled_checks {
    use super::*;

    /// Quote source that replays a fixed list and records each request
    struct RecordingSource {
        quotes: Vec<CandidateQuote>,
        requested: RefCell<Vec<NaiveDate>>,
    }

    impl QuoteSource for RecordingSource {
        fn fetch_quotes(&self, run_date: NaiveDate) -> Result<Vec<CandidateQuote>, SwitchError> {
            self.requested.borrow_mut().push(run_date);
            Ok(self.quotes.clone())
        }
    }

    #[test]
    fn test_each_run_date_is_queried() {
        let source = RecordingSource {
            quotes: SwitchFixtures::candidate_quotes(),
            requested: RefCell::new(Vec::new()),
        };
        let config = ScheduleConfig::new(date(2025, 7, 1)).with_iterations(4);

        let checks = run_schedule(
            &config,
            &QuoteRequirements::default(),
            &source,
            None,
            &SwitchService::new(),
        )
        .unwrap();

        assert_eq!(checks.len(), 4);
        assert_eq!(
            *source.requested.borrow(),
            vec![date(2025, 7, 1), date(2025, 7, 8), date(2025, 7, 15), date(2025, 7, 22)]
        );
    }

    #[test]
    fn test_breakdown_shrinks_as_term_runs_down() {
        let source = RecordingSource {
            quotes: SwitchFixtures::candidate_quotes(),
            requested: RefCell::new(Vec::new()),
        };
        let config = ScheduleConfig::new(date(2025, 7, 1))
            .with_iterations(2)
            .with_interval_days(14);
        let current_policy = SwitchFixtures::current_policy();

        let checks = run_schedule(
            &config,
            &QuoteRequirements::default(),
            &source,
            Some(&current_policy),
            &SwitchService::new(),
        )
        .unwrap();

        let refunds: Vec<(i64, Money)> = checks
            .iter()
            .map(|check| match &check.outcome {
                CheckOutcome::Matched { breakdown: Some(b), .. } => (b.days_remaining, b.pro_rata_refund),
                other => panic!("expected a match with breakdown, got {:?}", other),
            })
            .collect();

        assert_eq!(refunds[0], (183, Money::new(dec!(183.50))));
        assert_eq!(refunds[1], (169, Money::new(dec!(169.46))));
    }

    #[test]
    fn test_run_date_with_skipped_midnight_is_checked() {
        let source = |_: NaiveDate| -> Result<Vec<CandidateQuote>, SwitchError> {
            Ok(SwitchFixtures::candidate_quotes())
        };
        let service = SwitchService::new().with_timezone("America/Santiago".parse().unwrap());
        let current_policy = SwitchFixtures::current_policy();

        let checks = run_schedule(
            &ScheduleConfig::new(date(2025, 8, 31)).with_iterations(3),
            &QuoteRequirements::default(),
            &source,
            Some(&current_policy),
            &service,
        )
        .unwrap();

        assert_eq!(checks.len(), 3);
        assert_eq!(checks[1].run_date, date(2025, 9, 7));
        match &checks[1].outcome {
            CheckOutcome::Matched { breakdown: Some(b), .. } => assert_eq!(b.days_remaining, 115),
            other => panic!("expected a match with breakdown, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_interval_is_rejected() {
        let source = |_: NaiveDate| -> Result<Vec<CandidateQuote>, SwitchError> {
            Ok(SwitchFixtures::candidate_quotes())
        };

        let result = run_schedule(
            &ScheduleConfig::new(date(2025, 7, 1)).with_interval_days(0),
            &QuoteRequirements::default(),
            &source,
            None,
            &SwitchService::new(),
        );

        assert!(matches!(result, Err(SwitchError::InvalidSchedule(_))));
    }

    #[test]
    fn test_closure_source_and_no_match_message() {
        let source = |_: NaiveDate| -> Result<Vec<CandidateQuote>, SwitchError> {
            Ok(SwitchFixtures::candidate_quotes())
        };
        let requirements = QuoteRequirements::new(Some(Money::new(dec!(100))), vec![]);

        let checks = run_schedule(
            &ScheduleConfig::new(date(2025, 7, 1)).with_iterations(1),
            &requirements,
            &source,
            None,
            &SwitchService::new(),
        )
        .unwrap();

        assert!(!checks[0].is_match());
        assert_eq!(
            checks[0].to_string(),
            "date: 2025-07-01, match_found: no, message: no quote within budget"
        );
    }

    #[test]
    fn test_match_without_budget_message() {
        let source = |_: NaiveDate| -> Result<Vec<CandidateQuote>, SwitchError> {
            Ok(SwitchFixtures::candidate_quotes())
        };
        let requirements = QuoteRequirements::new(None, vec!["courtesy_car".to_string()]);

        let checks = run_schedule(
            &ScheduleConfig::new(date(2025, 7, 1)).with_iterations(1),
            &requirements,
            &source,
            None,
            &SwitchService::new(),
        )
        .unwrap();

        assert_eq!(
            checks[0].message(),
            "found Harbor Insure quote for 339.00 with requested features"
        );
    }

    #[test]
    fn test_check_serializes_with_status_tag() {
        let source = |_: NaiveDate| -> Result<Vec<CandidateQuote>, SwitchError> { Ok(Vec::new()) };

        let checks = run_schedule(
            &ScheduleConfig::new(date(2025, 7, 1)).with_iterations(1),
            &QuoteRequirements::default(),
            &source,
            None,
            &SwitchService::new(),
        )
        .unwrap();

        let json = serde_json::to_value(&checks[0]).unwrap();
        assert_eq!(json["outcome"]["status"], "no_match");
        assert_eq!(checks[0].message(), "no quotes available");
    }
}
