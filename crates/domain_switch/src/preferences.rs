//! Customer preference extraction
//!
//! Turns a free-text preference such as "under £350, must have windscreen
//! and legal cover" into a budget and a list of canonical feature keys.

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use core_kernel::Money;
use crate::quote::QuoteRequirements;

/// Phrases customers use for a feature, mapped to its canonical key.
/// Order decides the order of extracted features.
const FEATURE_ALIASES: &[(&str, &str)] = &[
    ("windshield", "windshield_cover"),
    ("windscreen", "windshield_cover"),
    ("windshield cover", "windshield_cover"),
    ("windscreen cover", "windshield_cover"),
    ("windshield_cover", "windshield_cover"),
    ("windscreen_cover", "windshield_cover"),
    ("legal", "legal_cover"),
    ("legal cover", "legal_cover"),
    ("legul cover", "legal_cover"),
    ("courtesy car", "courtesy_car"),
    ("courtesy_car", "courtesy_car"),
    ("breakdown", "breakdown_cover"),
    ("breakdown cover", "breakdown_cover"),
    ("breakdown_cover", "breakdown_cover"),
    ("european", "european_cover"),
    ("european cover", "european_cover"),
    ("european_cover", "european_cover"),
    ("europe", "european_cover"),
];

static AMOUNT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]+(?:\.[0-9]+)?").expect("amount pattern compiles"));

static ALIAS_PATTERNS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    FEATURE_ALIASES
        .iter()
        .map(|(alias, canonical)| {
            let pattern = format!(r"\b{}\b", regex::escape(alias));
            (Regex::new(&pattern).expect("alias pattern compiles"), *canonical)
        })
        .collect()
});

/// Budget and features read from a preference text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedPreferences {
    pub budget: Option<Money>,
    pub features: Vec<String>,
    pub raw_text: String,
}

impl ExtractedPreferences {
    /// The preferences as quote requirements
    pub fn requirements(&self) -> QuoteRequirements {
        QuoteRequirements::new(self.budget, self.features.clone())
    }
}

/// Extracts a budget and required features from free text
///
/// The first number in the text (ignoring thousands separators) is taken
/// as the budget. Features are matched as whole words, case-insensitively,
/// against a table of known aliases and common misspellings, and reported
/// once each under their canonical key.
pub fn extract_preferences(text: &str) -> ExtractedPreferences {
    let without_separators = text.replace(',', "");
    let budget = AMOUNT_PATTERN
        .find(&without_separators)
        .and_then(|m| Decimal::from_str(m.as_str()).ok())
        .map(Money::new);

    let lower = text.to_lowercase();
    let mut features: Vec<String> = Vec::new();
    for (pattern, canonical) in ALIAS_PATTERNS.iter() {
        if pattern.is_match(&lower) && !features.iter().any(|f| f == canonical) {
            features.push((*canonical).to_string());
        }
    }

    ExtractedPreferences {
        budget,
        features,
        raw_text: text.to_string(),
    }
}
