//! Quotes from prospective insurers
//!
//! A `NewQuote` is the minimal input the breakdown needs: a price and who
//! offered it. `CandidateQuote` carries what the quote-search collaborator
//! returns (features and a ranking score) so quotes can be filtered against
//! the customer's requirements and ranked before a breakdown is computed.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::Money;

/// Number of quotes returned by `top_quotes` when the caller does not say
pub const DEFAULT_TOP_QUOTES: usize = 3;

/// A new policy offer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuote {
    /// Annual price of the new policy
    pub price: Money,
    /// Insurer offering the policy
    pub insurer_name: String,
}

impl NewQuote {
    pub fn new(price: Money, insurer_name: impl Into<String>) -> Self {
        Self {
            price,
            insurer_name: insurer_name.into(),
        }
    }
}

/// A quote returned by a quote search, before the customer picks one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateQuote {
    pub insurer_name: String,
    pub price: Money,
    /// Normalized feature keys, e.g. `legal_cover`
    #[serde(default)]
    pub features: Vec<String>,
    /// Ranking score; higher is better
    #[serde(default)]
    pub score: Option<Decimal>,
}

impl CandidateQuote {
    pub fn new(insurer_name: impl Into<String>, price: Money) -> Self {
        Self {
            insurer_name: insurer_name.into(),
            price,
            features: Vec::new(),
            score: None,
        }
    }

    /// Sets the features, normalizing each name
    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.features = features
            .into_iter()
            .map(|f| normalize_feature_name(f.as_ref()))
            .collect();
        self
    }

    /// Sets the ranking score
    pub fn with_score(mut self, score: Decimal) -> Self {
        self.score = Some(score);
        self
    }

    /// Returns true if the quote includes the feature
    pub fn has_feature(&self, feature: &str) -> bool {
        let wanted = normalize_feature_name(feature);
        self.features
            .iter()
            .any(|f| normalize_feature_name(f) == wanted)
    }

    /// The quote as input to a breakdown
    pub fn to_new_quote(&self) -> NewQuote {
        NewQuote::new(self.price, self.insurer_name.clone())
    }

    fn ranking_score(&self) -> Decimal {
        self.score.unwrap_or(Decimal::ZERO)
    }
}

/// Normalizes a feature key as reported by quote providers
///
/// Lowercases, trims and drops an `_included` suffix, so
/// `Legal_Cover_Included` becomes `legal_cover`.
pub fn normalize_feature_name(feature: &str) -> String {
    let normalized = feature.trim().to_lowercase();
    match normalized.strip_suffix("_included") {
        Some(stripped) => stripped.to_string(),
        None => normalized,
    }
}

/// What the customer needs from a new policy
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequirements {
    /// Maximum acceptable price
    pub budget: Option<Money>,
    /// Features every acceptable quote must include
    #[serde(default)]
    pub required_features: Vec<String>,
}

impl QuoteRequirements {
    pub fn new(budget: Option<Money>, required_features: Vec<String>) -> Self {
        Self {
            budget,
            required_features,
        }
    }

    /// Returns true if the quote is within budget and has every required feature
    pub fn matches(&self, quote: &CandidateQuote) -> bool {
        if let Some(budget) = self.budget {
            if quote.price > budget {
                return false;
            }
        }
        self.missing_features(quote).is_empty()
    }

    /// Required features the quote lacks
    pub fn missing_features(&self, quote: &CandidateQuote) -> Vec<String> {
        self.required_features
            .iter()
            .filter(|f| !quote.has_feature(f))
            .cloned()
            .collect()
    }

    /// Describes why no quote satisfied these requirements
    pub fn failure(&self) -> MatchFailure {
        MatchFailure {
            budget_set: self.budget.is_some(),
            features_required: !self.required_features.is_empty(),
        }
    }
}

/// Explanation for a search that found no acceptable quote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchFailure {
    pub budget_set: bool,
    pub features_required: bool,
}

impl fmt::Display for MatchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut reasons = Vec::new();
        if self.budget_set {
            reasons.push("no quote within budget");
        }
        if self.features_required {
            reasons.push("missing required features");
        }

        if reasons.is_empty() {
            f.write_str("no quotes available")
        } else {
            f.write_str(&reasons.join(" and "))
        }
    }
}

/// Finds the cheapest quote meeting the requirements
///
/// Ties on price go to the quote listed first.
pub fn find_best_match<'a>(
    quotes: &'a [CandidateQuote],
    requirements: &QuoteRequirements,
) -> Option<&'a CandidateQuote> {
    quotes
        .iter()
        .filter(|q| requirements.matches(q))
        .min_by_key(|q| q.price)
}

/// Returns up to `limit` quotes ordered by score, best first
///
/// Quotes without a score rank as zero. Equal scores keep their input order.
pub fn top_quotes(quotes: &[CandidateQuote], limit: usize) -> Vec<&CandidateQuote> {
    let mut ranked: Vec<&CandidateQuote> = quotes.iter().collect();
    ranked.sort_by(|a, b| b.ranking_score().cmp(&a.ranking_score()));
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn quotes() -> Vec<CandidateQuote> {
        vec![
            CandidateQuote::new("Acme Mutual", Money::new(dec!(320.00)))
                .with_features(["legal_cover_included", "breakdown_cover"])
                .with_score(dec!(7.5)),
            CandidateQuote::new("Budget Direct", Money::new(dec!(260.00)))
                .with_features(["breakdown_cover"])
                .with_score(dec!(6.1)),
            CandidateQuote::new("Harbor Insure", Money::new(dec!(299.99)))
                .with_features(["legal_cover", "breakdown_cover", "courtesy_car"])
                .with_score(dec!(8.9)),
        ]
    }

    #[test]
    fn test_normalize_feature_name() {
        assert_eq!(normalize_feature_name(" Legal_Cover_Included "), "legal_cover");
        assert_eq!(normalize_feature_name("courtesy_car"), "courtesy_car");
    }

    #[test]
    fn test_best_match_is_cheapest_with_features() {
        let quotes = quotes();
        let requirements = QuoteRequirements::new(
            Some(Money::new(dec!(350))),
            vec!["legal_cover".to_string()],
        );

        let best = find_best_match(&quotes, &requirements).unwrap();
        assert_eq!(best.insurer_name, "Harbor Insure");
    }

    #[test]
    fn test_budget_excludes_expensive_quotes() {
        let quotes = quotes();
        let requirements = QuoteRequirements::new(Some(Money::new(dec!(250))), vec![]);

        assert!(find_best_match(&quotes, &requirements).is_none());
        assert_eq!(requirements.failure().to_string(), "no quote within budget");
    }

    #[test]
    fn test_top_quotes_by_score() {
        let quotes = quotes();
        let top = top_quotes(&quotes, 2);

        assert_eq!(top.len(), 2);
        assert_eq!(top[0].insurer_name, "Harbor Insure");
        assert_eq!(top[1].insurer_name, "Acme Mutual");
    }

    #[test]
    fn test_failure_messages() {
        let both = MatchFailure { budget_set: true, features_required: true };
        let none = MatchFailure { budget_set: false, features_required: false };

        assert_eq!(both.to_string(), "no quote within budget and missing required features");
        assert_eq!(none.to_string(), "no quotes available");
    }
}
