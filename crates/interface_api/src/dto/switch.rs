//! Switch DTOs

use chrono::{DateTime, NaiveDate, Utc};
use core_kernel::Money;
use domain_switch::{
    CandidateQuote, NewQuote, PolicyTerm, QuoteComparison, QuoteRequirements,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Rejects insurer names that are empty or only whitespace
fn validate_insurer_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("insurer name must not be blank".into());
        return Err(err);
    }
    Ok(())
}

#[derive(Debug, Deserialize, Validate)]
pub struct BreakdownRequest {
    pub new_quote_price: Money,
    #[validate(custom(function = "validate_insurer_name"))]
    pub new_quote_insurer: String,
    pub current_policy_cost: Money,
    pub policy_start_date: NaiveDate,
    pub policy_end_date: NaiveDate,
    #[serde(default)]
    pub cancellation_fee: Option<Money>,
    /// Defaults to the time the request is handled
    #[serde(default)]
    pub switch_instant: Option<DateTime<Utc>>,
}

impl BreakdownRequest {
    pub fn new_quote(&self) -> NewQuote {
        NewQuote::new(self.new_quote_price, self.new_quote_insurer.clone())
    }

    pub fn current_policy(&self) -> PolicyTerm {
        PolicyTerm {
            cost: self.current_policy_cost,
            start_date: self.policy_start_date,
            end_date: self.policy_end_date,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct CurrentPolicyRequest {
    pub cost: Money,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl From<&CurrentPolicyRequest> for PolicyTerm {
    fn from(request: &CurrentPolicyRequest) -> Self {
        PolicyTerm {
            cost: request.cost,
            start_date: request.start_date,
            end_date: request.end_date,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct QuoteRequest {
    #[validate(custom(function = "validate_insurer_name"))]
    pub insurer_name: String,
    pub price: Money,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub score: Option<Decimal>,
}

impl From<&QuoteRequest> for CandidateQuote {
    fn from(request: &QuoteRequest) -> Self {
        let quote = CandidateQuote::new(request.insurer_name.clone(), request.price)
            .with_features(&request.features);
        match request.score {
            Some(score) => quote.with_score(score),
            None => quote,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct CompareRequest {
    #[validate(nested)]
    pub current_policy: CurrentPolicyRequest,
    #[validate(length(min = 1, message = "at least one quote is required"), nested)]
    pub quotes: Vec<QuoteRequest>,
    /// Overrides any budget found in `preferences`
    #[serde(default)]
    pub budget: Option<Money>,
    /// Free-text preferences, e.g. "under 350 with legal cover"
    #[serde(default)]
    pub preferences: Option<String>,
    #[validate(range(min = 1, max = 20))]
    #[serde(default)]
    pub limit: Option<usize>,
    #[serde(default)]
    pub cancellation_fee: Option<Money>,
    #[serde(default)]
    pub switch_instant: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub struct CompareResponse {
    pub switch_instant: DateTime<Utc>,
    pub requirements: QuoteRequirements,
    /// Best-scored quotes, best first
    pub comparisons: Vec<QuoteComparison>,
    /// Cheapest quote meeting the requirements
    pub best_match: Option<QuoteComparison>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_match_reason: Option<String>,
}
