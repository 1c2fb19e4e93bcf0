//! Switch handlers

use axum::{extract::State, Json};
use chrono::Utc;
use domain_switch::{
    extract_preferences, find_best_match, CandidateQuote, FinancialBreakdown, PolicyTerm,
    QuoteComparison, DEFAULT_TOP_QUOTES,
};
use validator::Validate;

use crate::dto::switch::*;
use crate::{error::ApiError, AppState};

/// Calculates the breakdown of switching to a new quote
pub async fn calculate_breakdown(
    State(state): State<AppState>,
    Json(request): Json<BreakdownRequest>,
) -> Result<Json<FinancialBreakdown>, ApiError> {
    request.validate()?;

    let switch_at = request.switch_instant.unwrap_or_else(Utc::now);
    let breakdown = state.service.breakdown(
        &request.new_quote(),
        &request.current_policy(),
        request.cancellation_fee,
        switch_at,
    )?;

    Ok(Json(breakdown))
}

/// Ranks quotes and prices the switch to each
pub async fn compare_quotes(
    State(state): State<AppState>,
    Json(request): Json<CompareRequest>,
) -> Result<Json<CompareResponse>, ApiError> {
    request.validate()?;

    let switch_at = request.switch_instant.unwrap_or_else(Utc::now);
    let current_policy = PolicyTerm::from(&request.current_policy);
    let quotes: Vec<CandidateQuote> = request.quotes.iter().map(CandidateQuote::from).collect();

    let mut requirements = request
        .preferences
        .as_deref()
        .map(|text| extract_preferences(text).requirements())
        .unwrap_or_default();
    if request.budget.is_some() {
        requirements.budget = request.budget;
    }

    let comparisons = state.service.compare_quotes(
        &current_policy,
        &quotes,
        request.cancellation_fee,
        switch_at,
        request.limit.unwrap_or(DEFAULT_TOP_QUOTES),
    )?;

    let best_match = find_best_match(&quotes, &requirements)
        .map(|quote| -> Result<QuoteComparison, ApiError> {
            let breakdown = state.service.breakdown(
                &quote.to_new_quote(),
                &current_policy,
                request.cancellation_fee,
                switch_at,
            )?;
            Ok(QuoteComparison {
                quote: quote.clone(),
                breakdown,
            })
        })
        .transpose()?;

    let no_match_reason = best_match
        .is_none()
        .then(|| requirements.failure().to_string());

    Ok(Json(CompareResponse {
        switch_instant: switch_at,
        requirements,
        comparisons,
        best_match,
        no_match_reason,
    }))
}
