//! HTTP API Layer
//!
//! This crate provides the REST API for the policy-switch engine using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Health, switch breakdown and quote comparison
//! - **Middleware**: Request IDs, tracing, request logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(config)?;
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;

use axum::{
    Router,
    routing::{get, post},
    middleware as axum_middleware,
};
use domain_switch::{SwitchError, SwitchService};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::handlers::{health, switch};
use crate::middleware::request_logging_middleware;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: SwitchService,
}

impl AppState {
    /// Builds the state from configuration
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount` if the configured default fee is negative
    pub fn from_config(config: &ApiConfig) -> Result<Self, SwitchError> {
        Ok(Self {
            service: config.switch_service()?,
        })
    }
}

/// Creates the main API router
///
/// # Arguments
///
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
///
/// # Errors
///
/// Fails if the configuration does not describe a usable switch service
pub fn create_router(config: ApiConfig) -> Result<Router, SwitchError> {
    let state = AppState::from_config(&config)?;

    let switch_routes = Router::new()
        .route("/breakdown", post(switch::calculate_breakdown))
        .route("/compare", post(switch::compare_quotes));

    let api_routes = Router::new()
        .nest("/switch", switch_routes)
        .layer(axum_middleware::from_fn(request_logging_middleware));

    let router = Router::new()
        .route("/health", get(health::health_check))
        .nest("/api/v1", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state);

    Ok(router)
}
