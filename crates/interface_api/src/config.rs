//! API configuration

use core_kernel::{Money, Timezone};
use domain_switch::{SwitchError, SwitchService, DEFAULT_CANCELLATION_FEE};
use serde::Deserialize;

/// API configuration
///
/// Every field falls back to its default when the matching `API_*`
/// variable is unset.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Log level
    pub log_level: String,
    /// Timezone policy dates are expressed in
    pub timezone: Timezone,
    /// Fee applied when a request does not name one
    pub default_cancellation_fee: Money,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            timezone: Timezone::default(),
            default_cancellation_fee: DEFAULT_CANCELLATION_FEE,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("API"))
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Builds the switch service these settings describe
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount` if the default cancellation fee is negative
    pub fn switch_service(&self) -> Result<SwitchService, SwitchError> {
        SwitchService::new()
            .with_timezone(self.timezone)
            .with_default_cancellation_fee(self.default_cancellation_fee)
    }
}
