//! Endpoint configuration shared by all HTTP clients.

use std::time::Duration;

use crate::error::ApiError;

const FORECAST_BASE: &str = "https://api.open-meteo.com";
const GEOCODE_BASE: &str = "https://geocoding-api.open-meteo.com";
const LOCATE_BASE: &str = "http://ip-api.com";

const REQUEST_TIMEOUT_SECS: u64 = 10;
const USER_AGENT: &str = concat!("skycast/", env!("CARGO_PKG_VERSION"));

/// Base URLs and transport settings for the external services.
///
/// Defaults point at the public endpoints. Tests swap the bases for a
/// local server; there is no on-disk configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Open-Meteo forecast API base.
    pub forecast_base: String,
    /// Open-Meteo geocoding API base.
    pub geocode_base: String,
    /// IP position lookup base.
    pub locate_base: String,
    /// Per-request timeout applied to every call.
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            forecast_base: FORECAST_BASE.to_string(),
            geocode_base: GEOCODE_BASE.to_string(),
            locate_base: LOCATE_BASE.to_string(),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }
}

/// Build the shared HTTP client with the configured timeout.
///
/// `reqwest::Client` is cheap to clone; build one and hand clones to each
/// endpoint client.
pub fn build_http_client(config: &ApiConfig) -> Result<reqwest::Client, ApiError> {
    reqwest::Client::builder()
        .timeout(config.timeout)
        .user_agent(USER_AGENT)
        .build()
        .map_err(ApiError::from)
}
