//! IP-based position lookup.
//!
//! Stands in for a platform geolocation capability: one fix at startup,
//! no retry. Uses ip-api.com, which is free and needs no key.

use serde::Deserialize;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::place::Coordinate;

#[derive(Debug, Deserialize)]
struct LocateResponse {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    lat: Option<f64>,
    #[serde(default)]
    lon: Option<f64>,
}

impl LocateResponse {
    fn into_coordinate(self) -> Result<Coordinate, ApiError> {
        if self.status != "success" {
            let reason = self
                .message
                .unwrap_or_else(|| format!("status {}", self.status));
            return Err(ApiError::PositionUnavailable(reason));
        }
        match (self.lat, self.lon) {
            (Some(latitude), Some(longitude)) => Ok(Coordinate {
                latitude,
                longitude,
            }),
            _ => Err(ApiError::PositionUnavailable(
                "response carried no coordinates".into(),
            )),
        }
    }
}

/// One-shot position fix for the current machine.
#[derive(Clone, Debug)]
pub struct LocateClient {
    http: reqwest::Client,
    base: String,
}

impl LocateClient {
    pub fn new(http: reqwest::Client, config: &ApiConfig) -> Self {
        Self {
            http,
            base: config.locate_base.clone(),
        }
    }

    /// Resolve the machine's position from its public IP.
    pub async fn current(&self) -> Result<Coordinate, ApiError> {
        let url = format!("{}/json?fields=status,message,lat,lon", self.base);
        tracing::debug!(%url, "requesting position fix");

        let response = self.http.get(&url).send().await?.error_for_status()?;
        let body: LocateResponse = response.json().await?;
        body.into_coordinate()
    }
}
