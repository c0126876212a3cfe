//! Open-Meteo forecast client.

use serde::Deserialize;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::place::Coordinate;
use crate::weather::WeatherReading;

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current_weather: CurrentWeatherBody,
}

#[derive(Debug, Deserialize)]
struct CurrentWeatherBody {
    temperature: f32,
    windspeed: f32,
    weathercode: u16,
}

impl From<CurrentWeatherBody> for WeatherReading {
    fn from(body: CurrentWeatherBody) -> Self {
        WeatherReading {
            temperature_c: body.temperature,
            wind_speed_kmh: body.windspeed,
            code: body.weathercode,
        }
    }
}

/// Fetches current conditions for a coordinate.
#[derive(Clone, Debug)]
pub struct ForecastClient {
    http: reqwest::Client,
    base: String,
}

impl ForecastClient {
    pub fn new(http: reqwest::Client, config: &ApiConfig) -> Self {
        Self {
            http,
            base: config.forecast_base.clone(),
        }
    }

    /// Fetch the current weather at `coord`.
    pub async fn current(&self, coord: Coordinate) -> Result<WeatherReading, ApiError> {
        let url = format!(
            "{}/v1/forecast?latitude={}&longitude={}&current_weather=true",
            self.base, coord.latitude, coord.longitude
        );
        tracing::debug!(%url, "fetching current weather");

        let response = self.http.get(&url).send().await?.error_for_status()?;
        let body: ForecastResponse = response.json().await?;
        Ok(body.current_weather.into())
    }
}
