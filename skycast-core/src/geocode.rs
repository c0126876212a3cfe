//! Open-Meteo geocoding client.

use serde::Deserialize;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::place::PlaceCandidate;

/// Result cap requested from the geocoding endpoint.
pub const MAX_CANDIDATES: usize = 10;

const LANGUAGE: &str = "en";

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    results: Option<Vec<PlaceCandidate>>,
}

/// Resolves free-text queries to ranked place candidates.
#[derive(Clone, Debug)]
pub struct GeocodeClient {
    http: reqwest::Client,
    base: String,
}

impl GeocodeClient {
    pub fn new(http: reqwest::Client, config: &ApiConfig) -> Self {
        Self {
            http,
            base: config.geocode_base.clone(),
        }
    }

    /// Search for places matching `query`.
    ///
    /// The query is trimmed and URL-escaped, nothing else. An empty result
    /// set is `ApiError::EmptyResultSet`, kept distinct from transport
    /// failures. Source order of the candidates is preserved.
    pub async fn search(&self, query: &str) -> Result<Vec<PlaceCandidate>, ApiError> {
        let url = format!(
            "{}/v1/search?name={}&count={}&language={}&format=json",
            self.base,
            urlencoding::encode(query.trim()),
            MAX_CANDIDATES,
            LANGUAGE
        );
        tracing::debug!(%url, "searching places");

        let response = self.http.get(&url).send().await?.error_for_status()?;
        let body: GeocodeResponse = response.json().await?;

        match body.results {
            Some(places) if !places.is_empty() => Ok(places),
            _ => Err(ApiError::EmptyResultSet),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_results_in_source_order() {
        let body: GeocodeResponse = serde_json::from_str(
            r#"{
                "results": [
                    {
                        "name": "Paris",
                        "admin1": "Île-de-France",
                        "country": "France",
                        "latitude": 48.85341,
                        "longitude": 2.3488
                    },
                    {
                        "name": "Paris",
                        "admin1": "Texas",
                        "admin2": "Lamar",
                        "country": "United States",
                        "latitude": 33.66094,
                        "longitude": -95.55551
                    }
                ]
            }"#,
        )
        .unwrap();

        let places = body.results.unwrap();
        assert_eq!(places.len(), 2);
        assert_eq!(places[0].admin1.as_deref(), Some("Île-de-France"));
        assert_eq!(places[1].admin2.as_deref(), Some("Lamar"));
        assert_eq!(places[1].country.as_deref(), Some("United States"));
    }

    #[test]
    fn missing_results_field_parses_as_none() {
        let body: GeocodeResponse =
            serde_json::from_str(r#"{"generationtime_ms": 0.5}"#).unwrap();
        assert!(body.results.is_none());
    }

    #[tokio::test]
    #[ignore] // Hits the live API: cargo test -p skycast-core -- --ignored
    async fn live_search_paris() {
        let config = ApiConfig::default();
        let http = crate::config::build_http_client(&config).unwrap();
        let client = GeocodeClient::new(http, &config);
        let places = client.search("Paris").await.unwrap();
        assert!(!places.is_empty());
        assert!(places.len() <= MAX_CANDIDATES);
    }

    #[tokio::test]
    #[ignore]
    async fn live_search_gibberish_is_empty_result_set() {
        let config = ApiConfig::default();
        let http = crate::config::build_http_client(&config).unwrap();
        let client = GeocodeClient::new(http, &config);
        let err = client.search("zzzzqqqqxxxx").await.unwrap_err();
        assert!(matches!(err, ApiError::EmptyResultSet));
    }
}
