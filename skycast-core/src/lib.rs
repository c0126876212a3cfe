//! Core library for skycast.
//!
//! This crate defines:
//! - The domain model (coordinates, place candidates, weather readings)
//! - HTTP clients for the forecast, geocoding and position endpoints
//! - The shared error taxonomy and endpoint configuration
//!
//! It is used by the `skycast` TUI, but carries no UI dependency and can
//! be reused by other binaries.

pub mod config;
pub mod error;
pub mod forecast;
pub mod geocode;
pub mod locate;
pub mod place;
pub mod weather;

pub use config::{build_http_client, ApiConfig};
pub use error::ApiError;
pub use forecast::ForecastClient;
pub use geocode::GeocodeClient;
pub use locate::LocateClient;
pub use place::{Coordinate, PlaceCandidate};
pub use weather::WeatherReading;
