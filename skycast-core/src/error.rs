//! Error taxonomy for the external services.

use reqwest::StatusCode;

/// Failure modes of the forecast, geocoding and position calls.
///
/// The variants stay distinct for logging, but most collapse to a single
/// user-facing message: the original UI never told transport failures and
/// bad statuses apart.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (connect error, timeout).
    #[error("network unreachable: {0}")]
    Offline(#[source] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("request failed with status {0}")]
    Http(StatusCode),

    /// The response body did not match the expected shape.
    #[error("malformed response: {0}")]
    Malformed(#[source] reqwest::Error),

    /// The geocoding search matched nothing.
    #[error("no places matched the query")]
    EmptyResultSet,

    /// The position service could not produce a fix.
    #[error("position lookup failed: {0}")]
    PositionUnavailable(String),
}

impl ApiError {
    /// The message shown to the user for this failure.
    ///
    /// `Offline`, `Http` and `Malformed` intentionally share one message;
    /// only the empty geocoding result and the position failure are
    /// distinguished.
    pub fn user_message(&self) -> &'static str {
        match self {
            ApiError::EmptyResultSet => "City not found.",
            ApiError::PositionUnavailable(_) => "Unable to retrieve location.",
            ApiError::Offline(_) | ApiError::Http(_) | ApiError::Malformed(_) => {
                "Please check your internet connection."
            }
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Malformed(err)
        } else if let Some(status) = err.status() {
            ApiError::Http(status)
        } else {
            ApiError::Offline(err)
        }
    }
}
