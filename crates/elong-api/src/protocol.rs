//! Wire types for the shorten endpoint

use serde::{Deserialize, Serialize};

/// Fallback shown when a failure carries no usable server-supplied reason.
pub const FALLBACK_ERROR_MESSAGE: &str = "An error occurred while shortening the URL";

/// Request body for `POST /api/shorten`
#[derive(Debug, Clone, Serialize)]
pub struct ShortenRequest {
    pub url: String,
}

/// Success body from the shorten endpoint.
///
/// Only `short_url` matters to the view; the service also echoes
/// `original_url` and `short_code`, and may grow more fields.
#[derive(Debug, Clone, Deserialize)]
pub struct ShortenResponse {
    pub short_url: String,
    #[serde(default)]
    pub original_url: Option<String>,
    #[serde(default)]
    pub short_code: Option<String>,
}

/// Failure body from the shorten endpoint. The `error` field is optional;
/// callers fall back to [`FALLBACK_ERROR_MESSAGE`] when it is missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Extract the server-supplied error reason from a failure body, if any.
///
/// Returns `None` for non-JSON bodies, JSON without an `error` field,
/// and empty reasons.
pub fn parse_error_message(body: &str) -> Option<String> {
    let parsed: ApiErrorBody = serde_json::from_str(body).ok()?;
    parsed.error.filter(|reason| !reason.is_empty())
}
