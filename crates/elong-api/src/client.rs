//! Async HTTP client for the shorten endpoint.
//!
//! [`ApiClient`] wraps a configured [`reqwest::Client`] and exposes the one
//! call this application makes: `POST /api/shorten`. The client is cheap to
//! clone (reqwest clients share their connection pool), so spawned tasks can
//! carry their own copy.

use std::time::Duration;

use url::Url;

use elong_core::prelude::*;

use crate::protocol::{parse_error_message, ShortenRequest, ShortenResponse};

/// Path of the single endpoint this client consumes.
pub const SHORTEN_PATH: &str = "/api/shorten";

/// Per-request timeout applied when the caller does not configure one.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the shorten service.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    shorten_endpoint: Url,
}

impl ApiClient {
    /// Build a client for the service at `base_url`.
    ///
    /// `base_url` is the service origin (e.g. `http://localhost:3000`); the
    /// endpoint path is appended here once. The timeout bounds each request
    /// end to end, so a hung service resolves as a transport error instead
    /// of leaving the caller waiting forever.
    pub fn new(base_url: &Url, timeout: Duration) -> Result<Self> {
        let shorten_endpoint = base_url
            .join(SHORTEN_PATH)
            .map_err(|e| Error::endpoint(format!("{base_url}: {e}")))?;

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::http(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            shorten_endpoint,
        })
    }

    /// The resolved endpoint URL requests are sent to.
    pub fn shorten_endpoint(&self) -> &Url {
        &self.shorten_endpoint
    }

    /// Submit `url` to the shorten endpoint. Exactly one request per call;
    /// no retries.
    ///
    /// # Errors
    ///
    /// - [`Error::Api`] when the service answers non-2xx with a JSON body
    ///   carrying a non-empty `error` reason.
    /// - [`Error::Http`] for transport failures (connect, timeout), non-2xx
    ///   responses without a usable reason, and unparseable success bodies.
    pub async fn shorten(&self, url: &str) -> Result<ShortenResponse> {
        debug!("POST {}", self.shorten_endpoint);

        let request = ShortenRequest {
            url: url.to_string(),
        };

        let response = self
            .http
            .post(self.shorten_endpoint.clone())
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::http(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            let body: ShortenResponse = response
                .json()
                .await
                .map_err(|e| Error::http(format!("invalid success body: {e}")))?;
            info!("shorten endpoint returned {}", body.short_url);
            Ok(body)
        } else {
            let body = response.text().await.unwrap_or_default();
            warn!("shorten endpoint returned {status}: {body}");
            match parse_error_message(&body) {
                Some(reason) => Err(Error::api(reason)),
                None => Err(Error::http(format!("unexpected status {status}"))),
            }
        }
    }
}
