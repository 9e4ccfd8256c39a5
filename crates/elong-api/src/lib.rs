//! # elong-api - Shorten Endpoint Client
//!
//! The single external boundary of URL Elongator: an async HTTP client for
//! the shorten service's `POST /api/shorten` endpoint, plus the wire types
//! it exchanges.
//!
//! ## Public API
//!
//! ### Client (`client`)
//! - [`ApiClient`] - reqwest-backed client with a per-request timeout
//! - [`ApiClient::shorten()`] - submit a URL, get back the elongated one
//!
//! ### Wire Types (`protocol`)
//! - [`ShortenRequest`] - `{ "url": "<string>" }`
//! - [`ShortenResponse`] - success body; `short_url` is used verbatim
//! - [`ApiErrorBody`] / [`parse_error_message()`] - failure body handling
//! - [`FALLBACK_ERROR_MESSAGE`] - shown when the service gives no reason

pub mod client;
pub mod protocol;

pub use client::{ApiClient, DEFAULT_TIMEOUT, SHORTEN_PATH};
pub use protocol::{
    parse_error_message, ApiErrorBody, ShortenRequest, ShortenResponse, FALLBACK_ERROR_MESSAGE,
};
