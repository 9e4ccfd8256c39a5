//! Shared error and result types
//!
//! One enum covers every failure the workspace can produce. The
//! `is_recoverable`/`is_fatal` split decides how the binary reacts:
//! recoverable failures surface inside the view and leave it usable,
//! fatal ones tear the application down.

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Raw-mode setup, restore, or draw failure.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// The shorten service answered non-2xx and gave a reason.
    #[error("Shorten service error: {0}")]
    Api(String),

    /// The request never produced a usable response (connect, timeout, body).
    #[error("HTTP transport error: {0}")]
    Http(String),

    /// The configured base URL does not parse.
    #[error("Invalid endpoint URL: {0}")]
    Endpoint(String),

    /// The OS clipboard refused the write (headless session, no display).
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }

    pub fn api(msg: impl Into<String>) -> Self {
        Self::Api(msg.into())
    }

    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    pub fn endpoint(msg: impl Into<String>) -> Self {
        Self::Endpoint(msg.into())
    }

    pub fn clipboard(msg: impl Into<String>) -> Self {
        Self::Clipboard(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Check if this error leaves the view usable
    ///
    /// A failed request or copy can simply be retried.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::Api(_) | Error::Http(_) | Error::Clipboard(_))
    }

    /// Check if this error should end the application
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Terminal(_) | Error::Endpoint(_))
    }
}

/// Extension trait for logging errors as they propagate
///
/// The TUI owns the screen, so the log file is the only place a failure
/// can be diagnosed after the fact.
pub trait ResultExt<T> {
    /// Log the error under `context` and pass it through unchanged
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_the_reason() {
        let err = Error::api("Invalid URL format");
        assert_eq!(err.to_string(), "Shorten service error: Invalid URL format");

        let err = Error::http("connection refused");
        assert_eq!(err.to_string(), "HTTP transport error: connection refused");

        let err = Error::clipboard("no display");
        assert_eq!(err.to_string(), "Clipboard error: no display");
    }

    #[test]
    fn test_io_errors_convert() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_request_failures_are_recoverable() {
        assert!(Error::api("bad url").is_recoverable());
        assert!(Error::http("timed out").is_recoverable());
        assert!(Error::clipboard("no display").is_recoverable());

        assert!(!Error::terminal("raw mode failed").is_recoverable());
        assert!(!Error::config("bad toml").is_recoverable());
    }

    #[test]
    fn test_setup_failures_are_fatal() {
        assert!(Error::terminal("raw mode failed").is_fatal());
        assert!(Error::endpoint("not a URL").is_fatal());

        assert!(!Error::api("bad url").is_fatal());
        assert!(!Error::http("timed out").is_fatal());
    }

    #[test]
    fn test_context_passes_the_error_through() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let result: std::result::Result<(), std::io::Error> = Err(io_err);

        let err = result.context("setting up").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
