//! # elong-core
//!
//! Foundation crate for URL Elongator: the shared [`Error`] type with its
//! recoverable/fatal split, the [`Result`] alias, and the tracing setup
//! every binary run goes through ([`logging::init`]).
//!
//! Depends only on external crates; everything else in the workspace
//! depends on it.

pub mod error;
pub mod logging;

/// Common imports for the rest of the workspace
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, warn};
}

pub use error::{Error, Result, ResultExt};
