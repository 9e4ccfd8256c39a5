//! Configuration file parsing for URL Elongator
//!
//! Settings live in `~/.config/elong/config.toml` (platform equivalent
//! via the `dirs` crate). A missing or unparseable file falls back to
//! defaults.

pub mod settings;
pub mod types;

pub use settings::{config_file_path, init_config_file, load_settings, load_settings_from};
pub use types::*;
