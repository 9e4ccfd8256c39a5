//! Configuration types for URL Elongator

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use elong_core::{Error, Result};

/// Application settings from config.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Shorten service settings
    #[serde(default)]
    pub api: ApiSettings,

    /// UI settings
    #[serde(default)]
    pub ui: UiSettings,
}

/// Shorten service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Origin of the shorten service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiSettings {
    /// Parse the configured origin
    pub fn parsed_base_url(&self) -> Result<Url> {
        Url::parse(&self.base_url)
            .map_err(|e| Error::endpoint(format!("invalid base_url {:?}: {}", self.base_url, e)))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// UI settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiSettings {
    /// Show the key-hint footer
    #[serde(default = "default_true")]
    pub show_footer: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self { show_footer: true }
    }
}

fn default_true() -> bool {
    true
}
