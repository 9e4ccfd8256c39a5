//! Settings parser for ~/.config/elong/config.toml

use std::path::{Path, PathBuf};

use super::types::Settings;
use elong_core::prelude::*;

const CONFIG_FILENAME: &str = "config.toml";
const CONFIG_DIR: &str = "elong";

/// Resolve the config file path under the user config directory
///
/// Returns `None` on platforms without a config directory.
pub fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join(CONFIG_DIR).join(CONFIG_FILENAME))
}

/// Load settings from the default location
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings() -> Settings {
    match config_file_path() {
        Some(path) => load_settings_from(&path),
        None => Settings::default(),
    }
}

/// Load settings from a specific config file
pub fn load_settings_from(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Create a commented default config file if none exists
///
/// Idempotent; an existing file is never touched.
pub fn init_config_file() -> Result<()> {
    let Some(config_path) = config_file_path() else {
        return Ok(());
    };
    init_config_file_at(&config_path)
}

fn init_config_file_at(config_path: &Path) -> Result<()> {
    if config_path.exists() {
        return Ok(());
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create config dir: {}", e)))?;
    }

    let default_content = r#"# URL Elongator Configuration

[api]
# Origin of the shorten service
base_url = "http://localhost:3000"
# Per-request timeout in seconds
timeout_secs = 30

[ui]
# Show the key-hint footer
show_footer = true
"#;

    std::fs::write(config_path, default_content)
        .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;

    info!("Created default config at {:?}", config_path);
    Ok(())
}
