//! Logging configuration using tracing
//!
//! The TUI owns stdout and stderr, so all diagnostics go to a daily-rolling
//! file under the user data directory.

use std::path::PathBuf;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

const LOG_FILE_PREFIX: &str = "elong.log";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";
const DEFAULT_FILTER: &str =
    "url_elongator=info,elong_core=info,elong_api=info,elong_app=info,elong_tui=info,warn";

/// Initialize the logging subsystem
///
/// Writes to `~/.local/share/elong/logs/`, rolled daily. The `ELONG_LOG`
/// environment variable overrides the default filter:
///
/// ```bash
/// ELONG_LOG=debug elong
/// ```
pub fn init() -> Result<()> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_PREFIX);

    let filter =
        EnvFilter::try_from_env("ELONG_LOG").unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(appender)
                .with_ansi(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(TIMESTAMP_FORMAT.to_string())),
        )
        .init();

    tracing::info!("Logging to {}", log_dir.display());
    Ok(())
}

fn log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("elong").join("logs")
}
