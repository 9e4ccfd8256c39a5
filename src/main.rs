//! URL Elongator - transform your long URLs into even longer links
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use clap::Parser;
use elong_core::prelude::*;
use url::Url;

/// URL Elongator - a TUI client for the URL Shortener (Not!) service
#[derive(Parser, Debug)]
#[command(name = "elong")]
#[command(about = "A TUI that transforms long URLs into even longer links", long_about = None)]
#[command(version)]
struct Args {
    /// Base URL of the shorten service (overrides the config file)
    #[arg(short, long, value_name = "URL")]
    endpoint: Option<Url>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since the TUI owns stdout)
    elong_core::logging::init()?;

    info!("═══════════════════════════════════════════════════════");
    info!("URL Elongator {} starting", env!("CARGO_PKG_VERSION"));
    info!("═══════════════════════════════════════════════════════");

    // Write a commented default config on first run so users can find it
    if let Err(e) = elong_app::config::init_config_file() {
        warn!("Could not create default config file: {}", e);
    }

    let mut settings = elong_app::config::load_settings();

    if let Some(endpoint) = args.endpoint {
        info!("Endpoint override from command line: {}", endpoint);
        settings.api.base_url = String::from(endpoint);
    }

    let result = elong_tui::run(settings).await;

    if let Err(e) = result {
        error!("Application error: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    info!("URL Elongator exiting");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_default_to_no_endpoint() {
        let args = Args::try_parse_from(["elong"]).unwrap();
        assert!(args.endpoint.is_none());
    }

    #[test]
    fn test_args_parse_endpoint_long_flag() {
        let args = Args::try_parse_from(["elong", "--endpoint", "http://10.0.0.5:3000"]).unwrap();

        let endpoint = args.endpoint.expect("endpoint should parse");
        assert_eq!(endpoint.host_str(), Some("10.0.0.5"));
        assert_eq!(endpoint.port(), Some(3000));
    }

    #[test]
    fn test_args_parse_endpoint_short_flag() {
        let args = Args::try_parse_from(["elong", "-e", "https://shorten.example.com"]).unwrap();

        let endpoint = args.endpoint.expect("endpoint should parse");
        assert_eq!(endpoint.scheme(), "https");
    }

    #[test]
    fn test_args_reject_invalid_endpoint() {
        let result = Args::try_parse_from(["elong", "--endpoint", "not a url"]);
        assert!(result.is_err());
    }
}
