//! Wiring. Entry point: load env and config, init tracing, hand off to the CLI.
//! No clinical logic here; the form and classifier live in the library.

use clap::Parser;
use copd_scale::adapters::cli::Cli;
use copd_scale::shared::config::AppConfig;
use dotenv::dotenv;
use std::path::PathBuf;
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    // stderr keeps log lines out of the rendered form and JSON output.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match &env_loaded {
        Ok(path) => debug!(path = %path.display(), "loaded .env"),
        Err(_) => debug!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    let cfg = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "invalid configuration, using defaults");
        AppConfig::default()
    });
    info!(
        show_banner = cfg.show_banner_or_default(),
        color = cfg.color_or_default(),
        clear_screen = cfg.clear_screen_or_default(),
        "configuration loaded"
    );

    Cli::parse().run(&cfg)
}
