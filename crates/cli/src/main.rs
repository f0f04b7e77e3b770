use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sponsorkit_core::{load_config, runner, validate_config, RunOutcome};

/// Application version
const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("sponsorkit {}", VERSION);

    // Determine config path
    let config_path = std::env::var("SPONSORKIT_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.toml"));

    let config = load_config(&config_path)
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;

    validate_config(&config).context("Configuration validation failed")?;

    info!("Output root: {:?}", config.export.output_dir);
    info!("Spreadsheet: {}", config.spreadsheet.spreadsheet_id);

    // Skipped runs exit 0: builds without the credential must succeed.
    // Anything that errors past the handshake exits 1 via main.
    match runner::run(&config).await? {
        RunOutcome::Completed(report) => {
            info!(
                "Export complete: {} sponsor logos, {} news images, {} bytes",
                report.sponsor_files, report.news_files, report.bytes_written
            );
        }
        RunOutcome::Skipped(reason) => {
            info!("Export skipped: {}", reason);
        }
    }

    Ok(())
}
