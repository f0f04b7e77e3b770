use std::io::ErrorKind;
use std::path::Path;

use tokio::fs;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::export::{sponsor_news_tasks, sponsor_tasks};
use crate::fetcher::{HttpImageFetcher, ImageFetcher};
use crate::sheets::{SheetReader, SheetsClient};

use super::types::{RunOutcome, RunReport, RunnerError, SkipReason};

/// Subdirectory of the output root for sponsor logos.
const SPONSOR_SUBDIR: &str = "images/sponsor";

/// Subdirectory of the output root for sponsor-news images.
const SPONSOR_NEWS_SUBDIR: &str = "images/sponsor-news";

/// Runs a full export against the configured spreadsheet.
///
/// A missing API key or a failed handshake ends the run cleanly with
/// [`RunOutcome::Skipped`] and zero filesystem side effects. Errors
/// after that point (row fetch, download) propagate and leave the
/// output tree partially populated.
pub async fn run(config: &Config) -> Result<RunOutcome, RunnerError> {
    let Some(api_key) = config.spreadsheet.api_key.clone() else {
        info!("Spreadsheet API key is not set, skipping export");
        return Ok(RunOutcome::Skipped(SkipReason::MissingApiKey));
    };

    let reader = match SheetsClient::connect(&config.spreadsheet, &config.http, api_key).await {
        Ok(client) => client,
        Err(e) => {
            warn!("Cannot load the spreadsheet: {}", e);
            return Ok(RunOutcome::Skipped(SkipReason::SpreadsheetUnavailable(
                e.to_string(),
            )));
        }
    };

    let fetcher = HttpImageFetcher::new(&config.http)?;
    let report = export_with(config, &reader, &fetcher).await?;
    Ok(RunOutcome::Completed(report))
}

/// Resets the output root and runs the two extract-and-fetch stages.
///
/// Separate from [`run`] so tests can inject reader and fetcher
/// implementations past the handshake.
pub async fn export_with(
    config: &Config,
    reader: &dyn SheetReader,
    fetcher: &dyn ImageFetcher,
) -> Result<RunReport, RunnerError> {
    let root = config.export.output_dir.as_path();
    reset_output(root).await;

    let records = reader.rows(config.spreadsheet.sponsors_sheet_id).await?;
    let tasks = sponsor_tasks(&records);
    info!(
        "Sponsors: {} rows, {} publishable logos",
        records.len(),
        tasks.len()
    );
    let sponsor_report = fetcher.fetch_all(&tasks, &root.join(SPONSOR_SUBDIR)).await?;

    let records = reader
        .rows(config.spreadsheet.sponsor_news_sheet_id)
        .await?;
    let tasks = sponsor_news_tasks(&records);
    info!(
        "Sponsor news: {} rows, {} publishable images",
        records.len(),
        tasks.len()
    );
    let news_report = fetcher
        .fetch_all(&tasks, &root.join(SPONSOR_NEWS_SUBDIR))
        .await?;

    info!("Done");

    Ok(RunReport {
        sponsor_files: sponsor_report.files_written,
        news_files: news_report.files_written,
        bytes_written: sponsor_report.bytes_written + news_report.bytes_written,
    })
}

/// Removes the previous output root.
///
/// NotFound is the expected first-run case. Every other removal error
/// is swallowed as well and the run proceeds against whatever is left
/// on disk; the warn below is the only trace of it.
async fn reset_output(root: &Path) {
    match fs::remove_dir_all(root).await {
        Ok(()) => debug!("Removed previous output at {}", root.display()),
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => warn!("Ignoring failure to remove {}: {}", root.display(), e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_reset_output_removes_tree() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("dist");
        fs::create_dir_all(root.join("images/sponsor")).await.unwrap();
        fs::write(root.join("images/sponsor/stale.png"), b"old")
            .await
            .unwrap();

        reset_output(&root).await;
        assert!(!root.exists());
    }

    #[tokio::test]
    async fn test_reset_output_missing_root_is_quiet() {
        let temp = TempDir::new().unwrap();
        reset_output(&temp.path().join("never-created")).await;
    }
}
