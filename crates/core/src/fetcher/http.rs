//! HTTP fetcher implementation.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tokio::fs;
use tracing::debug;

use crate::config::HttpConfig;
use crate::export::direct_download_url;

use super::error::FetchError;
use super::traits::ImageFetcher;
use super::types::{FetchReport, ImageTask};

/// Sequential HTTP image fetcher.
///
/// One request in flight at a time; files land in task order, so a
/// later duplicate id deterministically overwrites an earlier one.
pub struct HttpImageFetcher {
    client: Client,
}

impl HttpImageFetcher {
    pub fn new(config: &HttpConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl ImageFetcher for HttpImageFetcher {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch_all(
        &self,
        tasks: &[ImageTask],
        dest_dir: &Path,
    ) -> Result<FetchReport, FetchError> {
        fs::create_dir_all(dest_dir)
            .await
            .map_err(|e| FetchError::DirectoryCreationFailed {
                path: dest_dir.to_path_buf(),
                source: e,
            })?;

        let mut report = FetchReport::default();

        for task in tasks {
            let url = direct_download_url(&task.url);
            debug!("Downloading '{}' from {}", task.id, url);

            let response = self.client.get(&url).send().await.map_err(|e| {
                FetchError::Request {
                    id: task.id.clone(),
                    url: url.clone(),
                    source: e,
                }
            })?;

            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::Status {
                    id: task.id.clone(),
                    url,
                    status: status.as_u16(),
                });
            }

            let bytes = response.bytes().await.map_err(|e| FetchError::Request {
                id: task.id.clone(),
                url: url.clone(),
                source: e,
            })?;

            let path = dest_dir.join(task.file_name());
            fs::write(&path, &bytes)
                .await
                .map_err(|e| FetchError::WriteFailed {
                    path: path.clone(),
                    source: e,
                })?;

            report.files_written += 1;
            report.bytes_written += bytes.len() as u64;
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_empty_batch_still_creates_directory() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("images").join("sponsor");

        let fetcher = HttpImageFetcher::new(&HttpConfig::default()).unwrap();
        let report = fetcher.fetch_all(&[], &dest).await.unwrap();

        assert!(dest.is_dir());
        assert_eq!(report, FetchReport::default());
    }

    #[tokio::test]
    async fn test_create_dir_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let fetcher = HttpImageFetcher::new(&HttpConfig::default()).unwrap();

        fetcher.fetch_all(&[], temp.path()).await.unwrap();
        fetcher.fetch_all(&[], temp.path()).await.unwrap();
    }

    #[tokio::test]
    async fn test_invalid_url_aborts_batch() {
        let temp = TempDir::new().unwrap();
        let tasks = vec![ImageTask::new("bad", "not a url")];

        let fetcher = HttpImageFetcher::new(&HttpConfig::default()).unwrap();
        let result = fetcher.fetch_all(&tasks, temp.path()).await;

        assert!(matches!(result, Err(FetchError::Request { .. })));
        assert!(!temp.path().join("bad.png").exists());
    }
}
