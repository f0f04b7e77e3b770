//! Mock image fetcher for testing.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::sync::RwLock;

use crate::fetcher::{FetchError, FetchReport, ImageFetcher, ImageTask};

/// One recorded `fetch_all` call.
#[derive(Debug, Clone)]
pub struct RecordedBatch {
    pub tasks: Vec<ImageTask>,
    pub dest_dir: PathBuf,
}

/// Mock implementation of the [`ImageFetcher`] trait.
///
/// Behaves like the HTTP fetcher minus the network: creates the
/// destination directory and writes `<id>.png` files whose content is
/// the task's source URL, so tests can assert both the tree shape and
/// which source each file came from. A task id can be
/// marked to fail, aborting the batch at that point like a real
/// download error.
#[derive(Default)]
pub struct MockImageFetcher {
    batches: Arc<RwLock<Vec<RecordedBatch>>>,
    fail_on: Arc<RwLock<Option<String>>>,
}

impl MockImageFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the task with this id fail with an HTTP 500.
    pub async fn fail_on(&self, id: &str) {
        *self.fail_on.write().await = Some(id.to_string());
    }

    /// All recorded `fetch_all` calls.
    pub async fn recorded_batches(&self) -> Vec<RecordedBatch> {
        self.batches.read().await.clone()
    }
}

#[async_trait]
impl ImageFetcher for MockImageFetcher {
    fn name(&self) -> &str {
        "mock"
    }

    async fn fetch_all(
        &self,
        tasks: &[ImageTask],
        dest_dir: &Path,
    ) -> Result<FetchReport, FetchError> {
        self.batches.write().await.push(RecordedBatch {
            tasks: tasks.to_vec(),
            dest_dir: dest_dir.to_path_buf(),
        });

        fs::create_dir_all(dest_dir)
            .await
            .map_err(|e| FetchError::DirectoryCreationFailed {
                path: dest_dir.to_path_buf(),
                source: e,
            })?;

        let mut report = FetchReport::default();
        let fail_on = self.fail_on.read().await.clone();

        for task in tasks {
            if fail_on.as_deref() == Some(task.id.as_str()) {
                return Err(FetchError::Status {
                    id: task.id.clone(),
                    url: task.url.clone(),
                    status: 500,
                });
            }

            let path = dest_dir.join(task.file_name());
            fs::write(&path, task.url.as_bytes())
                .await
                .map_err(|e| FetchError::WriteFailed {
                    path: path.clone(),
                    source: e,
                })?;

            report.files_written += 1;
            report.bytes_written += task.url.len() as u64;
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_writes_marker_files() {
        let temp = TempDir::new().unwrap();
        let fetcher = MockImageFetcher::new();

        let tasks = vec![ImageTask::new("acme", "https://example.com/a.png")];
        let report = fetcher.fetch_all(&tasks, temp.path()).await.unwrap();

        assert_eq!(report.files_written, 1);
        let content = fs::read_to_string(temp.path().join("acme.png")).await.unwrap();
        assert_eq!(content, "https://example.com/a.png");
    }

    #[tokio::test]
    async fn test_fail_on_aborts_mid_batch() {
        let temp = TempDir::new().unwrap();
        let fetcher = MockImageFetcher::new();
        fetcher.fail_on("second").await;

        let tasks = vec![
            ImageTask::new("first", "https://example.com/1.png"),
            ImageTask::new("second", "https://example.com/2.png"),
            ImageTask::new("third", "https://example.com/3.png"),
        ];

        let result = fetcher.fetch_all(&tasks, temp.path()).await;
        assert!(matches!(result, Err(FetchError::Status { status: 500, .. })));

        assert!(temp.path().join("first.png").exists());
        assert!(!temp.path().join("second.png").exists());
        assert!(!temp.path().join("third.png").exists());
    }
}
