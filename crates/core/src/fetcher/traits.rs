//! Trait definition for the fetcher module.

use async_trait::async_trait;
use std::path::Path;

use super::error::FetchError;
use super::types::{FetchReport, ImageTask};

/// A fetcher that retrieves images and writes them under a directory.
#[async_trait]
pub trait ImageFetcher: Send + Sync {
    /// Returns the name of this fetcher implementation.
    fn name(&self) -> &str;

    /// Retrieves every task in order, writing `<id>.png` under
    /// `dest_dir` and overwriting existing files of the same name.
    ///
    /// The directory is created (with parents) if absent. The first
    /// failure aborts the remaining tasks and propagates; there is no
    /// retry and no partial-success bookkeeping.
    async fn fetch_all(&self, tasks: &[ImageTask], dest_dir: &Path)
        -> Result<FetchReport, FetchError>;
}
