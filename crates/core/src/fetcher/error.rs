use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while downloading images.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Failed to build the HTTP client.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    /// Failed to create the destination directory.
    #[error("Failed to create directory: {path}")]
    DirectoryCreationFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The request for one image failed at the transport level.
    #[error("Failed to download '{id}' from {url}")]
    Request {
        id: String,
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The image host answered with a non-success status.
    #[error("Download of '{id}' from {url} returned HTTP {status}")]
    Status { id: String, url: String, status: u16 },

    /// Failed to write the image to disk.
    #[error("Failed to write {path}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
