//! Image retrieval and placement on disk.

mod error;
mod http;
mod traits;
mod types;

pub use error::FetchError;
pub use http::HttpImageFetcher;
pub use traits::ImageFetcher;
pub use types::{FetchReport, ImageTask};
