//! Mock implementations and fixtures for testing.

pub mod fixtures;
mod mock_fetcher;
mod mock_sheets;

pub use mock_fetcher::{MockImageFetcher, RecordedBatch};
pub use mock_sheets::MockSheetReader;
