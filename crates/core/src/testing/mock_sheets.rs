//! Mock sheet reader for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::sheets::{Record, SheetReader, SheetsError};

/// Mock implementation of the [`SheetReader`] trait.
///
/// Serves canned records per worksheet id, records which sheets were
/// read, and can fail the next read on demand. Unknown worksheet ids
/// error like the real client.
#[derive(Default)]
pub struct MockSheetReader {
    sheets: Arc<RwLock<HashMap<u64, Vec<Record>>>>,
    reads: Arc<RwLock<Vec<u64>>>,
    next_error: Arc<RwLock<Option<SheetsError>>>,
}

impl MockSheetReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the records served for a worksheet id.
    pub async fn set_sheet(&self, sheet_id: u64, records: Vec<Record>) {
        self.sheets.write().await.insert(sheet_id, records);
    }

    /// Worksheet ids read so far, in call order.
    pub async fn recorded_reads(&self) -> Vec<u64> {
        self.reads.read().await.clone()
    }

    /// Configure the next read to fail with the given error.
    pub async fn set_next_error(&self, error: SheetsError) {
        *self.next_error.write().await = Some(error);
    }
}

#[async_trait]
impl SheetReader for MockSheetReader {
    fn name(&self) -> &str {
        "mock"
    }

    async fn rows(&self, sheet_id: u64) -> Result<Vec<Record>, SheetsError> {
        if let Some(err) = self.next_error.write().await.take() {
            return Err(err);
        }

        self.reads.write().await.push(sheet_id);

        self.sheets
            .read()
            .await
            .get(&sheet_id)
            .cloned()
            .ok_or(SheetsError::UnknownSheet(sheet_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures;

    #[tokio::test]
    async fn test_serves_configured_records() {
        let reader = MockSheetReader::new();
        reader
            .set_sheet(
                7,
                vec![fixtures::sponsor_record(
                    "acme",
                    "https://example.com/a.png",
                    "Y",
                )],
            )
            .await;

        let records = reader.rows(7).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("id"), "acme");
        assert_eq!(reader.recorded_reads().await, vec![7]);
    }

    #[tokio::test]
    async fn test_unknown_sheet_errors() {
        let reader = MockSheetReader::new();
        let result = reader.rows(42).await;
        assert!(matches!(result, Err(SheetsError::UnknownSheet(42))));
    }

    #[tokio::test]
    async fn test_error_injection_is_consumed() {
        let reader = MockSheetReader::new();
        reader.set_sheet(7, vec![]).await;
        reader
            .set_next_error(SheetsError::Api {
                status: 500,
                message: "boom".to_string(),
            })
            .await;

        assert!(reader.rows(7).await.is_err());
        assert!(reader.rows(7).await.is_ok());
    }
}
