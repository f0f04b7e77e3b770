//! Trait seam between extraction logic and the spreadsheet service.

use async_trait::async_trait;

use super::error::SheetsError;
use super::types::Record;

/// Read access to the worksheets of one spreadsheet document.
#[async_trait]
pub trait SheetReader: Send + Sync {
    /// Returns the name of this reader implementation.
    fn name(&self) -> &str;

    /// Fetches all rows of the worksheet with the given numeric id as
    /// column-keyed records, preserving sheet order.
    async fn rows(&self, sheet_id: u64) -> Result<Vec<Record>, SheetsError>;
}
