use thiserror::Error;

/// Errors that can occur while talking to the spreadsheet service.
#[derive(Debug, Error)]
pub enum SheetsError {
    /// The service rejected the API key.
    #[error("Spreadsheet API key was rejected")]
    InvalidApiKey,

    /// No worksheet with the requested numeric id exists in the document.
    #[error("Worksheet {0} not found in spreadsheet")]
    UnknownSheet(u64),

    /// The service returned a non-success status.
    #[error("Spreadsheet API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// The response body did not match the expected shape.
    #[error("Failed to parse spreadsheet response: {0}")]
    Parse(String),

    /// Transport-level failure (connect, timeout, TLS).
    #[error("Spreadsheet request failed: {0}")]
    Transport(#[from] reqwest::Error),
}
