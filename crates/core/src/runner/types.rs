use std::fmt;
use thiserror::Error;

use crate::fetcher::FetchError;
use crate::sheets::SheetsError;

/// Why a run ended early without touching the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// No API key in the environment or configuration.
    MissingApiKey,
    /// The metadata handshake failed (bad key, network, service error).
    SpreadsheetUnavailable(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingApiKey => write!(f, "spreadsheet API key is not set"),
            Self::SpreadsheetUnavailable(reason) => {
                write!(f, "cannot load the spreadsheet: {}", reason)
            }
        }
    }
}

/// Final outcome of an export run that did not error.
///
/// A skipped run is deliberately not an error: the exporter is wired
/// into builds that must succeed without the credential present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Completed(RunReport),
    Skipped(SkipReason),
}

/// Per-stage counts of a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    pub sponsor_files: usize,
    pub news_files: usize,
    pub bytes_written: u64,
}

/// Errors that abort a run mid-flight, leaving the output tree
/// partially populated.
#[derive(Debug, Error)]
pub enum RunnerError {
    #[error(transparent)]
    Sheets(#[from] SheetsError),

    #[error(transparent)]
    Fetch(#[from] FetchError),
}
