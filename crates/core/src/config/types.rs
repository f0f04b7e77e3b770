use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Spreadsheet the exporter reads when nothing else is configured.
pub const DEFAULT_SPREADSHEET_ID: &str = "1mioOkTnkXUCuMqQN_07Q-ebB_wHxSGrsozMNTSJfby4";

/// Numeric id of the sponsors worksheet inside the default spreadsheet.
pub const DEFAULT_SPONSORS_SHEET_ID: u64 = 178_607_707;

/// Numeric id of the sponsor-news worksheet inside the default spreadsheet.
pub const DEFAULT_SPONSOR_NEWS_SHEET_ID: u64 = 1_344_636_990;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub spreadsheet: SpreadsheetConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

/// Spreadsheet service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SpreadsheetConfig {
    /// API key for the spreadsheet service. Usually supplied through the
    /// `SPREADSHEET_API_KEY` environment variable rather than the file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Spreadsheet document id.
    #[serde(default = "default_spreadsheet_id")]
    pub spreadsheet_id: String,
    /// Worksheet id of the sponsors sheet.
    #[serde(default = "default_sponsors_sheet_id")]
    pub sponsors_sheet_id: u64,
    /// Worksheet id of the sponsor-news sheet.
    #[serde(default = "default_sponsor_news_sheet_id")]
    pub sponsor_news_sheet_id: u64,
    /// Base URL (default: https://sheets.googleapis.com/v4).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl Default for SpreadsheetConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            spreadsheet_id: default_spreadsheet_id(),
            sponsors_sheet_id: default_sponsors_sheet_id(),
            sponsor_news_sheet_id: default_sponsor_news_sheet_id(),
            base_url: None,
        }
    }
}

fn default_spreadsheet_id() -> String {
    DEFAULT_SPREADSHEET_ID.to_string()
}

fn default_sponsors_sheet_id() -> u64 {
    DEFAULT_SPONSORS_SHEET_ID
}

fn default_sponsor_news_sheet_id() -> u64 {
    DEFAULT_SPONSOR_NEWS_SHEET_ID
}

/// Export output configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportConfig {
    /// Root of the output tree. Removed and rebuilt on every run.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("dist")
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HttpConfig {
    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}
