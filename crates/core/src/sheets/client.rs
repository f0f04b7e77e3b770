//! Google Sheets v4 API client.
//!
//! Read-only access with an API key; the spreadsheet must be shared
//! for link viewing. Worksheets are addressed by their stable numeric
//! id and resolved to titles through the metadata loaded at connect.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

use crate::config::{HttpConfig, SpreadsheetConfig};

use super::error::SheetsError;
use super::traits::SheetReader;
use super::types::{records_from_grid, Record, SpreadsheetInfo, WorksheetProps};

const DEFAULT_BASE_URL: &str = "https://sheets.googleapis.com/v4";

/// Connected handle to one spreadsheet document.
pub struct SheetsClient {
    client: Client,
    base_url: String,
    api_key: String,
    spreadsheet_id: String,
    info: SpreadsheetInfo,
}

impl SheetsClient {
    /// Connects to the spreadsheet service and loads worksheet metadata.
    ///
    /// This is the authentication handshake: a rejected key or an
    /// unreachable service surfaces here, before any extraction runs.
    pub async fn connect(
        config: &SpreadsheetConfig,
        http: &HttpConfig,
        api_key: String,
    ) -> Result<Self, SheetsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(http.timeout_secs))
            .build()?;

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let url = format!("{}/spreadsheets/{}", base_url, config.spreadsheet_id);

        debug!("Loading spreadsheet metadata: {}", config.spreadsheet_id);

        let response = client
            .get(&url)
            .query(&[
                ("key", api_key.as_str()),
                ("fields", "properties.title,sheets.properties"),
            ])
            .send()
            .await?;

        let status = response.status();
        if status == 400 || status == 403 {
            return Err(SheetsError::InvalidApiKey);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SheetsError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let metadata: SpreadsheetResponse = response
            .json()
            .await
            .map_err(|e| SheetsError::Parse(format!("Invalid metadata response: {}", e)))?;

        let info = SpreadsheetInfo::from(metadata);
        info!(
            "Connected to spreadsheet '{}' ({} worksheets)",
            info.title,
            info.worksheets.len()
        );

        Ok(Self {
            client,
            base_url,
            api_key,
            spreadsheet_id: config.spreadsheet_id.clone(),
            info,
        })
    }

    /// Metadata loaded during the handshake.
    pub fn info(&self) -> &SpreadsheetInfo {
        &self.info
    }
}

#[async_trait]
impl SheetReader for SheetsClient {
    fn name(&self) -> &str {
        "google-sheets"
    }

    async fn rows(&self, sheet_id: u64) -> Result<Vec<Record>, SheetsError> {
        let title = self
            .info
            .title_of(sheet_id)
            .ok_or(SheetsError::UnknownSheet(sheet_id))?;

        let range = urlencoding::encode(&quote_sheet_title(title)).into_owned();
        let url = format!(
            "{}/spreadsheets/{}/values/{}",
            self.base_url, self.spreadsheet_id, range
        );

        debug!("Fetching rows: sheet_id={} ('{}')", sheet_id, title);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("majorDimension", "ROWS"),
            ])
            .send()
            .await?;

        let status = response.status();
        if status == 400 || status == 403 {
            return Err(SheetsError::InvalidApiKey);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SheetsError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let grid: ValuesResponse = response
            .json()
            .await
            .map_err(|e| SheetsError::Parse(format!("Invalid values response: {}", e)))?;

        Ok(records_from_grid(grid.values))
    }
}

/// Quotes a worksheet title for use as an A1 range.
///
/// Titles with spaces or punctuation must be quoted; quoting a plain
/// title is always valid, so every title is quoted. Embedded single
/// quotes are doubled per the A1 grammar.
fn quote_sheet_title(title: &str) -> String {
    format!("'{}'", title.replace('\'', "''"))
}

// ============================================================================
// Sheets API response types (private)
// ============================================================================

#[derive(Debug, Deserialize)]
struct SpreadsheetResponse {
    #[serde(default)]
    properties: Option<DocumentProperties>,
    #[serde(default)]
    sheets: Vec<SheetEntry>,
}

#[derive(Debug, Deserialize)]
struct DocumentProperties {
    title: String,
}

#[derive(Debug, Deserialize)]
struct SheetEntry {
    properties: SheetProperties,
}

#[derive(Debug, Deserialize)]
struct SheetProperties {
    #[serde(rename = "sheetId")]
    sheet_id: u64,
    title: String,
    #[serde(default)]
    index: u32,
}

#[derive(Debug, Deserialize)]
struct ValuesResponse {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

impl From<SpreadsheetResponse> for SpreadsheetInfo {
    fn from(r: SpreadsheetResponse) -> Self {
        Self {
            title: r.properties.map(|p| p.title).unwrap_or_default(),
            worksheets: r
                .sheets
                .into_iter()
                .map(|s| WorksheetProps {
                    sheet_id: s.properties.sheet_id,
                    title: s.properties.title,
                    index: s.properties.index,
                })
                .collect(),
        }
    }
}
