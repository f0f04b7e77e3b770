use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Spreadsheet id is not empty
/// - The two worksheet ids are distinct
/// - HTTP timeout is not zero
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.spreadsheet.spreadsheet_id.is_empty() {
        return Err(ConfigError::ValidationError(
            "spreadsheet.spreadsheet_id cannot be empty".to_string(),
        ));
    }

    if config.spreadsheet.sponsors_sheet_id == config.spreadsheet.sponsor_news_sheet_id {
        return Err(ConfigError::ValidationError(
            "spreadsheet.sponsors_sheet_id and spreadsheet.sponsor_news_sheet_id must differ"
                .to_string(),
        ));
    }

    if config.http.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "http.timeout_secs cannot be 0".to_string(),
        ));
    }

    Ok(())
}
