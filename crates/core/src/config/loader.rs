use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use std::path::Path;

use super::{types::Config, ConfigError};

/// Environment variable carrying the spreadsheet API key.
pub const API_KEY_ENV: &str = "SPREADSHEET_API_KEY";

/// Load configuration from file with environment variable overrides.
///
/// A missing file is not an error: every field has a default and the
/// common deployment is environment-only, with nothing but
/// `SPREADSHEET_API_KEY` set.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let mut config: Config = Figment::new()
        .merge(Toml::file(path))
        .merge(Env::prefixed("SPONSORKIT_").split("__"))
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))?;

    // The credential keeps its historical, unprefixed variable name.
    if config.spreadsheet.api_key.is_none() {
        config.spreadsheet.api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.is_empty());
    }

    Ok(config)
}

/// Load configuration from TOML string (useful for testing)
pub fn load_config_from_str(toml_str: &str) -> Result<Config, ConfigError> {
    toml::from_str(toml_str).map_err(|e| ConfigError::ParseError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_from_str_valid() {
        let toml = r#"
[spreadsheet]
api_key = "file-key"

[export]
output_dir = "build"
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.spreadsheet.api_key.as_deref(), Some("file-key"));
        assert_eq!(config.export.output_dir.to_str().unwrap(), "build");
    }

    #[test]
    fn test_load_config_from_str_invalid_type() {
        let toml = r#"
[http]
timeout_secs = "fast"
"#;
        let result = load_config_from_str(toml);
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_load_config_missing_file_is_defaulted() {
        let config = load_config(Path::new("/nonexistent/sponsorkit.toml")).unwrap();
        assert_eq!(config.export.output_dir.to_str().unwrap(), "dist");
    }

    #[test]
    fn test_load_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            r#"
[spreadsheet]
spreadsheet_id = "doc-from-file"

[http]
timeout_secs = 12
"#
        )
        .unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.spreadsheet.spreadsheet_id, "doc-from-file");
        assert_eq!(config.http.timeout_secs, 12);
    }
}
