pub mod config;
pub mod export;
pub mod fetcher;
pub mod runner;
pub mod sheets;
pub mod testing;

pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, ExportConfig,
    HttpConfig, SpreadsheetConfig, API_KEY_ENV,
};
pub use export::{
    direct_download_url, sponsor_news_tasks, sponsor_tasks, SponsorLevel, SponsorNewsRow,
    SponsorRow,
};
pub use fetcher::{FetchError, FetchReport, HttpImageFetcher, ImageFetcher, ImageTask};
pub use runner::{RunOutcome, RunReport, RunnerError, SkipReason};
pub use sheets::{Record, SheetReader, SheetsClient, SheetsError, SpreadsheetInfo};
