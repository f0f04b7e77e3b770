//! Row-to-task extraction.
//!
//! Pure functions from worksheet records to download tasks; all
//! network and filesystem work lives in `sheets` and `fetcher`.

mod eligibility;
mod extract;
mod types;
mod url;

pub use eligibility::{is_publishable, NEWS_REQUIRED, PUBLISH_FLAG, SPONSOR_REQUIRED};
pub use extract::{sponsor_news_tasks, sponsor_tasks};
pub use types::{news_columns, sponsor_columns, SponsorLevel, SponsorNewsRow, SponsorRow};
pub use url::direct_download_url;
