//! Record fixtures for tests.

use crate::export::{news_columns, sponsor_columns};
use crate::sheets::Record;

/// A sponsors-sheet record with the fields the exporter looks at.
pub fn sponsor_record(id: &str, image: &str, can_publish: &str) -> Record {
    Record::new()
        .with(sponsor_columns::ID, id)
        .with(sponsor_columns::LEVEL, "gold")
        .with(sponsor_columns::NAME_EN, id)
        .with(sponsor_columns::IMAGE, image)
        .with(sponsor_columns::CAN_PUBLISH, can_publish)
}

/// A sponsor-news record with both image orientations set.
pub fn news_record(
    sponsor_id: &str,
    news_id: &str,
    horizontal: &str,
    vertical: &str,
    can_publish: &str,
) -> Record {
    Record::new()
        .with(news_columns::SPONSOR_ID, sponsor_id)
        .with(news_columns::NEWS_ID, news_id)
        .with(news_columns::IMAGE_HORIZONTAL, horizontal)
        .with(news_columns::IMAGE_VERTICAL, vertical)
        .with(news_columns::CAN_PUBLISH, can_publish)
}
