//! Declarative row eligibility.
//!
//! Each worksheet shares one predicate shape: the publish flag must be
//! exactly "Y" and a per-sheet list of columns must be non-empty.

use crate::sheets::Record;

use super::types::{news_columns, sponsor_columns};

/// Publish-flag value that marks a row exportable.
pub const PUBLISH_FLAG: &str = "Y";

/// Columns that must be non-empty for a sponsor row to be exported.
pub const SPONSOR_REQUIRED: &[&str] = &[sponsor_columns::ID, sponsor_columns::IMAGE];

/// Columns that must be non-empty for a sponsor-news row to be exported.
pub const NEWS_REQUIRED: &[&str] = &[
    news_columns::SPONSOR_ID,
    news_columns::NEWS_ID,
    news_columns::IMAGE_HORIZONTAL,
    news_columns::IMAGE_VERTICAL,
];

/// Whether a row passes the publish gate for its sheet.
pub fn is_publishable(record: &Record, publish_column: &str, required: &[&str]) -> bool {
    record.get(publish_column) == PUBLISH_FLAG
        && required.iter().all(|column| !record.get(column).is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sponsor(id: &str, image: &str, flag: &str) -> Record {
        Record::new()
            .with(sponsor_columns::ID, id)
            .with(sponsor_columns::IMAGE, image)
            .with(sponsor_columns::CAN_PUBLISH, flag)
    }

    #[test]
    fn test_publishable_row() {
        let record = sponsor("acme", "https://example.com/a.png", "Y");
        assert!(is_publishable(
            &record,
            sponsor_columns::CAN_PUBLISH,
            SPONSOR_REQUIRED
        ));
    }

    #[test]
    fn test_flag_must_be_exactly_y() {
        for flag in ["N", "y", "yes", "", "Y "] {
            let record = sponsor("acme", "https://example.com/a.png", flag);
            assert!(
                !is_publishable(&record, sponsor_columns::CAN_PUBLISH, SPONSOR_REQUIRED),
                "flag {:?} must not publish",
                flag
            );
        }
    }

    #[test]
    fn test_required_column_empty_blocks_export() {
        let no_image = sponsor("acme", "", "Y");
        assert!(!is_publishable(
            &no_image,
            sponsor_columns::CAN_PUBLISH,
            SPONSOR_REQUIRED
        ));

        let no_id = sponsor("", "https://example.com/a.png", "Y");
        assert!(!is_publishable(
            &no_id,
            sponsor_columns::CAN_PUBLISH,
            SPONSOR_REQUIRED
        ));
    }

    #[test]
    fn test_news_requires_both_orientations() {
        let record = Record::new()
            .with(news_columns::SPONSOR_ID, "acme")
            .with(news_columns::NEWS_ID, "launch")
            .with(news_columns::IMAGE_HORIZONTAL, "https://example.com/h.png")
            .with(news_columns::CAN_PUBLISH, "Y");
        // Vertical image missing.
        assert!(!is_publishable(
            &record,
            news_columns::CAN_PUBLISH,
            NEWS_REQUIRED
        ));

        let complete = record.with(news_columns::IMAGE_VERTICAL, "https://example.com/v.png");
        assert!(is_publishable(
            &complete,
            news_columns::CAN_PUBLISH,
            NEWS_REQUIRED
        ));
    }
}
