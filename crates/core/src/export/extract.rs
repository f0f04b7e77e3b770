use crate::fetcher::ImageTask;
use crate::sheets::Record;

use super::eligibility::{is_publishable, NEWS_REQUIRED, SPONSOR_REQUIRED};
use super::types::{news_columns, sponsor_columns, SponsorNewsRow, SponsorRow};

/// Extracts logo download tasks from the sponsors worksheet.
///
/// One task per publishable row, row order preserved. Identifiers are
/// not deduplicated: when two rows share an id, the later row's image
/// overwrites the earlier one's output file.
pub fn sponsor_tasks(records: &[Record]) -> Vec<ImageTask> {
    records
        .iter()
        .filter(|r| is_publishable(r, sponsor_columns::CAN_PUBLISH, SPONSOR_REQUIRED))
        .map(SponsorRow::from_record)
        .map(|row| ImageTask::new(row.id, row.image))
        .collect()
}

/// Extracts image download tasks from the sponsor-news worksheet.
///
/// Each publishable row yields two tasks, horizontal before vertical,
/// named `{sponsorId}-{newsId}-{orientation}`.
pub fn sponsor_news_tasks(records: &[Record]) -> Vec<ImageTask> {
    records
        .iter()
        .filter(|r| is_publishable(r, news_columns::CAN_PUBLISH, NEWS_REQUIRED))
        .map(SponsorNewsRow::from_record)
        .flat_map(|row| {
            [
                ImageTask::new(
                    format!("{}-{}-horizontal", row.sponsor_id, row.news_id),
                    row.image_horizontal,
                ),
                ImageTask::new(
                    format!("{}-{}-vertical", row.sponsor_id, row.news_id),
                    row.image_vertical,
                ),
            ]
        })
        .collect()
}
