use crate::sheets::Record;

/// Column names of the sponsors worksheet.
pub mod sponsor_columns {
    pub const ID: &str = "id";
    pub const LEVEL: &str = "level";
    pub const NAME_EN: &str = "name:en";
    pub const NAME_ZH_TW: &str = "name:zh-TW";
    pub const INTRO_EN: &str = "intro:en";
    pub const INTRO_ZH_TW: &str = "intro:zh-TW";
    pub const LINK: &str = "link";
    pub const IMAGE: &str = "image";
    pub const CAN_PUBLISH: &str = "canPublish";
}

/// Column names of the sponsor-news worksheet.
pub mod news_columns {
    pub const SPONSOR_ID: &str = "sponsorId";
    pub const NEWS_ID: &str = "newsId";
    pub const DESCRIPTION: &str = "description";
    pub const LINK: &str = "link";
    pub const IMAGE_VERTICAL: &str = "image:vertical";
    pub const IMAGE_HORIZONTAL: &str = "image:horizontal";
    pub const SPECIAL_WEIGHT: &str = "specialWeight";
    pub const CAN_PUBLISH: &str = "canPublish";
}

/// Sponsorship tier. Carried through for downstream consumers of the
/// sheet; never used to filter exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SponsorLevel {
    Titanium,
    Diamond,
    CoOrganizer,
    Gold,
    Silver,
    Bronze,
    SpecialThanks,
    Friend,
}

impl SponsorLevel {
    /// Parses a tier label as it appears in the sheet.
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "titanium" => Some(Self::Titanium),
            "diamond" => Some(Self::Diamond),
            "co-organizer" => Some(Self::CoOrganizer),
            "gold" => Some(Self::Gold),
            "silver" => Some(Self::Silver),
            "bronze" => Some(Self::Bronze),
            "special-thanks" => Some(Self::SpecialThanks),
            "friend" => Some(Self::Friend),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Titanium => "titanium",
            Self::Diamond => "diamond",
            Self::CoOrganizer => "co-organizer",
            Self::Gold => "gold",
            Self::Silver => "silver",
            Self::Bronze => "bronze",
            Self::SpecialThanks => "special-thanks",
            Self::Friend => "friend",
        }
    }
}

/// One row of the sponsors worksheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SponsorRow {
    pub id: String,
    /// None when the level cell is empty or carries an unknown label.
    pub level: Option<SponsorLevel>,
    pub name_en: String,
    pub name_zh_tw: String,
    pub intro_en: String,
    pub intro_zh_tw: String,
    pub link: String,
    pub image: String,
    pub can_publish: bool,
}

impl SponsorRow {
    pub fn from_record(record: &Record) -> Self {
        use sponsor_columns as col;
        Self {
            id: record.get(col::ID).to_string(),
            level: SponsorLevel::parse(record.get(col::LEVEL)),
            name_en: record.get(col::NAME_EN).to_string(),
            name_zh_tw: record.get(col::NAME_ZH_TW).to_string(),
            intro_en: record.get(col::INTRO_EN).to_string(),
            intro_zh_tw: record.get(col::INTRO_ZH_TW).to_string(),
            link: record.get(col::LINK).to_string(),
            image: record.get(col::IMAGE).to_string(),
            can_publish: record.get(col::CAN_PUBLISH) == super::PUBLISH_FLAG,
        }
    }
}

/// One row of the sponsor-news worksheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SponsorNewsRow {
    pub sponsor_id: String,
    pub news_id: String,
    pub description: String,
    pub link: String,
    pub image_horizontal: String,
    pub image_vertical: String,
    pub special_weight: String,
    pub can_publish: bool,
}

impl SponsorNewsRow {
    pub fn from_record(record: &Record) -> Self {
        use news_columns as col;
        Self {
            sponsor_id: record.get(col::SPONSOR_ID).to_string(),
            news_id: record.get(col::NEWS_ID).to_string(),
            description: record.get(col::DESCRIPTION).to_string(),
            link: record.get(col::LINK).to_string(),
            image_horizontal: record.get(col::IMAGE_HORIZONTAL).to_string(),
            image_vertical: record.get(col::IMAGE_VERTICAL).to_string(),
            special_weight: record.get(col::SPECIAL_WEIGHT).to_string(),
            can_publish: record.get(col::CAN_PUBLISH) == super::PUBLISH_FLAG,
        }
    }
}
