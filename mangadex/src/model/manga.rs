use std::fmt::Display;

use super::{LocalizedString, Relationship, RelationshipType};

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq)]
pub struct Manga {
    pub id: String,
    pub attributes: MangaAttributes,

    #[serde(default)]
    pub relationships: Vec<Relationship>,
}

impl Manga {
    pub fn title<'a, I>(&self, preferred: I) -> Option<&str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.attributes.title.preferred(preferred).or_else(|| {
            self.attributes
                .alt_titles
                .iter()
                .find_map(|title| title.preferred(None::<&str>))
        })
    }

    /// File name of the cover art, if the relationship was expanded.
    pub fn cover_file(&self) -> Option<&str> {
        self.related(RelationshipType::CoverArt)
            .find_map(Relationship::file_name)
    }

    pub fn authors(&self) -> impl Iterator<Item = &str> {
        self.related(RelationshipType::Author)
            .filter_map(Relationship::name)
    }

    pub fn artists(&self) -> impl Iterator<Item = &str> {
        self.related(RelationshipType::Artist)
            .filter_map(Relationship::name)
    }

    fn related(&self, kind: RelationshipType) -> impl Iterator<Item = &Relationship> {
        self.relationships
            .iter()
            .filter(move |relationship| relationship.is(kind))
    }
}

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MangaAttributes {
    pub title: LocalizedString,

    #[serde(default)]
    pub alt_titles: Vec<LocalizedString>,

    #[serde(default)]
    pub description: LocalizedString,

    pub original_language: Option<String>,
    pub last_volume: Option<String>,
    pub last_chapter: Option<String>,
    pub status: Option<MangaStatus>,
    pub year: Option<u16>,
    pub content_rating: Option<ContentRating>,

    #[serde(default)]
    pub tags: Vec<Tag>,

    #[serde(default)]
    pub available_translated_languages: Vec<Option<String>>,

    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl MangaAttributes {
    pub fn available_languages(&self) -> impl Iterator<Item = &str> {
        self.available_translated_languages.iter().flatten().map(String::as_str)
    }
}

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MangaStatus {
    Ongoing,
    Completed,
    Hiatus,
    Cancelled,
}

impl Display for MangaStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Ongoing => "ongoing",
            Self::Completed => "completed",
            Self::Hiatus => "hiatus",
            Self::Cancelled => "cancelled",
        })
    }
}

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ContentRating {
    Safe,
    Suggestive,
    Erotica,
    Pornographic,
}

impl ContentRating {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Safe => "safe",
            Self::Suggestive => "suggestive",
            Self::Erotica => "erotica",
            Self::Pornographic => "pornographic",
        }
    }
}

impl Display for ContentRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ContentRating {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "safe" => Ok(Self::Safe),
            "suggestive" => Ok(Self::Suggestive),
            "erotica" => Ok(Self::Erotica),
            "pornographic" => Ok(Self::Pornographic),
            other => Err(format!("unknown content rating '{other}'")),
        }
    }
}

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id: String,
    pub attributes: TagAttributes,
}

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TagAttributes {
    pub name: LocalizedString,

    #[serde(default)]
    pub group: String,
}
