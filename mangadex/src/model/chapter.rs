use super::{Relationship, RelationshipType};

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq)]
pub struct Chapter {
    pub id: String,
    pub attributes: ChapterAttributes,

    #[serde(default)]
    pub relationships: Vec<Relationship>,
}

impl Chapter {
    /// The chapter number, or `None` when it is missing or blank.
    pub fn number(&self) -> Option<&str> {
        self.attributes
            .chapter
            .as_deref()
            .map(str::trim)
            .filter(|number| !number.is_empty())
    }

    pub fn volume(&self) -> Option<&str> {
        self.attributes
            .volume
            .as_deref()
            .map(str::trim)
            .filter(|volume| !volume.is_empty())
    }

    pub fn title(&self) -> Option<&str> {
        self.attributes
            .title
            .as_deref()
            .map(str::trim)
            .filter(|title| !title.is_empty())
    }

    pub fn language(&self) -> &str {
        &self.attributes.translated_language
    }

    pub fn scanlation_groups(&self) -> impl Iterator<Item = &Relationship> {
        self.relationships
            .iter()
            .filter(|relationship| relationship.is(RelationshipType::ScanlationGroup))
    }

    pub fn manga_id(&self) -> Option<&str> {
        self.relationships
            .iter()
            .find(|relationship| relationship.is(RelationshipType::Manga))
            .map(|relationship| relationship.id.as_str())
    }
}

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChapterAttributes {
    pub volume: Option<String>,
    pub chapter: Option<String>,
    pub title: Option<String>,
    pub translated_language: String,

    #[serde(default)]
    pub pages: u32,

    pub publish_at: Option<String>,
    pub readable_at: Option<String>,
    pub external_url: Option<String>,
}
