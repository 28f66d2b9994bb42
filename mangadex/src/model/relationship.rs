#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    pub id: String,

    #[serde(rename = "type")]
    pub kind: RelationshipType,

    /// Only present when the relationship was expanded with `includes[]`.
    #[serde(default)]
    pub attributes: Option<RelatedAttributes>,
}

impl Relationship {
    pub fn is(&self, kind: RelationshipType) -> bool {
        self.kind == kind
    }

    pub fn name(&self) -> Option<&str> {
        self.attributes
            .as_ref()
            .and_then(|attributes| attributes.name.as_deref())
    }

    pub fn file_name(&self) -> Option<&str> {
        self.attributes
            .as_ref()
            .and_then(|attributes| attributes.file_name.as_deref())
    }
}

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipType {
    Manga,
    Chapter,
    CoverArt,
    Author,
    Artist,
    ScanlationGroup,
    Tag,
    User,
    Creator,
    #[serde(other)]
    Other,
}

/// The handful of expanded attributes the client cares about: names for
/// authors, artists and scanlation groups, and file names for cover art.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct RelatedAttributes {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default, rename = "fileName")]
    pub file_name: Option<String>,

    #[serde(default)]
    pub username: Option<String>,
}
