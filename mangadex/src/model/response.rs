/// A paged list response, e.g. `GET /manga` or `GET /manga/{id}/feed`.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq)]
pub struct Collection<T> {
    pub data: Vec<T>,

    #[serde(default)]
    pub limit: u32,

    #[serde(default)]
    pub offset: u32,

    #[serde(default)]
    pub total: u32,
}

impl<T> Collection<T> {
    /// Whether another page exists after this one.
    pub fn has_more(&self) -> bool {
        let next = u64::from(self.offset) + self.data.len() as u64;
        !self.data.is_empty() && next < u64::from(self.total)
    }
}

/// A single-entity response, e.g. `GET /manga/{id}`.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq)]
pub struct Entity<T> {
    pub data: T,
}

#[derive(serde::Deserialize, Debug, Clone, Default)]
pub struct ErrorResponse {
    #[serde(default)]
    pub errors: Vec<ErrorDetail>,
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct ErrorDetail {
    pub id: Option<String>,
    pub status: u16,
    pub title: String,
    pub detail: Option<String>,
}
