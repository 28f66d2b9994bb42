use serde::Deserialize;

use crate::model::Chapter;

/// Raw chapter objects as returned by the feed endpoint.
///
/// Elements are kept as JSON so one malformed chapter only drops itself.
/// Both a bare array and a `{"data": [...]}` wrapper deserialize.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(from = "Partial")]
pub struct ChapterFeed {
    items: Vec<serde_json::Value>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Partial {
    Wrapped { data: Vec<serde_json::Value> },
    Bare(Vec<serde_json::Value>),
}

impl From<Partial> for ChapterFeed {
    fn from(partial: Partial) -> Self {
        match partial {
            Partial::Wrapped { data } => Self::new(data),
            Partial::Bare(items) => Self::new(items),
        }
    }
}

impl ChapterFeed {
    pub fn new(items: Vec<serde_json::Value>) -> Self {
        Self { items }
    }

    /// Anything that isn't an array or a `data` wrapper is an empty feed.
    pub fn from_value(value: serde_json::Value) -> Self {
        Self::deserialize(value).unwrap_or_else(|err| {
            tracing::debug!(%err, "feed has no chapter array");
            Self::default()
        })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn extend(&mut self, items: impl IntoIterator<Item = serde_json::Value>) {
        self.items.extend(items);
    }

    /// Every element that reads as a chapter, in feed order.
    pub fn chapters(&self) -> impl Iterator<Item = Chapter> + '_ {
        self.items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| match Chapter::deserialize(item) {
                Ok(chapter) => Some(chapter),
                Err(err) => {
                    tracing::debug!(index, %err, "skipping malformed chapter");
                    None
                }
            })
    }
}

impl FromIterator<serde_json::Value> for ChapterFeed {
    fn from_iter<T: IntoIterator<Item = serde_json::Value>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
