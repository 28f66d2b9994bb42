use std::{fmt::Display, str::FromStr};

use crate::model::Chapter;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LanguageFilter {
    #[default]
    All,
    Only(String),
}

impl LanguageFilter {
    /// Codes compare exactly; normalizing case is up to whoever builds the filter.
    pub fn matches(&self, language: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(only) => only == language,
        }
    }

    /// The language codes to ask the feed endpoint for.
    pub fn codes(&self) -> Vec<String> {
        match self {
            Self::All => Vec::new(),
            Self::Only(only) => vec![only.clone()],
        }
    }
}

impl FromStr for LanguageFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            Ok(Self::Only(s.to_owned()))
        }
    }
}

impl Display for LanguageFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(only) => f.write_str(only),
        }
    }
}

/// Per-chapter filters, applied before grouping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChapterFilter {
    pub language: LanguageFilter,

    /// Case-insensitive substring of the chapter number, title or volume.
    pub search: Option<String>,

    /// A scanlation group id, or its name (case-insensitive).
    pub group: Option<String>,
}

impl ChapterFilter {
    pub fn language(language: LanguageFilter) -> Self {
        Self {
            language,
            ..Default::default()
        }
    }

    pub fn matches(&self, chapter: &Chapter) -> bool {
        self.language.matches(chapter.language())
            && self.matches_search(chapter)
            && self.matches_group(chapter)
    }

    fn matches_search(&self, chapter: &Chapter) -> bool {
        let Some(needle) = non_blank(self.search.as_deref()) else {
            return true;
        };
        let needle = needle.to_lowercase();

        [chapter.number(), chapter.title(), chapter.volume()]
            .into_iter()
            .flatten()
            .any(|haystack| haystack.to_lowercase().contains(&needle))
    }

    fn matches_group(&self, chapter: &Chapter) -> bool {
        let Some(group) = non_blank(self.group.as_deref()) else {
            return true;
        };

        chapter.scanlation_groups().any(|relationship| {
            relationship.id == group
                || relationship
                    .name()
                    .is_some_and(|name| name.trim().eq_ignore_ascii_case(group))
        })
    }
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}
