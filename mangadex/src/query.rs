//! Query strings for the list endpoints. MangaDex uses PHP-style array
//! parameters (`includes[]=cover_art`, `order[followedCount]=desc`), so
//! queries are flattened into key/value pairs for [reqwest::RequestBuilder::query].

use crate::{chapters::SortOrder, model::ContentRating};

pub type Pairs = Vec<(String, String)>;

/// Relationships expanded on manga responses.
pub const MANGA_INCLUDES: [&str; 3] = ["cover_art", "author", "artist"];

/// Relationships expanded on chapter feed responses.
pub const FEED_INCLUDES: [&str; 1] = ["scanlation_group"];

/// The largest page the feed endpoint accepts.
pub const FEED_PAGE_LIMIT: u32 = 500;

/// The largest page the manga list endpoint accepts.
pub const MANGA_PAGE_LIMIT: u32 = 100;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MangaOrder {
    #[default]
    FollowedCount,
    LatestUploadedChapter,
    CreatedAt,
    Rating,
    Relevance,
}

impl MangaOrder {
    const fn key(self) -> &'static str {
        match self {
            Self::FollowedCount => "followedCount",
            Self::LatestUploadedChapter => "latestUploadedChapter",
            Self::CreatedAt => "createdAt",
            Self::Rating => "rating",
            Self::Relevance => "relevance",
        }
    }
}

impl std::str::FromStr for MangaOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "followedcount" | "popular" => Ok(Self::FollowedCount),
            "latestuploadedchapter" | "latest" => Ok(Self::LatestUploadedChapter),
            "createdat" | "new" => Ok(Self::CreatedAt),
            "rating" => Ok(Self::Rating),
            "relevance" => Ok(Self::Relevance),
            other => Err(format!("unknown manga order '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MangaQuery {
    pub title: Option<String>,
    pub limit: u32,
    pub offset: u32,
    pub order: MangaOrder,
    pub content_rating: Vec<ContentRating>,
    pub languages: Vec<String>,
}

impl Default for MangaQuery {
    fn default() -> Self {
        Self {
            title: None,
            limit: 20,
            offset: 0,
            order: MangaOrder::default(),
            content_rating: vec![ContentRating::Safe, ContentRating::Suggestive],
            languages: Vec::new(),
        }
    }
}

impl MangaQuery {
    pub fn pairs(&self) -> Pairs {
        let mut pairs = includes(&MANGA_INCLUDES);

        pairs.push(("limit".to_owned(), self.limit.min(MANGA_PAGE_LIMIT).to_string()));
        pairs.push(("offset".to_owned(), self.offset.to_string()));

        if let Some(title) = self.title.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            pairs.push(("title".to_owned(), title.to_owned()));
        }

        // relevance only means something alongside a title search
        let order = match self.order {
            MangaOrder::Relevance if self.title.is_none() => MangaOrder::FollowedCount,
            order => order,
        };
        pairs.push((format!("order[{}]", order.key()), "desc".to_owned()));

        pairs.extend(
            self.content_rating
                .iter()
                .map(|rating| ("contentRating[]".to_owned(), rating.as_str().to_owned())),
        );

        pairs.extend(
            self.languages
                .iter()
                .map(|language| ("availableTranslatedLanguage[]".to_owned(), language.clone())),
        );

        pairs
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedQuery {
    /// Empty means every language.
    pub languages: Vec<String>,
    pub limit: u32,
    pub offset: u32,
    pub order: SortOrder,
}

impl Default for FeedQuery {
    fn default() -> Self {
        Self {
            languages: Vec::new(),
            limit: FEED_PAGE_LIMIT,
            offset: 0,
            order: SortOrder::Desc,
        }
    }
}

impl FeedQuery {
    pub fn pairs(&self) -> Pairs {
        let mut pairs = includes(&FEED_INCLUDES);

        pairs.push(("limit".to_owned(), self.limit.min(FEED_PAGE_LIMIT).to_string()));
        pairs.push(("offset".to_owned(), self.offset.to_string()));
        pairs.push(("order[volume]".to_owned(), self.order.to_string()));
        pairs.push(("order[chapter]".to_owned(), self.order.to_string()));

        pairs.extend(
            self.languages
                .iter()
                .map(|language| ("translatedLanguage[]".to_owned(), language.clone())),
        );

        pairs
    }
}

fn includes(relationships: &[&str]) -> Pairs {
    relationships
        .iter()
        .map(|relationship| ("includes[]".to_owned(), (*relationship).to_owned()))
        .collect()
}
