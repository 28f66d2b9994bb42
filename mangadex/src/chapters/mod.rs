//! Turns a manga's flat chapter feed into the grouped, sorted and paginated
//! list a reader shows.
//!
//! Chapters are bucketed by their chapter-number string, so every scanlation
//! of "12" lands in the same group. Filters run per chapter before bucketing;
//! a chapter that is filtered out never creates a group. Keys sort as floats,
//! and keys that don't parse (including [`UNKNOWN_CHAPTER`]) always come last.

use std::{
    cmp::Ordering,
    collections::{BTreeMap, BTreeSet, HashMap},
    fmt::Display,
    str::FromStr,
};

use crate::model::Chapter;

mod feed;
pub use feed::ChapterFeed;

mod filter;
pub use filter::{ChapterFilter, LanguageFilter};

/// Group key for chapters without a chapter number.
pub const UNKNOWN_CHAPTER: &str = "unknown";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub const fn reverse(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

impl Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        })
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(format!("sort order must be 'asc' or 'desc', not '{other}'")),
        }
    }
}

pub type ChapterGroups = HashMap<String, Vec<Chapter>>;

#[derive(Debug, Clone, Default)]
pub struct ChapterListing {
    groups: ChapterGroups,
    keys: Vec<String>,
}

impl ChapterListing {
    #[tracing::instrument(skip_all, fields(%order, language = %filter.language))]
    pub fn build(feed: &ChapterFeed, filter: &ChapterFilter, order: SortOrder) -> Self {
        let mut groups = ChapterGroups::new();

        for chapter in feed.chapters().filter(|chapter| filter.matches(chapter)) {
            groups
                .entry(group_key(&chapter).to_owned())
                .or_default()
                .push(chapter);
        }

        let mut keys: Vec<String> = groups.keys().cloned().collect();
        keys.sort_by(|a, b| compare_keys(a, b, order));

        tracing::debug!(
            feed = feed.len(),
            groups = keys.len(),
            "grouped chapter feed"
        );

        Self { groups, keys }
    }

    /// All keys in display order.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn groups(&self) -> &ChapterGroups {
        &self.groups
    }

    pub fn group(&self, key: &str) -> Option<&[Chapter]> {
        self.groups.get(key).map(Vec::as_slice)
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn chapter_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// One page of keys. Pages are 1-based; page 0 reads as page 1, and
    /// pages past the end are empty. Callers are expected to clamp.
    pub fn page(&self, number: usize, size: usize) -> ChapterPage<'_> {
        let total_keys = self.keys.len();
        let total_pages = if size == 0 {
            0
        } else {
            total_keys.div_ceil(size)
        };

        let start = number
            .saturating_sub(1)
            .saturating_mul(size)
            .min(total_keys);
        let end = start.saturating_add(size).min(total_keys);

        ChapterPage {
            listing: self,
            keys: &self.keys[start..end],
            number,
            size,
            total_keys,
            total_pages,
        }
    }

    /// Distinct languages present in a feed, for building a language picker.
    pub fn languages(feed: &ChapterFeed) -> BTreeSet<String> {
        feed.chapters()
            .map(|chapter| chapter.language().to_owned())
            .collect()
    }

    /// Distinct scanlation groups present in a feed, by id. The name is
    /// `None` when the relationship wasn't expanded.
    pub fn scanlation_groups(feed: &ChapterFeed) -> BTreeMap<String, Option<String>> {
        let mut groups = BTreeMap::new();

        for chapter in feed.chapters() {
            for group in chapter.scanlation_groups() {
                let name = group.name().map(str::to_owned);
                let entry = groups.entry(group.id.clone()).or_insert(None);
                if entry.is_none() {
                    *entry = name;
                }
            }
        }

        groups
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ChapterPage<'a> {
    listing: &'a ChapterListing,
    keys: &'a [String],
    number: usize,
    size: usize,
    total_keys: usize,
    total_pages: usize,
}

impl<'a> ChapterPage<'a> {
    pub fn keys(&self) -> &'a [String] {
        self.keys
    }

    pub fn number(&self) -> usize {
        self.number
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn total_keys(&self) -> usize {
        self.total_keys
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// The page's groups in display order.
    pub fn groups(&self) -> impl Iterator<Item = (&'a str, &'a [Chapter])> + 'a {
        let listing = self.listing;

        self.keys.iter().map(move |key| {
            (
                key.as_str(),
                listing.group(key).unwrap_or_default(),
            )
        })
    }
}

fn group_key(chapter: &Chapter) -> &str {
    chapter.number().unwrap_or(UNKNOWN_CHAPTER)
}

fn compare_keys(a: &str, b: &str, order: SortOrder) -> Ordering {
    match (parse_number(a), parse_number(b)) {
        (Some(x), Some(y)) => {
            let ordering = x.total_cmp(&y).then_with(|| a.cmp(b));

            match order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// Reads the leading decimal number of a key, so `"10"`, `"10.5"` and
/// `"10a"` all sort numerically.
fn parse_number(key: &str) -> Option<f64> {
    let key = key.trim();

    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;

    for (index, c) in key.char_indices() {
        match c {
            '+' | '-' if index == 0 => {}
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end = index + c.len_utf8();
    }

    if !seen_digit {
        return None;
    }

    key[..end]
        .trim_end_matches('.')
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
}
