//! Text shown to the reader. None of these fail: missing or unparsable
//! values get a placeholder instead.

use chrono::{DateTime, NaiveDate, Utc};
use mangadex::model::{Chapter, LocalizedString};

use crate::utils::FormatDuration;

pub const NOT_AVAILABLE: &str = "N/A";
pub const UNKNOWN_TITLE: &str = "Không rõ";

fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    DateTime::parse_from_rfc3339(raw)
        .map(|date| date.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|date| DateTime::from_naive_utc_and_offset(date, Utc))
        })
}

/// `dd/mm/yyyy`.
pub fn format_date(raw: Option<&str>) -> String {
    raw.and_then(parse_date)
        .map(|date| date.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_owned())
}

pub fn relative_time(raw: Option<&str>, now: DateTime<Utc>) -> String {
    raw.and_then(parse_date)
        .map(|date| (now - date).format_ago())
        .unwrap_or_else(|| NOT_AVAILABLE.to_owned())
}

pub fn localized<'a, I>(value: &LocalizedString, preferred: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    value
        .preferred(preferred)
        .unwrap_or(UNKNOWN_TITLE)
        .to_owned()
}

/// e.g. `Vol. 2 Ch. 10 - The Gate`.
pub fn chapter_label(chapter: &Chapter) -> String {
    let mut label = String::new();

    if let Some(volume) = chapter.volume() {
        label += &format!("Vol. {volume} ");
    }

    match chapter.number() {
        Some(number) => label += &format!("Ch. {number}"),
        None => label += "Oneshot",
    }

    if let Some(title) = chapter.title() {
        label += &format!(" - {title}");
    }

    label
}

pub fn group_names(chapter: &Chapter) -> String {
    let names: Vec<&str> = chapter
        .scanlation_groups()
        .map(|group| group.name().unwrap_or(group.id.as_str()))
        .collect();

    if names.is_empty() {
        "No group".to_owned()
    } else {
        names.join(", ")
    }
}
