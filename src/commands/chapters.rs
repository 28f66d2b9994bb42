use std::fmt::Write;

use chrono::{DateTime, Utc};
use mangadex::{
    chapters::{ChapterFilter, ChapterListing, ChapterPage, SortOrder},
    query::FeedQuery,
};

use crate::{cli, display, framework::AppData};

#[derive(Debug, Clone)]
pub struct Options {
    pub lang: Option<String>,
    pub search: Option<String>,
    pub group: Option<String>,
    pub order: SortOrder,
    pub page: usize,
    pub page_size: Option<usize>,
}

#[tracing::instrument(skip(data, options), fields(page = options.page))]
pub async fn chapters(data: &AppData, id: &str, options: Options) -> crate::Result<()> {
    let reader = &data.config().reader;

    let language = options
        .lang
        .as_deref()
        .map_or_else(|| reader.language(), cli::language);

    let query = FeedQuery {
        languages: language.codes(),
        order: options.order,
        ..Default::default()
    };
    let feed = data.mangadex().all_chapters(id, &query).await?;

    let filter = ChapterFilter {
        language,
        search: options.search,
        group: options.group,
    };
    let listing = ChapterListing::build(&feed, &filter, options.order);

    let page = listing.page(
        cli::clamp_page(options.page),
        cli::clamp_page_size(options.page_size.unwrap_or_else(|| reader.page_size())),
    );

    let last_read = data.history().last_read(id).await?;
    let last_read = last_read.as_ref().map(|entry| entry.chapter_id.as_str());

    print!("{}", render(&page, last_read, Utc::now()));

    if listing.is_empty() {
        let languages: Vec<String> = ChapterListing::languages(&feed).into_iter().collect();
        if !languages.is_empty() {
            println!("available languages: {}", languages.join(", "));
        }
    }

    Ok(())
}

/// One line per chapter under a header per chapter number. The chapter read
/// last is marked with `*`.
fn render(page: &ChapterPage<'_>, last_read: Option<&str>, now: DateTime<Utc>) -> String {
    let mut out = String::new();

    if page.total_keys() == 0 {
        out.push_str("No chapters match.\n");
        return out;
    }

    if page.is_empty() {
        let _ = writeln!(
            out,
            "page {} is past the end, there are {} pages",
            page.number(),
            page.total_pages()
        );
        return out;
    }

    for (key, chapters) in page.groups() {
        let _ = writeln!(out, "Chapter {key}");

        for chapter in chapters {
            let marker = if Some(chapter.id.as_str()) == last_read {
                '*'
            } else {
                ' '
            };

            let _ = writeln!(
                out,
                " {marker} {label} [{language}] {groups}, {published}  {id}",
                label = display::chapter_label(chapter),
                language = chapter.language(),
                groups = display::group_names(chapter),
                published = display::relative_time(chapter.attributes.publish_at.as_deref(), now),
                id = chapter.id,
            );
        }
    }

    let _ = writeln!(
        out,
        "\npage {} of {} ({} chapter numbers)",
        page.number(),
        page.total_pages(),
        page.total_keys()
    );

    out
}

#[cfg(test)]
mod tests {
    use super::render;
    use chrono::{DateTime, Utc};
    use mangadex::chapters::{ChapterFeed, ChapterFilter, ChapterListing, SortOrder};
    use pretty_assertions::assert_eq;

    #[allow(clippy::unwrap_used)]
    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-03-10T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn feed() -> ChapterFeed {
        serde_json::from_value(serde_json::json!({"data": [
            {
                "id": "c1",
                "attributes": {
                    "chapter": "1",
                    "translatedLanguage": "en",
                    "publishAt": "2024-03-08T12:00:00+00:00"
                },
                "relationships": [
                    {"id": "g1", "type": "scanlation_group", "attributes": {"name": "Alpha"}}
                ]
            },
            {
                "id": "c2",
                "attributes": {
                    "chapter": "2",
                    "title": "Rain",
                    "translatedLanguage": "vi"
                }
            }
        ]}))
        .expect("fixture should deserialize")
    }

    #[test]
    fn renders_groups() {
        let listing = ChapterListing::build(&feed(), &ChapterFilter::default(), SortOrder::Desc);
        let rendered = render(&listing.page(1, 10), Some("c1"), now());

        assert_eq!(
            rendered,
            "Chapter 2\n   \
             Ch. 2 - Rain [vi] No group, N/A  c2\n\
             Chapter 1\n \
             * Ch. 1 [en] Alpha, 2 days ago  c1\n\
             \npage 1 of 1 (2 chapter numbers)\n"
        );
    }

    #[test]
    fn renders_nothing() {
        let listing = ChapterListing::default();
        assert_eq!(render(&listing.page(1, 10), None, now()), "No chapters match.\n");

        let listing = ChapterListing::build(&feed(), &ChapterFilter::default(), SortOrder::Asc);
        assert_eq!(
            render(&listing.page(3, 10), None, now()),
            "page 3 is past the end, there are 1 pages\n"
        );
    }
}
