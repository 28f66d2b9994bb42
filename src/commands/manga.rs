use mangadex::cover::CoverSize;

use crate::{display, framework::AppData};

pub async fn manga(data: &AppData, id: &str) -> crate::Result<()> {
    let manga = data.mangadex().manga(id).await?;
    let languages = data.config().reader.title_languages();
    let attributes = &manga.attributes;

    let title = manga
        .title(languages.clone())
        .unwrap_or(display::UNKNOWN_TITLE);
    println!("{title}");

    let alt_titles: Vec<&str> = attributes
        .alt_titles
        .iter()
        .filter_map(|alt| alt.preferred(languages.clone()))
        .filter(|alt| *alt != title)
        .collect();
    if !alt_titles.is_empty() {
        println!("also known as: {}", alt_titles.join(" / "));
    }

    println!();
    println!("id:          {}", manga.id);
    println!("authors:     {}", joined(manga.authors()));
    println!("artists:     {}", joined(manga.artists()));
    println!(
        "status:      {}",
        attributes
            .status
            .map_or_else(|| display::NOT_AVAILABLE.to_owned(), |status| status.to_string())
    );
    println!(
        "year:        {}",
        attributes
            .year
            .map_or_else(|| display::NOT_AVAILABLE.to_owned(), |year| year.to_string())
    );
    println!(
        "rating:      {}",
        attributes
            .content_rating
            .map_or_else(|| display::NOT_AVAILABLE.to_owned(), |rating| rating.to_string())
    );
    println!(
        "tags:        {}",
        joined(
            attributes
                .tags
                .iter()
                .filter_map(|tag| tag.attributes.name.preferred(languages.clone()))
        )
    );
    println!(
        "languages:   {}",
        joined(attributes.available_languages())
    );
    println!(
        "updated:     {}",
        display::format_date(attributes.updated_at.as_deref())
    );

    if let Some(cover) = data.mangadex().cover_url(&manga, CoverSize::Medium) {
        println!("cover:       {cover}");
    }

    if let Some(last) = data.history().last_read(&manga.id).await? {
        println!(
            "last read:   chapter {} ({})",
            last.chapter.as_deref().unwrap_or(display::NOT_AVAILABLE),
            last.chapter_id
        );
    }

    println!();
    println!(
        "{}",
        display::localized(&attributes.description, languages)
    );

    Ok(())
}

fn joined<'a>(values: impl Iterator<Item = &'a str>) -> String {
    let values: Vec<&str> = values.collect();

    if values.is_empty() {
        display::NOT_AVAILABLE.to_owned()
    } else {
        values.join(", ")
    }
}
