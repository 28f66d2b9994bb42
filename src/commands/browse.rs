use mangadex::query::{MangaOrder, MangaQuery};

use crate::{cli, display, framework::AppData};

const PER_PAGE: u32 = 20;

pub async fn browse(
    data: &AppData,
    query: Option<String>,
    order: MangaOrder,
    page: usize,
    lang: Option<String>,
) -> crate::Result<()> {
    let page = cli::clamp_page(page);
    let offset = u32::try_from(page - 1)
        .ok()
        .and_then(|page| page.checked_mul(PER_PAGE))
        .ok_or_else(|| crate::Error::input(format!("page {page} is out of range")))?;

    let query = MangaQuery {
        title: query,
        limit: PER_PAGE,
        offset,
        order,
        languages: lang.into_iter().collect(),
        ..Default::default()
    };

    let results = data.mangadex().manga_list(&query).await?;

    if results.data.is_empty() {
        println!("No manga found.");
        return Ok(());
    }

    let languages = data.config().reader.title_languages();

    for manga in &results.data {
        let title = manga
            .title(languages.clone())
            .unwrap_or(display::UNKNOWN_TITLE);

        let status = manga
            .attributes
            .status
            .map_or_else(|| display::NOT_AVAILABLE.to_owned(), |status| status.to_string());

        println!("{title}");
        println!(
            "  {id}  {status}, last chapter {last}",
            id = manga.id,
            last = manga
                .attributes
                .last_chapter
                .as_deref()
                .filter(|last| !last.is_empty())
                .unwrap_or(display::NOT_AVAILABLE),
        );
    }

    let total_pages = results.total.div_ceil(PER_PAGE).max(1);
    println!("\npage {page} of {total_pages} ({} manga)", results.total);

    Ok(())
}
