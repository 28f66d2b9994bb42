use mangadex::Quality;

use crate::{display, framework::AppData, history::HistoryEntry};

#[tracing::instrument(skip(data))]
pub async fn read(data: &AppData, chapter_id: &str, data_saver: bool) -> crate::Result<()> {
    let chapter = data.mangadex().chapter(chapter_id).await?;
    println!("{}", display::chapter_label(&chapter));

    if let Some(external) = chapter.attributes.external_url.as_deref() {
        if chapter.attributes.pages == 0 {
            println!("hosted elsewhere: {external}");
            return Ok(());
        }
    }

    let quality = if data_saver || data.config().reader.data_saver {
        Quality::DataSaver
    } else {
        Quality::Data
    };

    let at_home = data.mangadex().at_home(chapter_id).await?;
    for url in at_home.page_urls(quality)? {
        println!("{url}");
    }

    match chapter.manga_id() {
        Some(manga_id) => {
            let manga = data.mangadex().manga(manga_id).await?;
            let title = manga
                .title(data.config().reader.title_languages())
                .unwrap_or(display::UNKNOWN_TITLE);

            let entry = HistoryEntry::new(
                manga_id,
                title,
                chapter_id,
                chapter.number().map(str::to_owned),
            );
            data.history().record(entry).await?;
        }
        None => tracing::warn!("chapter has no manga, not recording it in history"),
    }

    Ok(())
}
