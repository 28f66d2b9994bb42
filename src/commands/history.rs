use chrono::Utc;

use crate::{display, framework::AppData, utils::FormatDuration};

pub async fn history(data: &AppData, remove: Option<String>, clear: bool) -> crate::Result<()> {
    let history = data.history();

    if clear {
        let cleared = history.clear().await?;
        println!("cleared {cleared} entries");
        return Ok(());
    }

    if let Some(manga_id) = remove {
        if history.remove(&manga_id).await? {
            println!("removed {manga_id}");
            return Ok(());
        }

        return Err(crate::Error::input(format!("{manga_id} isn't in the history")));
    }

    let entries = history.entries().await?;
    if entries.is_empty() {
        println!("Nothing read yet.");
        return Ok(());
    }

    let now = Utc::now();
    for entry in entries {
        println!(
            "{title}, chapter {chapter}, {ago}",
            title = entry.manga_title,
            chapter = entry.chapter.as_deref().unwrap_or(display::NOT_AVAILABLE),
            ago = (now - entry.read_at).format_ago(),
        );
        println!("  manga {}  chapter {}", entry.manga_id, entry.chapter_id);
    }

    Ok(())
}
