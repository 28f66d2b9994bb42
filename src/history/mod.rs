//! The reading history: the last chapter read of each manga, newest first.

use chrono::{DateTime, Utc};

mod error;
pub use error::HistoryError;

pub mod data;
use data::HistoryData;

type Result<T, E = HistoryError> = std::result::Result<T, E>;

/// Entries past this are dropped, oldest first.
pub const HISTORY_LIMIT: usize = 20;

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub manga_id: String,
    pub manga_title: String,
    pub chapter_id: String,
    pub chapter: Option<String>,
    pub read_at: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(
        manga_id: impl Into<String>,
        manga_title: impl Into<String>,
        chapter_id: impl Into<String>,
        chapter: Option<String>,
    ) -> Self {
        Self {
            manga_id: manga_id.into(),
            manga_title: manga_title.into(),
            chapter_id: chapter_id.into(),
            chapter,
            read_at: Utc::now(),
        }
    }
}

#[derive(Debug)]
pub struct ReadingHistory<Data = data::Backend> {
    data: std::sync::Arc<tokio::sync::RwLock<Data>>,
}

impl<T> Clone for ReadingHistory<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
        }
    }
}

impl<Data> ReadingHistory<Data> {
    pub fn new(data: Data) -> Self {
        Self {
            data: std::sync::Arc::new(tokio::sync::RwLock::new(data)),
        }
    }

    async fn data(&self) -> tokio::sync::RwLockReadGuard<'_, Data> {
        self.data.read().await
    }

    async fn data_mut(&self) -> tokio::sync::RwLockWriteGuard<'_, Data> {
        self.data.write().await
    }
}

impl<Data> ReadingHistory<Data>
where
    Data: HistoryData,
{
    /// Puts `entry` at the front, replacing any earlier entry for the same manga.
    #[tracing::instrument(skip_all, fields(manga.id = %entry.manga_id, chapter.id = %entry.chapter_id))]
    pub async fn record(&self, entry: HistoryEntry) -> Result<()> {
        let mut data = self.data_mut().await;
        let mut entries = data.load().await.map_err(HistoryError::data)?;

        entries.retain(|existing| existing.manga_id != entry.manga_id);
        entries.insert(0, entry);

        if entries.len() > HISTORY_LIMIT {
            tracing::debug!(dropped = entries.len() - HISTORY_LIMIT, "trimming history");
            entries.truncate(HISTORY_LIMIT);
        }

        data.store(&entries).await.map_err(HistoryError::data)?;

        tracing::info!("recorded chapter in history");

        Ok(())
    }

    pub async fn entries(&self) -> Result<Vec<HistoryEntry>> {
        let data = self.data().await;
        data.load().await.map_err(HistoryError::data)
    }

    pub async fn last_read(&self, manga_id: &str) -> Result<Option<HistoryEntry>> {
        Ok(self
            .entries()
            .await?
            .into_iter()
            .find(|entry| entry.manga_id == manga_id))
    }

    /// Returns whether the manga had an entry.
    #[tracing::instrument(skip(self))]
    pub async fn remove(&self, manga_id: &str) -> Result<bool> {
        let mut data = self.data_mut().await;
        let mut entries = data.load().await.map_err(HistoryError::data)?;

        let before = entries.len();
        entries.retain(|entry| entry.manga_id != manga_id);

        if entries.len() == before {
            tracing::warn!("manga not in history");
            return Ok(false);
        }

        data.store(&entries).await.map_err(HistoryError::data)?;
        Ok(true)
    }

    /// Returns how many entries were cleared.
    pub async fn clear(&self) -> Result<usize> {
        let mut data = self.data_mut().await;
        let cleared = data.load().await.map_err(HistoryError::data)?.len();

        data.store(&[]).await.map_err(HistoryError::data)?;

        tracing::info!(cleared, "cleared history");

        Ok(cleared)
    }
}

#[cfg(test)]
mod tests {
    type Result<T = (), E = super::HistoryError> = std::result::Result<T, E>;

    mod consts {
        pub const MANGA_FOO: &str = "a1c7c817-4e59-43b7-9365-09675a149a6f";
        pub const MANGA_BAR: &str = "32d76d19-8a05-4db0-9fc2-e0b0648fe9d0";
    }

    fn entry(manga_id: &str, chapter: u32) -> super::HistoryEntry {
        super::HistoryEntry::new(
            manga_id,
            format!("title of {manga_id}"),
            format!("{manga_id}-ch{chapter}"),
            Some(chapter.to_string()),
        )
    }

    macro_rules! test_backends {
        {$($backend:ty as $mod_name:ident $block:block)+} => {
            $(
            paste::paste! {
                mod [<$mod_name _ backend>] {
                    use super::consts::*;
                    use super::{entry, Result};
                    use crate::history::HISTORY_LIMIT;
                    use pretty_assertions::assert_eq;
                    type ReadingHistory = crate::history::ReadingHistory<$backend>;

                    #[tracing_test::traced_test]
                    #[tokio::test]
                    async fn record() -> Result {
                        let (history, _dir): (ReadingHistory, _) = $block;

                        history.record(entry(MANGA_FOO, 1)).await?;
                        history.record(entry(MANGA_BAR, 4)).await?;

                        let entries = history.entries().await?;
                        assert_eq!(entries.len(), 2);
                        assert_eq!(entries[0].manga_id, MANGA_BAR);
                        assert_eq!(entries[1].manga_id, MANGA_FOO);

                        Ok(())
                    }

                    #[tracing_test::traced_test]
                    #[tokio::test]
                    async fn rereading_moves_to_front() -> Result {
                        let (history, _dir): (ReadingHistory, _) = $block;

                        history.record(entry(MANGA_FOO, 1)).await?;
                        history.record(entry(MANGA_BAR, 4)).await?;
                        history.record(entry(MANGA_FOO, 2)).await?;

                        let entries = history.entries().await?;
                        assert_eq!(entries.len(), 2);
                        assert_eq!(entries[0].manga_id, MANGA_FOO);
                        assert_eq!(entries[0].chapter.as_deref(), Some("2"));

                        let last = history
                            .last_read(MANGA_FOO)
                            .await?
                            .expect("manga was recorded");
                        assert_eq!(last.chapter_id, format!("{MANGA_FOO}-ch2"));

                        Ok(())
                    }

                    #[tracing_test::traced_test]
                    #[tokio::test]
                    async fn capped() -> Result {
                        let (history, _dir): (ReadingHistory, _) = $block;

                        for n in 0..(HISTORY_LIMIT + 5) {
                            history.record(entry(&format!("manga-{n}"), 1)).await?;
                        }

                        let entries = history.entries().await?;
                        assert_eq!(entries.len(), HISTORY_LIMIT);
                        assert_eq!(entries[0].manga_id, format!("manga-{}", HISTORY_LIMIT + 4));
                        assert!(history.last_read("manga-0").await?.is_none());
                        assert!(history.last_read("manga-5").await?.is_some());

                        Ok(())
                    }

                    #[tracing_test::traced_test]
                    #[tokio::test]
                    async fn remove() -> Result {
                        let (history, _dir): (ReadingHistory, _) = $block;

                        history.record(entry(MANGA_FOO, 1)).await?;

                        assert!(history.remove(MANGA_FOO).await?);
                        assert!(!history.remove(MANGA_FOO).await?);
                        assert!(logs_contain("manga not in history"));
                        assert!(history.entries().await?.is_empty());

                        Ok(())
                    }

                    #[tracing_test::traced_test]
                    #[tokio::test]
                    async fn clear() -> Result {
                        let (history, _dir): (ReadingHistory, _) = $block;

                        history.record(entry(MANGA_FOO, 1)).await?;
                        history.record(entry(MANGA_BAR, 1)).await?;

                        assert_eq!(history.clear().await?, 2);
                        assert!(history.entries().await?.is_empty());
                        assert_eq!(history.clear().await?, 0);

                        Ok(())
                    }
                }
            }
            )+
        };
    }

    test_backends! {
        crate::history::data::Memory as memory {
            (ReadingHistory::new(crate::history::data::Memory::new()), ())
        }

        crate::history::data::JsonFile as json_file {
            let dir = tempfile::tempdir().expect("creating temp dir should not fail");
            let file = crate::history::data::JsonFile::new(dir.path().join("history.json"));
            (ReadingHistory::new(file), dir)
        }
    }
}
