use std::path::PathBuf;

use super::{FileError, HistoryData, HistoryEntry};

#[derive(Debug, Clone)]
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl HistoryData for JsonFile {
    type Error = FileError;

    /// A missing file is an empty history. So is a corrupt one: it gets
    /// overwritten on the next write.
    #[tracing::instrument(skip_all, fields(path = %self.path.display()))]
    async fn load(&self) -> Result<Vec<HistoryEntry>, Self::Error> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        match serde_json::from_slice(&bytes) {
            Ok(entries) => Ok(entries),
            Err(err) => {
                tracing::warn!(%err, "history file is corrupt, starting over");
                Ok(Vec::new())
            }
        }
    }

    #[tracing::instrument(skip_all, fields(path = %self.path.display(), entries = entries.len()))]
    async fn store(&mut self, entries: &[HistoryEntry]) -> Result<(), Self::Error> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_vec_pretty(entries)?;
        tokio::fs::write(&self.path, json).await?;

        tracing::debug!("saved history");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{HistoryData, JsonFile};
    use pretty_assertions::assert_eq;

    #[tracing_test::traced_test]
    #[tokio::test]
    async fn corrupt_file_is_empty() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("history.json");
        tokio::fs::write(&path, b"{not json").await?;

        let file = JsonFile::new(&path);
        assert_eq!(file.load().await?, Vec::new());
        assert!(logs_contain("history file is corrupt"));

        Ok(())
    }

    #[tokio::test]
    async fn creates_directories() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("nested").join("history.json");

        let mut file = JsonFile::new(&path);
        file.store(&[]).await?;

        assert!(path.exists());

        Ok(())
    }
}
