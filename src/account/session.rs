use std::path::PathBuf;

use chrono::{DateTime, Utc};

use super::error::SessionError;

type Result<T, E = SessionError> = std::result::Result<T, E>;

/// A logged-in session, persisted between runs.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Session {
    token: String,
    username: Option<String>,
    saved_at: DateTime<Utc>,
}

impl Session {
    pub fn new(token: String, username: Option<String>) -> Self {
        Self {
            token,
            username,
            saved_at: Utc::now(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn saved_at(&self) -> DateTime<Utc> {
        self.saved_at
    }
}

#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `None` when nobody has logged in yet.
    pub async fn load(&self) -> Result<Option<Session>> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    #[tracing::instrument(skip_all, fields(path = %self.path.display()))]
    pub async fn save(&self, session: &Session) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_vec_pretty(session)?;
        tokio::fs::write(&self.path, json).await?;

        tracing::debug!("saved session");

        Ok(())
    }

    /// Returns whether there was a session to clear.
    pub async fn clear(&self) -> Result<bool> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Session, SessionStore};
    use pretty_assertions::assert_eq;

    type Result<T = ()> = std::result::Result<T, Box<dyn std::error::Error>>;

    #[tokio::test]
    async fn round_trip() -> Result {
        let dir = tempfile::tempdir()?;
        let store = SessionStore::new(dir.path().join("nested").join("session.json"));

        assert_eq!(store.load().await?, None);

        let session = Session::new("token-123".to_owned(), Some("reader".to_owned()));
        store.save(&session).await?;

        assert_eq!(store.load().await?, Some(session));

        Ok(())
    }

    #[tokio::test]
    async fn clear() -> Result {
        let dir = tempfile::tempdir()?;
        let store = SessionStore::new(dir.path().join("session.json"));

        assert!(!store.clear().await?);

        store
            .save(&Session::new("token-123".to_owned(), None))
            .await?;

        assert!(store.clear().await?);
        assert_eq!(store.load().await?, None);

        Ok(())
    }

    #[tokio::test]
    async fn corrupt_file() -> Result {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{not json")?;

        let store = SessionStore::new(path);

        assert!(store.load().await.is_err());

        Ok(())
    }
}
