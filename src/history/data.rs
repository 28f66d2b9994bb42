use super::{error::FileError, HistoryEntry};

mod file;
pub use file::JsonFile;

mod memory;
pub use memory::Memory;

/// Somewhere to keep the reading history, most recent entry first.
pub trait HistoryData {
    type Error: std::error::Error + Send + Sync + 'static;

    async fn load(&self) -> Result<Vec<HistoryEntry>, Self::Error>;
    async fn store(&mut self, entries: &[HistoryEntry]) -> Result<(), Self::Error>;
}

/// The backend picked at startup: the history file, or nothing persisted
/// at all when history is turned off.
#[derive(Debug, Clone)]
pub enum Backend {
    File(JsonFile),
    Memory(Memory),
}

impl HistoryData for Backend {
    type Error = FileError;

    async fn load(&self) -> Result<Vec<HistoryEntry>, Self::Error> {
        match self {
            Self::File(file) => file.load().await,
            Self::Memory(memory) => match memory.load().await {
                Ok(entries) => Ok(entries),
                Err(never) => match never {},
            },
        }
    }

    async fn store(&mut self, entries: &[HistoryEntry]) -> Result<(), Self::Error> {
        match self {
            Self::File(file) => file.store(entries).await,
            Self::Memory(memory) => match memory.store(entries).await {
                Ok(()) => Ok(()),
                Err(never) => match never {},
            },
        }
    }
}
