use std::convert::Infallible;

use super::{HistoryData, HistoryEntry};

#[derive(Debug, Clone, Default)]
pub struct Memory {
    entries: Vec<HistoryEntry>,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryData for Memory {
    type Error = Infallible;

    async fn load(&self) -> Result<Vec<HistoryEntry>, Self::Error> {
        Ok(self.entries.clone())
    }

    async fn store(&mut self, entries: &[HistoryEntry]) -> Result<(), Self::Error> {
        self.entries = entries.to_vec();
        Ok(())
    }
}
