use mangadex::MangaDex;

use crate::{
    account::{Account, SessionStore},
    history::{
        data::{Backend, JsonFile, Memory},
        ReadingHistory,
    },
};

use super::Config;

/// Everything a command needs: the effective config and the clients built
/// from it.
#[derive(Debug, Clone)]
pub struct AppData {
    config: Config,
    mangadex: MangaDex,
    account: Account,
    history: ReadingHistory<Backend>,
}

impl AppData {
    /// With `remember` off, history lives in memory for this run only.
    pub fn new(config: Config, remember: bool) -> Self {
        let mangadex = MangaDex::with_urls(
            config.api.mangadex_url.clone(),
            config.api.uploads_url.clone(),
        );

        let session = SessionStore::new(config.storage.session_file());
        let account = Account::new(config.api.backend_url.clone(), session);

        let history = if remember {
            Backend::File(JsonFile::new(config.storage.history_file()))
        } else {
            tracing::debug!("reading history disabled");
            Backend::Memory(Memory::new())
        };
        let history = ReadingHistory::new(history);

        tracing::debug!(data_dir = %config.storage.data_dir().display(), "app data ready");

        Self {
            config,
            mangadex,
            account,
            history,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn mangadex(&self) -> &MangaDex {
        &self.mangadex
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn history(&self) -> &ReadingHistory<Backend> {
        &self.history
    }
}
