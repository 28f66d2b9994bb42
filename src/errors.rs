use thisslime::TracingError;

use crate::{account::AccountError, framework::config, history::HistoryError};

/// Anything a command can fail with.
#[derive(Debug, thiserror::Error, TracingError)]
#[span]
pub enum Error {
    #[error(transparent)]
    MangaDex(#[from] mangadex::Error),

    #[error(transparent)]
    Account(#[from] AccountError),

    #[error(transparent)]
    History(#[from] HistoryError),

    #[error(transparent)]
    Config(#[from] config::Error),

    #[error("couldn't build page url: {0}")]
    #[event(level = ERROR)]
    Url(#[from] url::ParseError),

    #[error("couldn't render config: {0}")]
    #[event(level = ERROR)]
    Toml(#[from] toml::ser::Error),

    #[error("{0}")]
    #[event(level = WARN)]
    Input(String),
}

impl Error {
    pub fn input(message: impl Into<String>) -> Self {
        Self::Input(message.into())
    }
}
