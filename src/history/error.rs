use thisslime::TracingError;

#[derive(Debug, thiserror::Error, TracingError)]
#[span]
pub enum HistoryError {
    #[error("history storage failed: {0}")]
    #[event(level = ERROR)]
    Data(Box<dyn std::error::Error + Send + Sync>),
}

impl HistoryError {
    pub fn data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Data(Box::new(err))
    }
}

/// Errors from the JSON file backend.
#[derive(Debug, thiserror::Error, TracingError)]
pub enum FileError {
    #[error("couldn't access history file: {0}")]
    #[event(level = ERROR)]
    Io(#[from] std::io::Error),

    #[error("couldn't serialize history: {0}")]
    #[event(level = ERROR)]
    Json(#[from] serde_json::Error),
}
