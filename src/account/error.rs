use thisslime::TracingError;

#[derive(Debug, thiserror::Error, TracingError)]
#[span]
pub enum AccountError {
    #[error("error from reqwest: {0}")]
    #[event(level = ERROR)]
    Reqwest(#[from] reqwest::Error),

    #[error(transparent)]
    #[event(level = WARN)]
    Url(#[from] url::ParseError),

    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error(transparent)]
    NotLoggedIn(#[from] NotLoggedInError),

    #[error(transparent)]
    Session(#[from] SessionError),
}

impl AccountError {
    pub fn backend(status: reqwest::StatusCode, message: String) -> Self {
        Self::Backend(BackendError { status, message })
    }

    pub fn not_logged_in() -> Self {
        Self::NotLoggedIn(NotLoggedInError)
    }
}

/// A non-success response from the account backend.
#[derive(Clone, Debug, thiserror::Error, TracingError)]
#[error("account server returned {status}: {message}")]
#[event(level = WARN)]
pub struct BackendError {
    #[field(print = Display)]
    status: reqwest::StatusCode,

    #[field(print = Display)]
    message: String,
}

#[derive(Clone, Copy, Debug, thiserror::Error, TracingError)]
#[error("not logged in, run `mangashelf login` first")]
#[event(level = WARN)]
pub struct NotLoggedInError;

#[derive(Debug, thiserror::Error, TracingError)]
pub enum SessionError {
    #[error("couldn't access session file: {0}")]
    #[event(level = ERROR)]
    Io(#[from] std::io::Error),

    #[error("session file is corrupt: {0}")]
    #[event(level = WARN)]
    Json(#[from] serde_json::Error),
}
