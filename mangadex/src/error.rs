use thisslime::TracingError;

use crate::model::ErrorResponse;

#[derive(Debug, thiserror::Error, TracingError)]
#[span]
pub enum MangaDexError {
    #[error("error from reqwest: {0}")]
    #[event(level = ERROR)]
    Reqwest(#[from] reqwest::Error),

    #[error(transparent)]
    #[event(level = WARN)]
    Url(#[from] url::ParseError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl MangaDexError {
    /// Rate limits, server errors and dropped connections are worth retrying.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Api(err) => err.is_transient(),
            Self::Reqwest(err) => err.is_timeout() || err.is_connect(),
            Self::Url(_) => false,
        }
    }

    pub(crate) fn backoff(self) -> backoff::Error<Self> {
        if self.is_transient() {
            backoff::Error::transient(self)
        } else {
            backoff::Error::permanent(self)
        }
    }
}

#[derive(Debug, thiserror::Error, TracingError)]
#[error("mangadex returned {status}: {message}")]
#[event(level = WARN)]
pub struct ApiError {
    #[field(print = Display)]
    status: reqwest::StatusCode,

    #[field(print = Display)]
    message: String,
}

impl ApiError {
    pub fn new(status: reqwest::StatusCode, message: String) -> Self {
        Self { status, message }
    }

    /// Builds an error from a non-success response body, preferring the
    /// `detail` of the first entry in a MangaDex error document.
    pub fn from_body(status: reqwest::StatusCode, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorResponse>(body)
            .ok()
            .and_then(|response| response.errors.into_iter().next())
            .map(|error| error.detail.unwrap_or(error.title))
            .or_else(|| {
                let trimmed = body.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_owned())
            })
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_owned()
            });

        Self::new(status, message)
    }

    pub fn status(&self) -> reqwest::StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_transient(&self) -> bool {
        self.status == reqwest::StatusCode::TOO_MANY_REQUESTS || self.status.is_server_error()
    }
}
