//! Client for the account backend: registration and email verification,
//! login, the user's profile, followed manga and translator applications.

use serde::de::DeserializeOwned;
use url::Url;

mod error;
pub use error::AccountError;

mod model;
use model::{Credentials, EmailOnly, Envelope, Verification};
pub use model::{
    FollowedManga, LoginResponse, Message, Profile, Registration, TranslatorApplication,
};

mod session;
pub use session::{Session, SessionStore};

type Result<T, E = AccountError> = std::result::Result<T, E>;

#[derive(Debug, Clone)]
pub struct Account {
    client: reqwest::Client,
    base: Url,
    session: SessionStore,
}

impl Account {
    pub fn new(base: Url, session: SessionStore) -> Self {
        Self {
            client: reqwest::Client::new(),
            base,
            session,
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    async fn authorized(&self, request: reqwest::RequestBuilder) -> Result<reqwest::RequestBuilder> {
        let session = self
            .session
            .load()
            .await?
            .ok_or_else(AccountError::not_logged_in)?;

        Ok(request.bearer_auth(session.token()))
    }

    async fn send<T: DeserializeOwned>(request: reqwest::RequestBuilder) -> Result<T> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            let envelope: Envelope<T> = response.json().await?;
            return Ok(envelope.into_inner());
        }

        let body = response.text().await.unwrap_or_default();
        Err(AccountError::backend(status, backend_message(status, &body)))
    }

    #[tracing::instrument(skip_all, fields(username = %registration.username, email = %registration.email))]
    pub async fn register(&self, registration: &Registration) -> Result<Message> {
        let url = self.endpoint(&["auth", "register"])?;
        let message: Message = Self::send(self.client.post(url).json(registration)).await?;

        tracing::info!("registered, waiting for email verification");

        Ok(message)
    }

    #[tracing::instrument(skip(self, otp))]
    pub async fn verify_email(&self, email: &str, otp: &str) -> Result<Message> {
        let url = self.endpoint(&["auth", "verify-email"])?;
        let body = Verification {
            email,
            otp: otp.trim(),
        };

        Self::send(self.client.post(url).json(&body)).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn resend_otp(&self, email: &str) -> Result<Message> {
        let url = self.endpoint(&["auth", "resend-otp"])?;
        Self::send(self.client.post(url).json(&EmailOnly { email })).await
    }

    /// Logs in and stores the session for later commands.
    #[tracing::instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<Session> {
        let url = self.endpoint(&["auth", "login"])?;
        let response: LoginResponse =
            Self::send(self.client.post(url).json(&Credentials { email, password })).await?;

        let session = Session::new(response.token, response.user.map(|user| user.username));
        self.session.save(&session).await?;

        tracing::info!(username = ?session.username(), "logged in");

        Ok(session)
    }

    /// Returns whether a session was stored.
    pub async fn logout(&self) -> Result<bool> {
        Ok(self.session.clear().await?)
    }

    #[tracing::instrument(skip(self))]
    pub async fn profile(&self) -> Result<Profile> {
        let url = self.endpoint(&["users", "profile"])?;
        let request = self.authorized(self.client.get(url)).await?;

        Self::send(request).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn follows(&self) -> Result<Vec<FollowedManga>> {
        let url = self.endpoint(&["users", "follows"])?;
        let request = self.authorized(self.client.get(url)).await?;

        Self::send(request).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn follow(&self, manga_id: &str) -> Result<Message> {
        let url = self.endpoint(&["users", "follow", manga_id])?;
        let request = self.authorized(self.client.post(url)).await?;

        let message = Self::send(request).await?;
        tracing::info!(manga.id = manga_id, "followed manga");

        Ok(message)
    }

    #[tracing::instrument(skip(self))]
    pub async fn unfollow(&self, manga_id: &str) -> Result<Message> {
        let url = self.endpoint(&["users", "follow", manga_id])?;
        let request = self.authorized(self.client.delete(url)).await?;

        let message = Self::send(request).await?;
        tracing::info!(manga.id = manga_id, "unfollowed manga");

        Ok(message)
    }

    #[tracing::instrument(skip_all)]
    pub async fn apply_translator(&self, application: &TranslatorApplication) -> Result<Message> {
        let url = self.endpoint(&["users", "translator-application"])?;
        let request = self
            .authorized(self.client.post(url).json(application))
            .await?;

        Self::send(request).await
    }
}

/// The backend reports failures as `{"message": "..."}`; anything else falls
/// back to the raw body or the status text.
fn backend_message(status: reqwest::StatusCode, body: &str) -> String {
    serde_json::from_str::<Message>(body)
        .ok()
        .and_then(|message| message.message)
        .or_else(|| {
            let trimmed = body.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_owned())
        })
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_owned()
        })
}

#[cfg(test)]
mod tests {
    use super::{backend_message, Account, AccountError, SessionStore};
    use pretty_assertions::{assert_eq, assert_str_eq};
    use reqwest::StatusCode;
    use url::Url;

    fn account(dir: &std::path::Path) -> Account {
        Account::new(
            Url::parse("http://localhost:5000/api").expect("valid url"),
            SessionStore::new(dir.join("session.json")),
        )
    }

    #[test]
    fn endpoints() {
        let dir = std::env::temp_dir();
        let account = account(&dir);

        assert_str_eq!(
            account
                .endpoint(&["auth", "verify-email"])
                .expect("url should build")
                .as_str(),
            "http://localhost:5000/api/auth/verify-email"
        );
        assert_str_eq!(
            account
                .endpoint(&["users", "follow", "a1c7c817"])
                .expect("url should build")
                .as_str(),
            "http://localhost:5000/api/users/follow/a1c7c817"
        );
    }

    #[test]
    fn messages() {
        assert_eq!(
            backend_message(StatusCode::BAD_REQUEST, r#"{"message": "Invalid OTP"}"#),
            "Invalid OTP"
        );
        assert_eq!(
            backend_message(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>"),
            "<html>bad gateway</html>"
        );
        assert_eq!(
            backend_message(StatusCode::UNAUTHORIZED, ""),
            "Unauthorized"
        );
    }

    #[tracing_test::traced_test]
    #[tokio::test]
    async fn needs_login() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let account = account(dir.path());

        let err = account
            .profile()
            .await
            .expect_err("there is no stored session");

        assert!(matches!(err, AccountError::NotLoggedIn(_)));

        Ok(())
    }
}
