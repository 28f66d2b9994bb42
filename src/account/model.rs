use serde::{Deserialize, Serialize};

/// Body of `POST /auth/register`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub(super) struct Verification<'a> {
    pub email: &'a str,
    pub otp: &'a str,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub(super) struct EmailOnly<'a> {
    pub email: &'a str,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub(super) struct Credentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Most endpoints answer with just a human-readable message.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    #[serde(default)]
    pub message: Option<String>,
}

impl Message {
    pub fn or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.message.as_deref().unwrap_or(fallback)
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct LoginResponse {
    #[serde(alias = "accessToken")]
    pub token: String,

    #[serde(default)]
    pub user: Option<Profile>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(alias = "_id")]
    pub id: String,
    pub username: String,
    pub email: String,

    #[serde(default)]
    pub role: Option<String>,

    #[serde(default)]
    pub is_verified: Option<bool>,

    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FollowedManga {
    #[serde(alias = "id")]
    pub manga_id: String,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub followed_at: Option<String>,
}

/// Body of `POST /users/translator-application`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TranslatorApplication {
    pub reason: String,
    pub languages: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub portfolio_url: Option<url::Url>,
}

/// The backend isn't consistent about wrapping: the same payload may come
/// back bare, under `user`, or under `data`. Bare is tried first.
#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
pub(super) enum Envelope<T> {
    Bare(T),
    User { user: T },
    Data { data: T },
}

impl<T> Envelope<T> {
    pub fn into_inner(self) -> T {
        match self {
            Self::Bare(inner) => inner,
            Self::User { user } => user,
            Self::Data { data } => data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Envelope, FollowedManga, LoginResponse, Profile, TranslatorApplication};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn profile() -> Profile {
        Profile {
            id: "u1".to_owned(),
            username: "reader".to_owned(),
            email: "reader@example.com".to_owned(),
            role: Some("user".to_owned()),
            is_verified: Some(true),
            created_at: None,
        }
    }

    #[test]
    fn profile_envelopes() {
        let bare = json!({"_id": "u1", "username": "reader", "email": "reader@example.com", "role": "user", "isVerified": true});
        let wrapped = json!({"user": bare.clone()});
        let data = json!({"data": bare.clone()});

        for value in [bare, wrapped, data] {
            let envelope: Envelope<Profile> =
                serde_json::from_value(value).expect("profile should deserialize");
            assert_eq!(envelope.into_inner(), profile());
        }
    }

    #[test]
    fn login_response() {
        let response: LoginResponse = serde_json::from_value(json!({
            "accessToken": "abc.def.ghi",
            "user": {"id": "u1", "username": "reader", "email": "reader@example.com"}
        }))
        .expect("login response should deserialize");

        assert_eq!(response.token, "abc.def.ghi");
        assert_eq!(response.user.map(|user| user.username), Some("reader".to_owned()));
    }

    #[test]
    fn followed_list() {
        let follows: Envelope<Vec<FollowedManga>> = serde_json::from_value(json!({
            "data": [{"mangaId": "m1", "title": "Berserk"}, {"id": "m2"}]
        }))
        .expect("follows should deserialize");

        let follows = follows.into_inner();
        assert_eq!(follows.len(), 2);
        assert_eq!(follows[1].manga_id, "m2");
        assert_eq!(follows[1].title, None);
    }

    #[test]
    fn translator_application_body() {
        let application = TranslatorApplication {
            reason: "I translate for fun".to_owned(),
            languages: vec!["vi".to_owned()],
            experience: None,
            portfolio_url: None,
        };

        assert_eq!(
            serde_json::to_value(&application).expect("should serialize"),
            json!({"reason": "I translate for fun", "languages": ["vi"]})
        );
    }
}
