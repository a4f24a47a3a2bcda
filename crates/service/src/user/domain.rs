use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

pub type UserId = i32;

/// Domain user (business view)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub nickname: String,
    /// Opaque value issued by the auth layer; never serialized.
    #[serde(skip_serializing)]
    pub credential: String,
    pub created_at: DateTime<FixedOffset>,
}

/// Insert payload for the user store
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub email: String,
    pub nickname: String,
    pub credential: String,
}

impl NewUser {
    pub fn new(
        email: impl Into<String>,
        nickname: impl Into<String>,
        credential: impl Into<String>,
    ) -> Self {
        Self { email: email.into(), nickname: nickname.into(), credential: credential.into() }
    }
}

/// Registration input
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterUser {
    pub email: String,
    pub nickname: String,
    pub credential: String,
}

impl From<models::user::Model> for User {
    fn from(m: models::user::Model) -> Self {
        Self { id: m.id, email: m.email, nickname: m.nickname, credential: m.credential, created_at: m.created_at }
    }
}
