use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::user::domain::UserId;

pub type AdId = i32;

/// Stored ad
#[derive(Debug, Clone, PartialEq)]
pub struct Ad {
    pub id: AdId,
    pub user_id: UserId,
    pub title: String,
    pub content: String,
    pub img: Option<String>,
    pub active: bool,
    pub created_at: DateTime<FixedOffset>,
}

/// Ad as handed to `AdRepository::save`.
///
/// `id: None` inserts; `Some(id)` updates title, content, img and active of
/// that row. Owner and creation time are fixed at insert.
#[derive(Debug, Clone, PartialEq)]
pub struct AdDraft {
    pub id: Option<AdId>,
    pub user_id: UserId,
    pub title: String,
    pub content: String,
    pub img: Option<String>,
    pub active: bool,
}

impl AdDraft {
    /// New, active ad.
    pub fn new(
        user_id: UserId,
        title: impl Into<String>,
        content: impl Into<String>,
        img: Option<String>,
    ) -> Self {
        Self { id: None, user_id, title: title.into(), content: content.into(), img, active: true }
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub(crate) fn fields(&self) -> models::ad::AdFields {
        models::ad::AdFields {
            title: self.title.clone(),
            content: self.content.clone(),
            img: self.img.clone(),
            active: self.active,
        }
    }
}

impl From<Ad> for AdDraft {
    fn from(ad: Ad) -> Self {
        Self { id: Some(ad.id), user_id: ad.user_id, title: ad.title, content: ad.content, img: ad.img, active: ad.active }
    }
}

impl From<models::ad::Model> for Ad {
    fn from(m: models::ad::Model) -> Self {
        Self {
            id: m.id,
            user_id: m.user_id,
            title: m.title,
            content: m.content,
            img: m.img,
            active: m.active,
            created_at: m.created_at,
        }
    }
}

/// Create/update input. On create `active` is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdRequest {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub active: Option<bool>,
}

impl AdRequest {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self { title: title.into(), content: content.into(), active: None }
    }
}

/// Outward projection of an ad
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdResponse {
    pub id: AdId,
    pub user_id: UserId,
    pub title: String,
    pub content: String,
    pub img: Option<String>,
    pub active: bool,
    pub created_at: DateTime<FixedOffset>,
}

impl From<Ad> for AdResponse {
    fn from(ad: Ad) -> Self {
        Self {
            id: ad.id,
            user_id: ad.user_id,
            title: ad.title,
            content: ad.content,
            img: ad.img,
            active: ad.active,
            created_at: ad.created_at,
        }
    }
}
