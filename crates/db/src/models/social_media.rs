//! Social media link models and DTOs.

use martech_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from `social_media_links`. `display_name` is filled from the
/// platform value after loading.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SocialMediaLink {
    pub id: DbId,
    pub platform: String,
    #[sqlx(skip)]
    pub display_name: &'static str,
    pub url: Option<String>,
    pub icon: Option<String>,
    pub is_active: bool,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateSocialMediaLink {
    pub platform: String,
    pub url: Option<String>,
    pub icon: Option<String>,
    pub is_active: Option<bool>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSocialMediaLink {
    pub platform: Option<String>,
    pub url: Option<String>,
    pub icon: Option<String>,
    pub is_active: Option<bool>,
    pub description: Option<String>,
}
