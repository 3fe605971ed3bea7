//! Privacy policy models and DTOs.

use martech_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from `privacy_policies`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PrivacyPolicy {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub is_active: bool,
    pub version: Option<String>,
    pub published_at: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePrivacyPolicy {
    pub title: Option<String>,
    pub content: String,
    pub is_active: Option<bool>,
    pub version: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePrivacyPolicy {
    pub title: Option<String>,
    pub content: Option<String>,
    pub is_active: Option<bool>,
    pub version: Option<String>,
}
