//! Dynamic lead-form field models (blog and case study).

use martech_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from `blog_dynamic_fields` or `case_study_dynamic_fields`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DynamicField {
    pub id: DbId,
    #[serde(skip)]
    pub owner_id: DbId,
    pub field_name: String,
    pub placeholder: Option<String>,
    pub sequence: i32,
    pub is_active: bool,
    #[serde(skip)]
    pub created_at: Timestamp,
    #[serde(skip)]
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateDynamicField {
    pub owner_id: DbId,
    pub field_name: String,
    pub placeholder: Option<String>,
    pub sequence: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateDynamicField {
    pub field_name: Option<String>,
    pub placeholder: Option<String>,
    pub sequence: Option<i32>,
    pub is_active: Option<bool>,
}
