//! Dynamic-schema leads: an owner reference plus a free-form JSON object.

use martech_core::types::{DbId, Timestamp};
use serde::Serialize;
use serde_json::Value;
use sqlx::FromRow;

/// A row from `blog_leads` or `case_study_leads`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DynamicLead {
    pub id: DbId,
    pub owner_id: DbId,
    pub data: Value,
    pub is_contacted: bool,
    pub is_converted: bool,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
