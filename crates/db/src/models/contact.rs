//! Contact request models and DTOs.

use martech_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `contacts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Contact {
    pub id: DbId,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub requirements: Option<String>,
    pub is_contacted: bool,
    pub is_converted: bool,
    pub notes: Option<String>,
    pub utm_source: Option<String>,
    pub utm_medium: Option<String>,
    pub utm_campaign: Option<String>,
    pub utm_term: Option<String>,
    pub utm_content: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Public submission payload.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct CreateContact {
    #[validate(length(max = 200))]
    pub full_name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(max = 20))]
    pub phone: Option<String>,
    #[validate(length(max = 200))]
    pub company: Option<String>,
    pub requirements: Option<String>,
    #[validate(length(max = 100))]
    pub utm_source: Option<String>,
    #[validate(length(max = 100))]
    pub utm_medium: Option<String>,
    #[validate(length(max = 100))]
    pub utm_campaign: Option<String>,
    #[validate(length(max = 100))]
    pub utm_term: Option<String>,
    #[validate(length(max = 100))]
    pub utm_content: Option<String>,
}
