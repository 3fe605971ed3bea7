//! Service inquiry models and DTOs.

use martech_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `service_leads` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ServiceLead {
    pub id: DbId,
    pub service_id: Option<DbId>,
    pub inquiry_type: String,
    pub lead_source: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub job_title: Option<String>,
    pub message: Option<String>,
    pub budget_range: Option<String>,
    pub timeline: Option<String>,
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
pub struct CreateServiceLead {
    pub service: Option<DbId>,
    pub inquiry_type: Option<String>,
    pub lead_source: Option<String>,
    #[validate(length(max = 200))]
    pub full_name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(max = 20))]
    pub phone: Option<String>,
    #[validate(length(max = 200))]
    pub company: Option<String>,
    #[validate(length(max = 100))]
    pub job_title: Option<String>,
    pub message: Option<String>,
    #[validate(length(max = 100))]
    pub budget_range: Option<String>,
    #[validate(length(max = 100))]
    pub timeline: Option<String>,
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
