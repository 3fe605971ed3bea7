//! Job application models and DTOs.

use chrono::NaiveDate;
use martech_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `job_applications` table, including staff-only fields.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct JobApplication {
    pub id: DbId,
    pub job_posting_id: Option<DbId>,
    pub status: String,
    pub source: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub zip_code: Option<String>,
    pub current_company: Option<String>,
    pub current_position: Option<String>,
    pub years_of_experience: Option<i32>,
    pub current_salary: Option<f64>,
    pub expected_salary: Option<f64>,
    pub notice_period: Option<String>,
    pub resume: Option<String>,
    pub cover_letter: Option<String>,
    pub portfolio_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,
    pub cover_letter_text: Option<String>,
    pub why_interested: Option<String>,
    pub availability_date: Option<NaiveDate>,
    pub reviewed_by: Option<DbId>,
    pub reviewed_at: Option<Timestamp>,
    pub notes: Option<String>,
    pub rating: Option<i32>,
    pub interview_date: Option<Timestamp>,
    pub interview_location: Option<String>,
    pub interview_notes: Option<String>,
    pub offer_amount: Option<f64>,
    pub offer_date: Option<Timestamp>,
    pub offer_deadline: Option<Timestamp>,
    pub utm_source: Option<String>,
    pub utm_medium: Option<String>,
    pub utm_campaign: Option<String>,
    pub utm_refcode: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Public submission payload. Only these keys are read from the caller;
/// status, rating and review fields are staff-only.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct CreateJobApplication {
    pub job_posting: Option<DbId>,
    pub source: Option<String>,
    #[validate(length(max = 100))]
    pub first_name: Option<String>,
    #[validate(length(max = 100))]
    pub last_name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(max = 20))]
    pub phone: Option<String>,
    pub address: Option<String>,
    #[validate(length(max = 100))]
    pub city: Option<String>,
    #[validate(length(max = 100))]
    pub state: Option<String>,
    #[validate(length(max = 100))]
    pub country: Option<String>,
    #[validate(length(max = 20))]
    pub zip_code: Option<String>,
    #[validate(length(max = 200))]
    pub current_company: Option<String>,
    #[validate(length(max = 200))]
    pub current_position: Option<String>,
    #[validate(range(min = 0))]
    pub years_of_experience: Option<i32>,
    #[validate(range(min = 0.0, max = 99999999.99))]
    pub current_salary: Option<f64>,
    #[validate(range(min = 0.0, max = 99999999.99))]
    pub expected_salary: Option<f64>,
    #[validate(length(max = 50))]
    pub notice_period: Option<String>,
    #[validate(length(max = 500))]
    pub resume: Option<String>,
    #[validate(length(max = 500))]
    pub cover_letter: Option<String>,
    #[validate(url)]
    pub portfolio_url: Option<String>,
    #[validate(url)]
    pub linkedin_url: Option<String>,
    #[validate(url)]
    pub github_url: Option<String>,
    pub cover_letter_text: Option<String>,
    pub why_interested: Option<String>,
    pub availability_date: Option<NaiveDate>,
    #[validate(length(max = 100))]
    pub utm_source: Option<String>,
    #[validate(length(max = 100))]
    pub utm_medium: Option<String>,
    #[validate(length(max = 100))]
    pub utm_campaign: Option<String>,
    #[validate(length(max = 100))]
    pub utm_refcode: Option<String>,
}

/// Staff review update. Setting `reviewed_by` also stamps `reviewed_at`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ReviewJobApplication {
    pub status: Option<String>,
    #[validate(range(min = 0, max = 10))]
    pub rating: Option<i32>,
    pub notes: Option<String>,
    pub reviewed_by: Option<DbId>,
    pub interview_date: Option<Timestamp>,
    #[validate(length(max = 200))]
    pub interview_location: Option<String>,
    pub interview_notes: Option<String>,
    #[validate(range(min = 0.0, max = 99999999.99))]
    pub offer_amount: Option<f64>,
    pub offer_date: Option<Timestamp>,
    pub offer_deadline: Option<Timestamp>,
}
