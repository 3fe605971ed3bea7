//! Job posting models, list filter and DTOs.

use martech_core::listing::Ordering;
use martech_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::taxonomy::{JobLocation, Taxonomy};

// ---------------------------------------------------------------------------
// Projections
// ---------------------------------------------------------------------------

/// List projection of a job posting.
///
/// Money columns are `NUMERIC(10,2)` in the database and read as `f64`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct JobPostingSummary {
    pub id: DbId,
    pub title: Option<String>,
    pub short_title: Option<String>,
    pub slug: Option<String>,
    #[serde(skip)]
    pub department_id: Option<DbId>,
    #[serde(skip)]
    pub category_id: Option<DbId>,
    #[serde(skip)]
    pub job_type_id: Option<DbId>,
    #[serde(skip)]
    pub location_id: Option<DbId>,
    #[sqlx(skip)]
    pub department: Option<Taxonomy>,
    #[sqlx(skip)]
    pub category: Option<Taxonomy>,
    #[sqlx(skip)]
    pub job_type: Option<Taxonomy>,
    #[sqlx(skip)]
    pub location: Option<JobLocation>,
    pub recruiter_username: Option<String>,
    pub recruiter_full_name: Option<String>,
    pub short_description: Option<String>,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    pub salary_currency: Option<String>,
    pub salary_period: Option<String>,
    pub experience_level: Option<String>,
    pub experience_years_min: Option<i32>,
    pub experience_years_max: Option<i32>,
    pub application_deadline: Option<Timestamp>,
    pub status: String,
    pub is_featured: bool,
    pub is_pinned: bool,
    pub is_urgent: bool,
    pub views_count: i32,
    pub applications_count: i32,
    pub published_at: Option<Timestamp>,
    pub closed_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct JobPostingDetail {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub summary: JobPostingSummary,
    pub recruiter: Option<DbId>,
    pub job_description: Option<String>,
    pub responsibilities: Option<String>,
    pub requirements: Option<String>,
    pub preferred_qualifications: Option<String>,
    pub skills_required: Option<String>,
    pub benefits: Option<String>,
    pub education_required: Option<String>,
    pub application_url: Option<String>,
    pub application_email: Option<String>,
    pub application_instructions: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<String>,
    pub shares_count: i32,
}

// ---------------------------------------------------------------------------
// List filter
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct JobPostingListFilter {
    pub department: Option<String>,
    pub category: Option<String>,
    pub job_type: Option<String>,
    pub location: Option<String>,
    pub is_remote: Option<bool>,
    pub experience_level: Option<String>,
    pub is_featured: Option<bool>,
    pub is_urgent: Option<bool>,
    pub search: Option<String>,
    pub ordering: Ordering,
    pub page: i64,
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateJobPosting {
    pub title: Option<String>,
    pub short_title: Option<String>,
    pub slug: Option<String>,
    pub department_id: Option<DbId>,
    pub category_id: Option<DbId>,
    pub job_type_id: Option<DbId>,
    pub location_id: Option<DbId>,
    pub recruiter_id: Option<DbId>,
    pub short_description: Option<String>,
    pub job_description: Option<String>,
    pub responsibilities: Option<String>,
    pub requirements: Option<String>,
    pub preferred_qualifications: Option<String>,
    pub skills_required: Option<String>,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    pub salary_currency: Option<String>,
    pub salary_period: Option<String>,
    pub benefits: Option<String>,
    pub experience_level: Option<String>,
    pub experience_years_min: Option<i32>,
    pub experience_years_max: Option<i32>,
    pub education_required: Option<String>,
    pub application_deadline: Option<Timestamp>,
    pub application_url: Option<String>,
    pub application_email: Option<String>,
    pub application_instructions: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<String>,
    pub status: Option<String>,
    pub is_featured: Option<bool>,
    pub is_pinned: Option<bool>,
    pub is_urgent: Option<bool>,
}

/// Partial update; absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateJobPosting {
    pub title: Option<String>,
    pub short_title: Option<String>,
    pub slug: Option<String>,
    pub department_id: Option<DbId>,
    pub category_id: Option<DbId>,
    pub job_type_id: Option<DbId>,
    pub location_id: Option<DbId>,
    pub recruiter_id: Option<DbId>,
    pub short_description: Option<String>,
    pub job_description: Option<String>,
    pub responsibilities: Option<String>,
    pub requirements: Option<String>,
    pub preferred_qualifications: Option<String>,
    pub skills_required: Option<String>,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    pub salary_currency: Option<String>,
    pub salary_period: Option<String>,
    pub benefits: Option<String>,
    pub experience_level: Option<String>,
    pub experience_years_min: Option<i32>,
    pub experience_years_max: Option<i32>,
    pub education_required: Option<String>,
    pub application_deadline: Option<Timestamp>,
    pub application_url: Option<String>,
    pub application_email: Option<String>,
    pub application_instructions: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<String>,
    pub status: Option<String>,
    pub is_featured: Option<bool>,
    pub is_pinned: Option<bool>,
    pub is_urgent: Option<bool>,
}
