//! Case study models, list filter and DTOs.

use martech_core::listing::Ordering;
use martech_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::dynamic_field::DynamicField;
use crate::models::taxonomy::Taxonomy;

// ---------------------------------------------------------------------------
// Projections
// ---------------------------------------------------------------------------

/// List projection of a case study.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CaseStudySummary {
    pub id: DbId,
    pub title: Option<String>,
    pub short_title: Option<String>,
    pub slug: Option<String>,
    #[serde(skip)]
    pub category_id: Option<DbId>,
    #[sqlx(skip)]
    pub category: Option<Taxonomy>,
    #[sqlx(skip)]
    pub tags: Vec<Taxonomy>,
    pub author_username: Option<String>,
    pub author_full_name: Option<String>,
    pub short_description: Option<String>,
    pub banner_image: Option<String>,
    pub mobile_image: Option<String>,
    pub estimated_time: Option<i32>,
    pub client_name: Option<String>,
    pub client_industry: Option<String>,
    pub logo_image: Option<String>,
    pub status: String,
    pub is_featured: bool,
    pub is_pinned: bool,
    pub views_count: i32,
    pub likes_count: i32,
    pub shares_count: i32,
    pub downloads_count: i32,
    pub published_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Detail projection: the summary plus body, SEO and the lead form.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CaseStudyDetail {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub summary: CaseStudySummary,
    pub author: Option<DbId>,
    pub content: Option<String>,
    pub project_duration: Option<String>,
    pub project_budget: Option<String>,
    pub results_summary: Option<String>,
    pub lp_image: Option<String>,
    pub external_link: Option<String>,
    pub downloadable_file: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<String>,
    #[sqlx(skip)]
    pub engagement_score: i64,
    #[sqlx(skip)]
    pub dynamic_fields: Vec<DynamicField>,
}

// ---------------------------------------------------------------------------
// List filter
// ---------------------------------------------------------------------------

/// Parsed public list parameters.
#[derive(Debug, Clone)]
pub struct CaseStudyListFilter {
    pub category: Option<String>,
    pub tag: Option<String>,
    /// Pre-built `ILIKE` pattern on `client_industry`.
    pub industry: Option<String>,
    pub is_featured: Option<bool>,
    /// Pre-built `ILIKE` pattern.
    pub search: Option<String>,
    pub ordering: Ordering,
    pub page: i64,
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateCaseStudy {
    pub title: Option<String>,
    pub short_title: Option<String>,
    pub slug: Option<String>,
    pub author_id: Option<DbId>,
    pub category_id: Option<DbId>,
    #[serde(default)]
    pub tag_ids: Vec<DbId>,
    pub short_description: Option<String>,
    pub content: Option<String>,
    pub banner_image: Option<String>,
    pub mobile_image: Option<String>,
    pub estimated_time: Option<i32>,
    pub client_name: Option<String>,
    pub client_industry: Option<String>,
    pub project_duration: Option<String>,
    pub project_budget: Option<String>,
    pub results_summary: Option<String>,
    pub logo_image: Option<String>,
    pub lp_image: Option<String>,
    pub external_link: Option<String>,
    pub downloadable_file: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<String>,
    pub status: Option<String>,
    pub is_featured: Option<bool>,
    pub is_pinned: Option<bool>,
}

/// Partial update. `tag_ids`, when present, replaces the tag set.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCaseStudy {
    pub title: Option<String>,
    pub short_title: Option<String>,
    pub slug: Option<String>,
    pub author_id: Option<DbId>,
    pub category_id: Option<DbId>,
    pub tag_ids: Option<Vec<DbId>>,
    pub short_description: Option<String>,
    pub content: Option<String>,
    pub banner_image: Option<String>,
    pub mobile_image: Option<String>,
    pub estimated_time: Option<i32>,
    pub client_name: Option<String>,
    pub client_industry: Option<String>,
    pub project_duration: Option<String>,
    pub project_budget: Option<String>,
    pub results_summary: Option<String>,
    pub logo_image: Option<String>,
    pub lp_image: Option<String>,
    pub external_link: Option<String>,
    pub downloadable_file: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<String>,
    pub status: Option<String>,
    pub is_featured: Option<bool>,
    pub is_pinned: Option<bool>,
}
