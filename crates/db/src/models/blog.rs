//! Blog post models, list filter and DTOs.

use martech_core::listing::Ordering;
use martech_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::dynamic_field::DynamicField;
use crate::models::taxonomy::Taxonomy;

// ---------------------------------------------------------------------------
// Projections
// ---------------------------------------------------------------------------

/// List projection of a blog post.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BlogSummary {
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
    pub status: String,
    pub is_featured: bool,
    pub is_pinned: bool,
    pub views_count: i32,
    pub likes_count: i32,
    pub shares_count: i32,
    pub published_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Detail projection: the summary plus body, SEO and the lead form.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BlogDetail {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub summary: BlogSummary,
    pub author: Option<DbId>,
    pub content: Option<String>,
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
pub struct BlogListFilter {
    pub category: Option<String>,
    pub tag: Option<String>,
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
pub struct CreateBlog {
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
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<String>,
    pub status: Option<String>,
    pub is_featured: Option<bool>,
    pub is_pinned: Option<bool>,
}

/// Partial update. `tag_ids`, when present, replaces the tag set.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateBlog {
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
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<String>,
    pub status: Option<String>,
    pub is_featured: Option<bool>,
    pub is_pinned: Option<bool>,
}
