//! Service offering models, list filter and DTOs.

use martech_core::listing::Ordering;
use martech_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::taxonomy::Taxonomy;

// ---------------------------------------------------------------------------
// Projections
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ServiceSummary {
    pub id: DbId,
    pub title: Option<String>,
    pub short_title: Option<String>,
    pub slug: Option<String>,
    #[serde(skip)]
    pub category_id: Option<DbId>,
    #[sqlx(skip)]
    pub category: Option<Taxonomy>,
    pub author_username: Option<String>,
    pub author_full_name: Option<String>,
    pub short_description: Option<String>,
    pub banner_image: Option<String>,
    pub mobile_image: Option<String>,
    pub icon: Option<String>,
    pub price_starting_from: Option<f64>,
    pub price_currency: Option<String>,
    pub price_period: Option<String>,
    pub is_free: bool,
    pub has_custom_pricing: bool,
    pub duration: Option<String>,
    pub delivery_time: Option<String>,
    pub service_type: Option<String>,
    pub status: String,
    pub is_featured: bool,
    pub is_pinned: bool,
    pub is_popular: bool,
    pub views_count: i32,
    pub inquiries_count: i32,
    pub likes_count: i32,
    pub published_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ServiceDetail {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub summary: ServiceSummary,
    pub author: Option<DbId>,
    pub description: Option<String>,
    pub features: Option<String>,
    pub benefits: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<String>,
}

// ---------------------------------------------------------------------------
// List filter
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct ServiceListFilter {
    pub category: Option<String>,
    pub is_featured: Option<bool>,
    pub is_popular: Option<bool>,
    pub is_free: Option<bool>,
    /// Pre-built `ILIKE` pattern on `service_type`.
    pub service_type: Option<String>,
    pub search: Option<String>,
    pub ordering: Ordering,
    pub page: i64,
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateService {
    pub title: Option<String>,
    pub short_title: Option<String>,
    pub slug: Option<String>,
    pub category_id: Option<DbId>,
    pub author_id: Option<DbId>,
    pub short_description: Option<String>,
    pub description: Option<String>,
    pub features: Option<String>,
    pub benefits: Option<String>,
    pub banner_image: Option<String>,
    pub mobile_image: Option<String>,
    pub icon: Option<String>,
    pub price_starting_from: Option<f64>,
    pub price_currency: Option<String>,
    pub price_period: Option<String>,
    pub is_free: Option<bool>,
    pub has_custom_pricing: Option<bool>,
    pub duration: Option<String>,
    pub delivery_time: Option<String>,
    pub service_type: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<String>,
    pub status: Option<String>,
    pub is_featured: Option<bool>,
    pub is_pinned: Option<bool>,
    pub is_popular: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateService {
    pub title: Option<String>,
    pub short_title: Option<String>,
    pub slug: Option<String>,
    pub category_id: Option<DbId>,
    pub author_id: Option<DbId>,
    pub short_description: Option<String>,
    pub description: Option<String>,
    pub features: Option<String>,
    pub benefits: Option<String>,
    pub banner_image: Option<String>,
    pub mobile_image: Option<String>,
    pub icon: Option<String>,
    pub price_starting_from: Option<f64>,
    pub price_currency: Option<String>,
    pub price_period: Option<String>,
    pub is_free: Option<bool>,
    pub has_custom_pricing: Option<bool>,
    pub duration: Option<String>,
    pub delivery_time: Option<String>,
    pub service_type: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<String>,
    pub status: Option<String>,
    pub is_featured: Option<bool>,
    pub is_pinned: Option<bool>,
    pub is_popular: Option<bool>,
}
