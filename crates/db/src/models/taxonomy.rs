//! Taxonomy models: the shared name/slug shape plus job locations.

use martech_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity structs
// ---------------------------------------------------------------------------

/// A row from any of the name/slug taxonomy tables.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Taxonomy {
    pub id: DbId,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `job_locations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct JobLocation {
    pub id: DbId,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub is_remote: bool,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTaxonomy {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

/// Partial update. The slug is only changed when supplied explicitly.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTaxonomy {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateJobLocation {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub is_remote: Option<bool>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateJobLocation {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub is_remote: Option<bool>,
    pub is_active: Option<bool>,
}
