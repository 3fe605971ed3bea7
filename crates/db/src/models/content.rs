//! Types shared by every content domain.

use martech_core::types::DbId;
use serde::Deserialize;

/// One page of results plus the total number of matching rows.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: i64,
}

/// Administrative bulk status change.
#[derive(Debug, Clone, Deserialize)]
pub struct BulkStatusUpdate {
    pub ids: Vec<DbId>,
    pub status: String,
}

/// Triage update for staff-only lead fields.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeadTriage {
    pub is_contacted: Option<bool>,
    pub is_converted: Option<bool>,
    pub notes: Option<String>,
}
