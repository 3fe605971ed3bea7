//! Repository for `blog_leads` and `case_study_leads`.
//!
//! Public submissions only ever insert. Staff may update the triage
//! columns afterwards; `data` is never rewritten.

use martech_core::dynamic_form::FormOwner;
use martech_core::listing::{page_offset, PAGE_SIZE};
use martech_core::types::DbId;
use serde_json::Value;
use sqlx::PgPool;

use crate::models::content::{LeadTriage, Page};
use crate::models::dynamic_lead::DynamicLead;
use crate::repositories::dynamic_field_repo::owner_column;

fn leads_table(owner: FormOwner) -> &'static str {
    match owner {
        FormOwner::Blog => "blog_leads",
        FormOwner::CaseStudy => "case_study_leads",
    }
}

fn columns(owner: FormOwner) -> String {
    format!(
        "id, {} AS owner_id, data, is_contacted, is_converted, notes, created_at, updated_at",
        owner_column(owner)
    )
}

pub struct DynamicLeadRepo;

impl DynamicLeadRepo {
    /// Store a lead. `data` must already be a JSON object.
    pub async fn create(
        pool: &PgPool,
        owner: FormOwner,
        owner_id: DbId,
        data: &Value,
    ) -> Result<DynamicLead, sqlx::Error> {
        let query = format!(
            "INSERT INTO {table} ({fk}, data) VALUES ($1, $2) RETURNING {cols}",
            table = leads_table(owner),
            fk = owner_column(owner),
            cols = columns(owner),
        );
        sqlx::query_as::<_, DynamicLead>(&query)
            .bind(owner_id)
            .bind(data)
            .fetch_one(pool)
            .await
    }

    /// Newest first.
    pub async fn list(
        pool: &PgPool,
        owner: FormOwner,
        page: i64,
    ) -> Result<Page<DynamicLead>, sqlx::Error> {
        let table = leads_table(owner);
        let total: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(pool)
            .await?;

        let query = format!(
            "SELECT {cols} FROM {table} ORDER BY created_at DESC, id DESC LIMIT $1 OFFSET $2",
            cols = columns(owner),
        );
        let items = sqlx::query_as::<_, DynamicLead>(&query)
            .bind(PAGE_SIZE)
            .bind(page_offset(page))
            .fetch_all(pool)
            .await?;
        Ok(Page { items, total })
    }

    pub async fn update_triage(
        pool: &PgPool,
        owner: FormOwner,
        id: DbId,
        input: &LeadTriage,
    ) -> Result<Option<DynamicLead>, sqlx::Error> {
        let query = format!(
            "UPDATE {table} SET \
                 is_contacted = COALESCE($2, is_contacted), \
                 is_converted = COALESCE($3, is_converted), \
                 notes = COALESCE($4, notes) \
             WHERE id = $1 \
             RETURNING {cols}",
            table = leads_table(owner),
            cols = columns(owner),
        );
        sqlx::query_as::<_, DynamicLead>(&query)
            .bind(id)
            .bind(input.is_contacted)
            .bind(input.is_converted)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }
}
