//! Repository for `contacts`.

use martech_core::listing::{page_offset, PAGE_SIZE};
use martech_core::types::DbId;
use sqlx::PgPool;

use crate::models::contact::{Contact, CreateContact};
use crate::models::content::{LeadTriage, Page};

const COLUMNS: &str = "id, full_name, email, phone, company, requirements, is_contacted, \
    is_converted, notes, utm_source, utm_medium, utm_campaign, utm_term, utm_content, \
    created_at, updated_at";

pub struct ContactRepo;

impl ContactRepo {
    pub async fn create(pool: &PgPool, input: &CreateContact) -> Result<Contact, sqlx::Error> {
        let query = format!(
            "INSERT INTO contacts (full_name, email, phone, company, requirements, \
                 utm_source, utm_medium, utm_campaign, utm_term, utm_content) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(&input.full_name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.company)
            .bind(&input.requirements)
            .bind(&input.utm_source)
            .bind(&input.utm_medium)
            .bind(&input.utm_campaign)
            .bind(&input.utm_term)
            .bind(&input.utm_content)
            .fetch_one(pool)
            .await
    }

    pub async fn list(pool: &PgPool, page: i64) -> Result<Page<Contact>, sqlx::Error> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contacts")
            .fetch_one(pool)
            .await?;

        let query = format!(
            "SELECT {COLUMNS} FROM contacts ORDER BY created_at DESC, id DESC LIMIT $1 OFFSET $2"
        );
        let items = sqlx::query_as::<_, Contact>(&query)
            .bind(PAGE_SIZE)
            .bind(page_offset(page))
            .fetch_all(pool)
            .await?;
        Ok(Page { items, total })
    }

    pub async fn update_triage(
        pool: &PgPool,
        id: DbId,
        input: &LeadTriage,
    ) -> Result<Option<Contact>, sqlx::Error> {
        let query = format!(
            "UPDATE contacts SET \
                 is_contacted = COALESCE($2, is_contacted), \
                 is_converted = COALESCE($3, is_converted), \
                 notes = COALESCE($4, notes) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(id)
            .bind(input.is_contacted)
            .bind(input.is_converted)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
