//! Repository for `service_leads`.

use martech_core::leads::{DEFAULT_SERVICE_INQUIRY_TYPE, DEFAULT_SERVICE_LEAD_SOURCE};
use martech_core::listing::{page_offset, PAGE_SIZE};
use martech_core::types::DbId;
use sqlx::PgPool;

use crate::models::content::{LeadTriage, Page};
use crate::models::service_lead::{CreateServiceLead, ServiceLead};

const COLUMNS: &str = "id, service_id, inquiry_type, lead_source, full_name, email, phone, \
    company, job_title, message, budget_range, timeline, is_contacted, is_converted, notes, \
    utm_source, utm_medium, utm_campaign, utm_term, utm_content, created_at, updated_at";

pub struct ServiceLeadRepo;

impl ServiceLeadRepo {
    /// Insert the inquiry and bump the service's `inquiries_count` atomically.
    pub async fn create(
        pool: &PgPool,
        input: &CreateServiceLead,
    ) -> Result<ServiceLead, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO service_leads (service_id, inquiry_type, lead_source, full_name, \
                 email, phone, company, job_title, message, budget_range, timeline, \
                 utm_source, utm_medium, utm_campaign, utm_term, utm_content) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16) \
             RETURNING {COLUMNS}"
        );
        let lead = sqlx::query_as::<_, ServiceLead>(&query)
            .bind(input.service)
            .bind(
                input
                    .inquiry_type
                    .as_deref()
                    .unwrap_or(DEFAULT_SERVICE_INQUIRY_TYPE),
            )
            .bind(
                input
                    .lead_source
                    .as_deref()
                    .unwrap_or(DEFAULT_SERVICE_LEAD_SOURCE),
            )
            .bind(&input.full_name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.company)
            .bind(&input.job_title)
            .bind(&input.message)
            .bind(&input.budget_range)
            .bind(&input.timeline)
            .bind(&input.utm_source)
            .bind(&input.utm_medium)
            .bind(&input.utm_campaign)
            .bind(&input.utm_term)
            .bind(&input.utm_content)
            .fetch_one(&mut *tx)
            .await?;

        if let Some(service_id) = lead.service_id {
            sqlx::query("UPDATE services SET inquiries_count = inquiries_count + 1 WHERE id = $1")
                .bind(service_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(lead)
    }

    /// Newest first.
    pub async fn list(pool: &PgPool, page: i64) -> Result<Page<ServiceLead>, sqlx::Error> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM service_leads")
            .fetch_one(pool)
            .await?;

        let query = format!(
            "SELECT {COLUMNS} FROM service_leads \
             ORDER BY created_at DESC, id DESC LIMIT $1 OFFSET $2"
        );
        let items = sqlx::query_as::<_, ServiceLead>(&query)
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
    ) -> Result<Option<ServiceLead>, sqlx::Error> {
        let query = format!(
            "UPDATE service_leads SET \
                 is_contacted = COALESCE($2, is_contacted), \
                 is_converted = COALESCE($3, is_converted), \
                 notes = COALESCE($4, notes) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ServiceLead>(&query)
            .bind(id)
            .bind(input.is_contacted)
            .bind(input.is_converted)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }
}
