//! Repository for `job_applications`.
//!
//! A public submission inserts the application and bumps the posting's
//! `applications_count` in one transaction.

use martech_core::career::DEFAULT_APPLICATION_SOURCE;
use martech_core::listing::{page_offset, PAGE_SIZE};
use martech_core::types::DbId;
use sqlx::PgPool;

use crate::models::content::Page;
use crate::models::job_application::{CreateJobApplication, JobApplication, ReviewJobApplication};

const COLUMNS: &str = "id, job_posting_id, status, source, first_name, last_name, email, \
    phone, address, city, state, country, zip_code, current_company, current_position, \
    years_of_experience, current_salary::FLOAT8 AS current_salary, \
    expected_salary::FLOAT8 AS expected_salary, notice_period, resume, cover_letter, \
    portfolio_url, linkedin_url, github_url, cover_letter_text, why_interested, \
    availability_date, reviewed_by, reviewed_at, notes, rating, interview_date, \
    interview_location, interview_notes, offer_amount::FLOAT8 AS offer_amount, offer_date, \
    offer_deadline, utm_source, utm_medium, utm_campaign, utm_refcode, created_at, updated_at";

pub struct JobApplicationRepo;

impl JobApplicationRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateJobApplication,
    ) -> Result<JobApplication, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO job_applications (job_posting_id, source, first_name, last_name, \
                 email, phone, address, city, state, country, zip_code, current_company, \
                 current_position, years_of_experience, current_salary, expected_salary, \
                 notice_period, resume, cover_letter, portfolio_url, linkedin_url, github_url, \
                 cover_letter_text, why_interested, availability_date, utm_source, utm_medium, \
                 utm_campaign, utm_refcode) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, \
                 $9, $10, $11, $12, $13, $14, $15::NUMERIC, $16::NUMERIC, $17, $18, $19, $20, \
                 $21, $22, $23, $24, $25, $26, $27, $28, $29) \
             RETURNING {COLUMNS}"
        );
        let application = sqlx::query_as::<_, JobApplication>(&query)
            .bind(input.job_posting)
            .bind(input.source.as_deref().unwrap_or(DEFAULT_APPLICATION_SOURCE))
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.address)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.country)
            .bind(&input.zip_code)
            .bind(&input.current_company)
            .bind(&input.current_position)
            .bind(input.years_of_experience)
            .bind(input.current_salary)
            .bind(input.expected_salary)
            .bind(&input.notice_period)
            .bind(&input.resume)
            .bind(&input.cover_letter)
            .bind(&input.portfolio_url)
            .bind(&input.linkedin_url)
            .bind(&input.github_url)
            .bind(&input.cover_letter_text)
            .bind(&input.why_interested)
            .bind(input.availability_date)
            .bind(&input.utm_source)
            .bind(&input.utm_medium)
            .bind(&input.utm_campaign)
            .bind(&input.utm_refcode)
            .fetch_one(&mut *tx)
            .await?;

        if let Some(posting_id) = application.job_posting_id {
            sqlx::query(
                "UPDATE job_postings SET applications_count = applications_count + 1 \
                 WHERE id = $1",
            )
            .bind(posting_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(application)
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<JobApplication>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM job_applications WHERE id = $1");
        sqlx::query_as::<_, JobApplication>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Newest first, optionally restricted to one posting.
    pub async fn list(
        pool: &PgPool,
        job_posting_id: Option<DbId>,
        page: i64,
    ) -> Result<Page<JobApplication>, sqlx::Error> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM job_applications \
             WHERE ($1::BIGINT IS NULL OR job_posting_id = $1)",
        )
        .bind(job_posting_id)
        .fetch_one(pool)
        .await?;

        let query = format!(
            "SELECT {COLUMNS} FROM job_applications \
             WHERE ($1::BIGINT IS NULL OR job_posting_id = $1) \
             ORDER BY created_at DESC, id DESC LIMIT $2 OFFSET $3"
        );
        let items = sqlx::query_as::<_, JobApplication>(&query)
            .bind(job_posting_id)
            .bind(PAGE_SIZE)
            .bind(page_offset(page))
            .fetch_all(pool)
            .await?;
        Ok(Page { items, total })
    }

    /// Apply a staff review. `reviewed_at` is stamped whenever a reviewer
    /// is supplied.
    pub async fn review(
        pool: &PgPool,
        id: DbId,
        input: &ReviewJobApplication,
    ) -> Result<Option<JobApplication>, sqlx::Error> {
        let query = format!(
            "UPDATE job_applications SET \
                 status = COALESCE($2, status), \
                 rating = COALESCE($3, rating), \
                 notes = COALESCE($4, notes), \
                 reviewed_by = COALESCE($5, reviewed_by), \
                 reviewed_at = CASE WHEN $5::BIGINT IS NOT NULL THEN NOW() ELSE reviewed_at END, \
                 interview_date = COALESCE($6, interview_date), \
                 interview_location = COALESCE($7, interview_location), \
                 interview_notes = COALESCE($8, interview_notes), \
                 offer_amount = COALESCE($9::NUMERIC, offer_amount), \
                 offer_date = COALESCE($10, offer_date), \
                 offer_deadline = COALESCE($11, offer_deadline) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, JobApplication>(&query)
            .bind(id)
            .bind(&input.status)
            .bind(input.rating)
            .bind(&input.notes)
            .bind(input.reviewed_by)
            .bind(input.interview_date)
            .bind(&input.interview_location)
            .bind(&input.interview_notes)
            .bind(input.offer_amount)
            .bind(input.offer_date)
            .bind(input.offer_deadline)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM job_applications WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
