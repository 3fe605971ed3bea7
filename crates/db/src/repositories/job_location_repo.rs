//! Repository for the `job_locations` table.

use std::collections::HashMap;

use martech_core::slug::resolve_slug;
use martech_core::types::DbId;
use sqlx::PgPool;

use crate::models::taxonomy::{CreateJobLocation, JobLocation, UpdateJobLocation};

const COLUMNS: &str = "id, name, slug, city, state, country, is_remote, is_active, \
                       created_at, updated_at";

pub struct JobLocationRepo;

impl JobLocationRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateJobLocation,
    ) -> Result<JobLocation, sqlx::Error> {
        let slug = resolve_slug(input.slug.as_deref(), input.name.as_deref());
        let query = format!(
            "INSERT INTO job_locations (name, slug, city, state, country, is_remote, is_active) \
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, FALSE), COALESCE($7, TRUE)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, JobLocation>(&query)
            .bind(&input.name)
            .bind(slug)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.country)
            .bind(input.is_remote)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<JobLocation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM job_locations WHERE id = $1");
        sqlx::query_as::<_, JobLocation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_ids(
        pool: &PgPool,
        ids: &[DbId],
    ) -> Result<HashMap<DbId, JobLocation>, sqlx::Error> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        let query = format!("SELECT {COLUMNS} FROM job_locations WHERE id = ANY($1)");
        let rows = sqlx::query_as::<_, JobLocation>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(|l| (l.id, l)).collect())
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<JobLocation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM job_locations ORDER BY name NULLS LAST, id");
        sqlx::query_as::<_, JobLocation>(&query).fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateJobLocation,
    ) -> Result<Option<JobLocation>, sqlx::Error> {
        let query = format!(
            "UPDATE job_locations SET \
                 name = COALESCE($2, name), \
                 slug = COALESCE($3, slug), \
                 city = COALESCE($4, city), \
                 state = COALESCE($5, state), \
                 country = COALESCE($6, country), \
                 is_remote = COALESCE($7, is_remote), \
                 is_active = COALESCE($8, is_active) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, JobLocation>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.country)
            .bind(input.is_remote)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM job_locations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
