//! Repository for `privacy_policies`.

use martech_core::types::DbId;
use sqlx::PgPool;

use crate::models::privacy_policy::{CreatePrivacyPolicy, PrivacyPolicy, UpdatePrivacyPolicy};

const COLUMNS: &str =
    "id, title, content, is_active, version, published_at, created_at, updated_at";

pub struct PrivacyPolicyRepo;

impl PrivacyPolicyRepo {
    /// The most recently published active policy, if any.
    pub async fn latest_active(pool: &PgPool) -> Result<Option<PrivacyPolicy>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM privacy_policies WHERE is_active = TRUE \
             ORDER BY published_at DESC, id DESC LIMIT 1"
        );
        sqlx::query_as::<_, PrivacyPolicy>(&query)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<PrivacyPolicy>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM privacy_policies ORDER BY published_at DESC, id DESC");
        sqlx::query_as::<_, PrivacyPolicy>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn create(
        pool: &PgPool,
        input: &CreatePrivacyPolicy,
    ) -> Result<PrivacyPolicy, sqlx::Error> {
        let query = format!(
            "INSERT INTO privacy_policies (title, content, is_active, version) \
             VALUES (COALESCE($1, 'Privacy Policy'), $2, COALESCE($3, TRUE), $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PrivacyPolicy>(&query)
            .bind(&input.title)
            .bind(&input.content)
            .bind(input.is_active)
            .bind(&input.version)
            .fetch_one(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePrivacyPolicy,
    ) -> Result<Option<PrivacyPolicy>, sqlx::Error> {
        let query = format!(
            "UPDATE privacy_policies SET \
                 title = COALESCE($2, title), \
                 content = COALESCE($3, content), \
                 is_active = COALESCE($4, is_active), \
                 version = COALESCE($5, version) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PrivacyPolicy>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(input.is_active)
            .bind(&input.version)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM privacy_policies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
