//! Repository for `blog_dynamic_fields` and `case_study_dynamic_fields`.

use martech_core::dynamic_form::FormOwner;
use martech_core::types::DbId;
use sqlx::PgPool;

use crate::models::dynamic_field::{CreateDynamicField, DynamicField, UpdateDynamicField};

/// Content table that owns the form.
pub(crate) fn owner_table(owner: FormOwner) -> &'static str {
    match owner {
        FormOwner::Blog => "blogs",
        FormOwner::CaseStudy => "case_studies",
    }
}

/// Foreign-key column pointing at the owning record.
pub(crate) fn owner_column(owner: FormOwner) -> &'static str {
    match owner {
        FormOwner::Blog => "blog_id",
        FormOwner::CaseStudy => "case_study_id",
    }
}

fn fields_table(owner: FormOwner) -> &'static str {
    match owner {
        FormOwner::Blog => "blog_dynamic_fields",
        FormOwner::CaseStudy => "case_study_dynamic_fields",
    }
}

fn columns(owner: FormOwner) -> String {
    format!(
        "id, {} AS owner_id, field_name, placeholder, sequence, is_active, created_at, updated_at",
        owner_column(owner)
    )
}

pub struct DynamicFieldRepo;

impl DynamicFieldRepo {
    /// Whether the owning record exists, in any status.
    pub async fn owner_exists(
        pool: &PgPool,
        owner: FormOwner,
        owner_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let query = format!(
            "SELECT EXISTS (SELECT 1 FROM {} WHERE id = $1)",
            owner_table(owner)
        );
        sqlx::query_scalar::<_, bool>(&query)
            .bind(owner_id)
            .fetch_one(pool)
            .await
    }

    /// Active fields of one record ordered by `sequence`, ties in insertion
    /// order.
    pub async fn list_active(
        pool: &PgPool,
        owner: FormOwner,
        owner_id: DbId,
    ) -> Result<Vec<DynamicField>, sqlx::Error> {
        let query = format!(
            "SELECT {cols} FROM {table} \
             WHERE {fk} = $1 AND is_active \
             ORDER BY sequence, id",
            cols = columns(owner),
            table = fields_table(owner),
            fk = owner_column(owner),
        );
        sqlx::query_as::<_, DynamicField>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// Every field of one record, active or not.
    pub async fn list_all(
        pool: &PgPool,
        owner: FormOwner,
        owner_id: DbId,
    ) -> Result<Vec<DynamicField>, sqlx::Error> {
        let query = format!(
            "SELECT {cols} FROM {table} WHERE {fk} = $1 ORDER BY sequence, id",
            cols = columns(owner),
            table = fields_table(owner),
            fk = owner_column(owner),
        );
        sqlx::query_as::<_, DynamicField>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    pub async fn create(
        pool: &PgPool,
        owner: FormOwner,
        input: &CreateDynamicField,
    ) -> Result<DynamicField, sqlx::Error> {
        let query = format!(
            "INSERT INTO {table} ({fk}, field_name, placeholder, sequence, is_active) \
             VALUES ($1, $2, $3, COALESCE($4, 0), COALESCE($5, TRUE)) \
             RETURNING {cols}",
            table = fields_table(owner),
            fk = owner_column(owner),
            cols = columns(owner),
        );
        sqlx::query_as::<_, DynamicField>(&query)
            .bind(input.owner_id)
            .bind(&input.field_name)
            .bind(&input.placeholder)
            .bind(input.sequence)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        owner: FormOwner,
        id: DbId,
        input: &UpdateDynamicField,
    ) -> Result<Option<DynamicField>, sqlx::Error> {
        let query = format!(
            "UPDATE {table} SET \
                 field_name = COALESCE($2, field_name), \
                 placeholder = COALESCE($3, placeholder), \
                 sequence = COALESCE($4, sequence), \
                 is_active = COALESCE($5, is_active) \
             WHERE id = $1 \
             RETURNING {cols}",
            table = fields_table(owner),
            cols = columns(owner),
        );
        sqlx::query_as::<_, DynamicField>(&query)
            .bind(id)
            .bind(&input.field_name)
            .bind(&input.placeholder)
            .bind(input.sequence)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, owner: FormOwner, id: DbId) -> Result<bool, sqlx::Error> {
        let query = format!("DELETE FROM {} WHERE id = $1", fields_table(owner));
        let result = sqlx::query(&query).bind(id).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
