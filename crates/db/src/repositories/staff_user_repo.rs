//! Repository for the `staff_users` table.

use sqlx::PgPool;

use crate::models::staff_user::{CreateStaffUser, StaffUser};

const COLUMNS: &str = "id, username, first_name, last_name, email, is_active, created_at, updated_at";

pub struct StaffUserRepo;

impl StaffUserRepo {
    pub async fn create(pool: &PgPool, input: &CreateStaffUser) -> Result<StaffUser, sqlx::Error> {
        let query = format!(
            "INSERT INTO staff_users (username, first_name, last_name, email, is_active) \
             VALUES ($1, $2, $3, $4, COALESCE($5, TRUE)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StaffUser>(&query)
            .bind(&input.username)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<StaffUser>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM staff_users ORDER BY username, id");
        sqlx::query_as::<_, StaffUser>(&query).fetch_all(pool).await
    }
}
