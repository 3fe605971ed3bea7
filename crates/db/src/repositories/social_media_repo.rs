//! Repository for `social_media_links`.

use martech_core::social::display_name;
use martech_core::types::DbId;
use sqlx::PgPool;

use crate::models::social_media::{
    CreateSocialMediaLink, SocialMediaLink, UpdateSocialMediaLink,
};

const COLUMNS: &str = "id, platform, url, icon, is_active, description, created_at, updated_at";

fn with_display_name(mut link: SocialMediaLink) -> SocialMediaLink {
    link.display_name = display_name(&link.platform);
    link
}

pub struct SocialMediaRepo;

impl SocialMediaRepo {
    /// Active links ordered by platform, optionally for one platform only.
    pub async fn list_active(
        pool: &PgPool,
        platform: Option<&str>,
    ) -> Result<Vec<SocialMediaLink>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM social_media_links \
             WHERE is_active = TRUE AND ($1::TEXT IS NULL OR platform = $1) \
             ORDER BY platform, id"
        );
        let links = sqlx::query_as::<_, SocialMediaLink>(&query)
            .bind(platform)
            .fetch_all(pool)
            .await?;
        Ok(links.into_iter().map(with_display_name).collect())
    }

    pub async fn find_active_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<SocialMediaLink>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM social_media_links WHERE id = $1 AND is_active = TRUE");
        let link = sqlx::query_as::<_, SocialMediaLink>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(link.map(with_display_name))
    }

    pub async fn list_all(pool: &PgPool) -> Result<Vec<SocialMediaLink>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM social_media_links ORDER BY platform, id");
        let links = sqlx::query_as::<_, SocialMediaLink>(&query)
            .fetch_all(pool)
            .await?;
        Ok(links.into_iter().map(with_display_name).collect())
    }

    pub async fn create(
        pool: &PgPool,
        input: &CreateSocialMediaLink,
    ) -> Result<SocialMediaLink, sqlx::Error> {
        let query = format!(
            "INSERT INTO social_media_links (platform, url, icon, is_active, description) \
             VALUES ($1, $2, $3, COALESCE($4, TRUE), $5) \
             RETURNING {COLUMNS}"
        );
        let link = sqlx::query_as::<_, SocialMediaLink>(&query)
            .bind(&input.platform)
            .bind(&input.url)
            .bind(&input.icon)
            .bind(input.is_active)
            .bind(&input.description)
            .fetch_one(pool)
            .await?;
        Ok(with_display_name(link))
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSocialMediaLink,
    ) -> Result<Option<SocialMediaLink>, sqlx::Error> {
        let query = format!(
            "UPDATE social_media_links SET \
                 platform = COALESCE($2, platform), \
                 url = COALESCE($3, url), \
                 icon = COALESCE($4, icon), \
                 is_active = COALESCE($5, is_active), \
                 description = COALESCE($6, description) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let link = sqlx::query_as::<_, SocialMediaLink>(&query)
            .bind(id)
            .bind(&input.platform)
            .bind(&input.url)
            .bind(&input.icon)
            .bind(input.is_active)
            .bind(&input.description)
            .fetch_optional(pool)
            .await?;
        Ok(link.map(with_display_name))
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM social_media_links WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
