//! Public social media links.

use axum::extract::State;
use axum::response::IntoResponse;
use martech_core::listing::non_blank;
use martech_core::types::DbId;
use martech_db::repositories::SocialMediaRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiPath, ApiQuery};
use crate::query::PlatformParams;
use crate::response::Envelope;
use crate::state::AppState;

/// GET /api/social-media/social-media/
///
/// Active links ordered by platform. Not paginated.
pub async fn list_links(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<PlatformParams>,
) -> AppResult<impl IntoResponse> {
    let platform = non_blank(params.platform.as_deref());
    let links = SocialMediaRepo::list_active(&state.pool, platform).await?;

    Ok(Envelope::ok(
        "SOCIAL_MEDIA_RETRIEVED",
        "Social media links retrieved successfully",
        links,
    ))
}

/// GET /api/social-media/social-media/{id}/
pub async fn get_link(
    State(state): State<AppState>,
    ApiPath(link_id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let link = SocialMediaRepo::find_active_by_id(&state.pool, link_id)
        .await?
        .ok_or_else(|| {
            AppError::not_found("SOCIAL_MEDIA_NOT_FOUND", "Social media link not found")
        })?;

    Ok(Envelope::ok(
        "SOCIAL_MEDIA_RETRIEVED",
        "Social media link retrieved successfully",
        link,
    ))
}
