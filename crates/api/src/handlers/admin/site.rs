//! Site-wide content: social media links and privacy policies.

use axum::extract::State;
use axum::response::IntoResponse;
use martech_core::error::CoreError;
use martech_core::social::platform_values;
use martech_core::types::DbId;
use martech_db::models::privacy_policy::{CreatePrivacyPolicy, UpdatePrivacyPolicy};
use martech_db::models::social_media::{CreateSocialMediaLink, UpdateSocialMediaLink};
use martech_db::repositories::{PrivacyPolicyRepo, SocialMediaRepo};

use super::{deleted, not_found};
use crate::error::AppResult;
use crate::extract::{ApiJson, ApiPath};
use crate::middleware::staff::RequireStaff;
use crate::response::Envelope;
use crate::state::AppState;

fn check_platform(platform: Option<&str>) -> Result<(), CoreError> {
    let Some(platform) = platform else {
        return Ok(());
    };
    let allowed = platform_values();
    if allowed.iter().any(|value| *value == platform) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid platform '{platform}'. Must be one of: {}",
            allowed.join(", ")
        )))
    }
}

// ---------------------------------------------------------------------------
// Social media links
// ---------------------------------------------------------------------------

/// GET /api/admin/social-media/
///
/// Includes inactive links.
pub async fn list_social_links(
    State(state): State<AppState>,
    _staff: RequireStaff,
) -> AppResult<impl IntoResponse> {
    let links = SocialMediaRepo::list_all(&state.pool).await?;
    Ok(Envelope::ok(
        "SOCIAL_MEDIA_RETRIEVED",
        "Social media links retrieved successfully",
        links,
    ))
}

/// POST /api/admin/social-media/
pub async fn create_social_link(
    State(state): State<AppState>,
    _staff: RequireStaff,
    ApiJson(input): ApiJson<CreateSocialMediaLink>,
) -> AppResult<impl IntoResponse> {
    check_platform(Some(&input.platform))?;

    let link = SocialMediaRepo::create(&state.pool, &input).await?;
    tracing::info!(link_id = link.id, platform = %link.platform, "Social media link created");

    Ok(Envelope::created(
        "SOCIAL_MEDIA_CREATED",
        "Social media link created successfully",
        link,
    ))
}

/// PATCH /api/admin/social-media/{id}/
pub async fn update_social_link(
    State(state): State<AppState>,
    _staff: RequireStaff,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(input): ApiJson<UpdateSocialMediaLink>,
) -> AppResult<impl IntoResponse> {
    check_platform(input.platform.as_deref())?;

    let link = SocialMediaRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found("SocialMediaLink", id))?;
    tracing::info!(link_id = id, "Social media link updated");

    Ok(Envelope::ok(
        "SOCIAL_MEDIA_UPDATED",
        "Social media link updated successfully",
        link,
    ))
}

/// DELETE /api/admin/social-media/{id}/
pub async fn delete_social_link(
    State(state): State<AppState>,
    _staff: RequireStaff,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    if !SocialMediaRepo::delete(&state.pool, id).await? {
        return Err(not_found("SocialMediaLink", id));
    }
    tracing::info!(link_id = id, "Social media link deleted");
    Ok(Envelope::ok(
        "SOCIAL_MEDIA_DELETED",
        "Social media link deleted successfully",
        deleted(id),
    ))
}

// ---------------------------------------------------------------------------
// Privacy policies
// ---------------------------------------------------------------------------

/// GET /api/admin/privacy-policies/
pub async fn list_policies(
    State(state): State<AppState>,
    _staff: RequireStaff,
) -> AppResult<impl IntoResponse> {
    let policies = PrivacyPolicyRepo::list(&state.pool).await?;
    Ok(Envelope::ok(
        "PRIVACY_POLICIES_RETRIEVED",
        "Privacy policies retrieved successfully",
        policies,
    ))
}

/// POST /api/admin/privacy-policies/
pub async fn create_policy(
    State(state): State<AppState>,
    _staff: RequireStaff,
    ApiJson(input): ApiJson<CreatePrivacyPolicy>,
) -> AppResult<impl IntoResponse> {
    let policy = PrivacyPolicyRepo::create(&state.pool, &input).await?;
    tracing::info!(policy_id = policy.id, version = ?policy.version, "Privacy policy created");

    Ok(Envelope::created(
        "PRIVACY_POLICY_CREATED",
        "Privacy policy created successfully",
        policy,
    ))
}

/// PATCH /api/admin/privacy-policies/{id}/
pub async fn update_policy(
    State(state): State<AppState>,
    _staff: RequireStaff,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(input): ApiJson<UpdatePrivacyPolicy>,
) -> AppResult<impl IntoResponse> {
    let policy = PrivacyPolicyRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found("PrivacyPolicy", id))?;
    tracing::info!(policy_id = id, "Privacy policy updated");

    Ok(Envelope::ok(
        "PRIVACY_POLICY_UPDATED",
        "Privacy policy updated successfully",
        policy,
    ))
}

/// DELETE /api/admin/privacy-policies/{id}/
pub async fn delete_policy(
    State(state): State<AppState>,
    _staff: RequireStaff,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    if !PrivacyPolicyRepo::delete(&state.pool, id).await? {
        return Err(not_found("PrivacyPolicy", id));
    }
    tracing::info!(policy_id = id, "Privacy policy deleted");
    Ok(Envelope::ok(
        "PRIVACY_POLICY_DELETED",
        "Privacy policy deleted successfully",
        deleted(id),
    ))
}
