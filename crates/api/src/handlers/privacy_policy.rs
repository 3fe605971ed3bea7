//! Public privacy policy endpoint.

use axum::extract::State;
use axum::response::IntoResponse;
use martech_db::repositories::PrivacyPolicyRepo;

use crate::error::{AppError, AppResult};
use crate::response::Envelope;
use crate::state::AppState;

/// GET /api/privacy-policy/list/
///
/// The most recently published active policy.
pub async fn latest_policy(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let policy = PrivacyPolicyRepo::latest_active(&state.pool)
        .await?
        .ok_or_else(|| {
            AppError::not_found(
                "PRIVACY_POLICY_NOT_FOUND",
                "No active privacy policy found.",
            )
        })?;

    Ok(Envelope::ok(
        "PRIVACY_POLICY_FETCHED",
        "Privacy policy fetched successfully.",
        policy,
    ))
}
