//! Staff users referenced as content authors and recruiters.

use axum::extract::State;
use axum::response::IntoResponse;
use martech_core::error::CoreError;
use martech_db::models::staff_user::CreateStaffUser;
use martech_db::repositories::StaffUserRepo;

use crate::error::AppResult;
use crate::extract::ApiJson;
use crate::middleware::staff::RequireStaff;
use crate::response::Envelope;
use crate::state::AppState;

/// GET /api/admin/staff-users/
pub async fn list_staff_users(
    State(state): State<AppState>,
    _staff: RequireStaff,
) -> AppResult<impl IntoResponse> {
    let users = StaffUserRepo::list(&state.pool).await?;
    Ok(Envelope::ok(
        "STAFF_USERS_RETRIEVED",
        "Staff users retrieved successfully",
        users,
    ))
}

/// POST /api/admin/staff-users/
pub async fn create_staff_user(
    State(state): State<AppState>,
    _staff: RequireStaff,
    ApiJson(input): ApiJson<CreateStaffUser>,
) -> AppResult<impl IntoResponse> {
    if input.username.trim().is_empty() {
        return Err(CoreError::Validation("username must not be blank".into()).into());
    }

    let user = StaffUserRepo::create(&state.pool, &input).await?;
    tracing::info!(staff_user_id = user.id, username = %user.username, "Staff user created");

    Ok(Envelope::created(
        "STAFF_USER_CREATED",
        "Staff user created successfully",
        user,
    ))
}
