//! Bearer-token gate for the administrative API.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use martech_core::error::CoreError;

use crate::error::AppError;
use crate::state::AppState;

/// Proof that the request carried `Authorization: Bearer <ADMIN_API_TOKEN>`.
///
/// ```ignore
/// async fn staff_only(_staff: RequireStaff) -> AppResult<Envelope<()>> { .. }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RequireStaff;

impl FromRequestParts<AppState> for RequireStaff {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(expected) = state.config.admin_api_token.as_deref() else {
            return Err(AppError::Core(CoreError::Forbidden(
                "Administrative API is disabled".into(),
            )));
        };

        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        if token.trim() != expected {
            return Err(AppError::Core(CoreError::Forbidden(
                "Invalid staff token".into(),
            )));
        }

        Ok(RequireStaff)
    }
}
