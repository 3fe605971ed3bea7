use axum::routing::get;
use axum::Router;

use super::RouteBoth;
use crate::handlers::privacy_policy;
use crate::state::AppState;

/// `GET /api/privacy-policy/list` -> latest_policy
pub fn router() -> Router<AppState> {
    Router::new().route_both("/list", get(privacy_policy::latest_policy))
}
