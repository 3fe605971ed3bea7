//! Routes mounted at `/api/services`.

use axum::routing::{get, post};
use axum::Router;

use super::RouteBoth;
use crate::handlers::services;
use crate::state::AppState;

/// ```text
/// GET  /services            -> list_services
/// GET  /services/{id}       -> get_service (counts a view)
/// POST /service-leads       -> create_service_lead
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route_both("/services", get(services::list_services))
        .route_both("/services/{id}", get(services::get_service))
        .route_both("/service-leads", post(services::create_service_lead))
}
