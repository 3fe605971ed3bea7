//! Routes mounted at `/api/casestudy`.

use axum::routing::{get, post};
use axum::Router;

use super::RouteBoth;
use crate::handlers::case_study;
use crate::state::AppState;

/// ```text
/// GET  /case-studies        -> list_case_studies
/// GET  /case-studies/{id}   -> get_case_study (counts a view)
/// GET  /dynamic-fields      -> list_dynamic_fields (?case_study_id=)
/// POST /case-study-leads    -> create_case_study_lead
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route_both("/case-studies", get(case_study::list_case_studies))
        .route_both("/case-studies/{id}", get(case_study::get_case_study))
        .route_both("/dynamic-fields", get(case_study::list_dynamic_fields))
        .route_both("/case-study-leads", post(case_study::create_case_study_lead))
}
