//! Routes mounted at `/api/career`.

use axum::routing::{get, post};
use axum::Router;

use super::RouteBoth;
use crate::handlers::career;
use crate::state::AppState;

/// ```text
/// GET  /job-postings        -> list_job_postings
/// GET  /job-postings/{id}   -> get_job_posting (counts a view)
/// POST /job-applications    -> create_job_application
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route_both("/job-postings", get(career::list_job_postings))
        .route_both("/job-postings/{id}", get(career::get_job_posting))
        .route_both("/job-applications", post(career::create_job_application))
}
