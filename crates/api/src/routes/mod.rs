pub mod admin;
pub mod blog;
pub mod career;
pub mod case_study;
pub mod contact;
pub mod health;
pub mod privacy_policy;
pub mod services;
pub mod social_media;

use axum::routing::MethodRouter;
use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /blog/...             blogs, dynamic fields, blog leads
/// /casestudy/...        case studies, dynamic fields, case study leads
/// /career/...           job postings, job applications
/// /services/...         services, service leads
/// /contact/...          contact form
/// /social-media/...     social media links
/// /privacy-policy/...   latest active privacy policy
/// /admin/...            staff-only management (bearer token)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/blog", blog::router())
        .nest("/casestudy", case_study::router())
        .nest("/career", career::router())
        .nest("/services", services::router())
        .nest("/contact", contact::router())
        .nest("/social-media", social_media::router())
        .nest("/privacy-policy", privacy_policy::router())
        .nest("/admin", admin::router())
}

/// Register a route under both `/path` and `/path/`.
pub trait RouteBoth {
    fn route_both(self, path: &str, method_router: MethodRouter<AppState>) -> Self;
}

impl RouteBoth for Router<AppState> {
    fn route_both(self, path: &str, method_router: MethodRouter<AppState>) -> Self {
        let bare = path.trim_end_matches('/');
        self.route(bare, method_router.clone())
            .route(&format!("{bare}/"), method_router)
    }
}
