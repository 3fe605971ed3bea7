//! Routes mounted at `/api/blog`.

use axum::routing::{get, post};
use axum::Router;

use super::RouteBoth;
use crate::handlers::blog;
use crate::state::AppState;

/// ```text
/// GET  /blogs               -> list_blogs
/// GET  /blogs/{id}          -> get_blog (counts a view)
/// GET  /dynamic-fields      -> list_dynamic_fields (?blog_id=)
/// POST /blog-leads          -> create_blog_lead
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route_both("/blogs", get(blog::list_blogs))
        .route_both("/blogs/{id}", get(blog::get_blog))
        .route_both("/dynamic-fields", get(blog::list_dynamic_fields))
        .route_both("/blog-leads", post(blog::create_blog_lead))
}
