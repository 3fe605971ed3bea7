use axum::routing::get;
use axum::Router;

use super::RouteBoth;
use crate::handlers::social_media;
use crate::state::AppState;

/// ```text
/// GET /social-media         -> list_links (?platform=)
/// GET /social-media/{id}    -> get_link
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route_both("/social-media", get(social_media::list_links))
        .route_both("/social-media/{id}", get(social_media::get_link))
}
