use axum::routing::post;
use axum::Router;

use super::RouteBoth;
use crate::handlers::contact;
use crate::state::AppState;

/// `POST /api/contact/contacts` -> create_contact
pub fn router() -> Router<AppState> {
    Router::new().route_both("/contacts", post(contact::create_contact))
}
