//! Shared helpers for the HTTP integration tests.
//!
//! Requests go straight to the router through `tower::ServiceExt::oneshot`;
//! no TCP listener is involved.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use martech_api::config::ServerConfig;
use martech_api::router::build_app_router;
use martech_api::state::AppState;

pub const STAFF_TOKEN: &str = "test-staff-token";

/// Build a test `ServerConfig` with safe defaults and the admin API open to
/// [`STAFF_TOKEN`].
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".parse().unwrap()],
        request_timeout_secs: 30,
        public_base_url: None,
        admin_api_token: Some(STAFF_TOKEN.to_string()),
        database_url: String::new(),
        db_max_connections: 5,
    }
}

/// Build the full application router, including the production middleware
/// stack, around the given pool.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_with_config(pool, test_config())
}

pub fn build_app_with_config(pool: PgPool, config: ServerConfig) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

fn json_request(method: Method, uri: &str, body: &Value, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    send(app, json_request(Method::POST, uri, &body, None)).await
}

/// POST a raw, possibly malformed body.
pub async fn post_raw(app: Router, uri: &str, body: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn staff_get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {STAFF_TOKEN}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn staff_post(app: Router, uri: &str, body: Value) -> Response {
    send(app, json_request(Method::POST, uri, &body, Some(STAFF_TOKEN))).await
}

pub async fn staff_patch(app: Router, uri: &str, body: Value) -> Response {
    send(app, json_request(Method::PATCH, uri, &body, Some(STAFF_TOKEN))).await
}

pub async fn staff_delete(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {STAFF_TOKEN}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures (created through the admin API)
// ---------------------------------------------------------------------------

/// Create a blog and return its id.
pub async fn create_blog(pool: &PgPool, body: Value) -> i64 {
    let response = staff_post(build_test_app(pool.clone()), "/api/admin/blogs", body).await;
    assert_eq!(response.status(), 201, "blog fixture was rejected");
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

pub async fn create_taxonomy(pool: &PgPool, kind: &str, name: &str) -> i64 {
    let response = staff_post(
        build_test_app(pool.clone()),
        &format!("/api/admin/taxonomies/{kind}"),
        serde_json::json!({ "name": name }),
    )
    .await;
    assert_eq!(response.status(), 201, "taxonomy fixture was rejected");
    body_json(response).await["data"]["id"].as_i64().unwrap()
}
