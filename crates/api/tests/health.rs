//! Health check and general HTTP behaviour.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_raw};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn health_check_returns_ok_with_json(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["db_healthy"], true);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_route_returns_envelope_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/does-not-exist/").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["status"], false);
    assert_eq!(json["message_code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn response_contains_x_request_id_header(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/health").await;

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("x-request-id header");
    assert_eq!(request_id.to_str().unwrap().len(), 36);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn routes_answer_with_and_without_trailing_slash(pool: PgPool) {
    let response = get(common::build_test_app(pool.clone()), "/api/blog/blogs").await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(common::build_test_app(pool), "/api/blog/blogs/").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn malformed_json_body_is_an_envelope_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_raw(app, "/api/contact/contacts/", "{not json").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["status"], false);
    assert_eq!(json["message_code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn non_numeric_path_id_is_not_found(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/blog/blogs/abc/").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message_code"], "NOT_FOUND");
}
