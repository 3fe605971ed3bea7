//! Staff-only administrative API.

mod common;

use axum::body::Body;
use axum::http::header::AUTHORIZATION;
use axum::http::{Request, StatusCode};
use common::{
    body_json, create_blog, post_json, staff_delete, staff_get, staff_patch, staff_post,
    test_config,
};
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Access control
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_token_is_unauthorized(pool: PgPool) {
    let response = common::get(common::build_test_app(pool), "/api/admin/staff-users").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["status"], false);
    assert_eq!(json["message_code"], "UNAUTHORIZED");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn wrong_token_is_forbidden(pool: PgPool) {
    let request = Request::builder()
        .uri("/api/admin/staff-users")
        .header(AUTHORIZATION, "Bearer guess")
        .body(Body::empty())
        .unwrap();
    let response = common::build_test_app(pool).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn admin_api_is_closed_without_configured_token(pool: PgPool) {
    let config = martech_api::config::ServerConfig {
        admin_api_token: None,
        ..test_config()
    };
    let app = common::build_app_with_config(pool, config);
    let response = staff_get(app, "/api/admin/staff-users").await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// ---------------------------------------------------------------------------
// Slugs
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn slug_is_derived_once_and_survives_renames(pool: PgPool) {
    let id = create_blog(&pool, json!({"title": "Hello, World!"})).await;

    let response = staff_patch(
        common::build_test_app(pool.clone()),
        &format!("/api/admin/blogs/{id}/"),
        json!({"title": "Goodbye"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["message_code"], "BLOG_UPDATED");
    assert_eq!(json["data"]["title"], "Goodbye");
    assert_eq!(json["data"]["slug"], "hello-world");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_slug_is_a_unique_constraint_error(pool: PgPool) {
    create_blog(&pool, json!({"title": "Same Title"})).await;

    let response = staff_post(
        common::build_test_app(pool.clone()),
        "/api/admin/blogs",
        json!({"title": "Same title"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["message_code"], "UNIQUE_CONSTRAINT");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM blogs")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn oversized_price_is_rejected_not_a_server_error(pool: PgPool) {
    let response = staff_post(
        common::build_test_app(pool.clone()),
        "/api/admin/services",
        json!({"title": "Enterprise Retainer", "price_starting_from": 1.0e9}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["message_code"], "VALIDATION_ERROR");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM services")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn malformed_explicit_slug_is_rejected(pool: PgPool) {
    let response = staff_post(
        common::build_test_app(pool),
        "/api/admin/blogs",
        json!({"title": "Ok", "slug": "has spaces"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["message_code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn taxonomy_rename_keeps_slug(pool: PgPool) {
    let id = common::create_taxonomy(&pool, "service-categories", "Paid Media").await;

    let response = staff_patch(
        common::build_test_app(pool.clone()),
        &format!("/api/admin/taxonomies/service-categories/{id}"),
        json!({"name": "Paid Advertising"}),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Paid Advertising");
    assert_eq!(json["data"]["slug"], "paid-media");

    let response = staff_get(common::build_test_app(pool), "/api/admin/taxonomies/widgets").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Status stamping
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn published_at_is_stamped_once(pool: PgPool) {
    let id = create_blog(&pool, json!({"title": "Stamp"})).await;
    let uri = format!("/api/admin/blogs/{id}");

    let draft = body_json(staff_get(common::build_test_app(pool.clone()), &uri).await).await;
    assert_eq!(draft["data"]["published_at"], serde_json::Value::Null);

    let first = body_json(
        staff_patch(
            common::build_test_app(pool.clone()),
            &uri,
            json!({"status": "published"}),
        )
        .await,
    )
    .await;
    let stamped = first["data"]["published_at"].clone();
    assert!(stamped.is_string());

    staff_patch(common::build_test_app(pool.clone()), &uri, json!({"status": "archived"})).await;
    let again = body_json(
        staff_patch(
            common::build_test_app(pool),
            &uri,
            json!({"status": "published"}),
        )
        .await,
    )
    .await;
    assert_eq!(again["data"]["published_at"], stamped);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn bulk_status_change_stamps_like_single_saves(pool: PgPool) {
    let a = create_blog(&pool, json!({"title": "A"})).await;
    let b = create_blog(&pool, json!({"title": "B"})).await;

    let response = staff_post(
        common::build_test_app(pool.clone()),
        "/api/admin/blogs/bulk-status",
        json!({"ids": [a, b], "status": "published"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["updated"], 2);

    let unstamped: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM blogs WHERE published_at IS NULL")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(unstamped, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn bulk_close_stamps_closed_at(pool: PgPool) {
    let response = staff_post(
        common::build_test_app(pool.clone()),
        "/api/admin/job-postings",
        json!({"title": "Role", "status": "published"}),
    )
    .await;
    let id = body_json(response).await["data"]["id"].as_i64().unwrap();

    staff_post(
        common::build_test_app(pool.clone()),
        "/api/admin/job-postings/bulk-status",
        json!({"ids": [id], "status": "closed"}),
    )
    .await;

    let (published, closed): (bool, bool) = sqlx::query_as(
        "SELECT published_at IS NOT NULL, closed_at IS NOT NULL FROM job_postings WHERE id = $1",
    )
    .bind(id)
    .fetch_one(&pool)
    .await
    .unwrap();
    assert!(published);
    assert!(closed);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn bulk_status_rejects_bad_input(pool: PgPool) {
    let response = staff_post(
        common::build_test_app(pool.clone()),
        "/api/admin/blogs/bulk-status",
        json!({"ids": [], "status": "published"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = staff_post(
        common::build_test_app(pool),
        "/api/admin/services/bulk-status",
        json!({"ids": [1], "status": "closed"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Triage
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn contact_triage_and_delete(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/contact/contacts",
        json!({"full_name": "Barbara"}),
    )
    .await;
    let id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let json = body_json(
        staff_patch(
            common::build_test_app(pool.clone()),
            &format!("/api/admin/contacts/{id}"),
            json!({"is_contacted": true, "notes": "Called back"}),
        )
        .await,
    )
    .await;
    assert_eq!(json["data"]["is_contacted"], true);
    assert_eq!(json["data"]["notes"], "Called back");

    let list = body_json(staff_get(common::build_test_app(pool.clone()), "/api/admin/contacts").await).await;
    assert_eq!(list["count"], 1);

    let response = staff_delete(
        common::build_test_app(pool.clone()),
        &format!("/api/admin/contacts/{id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["deleted"], true);

    let response = staff_delete(
        common::build_test_app(pool),
        &format!("/api/admin/contacts/{id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn review_stamps_reviewed_at(pool: PgPool) {
    let staff = body_json(
        staff_post(
            common::build_test_app(pool.clone()),
            "/api/admin/staff-users",
            json!({"username": "recruiter", "first_name": "Rita"}),
        )
        .await,
    )
    .await;
    let staff_id = staff["data"]["id"].as_i64().unwrap();

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/career/job-applications",
        json!({"first_name": "Alan"}),
    )
    .await;
    let id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let response = staff_patch(
        common::build_test_app(pool.clone()),
        &format!("/api/admin/job-applications/{id}"),
        json!({"status": "shortlisted", "rating": 8, "reviewed_by": staff_id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "shortlisted");
    assert!(json["data"]["reviewed_at"].is_string());

    let response = staff_patch(
        common::build_test_app(pool),
        &format!("/api/admin/job-applications/{id}"),
        json!({"status": "teleported"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn review_reports_mistyped_and_oversized_fields(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/career/job-applications",
        json!({"first_name": "Alan"}),
    )
    .await;
    let id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let response = staff_patch(
        common::build_test_app(pool.clone()),
        &format!("/api/admin/job-applications/{id}"),
        json!({"rating": "high", "offer_amount": 1.0e9, "status": "teleported"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["message_code"], "JOB_APPLICATION_UPDATE_FAILED");
    assert_eq!(json["data"]["rating"], json!(["A valid integer is required."]));
    assert!(json["data"]["offer_amount"].is_array());
    assert!(json["data"]["status"].is_array());

    let status: String = sqlx::query_scalar("SELECT status FROM job_applications WHERE id = $1")
        .bind(id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(status, "pending");
}
