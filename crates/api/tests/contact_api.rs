//! Public contact form.

mod common;

use axum::http::StatusCode;
use common::{body_json, post_json};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn contact_is_stored_and_echoed(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/contact/contacts/",
        json!({
            "full_name": "Margaret Hamilton",
            "email": "margaret@example.com",
            "requirements": "A landing page",
            "utm_source": "newsletter",
            "is_contacted": true,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["status"], true);
    assert_eq!(json["message_code"], "CONTACT_CREATED");
    assert_eq!(json["message"], "Contact Form Submitted Successfully");
    assert_eq!(json["data"]["full_name"], "Margaret Hamilton");
    assert!(json["data"]["created_at"].is_string());

    // Triage flags are never taken from the caller.
    let contacted: bool = sqlx::query_scalar("SELECT is_contacted FROM contacts")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert!(!contacted);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn invalid_contact_reports_field_errors(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/contact/contacts/",
        json!({
            "email": "nope",
            "phone": "0123456789012345678901234",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["status"], false);
    assert_eq!(json["message_code"], "CONTACT_CREATION_FAILED");
    assert!(json["data"]["email"].is_array());
    assert!(json["data"]["phone"].is_array());

    let stored: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contacts")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(stored, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn mistyped_fields_are_reported_per_field(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/contact/contacts/",
        json!({"full_name": 42, "phone": true, "email": "not-an-email"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["message_code"], "CONTACT_CREATION_FAILED");
    assert_eq!(json["data"]["full_name"], json!(["Not a valid string."]));
    assert_eq!(json["data"]["phone"], json!(["Not a valid string."]));
    assert!(json["data"]["email"].is_array());

    let stored: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contacts")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(stored, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn non_object_body_is_a_validation_error(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        "/api/contact/contacts/",
        json!(["full_name", "Ada"]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["message_code"], "VALIDATION_ERROR");
}
