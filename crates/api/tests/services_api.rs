//! Public service endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json, staff_post};
use serde_json::{json, Value};
use sqlx::PgPool;

async fn create_service(pool: &PgPool, body: Value) -> i64 {
    let response = staff_post(common::build_test_app(pool.clone()), "/api/admin/services", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_filters_by_flags_and_type(pool: PgPool) {
    create_service(
        &pool,
        json!({
            "title": "SEO Audit",
            "status": "published",
            "is_free": true,
            "price_starting_from": 0,
            "service_type": "Consulting",
        }),
    )
    .await;
    create_service(
        &pool,
        json!({"title": "Managed Ads", "status": "published", "price_starting_from": 499.5}),
    )
    .await;

    let json = body_json(
        get(common::build_test_app(pool.clone()), "/api/services/services/?is_free=true").await,
    )
    .await;
    assert_eq!(json["message_code"], "SERVICES_RETRIEVED");
    assert_eq!(json["count"], 1);
    assert_eq!(json["data"][0]["title"], "SEO Audit");

    let json = body_json(
        get(
            common::build_test_app(pool.clone()),
            "/api/services/services/?service_type=consult",
        )
        .await,
    )
    .await;
    assert_eq!(json["count"], 1);

    let json = body_json(
        get(
            common::build_test_app(pool),
            "/api/services/services/?ordering=-price_starting_from",
        )
        .await,
    )
    .await;
    assert_eq!(json["data"][0]["title"], "Managed Ads");
    assert_eq!(json["data"][0]["price_starting_from"], 499.5);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_service_is_not_found(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/api/services/services/77/").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message_code"], "SERVICE_NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn service_lead_bumps_inquiries(pool: PgPool) {
    let id = create_service(&pool, json!({"title": "SEO Audit", "status": "published"})).await;

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/services/service-leads/",
        json!({
            "service": id,
            "full_name": "Linus",
            "email": "linus@example.com",
            "inquiry_type": "quote",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["message_code"], "SERVICE_LEAD_CREATED");
    assert_eq!(json["data"]["inquiry_type"], "quote");

    let (inquiries, lead_source): (i32, String) = sqlx::query_as(
        "SELECT s.inquiries_count, l.lead_source \
         FROM services s JOIN service_leads l ON l.service_id = s.id WHERE s.id = $1",
    )
    .bind(id)
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(inquiries, 1);
    assert_eq!(lead_source, "website");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn service_lead_with_unknown_choice_is_rejected(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        "/api/services/service-leads/",
        json!({"inquiry_type": "haggle", "lead_source": "billboard"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["message_code"], "SERVICE_LEAD_CREATION_FAILED");
    assert!(json["data"]["inquiry_type"].is_array());
    assert!(json["data"]["lead_source"].is_array());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn service_lead_with_mistyped_service_is_a_field_error(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        "/api/services/service-leads/",
        json!({"service": "seo-audit", "full_name": "Ada"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["message_code"], "SERVICE_LEAD_CREATION_FAILED");
    assert_eq!(json["data"]["service"], json!(["A valid integer is required."]));
}
