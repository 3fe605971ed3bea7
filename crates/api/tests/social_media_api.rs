//! Public social media links.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, staff_post};
use serde_json::{json, Value};
use sqlx::PgPool;

async fn create_link(pool: &PgPool, body: Value) -> i64 {
    let response = staff_post(
        common::build_test_app(pool.clone()),
        "/api/admin/social-media",
        body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn only_active_links_are_listed_by_platform(pool: PgPool) {
    create_link(&pool, json!({"platform": "youtube", "url": "https://youtube.com/x"})).await;
    create_link(&pool, json!({"platform": "github", "url": "https://github.com/x"})).await;
    let hidden = create_link(&pool, json!({"platform": "facebook", "is_active": false})).await;

    let response = get(common::build_test_app(pool.clone()), "/api/social-media/social-media/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["message_code"], "SOCIAL_MEDIA_RETRIEVED");
    assert!(json.get("count").is_none());
    let platforms: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["platform"].as_str().unwrap())
        .collect();
    assert_eq!(platforms, ["github", "youtube"]);
    assert_eq!(json["data"][0]["display_name"], "GitHub");

    let response = get(
        common::build_test_app(pool),
        &format!("/api/social-media/social-media/{hidden}/"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message_code"], "SOCIAL_MEDIA_NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn platform_filter_narrows_the_list(pool: PgPool) {
    create_link(&pool, json!({"platform": "linkedin"})).await;
    create_link(&pool, json!({"platform": "twitter"})).await;

    let json = body_json(
        get(
            common::build_test_app(pool),
            "/api/social-media/social-media/?platform=linkedin",
        )
        .await,
    )
    .await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"][0]["platform"], "linkedin");
}
