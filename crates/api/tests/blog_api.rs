//! Public blog endpoints: listing, detail, dynamic fields and leads.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_blog, create_taxonomy, get, post_json, staff_post};
use serde_json::json;
use sqlx::PgPool;

async fn add_field(pool: &PgPool, blog_id: i64, name: &str, sequence: i32, active: bool) {
    let response = staff_post(
        common::build_test_app(pool.clone()),
        "/api/admin/blog-dynamic-fields",
        json!({
            "owner_id": blog_id,
            "field_name": name,
            "sequence": sequence,
            "is_active": active,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_only_shows_published_blogs(pool: PgPool) {
    create_blog(&pool, json!({"title": "Live", "status": "published"})).await;
    create_blog(&pool, json!({"title": "Draft"})).await;

    let response = get(common::build_test_app(pool), "/api/blog/blogs/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], true);
    assert_eq!(json["message_code"], "BLOGS_RETRIEVED");
    assert_eq!(json["count"], 1);
    assert_eq!(json["next"], serde_json::Value::Null);
    assert_eq!(json["data"][0]["title"], "Live");
    assert_eq!(json["data"][0]["slug"], "live");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn category_and_tag_filters_use_slugs(pool: PgPool) {
    let news = create_taxonomy(&pool, "blog-categories", "Company News").await;
    let rust = create_taxonomy(&pool, "blog-tags", "Rust").await;
    let web = create_taxonomy(&pool, "blog-tags", "Web").await;

    create_blog(
        &pool,
        json!({
            "title": "Tagged",
            "status": "published",
            "category_id": news,
            "tag_ids": [rust, web],
        }),
    )
    .await;
    create_blog(&pool, json!({"title": "Plain", "status": "published"})).await;

    let response = get(
        common::build_test_app(pool.clone()),
        "/api/blog/blogs/?category=company-news",
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["count"], 1);
    assert_eq!(json["data"][0]["category"]["slug"], "company-news");
    assert_eq!(json["data"][0]["tags"].as_array().unwrap().len(), 2);

    // A blog matching through one tag still appears once.
    let response = get(common::build_test_app(pool), "/api/blog/blogs/?tag=rust").await;
    let json = body_json(response).await;
    assert_eq!(json["count"], 1);
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn search_is_case_insensitive(pool: PgPool) {
    create_blog(
        &pool,
        json!({"title": "Scaling Postgres", "status": "published"}),
    )
    .await;
    create_blog(&pool, json!({"title": "Other", "status": "published"})).await;

    let response = get(common::build_test_app(pool), "/api/blog/blogs/?search=POSTGRES").await;
    let json = body_json(response).await;
    assert_eq!(json["count"], 1);
    assert_eq!(json["data"][0]["title"], "Scaling Postgres");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn featured_flag_filters_both_ways(pool: PgPool) {
    create_blog(
        &pool,
        json!({"title": "Headline", "status": "published", "is_featured": true}),
    )
    .await;
    create_blog(&pool, json!({"title": "Routine", "status": "published"})).await;

    for (uri, count, first) in [
        ("/api/blog/blogs/?is_featured=true", 1, Some("Headline")),
        ("/api/blog/blogs/?is_featured=false", 1, Some("Routine")),
        ("/api/blog/blogs/", 2, None),
    ] {
        let json = body_json(get(common::build_test_app(pool.clone()), uri).await).await;
        assert_eq!(json["count"], count, "{uri}");
        if let Some(title) = first {
            assert_eq!(json["data"][0]["title"], title, "{uri}");
        }
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn pagination_links_preserve_other_parameters(pool: PgPool) {
    for i in 0..21 {
        create_blog(
            &pool,
            json!({"title": format!("Post {i}"), "status": "published", "is_featured": true}),
        )
        .await;
    }

    let response = get(
        common::build_test_app(pool.clone()),
        "/api/blog/blogs/?is_featured=true",
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["count"], 21);
    assert_eq!(json["data"].as_array().unwrap().len(), 20);
    assert_eq!(json["next"], "/api/blog/blogs/?is_featured=true&page=2");
    assert_eq!(json["previous"], serde_json::Value::Null);

    let response = get(
        common::build_test_app(pool.clone()),
        "/api/blog/blogs/?is_featured=true&page=2",
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
    assert_eq!(json["previous"], "/api/blog/blogs/?is_featured=true");

    // Past the end: empty page, no next link.
    let response = get(common::build_test_app(pool), "/api/blog/blogs/?page=9").await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
    assert_eq!(json["next"], serde_json::Value::Null);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn bad_page_and_ordering_are_validation_errors(pool: PgPool) {
    let response = get(common::build_test_app(pool.clone()), "/api/blog/blogs/?page=abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["message_code"], "VALIDATION_ERROR");

    let response = get(common::build_test_app(pool), "/api/blog/blogs/?ordering=-secret").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Detail
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn draft_blog_detail_is_not_found(pool: PgPool) {
    let id = create_blog(&pool, json!({"title": "Hidden"})).await;

    let response = get(common::build_test_app(pool), &format!("/api/blog/blogs/{id}/")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["message_code"], "BLOG_NOT_FOUND");
    assert_eq!(json["message"], "Blog Not Found");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn each_detail_read_counts_one_view(pool: PgPool) {
    let id = create_blog(&pool, json!({"title": "Counted", "status": "published"})).await;
    let uri = format!("/api/blog/blogs/{id}/");

    let first = body_json(get(common::build_test_app(pool.clone()), &uri).await).await;
    let second = body_json(get(common::build_test_app(pool), &uri).await).await;

    assert_eq!(first["message_code"], "BLOG_RETRIEVED");
    assert_eq!(first["data"]["views_count"], 1);
    assert_eq!(second["data"]["views_count"], 2);
    assert_eq!(second["data"]["engagement_score"], 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn detail_embeds_active_fields_in_sequence_order(pool: PgPool) {
    let id = create_blog(&pool, json!({"title": "Form", "status": "published"})).await;
    add_field(&pool, id, "company", 2, true).await;
    add_field(&pool, id, "name", 1, true).await;
    add_field(&pool, id, "retired", 0, false).await;

    let json = body_json(
        get(common::build_test_app(pool), &format!("/api/blog/blogs/{id}/")).await,
    )
    .await;
    let names: Vec<&str> = json["data"]["dynamic_fields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["field_name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["name", "company"]);
}

// ---------------------------------------------------------------------------
// Dynamic fields
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn dynamic_fields_require_blog_id(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/api/blog/dynamic-fields/").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["message_code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn dynamic_fields_for_unknown_blog_is_not_found(pool: PgPool) {
    let response = get(
        common::build_test_app(pool),
        "/api/blog/dynamic-fields/?blog_id=424242",
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message_code"], "BLOG_NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn dynamic_fields_list_active_fields(pool: PgPool) {
    let id = create_blog(&pool, json!({"title": "Form"})).await;
    add_field(&pool, id, "email", 1, true).await;
    add_field(&pool, id, "old", 2, false).await;

    let response = get(
        common::build_test_app(pool),
        &format!("/api/blog/dynamic-fields/?blog_id={id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["message_code"], "BLOG_DYNAMIC_FIELDS_RETRIEVED");
    assert_eq!(json["data"]["blog_id"], id);
    assert_eq!(json["data"]["total_fields"], 1);
    assert_eq!(json["data"]["fields"][0]["field_name"], "email");
}

// ---------------------------------------------------------------------------
// Leads
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn lead_with_object_data_is_stored(pool: PgPool) {
    let id = create_blog(&pool, json!({"title": "Form", "status": "published"})).await;

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/blog/blog-leads/",
        json!({"blog": id, "data": {"name": "Ada", "company": "Engines"}}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["message_code"], "BLOG_LEAD_CREATED");
    assert_eq!(json["data"]["blog"], id);
    assert_eq!(json["data"]["data"]["name"], "Ada");

    let stored: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM blog_leads WHERE blog_id = $1")
        .bind(id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(stored, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn lead_with_string_data_is_rejected(pool: PgPool) {
    let id = create_blog(&pool, json!({"title": "Form", "status": "published"})).await;

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/blog/blog-leads/",
        json!({"blog": id, "data": "name=Ada"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["message_code"], "BLOG_LEAD_CREATION_FAILED");
    assert!(json["data"]["data"].is_array());

    let stored: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM blog_leads")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(stored, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn lead_for_missing_blog_reports_every_error(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        "/api/blog/blog-leads/",
        json!({"blog": 999999}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(
        json["data"]["blog"][0],
        "Invalid pk \"999999\" - object does not exist."
    );
    assert_eq!(json["data"]["data"][0], "This field is required.");
}
