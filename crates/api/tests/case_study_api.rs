//! Public case study endpoints: listing, detail, dynamic fields and leads.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_taxonomy, get, post_json, staff_post};
use serde_json::{json, Value};
use sqlx::PgPool;

async fn create_case_study(pool: &PgPool, body: Value) -> i64 {
    let response = staff_post(
        common::build_test_app(pool.clone()),
        "/api/admin/case-studies",
        body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

async fn add_field(pool: &PgPool, case_study_id: i64, name: &str, sequence: i32, active: bool) {
    let response = staff_post(
        common::build_test_app(pool.clone()),
        "/api/admin/case-study-dynamic-fields",
        json!({
            "owner_id": case_study_id,
            "field_name": name,
            "sequence": sequence,
            "is_active": active,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

fn titles(json: &Value) -> Vec<&str> {
    json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["title"].as_str().unwrap())
        .collect()
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_only_shows_published_case_studies(pool: PgPool) {
    create_case_study(&pool, json!({"title": "Shipped", "status": "published"})).await;
    create_case_study(&pool, json!({"title": "Pending"})).await;

    let response = get(common::build_test_app(pool), "/api/casestudy/case-studies/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["message_code"], "CASE_STUDIES_RETRIEVED");
    assert_eq!(json["count"], 1);
    assert_eq!(json["data"][0]["slug"], "shipped");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn industry_filter_is_a_case_insensitive_substring(pool: PgPool) {
    create_case_study(
        &pool,
        json!({"title": "Ledger", "status": "published", "client_industry": "FinTech"}),
    )
    .await;
    create_case_study(
        &pool,
        json!({"title": "Clinic", "status": "published", "client_industry": "Healthcare"}),
    )
    .await;

    let json = body_json(
        get(
            common::build_test_app(pool),
            "/api/casestudy/case-studies/?industry=fin",
        )
        .await,
    )
    .await;
    assert_eq!(json["count"], 1);
    assert_eq!(titles(&json), ["Ledger"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn search_covers_client_name_and_industry(pool: PgPool) {
    create_case_study(
        &pool,
        json!({
            "title": "Checkout Revamp",
            "status": "published",
            "client_name": "Acme Retail",
        }),
    )
    .await;
    create_case_study(
        &pool,
        json!({
            "title": "Patient Portal",
            "status": "published",
            "client_industry": "Healthcare",
        }),
    )
    .await;
    create_case_study(&pool, json!({"title": "Unrelated", "status": "published"})).await;

    let json = body_json(
        get(
            common::build_test_app(pool.clone()),
            "/api/casestudy/case-studies/?search=ACME",
        )
        .await,
    )
    .await;
    assert_eq!(titles(&json), ["Checkout Revamp"]);

    let json = body_json(
        get(
            common::build_test_app(pool),
            "/api/casestudy/case-studies/?search=health",
        )
        .await,
    )
    .await;
    assert_eq!(titles(&json), ["Patient Portal"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn category_filter_uses_slug(pool: PgPool) {
    let retail = create_taxonomy(&pool, "case-study-categories", "Retail Wins").await;
    create_case_study(
        &pool,
        json!({"title": "Store", "status": "published", "category_id": retail}),
    )
    .await;
    create_case_study(&pool, json!({"title": "Other", "status": "published"})).await;

    let json = body_json(
        get(
            common::build_test_app(pool),
            "/api/casestudy/case-studies/?category=retail-wins",
        )
        .await,
    )
    .await;
    assert_eq!(json["count"], 1);
    assert_eq!(json["data"][0]["category"]["slug"], "retail-wins");
}

// ---------------------------------------------------------------------------
// Detail
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn draft_case_study_detail_is_not_found(pool: PgPool) {
    let id = create_case_study(&pool, json!({"title": "Embargoed"})).await;

    let response = get(
        common::build_test_app(pool),
        &format!("/api/casestudy/case-studies/{id}/"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message_code"], "CASE_STUDY_NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn detail_counts_views_and_embeds_active_fields(pool: PgPool) {
    let id = create_case_study(&pool, json!({"title": "Form", "status": "published"})).await;
    add_field(&pool, id, "budget", 2, true).await;
    add_field(&pool, id, "name", 1, true).await;
    add_field(&pool, id, "legacy", 0, false).await;

    let json = body_json(
        get(
            common::build_test_app(pool),
            &format!("/api/casestudy/case-studies/{id}/"),
        )
        .await,
    )
    .await;
    assert_eq!(json["message_code"], "CASE_STUDY_RETRIEVED");
    assert_eq!(json["data"]["views_count"], 1);

    let names: Vec<&str> = json["data"]["dynamic_fields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["field_name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["name", "budget"]);
}

// ---------------------------------------------------------------------------
// Dynamic fields
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn dynamic_fields_are_keyed_by_case_study_id(pool: PgPool) {
    let id = create_case_study(&pool, json!({"title": "Form"})).await;
    add_field(&pool, id, "email", 1, true).await;

    // The blog parameter name is not accepted here.
    let response = get(
        common::build_test_app(pool.clone()),
        &format!("/api/casestudy/dynamic-fields/?blog_id={id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["message_code"], "VALIDATION_ERROR");

    let response = get(
        common::build_test_app(pool.clone()),
        &format!("/api/casestudy/dynamic-fields/?case_study_id={id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["message_code"], "CASE_STUDY_DYNAMIC_FIELDS_RETRIEVED");
    assert_eq!(json["data"]["case_study_id"], id);
    assert_eq!(json["data"]["total_fields"], 1);

    let response = get(
        common::build_test_app(pool),
        "/api/casestudy/dynamic-fields/?case_study_id=424242",
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message_code"], "CASE_STUDY_NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Leads
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn lead_with_object_data_is_stored(pool: PgPool) {
    let id = create_case_study(&pool, json!({"title": "Form", "status": "published"})).await;

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/casestudy/case-study-leads/",
        json!({"case_study": id, "data": {"name": "Ada", "budget": "50k"}}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["message_code"], "CASE_STUDY_LEAD_CREATED");
    assert_eq!(json["data"]["case_study"], id);
    assert_eq!(json["data"]["data"]["budget"], "50k");

    let stored: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM case_study_leads WHERE case_study_id = $1")
            .bind(id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(stored, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn lead_with_non_object_data_is_rejected(pool: PgPool) {
    let id = create_case_study(&pool, json!({"title": "Form", "status": "published"})).await;

    for data in [json!(["Ada"]), json!("name=Ada"), json!(7)] {
        let response = post_json(
            common::build_test_app(pool.clone()),
            "/api/casestudy/case-study-leads/",
            json!({"case_study": id, "data": data}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["message_code"], "CASE_STUDY_LEAD_CREATION_FAILED");
        assert!(json["data"]["data"].is_array());
    }

    let stored: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM case_study_leads")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(stored, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn lead_for_missing_case_study_is_rejected(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        "/api/casestudy/case-study-leads/",
        json!({"case_study": 999999, "data": {}}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["message_code"], "CASE_STUDY_LEAD_CREATION_FAILED");
    assert_eq!(
        json["data"]["case_study"][0],
        "Invalid pk \"999999\" - object does not exist."
    );
}
