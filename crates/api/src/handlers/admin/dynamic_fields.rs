//! Administrative management of blog and case-study form fields.

use std::collections::HashMap;

use axum::extract::State;
use axum::response::IntoResponse;
use martech_core::dynamic_form::FormOwner;
use martech_core::error::CoreError;
use martech_core::types::DbId;
use martech_db::models::dynamic_field::{CreateDynamicField, DynamicField, UpdateDynamicField};
use martech_db::repositories::DynamicFieldRepo;

use super::{deleted, not_found};
use crate::error::AppResult;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::handlers::dynamic_form::owner_id_param;
use crate::middleware::staff::RequireStaff;
use crate::response::Envelope;
use crate::state::AppState;

const FIELD_ENTITY: &str = "DynamicField";

async fn list(
    state: &AppState,
    owner: FormOwner,
    params: &HashMap<String, String>,
) -> AppResult<Envelope<Vec<DynamicField>>> {
    let owner_id = owner_id_param(owner, params)?;
    if !DynamicFieldRepo::owner_exists(&state.pool, owner, owner_id).await? {
        return Err(not_found(owner.entity_name(), owner_id));
    }

    let fields = DynamicFieldRepo::list_all(&state.pool, owner, owner_id).await?;
    Ok(Envelope::ok(
        "DYNAMIC_FIELDS_RETRIEVED",
        "Dynamic fields retrieved successfully",
        fields,
    ))
}

async fn create(
    state: &AppState,
    owner: FormOwner,
    input: CreateDynamicField,
) -> AppResult<impl IntoResponse> {
    if input.field_name.trim().is_empty() {
        return Err(CoreError::Validation("field_name must not be blank".into()).into());
    }
    if !DynamicFieldRepo::owner_exists(&state.pool, owner, input.owner_id).await? {
        return Err(not_found(owner.entity_name(), input.owner_id));
    }

    let field = DynamicFieldRepo::create(&state.pool, owner, &input).await?;
    tracing::info!(
        owner = owner.entity_name(),
        owner_id = input.owner_id,
        field_id = field.id,
        "Dynamic field created"
    );

    Ok(Envelope::created(
        "DYNAMIC_FIELD_CREATED",
        "Dynamic field created successfully",
        field,
    ))
}

async fn update(
    state: &AppState,
    owner: FormOwner,
    id: DbId,
    input: UpdateDynamicField,
) -> AppResult<impl IntoResponse> {
    if input.field_name.as_deref().is_some_and(|n| n.trim().is_empty()) {
        return Err(CoreError::Validation("field_name must not be blank".into()).into());
    }

    let field = DynamicFieldRepo::update(&state.pool, owner, id, &input)
        .await?
        .ok_or_else(|| not_found(FIELD_ENTITY, id))?;
    tracing::info!(owner = owner.entity_name(), field_id = id, "Dynamic field updated");

    Ok(Envelope::ok(
        "DYNAMIC_FIELD_UPDATED",
        "Dynamic field updated successfully",
        field,
    ))
}

async fn delete(state: &AppState, owner: FormOwner, id: DbId) -> AppResult<impl IntoResponse> {
    if !DynamicFieldRepo::delete(&state.pool, owner, id).await? {
        return Err(not_found(FIELD_ENTITY, id));
    }
    tracing::info!(owner = owner.entity_name(), field_id = id, "Dynamic field deleted");
    Ok(Envelope::ok(
        "DYNAMIC_FIELD_DELETED",
        "Dynamic field deleted successfully",
        deleted(id),
    ))
}

// ---------------------------------------------------------------------------
// Blog fields
// ---------------------------------------------------------------------------

/// GET /api/admin/blog-dynamic-fields/?blog_id=
///
/// Includes inactive fields.
pub async fn list_blog_fields(
    State(state): State<AppState>,
    _staff: RequireStaff,
    ApiQuery(params): ApiQuery<HashMap<String, String>>,
) -> AppResult<impl IntoResponse> {
    list(&state, FormOwner::Blog, &params).await
}

/// POST /api/admin/blog-dynamic-fields/
pub async fn create_blog_field(
    State(state): State<AppState>,
    _staff: RequireStaff,
    ApiJson(input): ApiJson<CreateDynamicField>,
) -> AppResult<impl IntoResponse> {
    create(&state, FormOwner::Blog, input).await
}

/// PATCH /api/admin/blog-dynamic-fields/{id}/
pub async fn update_blog_field(
    State(state): State<AppState>,
    _staff: RequireStaff,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(input): ApiJson<UpdateDynamicField>,
) -> AppResult<impl IntoResponse> {
    update(&state, FormOwner::Blog, id, input).await
}

/// DELETE /api/admin/blog-dynamic-fields/{id}/
pub async fn delete_blog_field(
    State(state): State<AppState>,
    _staff: RequireStaff,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    delete(&state, FormOwner::Blog, id).await
}

// ---------------------------------------------------------------------------
// Case study fields
// ---------------------------------------------------------------------------

/// GET /api/admin/case-study-dynamic-fields/?case_study_id=
pub async fn list_case_study_fields(
    State(state): State<AppState>,
    _staff: RequireStaff,
    ApiQuery(params): ApiQuery<HashMap<String, String>>,
) -> AppResult<impl IntoResponse> {
    list(&state, FormOwner::CaseStudy, &params).await
}

/// POST /api/admin/case-study-dynamic-fields/
pub async fn create_case_study_field(
    State(state): State<AppState>,
    _staff: RequireStaff,
    ApiJson(input): ApiJson<CreateDynamicField>,
) -> AppResult<impl IntoResponse> {
    create(&state, FormOwner::CaseStudy, input).await
}

/// PATCH /api/admin/case-study-dynamic-fields/{id}/
pub async fn update_case_study_field(
    State(state): State<AppState>,
    _staff: RequireStaff,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(input): ApiJson<UpdateDynamicField>,
) -> AppResult<impl IntoResponse> {
    update(&state, FormOwner::CaseStudy, id, input).await
}

/// DELETE /api/admin/case-study-dynamic-fields/{id}/
pub async fn delete_case_study_field(
    State(state): State<AppState>,
    _staff: RequireStaff,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    delete(&state, FormOwner::CaseStudy, id).await
}
