//! Administrative CRUD for taxonomies and job locations.
//!
//! The eight `{name, slug, description, is_active}` kinds share one set of
//! handlers keyed by their URL segment (`blog-categories`, `job-types`, ...).
//! Job locations carry extra columns and get their own handlers.

use axum::extract::State;
use axum::response::IntoResponse;
use martech_core::taxonomy::TaxonomyKind;
use martech_core::types::DbId;
use martech_db::models::taxonomy::{
    CreateJobLocation, CreateTaxonomy, UpdateJobLocation, UpdateTaxonomy,
};
use martech_db::repositories::{JobLocationRepo, TaxonomyRepo};

use super::{check_slug, deleted, not_found};
use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath};
use crate::middleware::staff::RequireStaff;
use crate::response::Envelope;
use crate::state::AppState;

fn kind_from_path(segment: &str) -> Result<TaxonomyKind, AppError> {
    TaxonomyKind::from_path_segment(segment)
        .ok_or_else(|| AppError::not_found("NOT_FOUND", "Resource not found"))
}

// ---------------------------------------------------------------------------
// Shared taxonomy kinds
// ---------------------------------------------------------------------------

/// GET /api/admin/taxonomies/{kind}/
pub async fn list_taxonomies(
    State(state): State<AppState>,
    _staff: RequireStaff,
    ApiPath(kind): ApiPath<String>,
) -> AppResult<impl IntoResponse> {
    let kind = kind_from_path(&kind)?;
    let items = TaxonomyRepo::list(&state.pool, kind).await?;
    Ok(Envelope::ok(
        "TAXONOMIES_RETRIEVED",
        "Taxonomies retrieved successfully",
        items,
    ))
}

/// POST /api/admin/taxonomies/{kind}/
///
/// The slug is derived from `name` when not supplied.
pub async fn create_taxonomy(
    State(state): State<AppState>,
    _staff: RequireStaff,
    ApiPath(kind): ApiPath<String>,
    ApiJson(input): ApiJson<CreateTaxonomy>,
) -> AppResult<impl IntoResponse> {
    let kind = kind_from_path(&kind)?;
    check_slug(input.slug.as_deref().map(str::trim).filter(|s| !s.is_empty()))?;

    let item = TaxonomyRepo::create(&state.pool, kind, &input).await?;
    tracing::info!(
        kind = kind.entity_name(),
        taxonomy_id = item.id,
        slug = ?item.slug,
        "Taxonomy created"
    );

    Ok(Envelope::created(
        "TAXONOMY_CREATED",
        "Taxonomy created successfully",
        item,
    ))
}

/// GET /api/admin/taxonomies/{kind}/{id}/
pub async fn get_taxonomy(
    State(state): State<AppState>,
    _staff: RequireStaff,
    ApiPath((kind, id)): ApiPath<(String, DbId)>,
) -> AppResult<impl IntoResponse> {
    let kind = kind_from_path(&kind)?;
    let item = TaxonomyRepo::find_by_id(&state.pool, kind, id)
        .await?
        .ok_or_else(|| not_found(kind.entity_name(), id))?;
    Ok(Envelope::ok(
        "TAXONOMY_RETRIEVED",
        "Taxonomy retrieved successfully",
        item,
    ))
}

/// PATCH /api/admin/taxonomies/{kind}/{id}/
///
/// Renaming leaves the slug untouched unless a new one is sent.
pub async fn update_taxonomy(
    State(state): State<AppState>,
    _staff: RequireStaff,
    ApiPath((kind, id)): ApiPath<(String, DbId)>,
    ApiJson(input): ApiJson<UpdateTaxonomy>,
) -> AppResult<impl IntoResponse> {
    let kind = kind_from_path(&kind)?;
    check_slug(input.slug.as_deref())?;

    let item = TaxonomyRepo::update(&state.pool, kind, id, &input)
        .await?
        .ok_or_else(|| not_found(kind.entity_name(), id))?;
    tracing::info!(kind = kind.entity_name(), taxonomy_id = id, "Taxonomy updated");

    Ok(Envelope::ok(
        "TAXONOMY_UPDATED",
        "Taxonomy updated successfully",
        item,
    ))
}

/// DELETE /api/admin/taxonomies/{kind}/{id}/
pub async fn delete_taxonomy(
    State(state): State<AppState>,
    _staff: RequireStaff,
    ApiPath((kind, id)): ApiPath<(String, DbId)>,
) -> AppResult<impl IntoResponse> {
    let kind = kind_from_path(&kind)?;
    if !TaxonomyRepo::delete(&state.pool, kind, id).await? {
        return Err(not_found(kind.entity_name(), id));
    }
    tracing::info!(kind = kind.entity_name(), taxonomy_id = id, "Taxonomy deleted");
    Ok(Envelope::ok(
        "TAXONOMY_DELETED",
        "Taxonomy deleted successfully",
        deleted(id),
    ))
}

// ---------------------------------------------------------------------------
// Job locations
// ---------------------------------------------------------------------------

/// GET /api/admin/job-locations/
pub async fn list_job_locations(
    State(state): State<AppState>,
    _staff: RequireStaff,
) -> AppResult<impl IntoResponse> {
    let locations = JobLocationRepo::list(&state.pool).await?;
    Ok(Envelope::ok(
        "JOB_LOCATIONS_RETRIEVED",
        "Job locations retrieved successfully",
        locations,
    ))
}

/// POST /api/admin/job-locations/
pub async fn create_job_location(
    State(state): State<AppState>,
    _staff: RequireStaff,
    ApiJson(input): ApiJson<CreateJobLocation>,
) -> AppResult<impl IntoResponse> {
    check_slug(input.slug.as_deref().map(str::trim).filter(|s| !s.is_empty()))?;

    let location = JobLocationRepo::create(&state.pool, &input).await?;
    tracing::info!(job_location_id = location.id, "Job location created");

    Ok(Envelope::created(
        "JOB_LOCATION_CREATED",
        "Job location created successfully",
        location,
    ))
}

/// GET /api/admin/job-locations/{id}/
pub async fn get_job_location(
    State(state): State<AppState>,
    _staff: RequireStaff,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let location = JobLocationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("JobLocation", id))?;
    Ok(Envelope::ok(
        "JOB_LOCATION_RETRIEVED",
        "Job location retrieved successfully",
        location,
    ))
}

/// PATCH /api/admin/job-locations/{id}/
pub async fn update_job_location(
    State(state): State<AppState>,
    _staff: RequireStaff,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(input): ApiJson<UpdateJobLocation>,
) -> AppResult<impl IntoResponse> {
    check_slug(input.slug.as_deref())?;

    let location = JobLocationRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found("JobLocation", id))?;
    tracing::info!(job_location_id = id, "Job location updated");

    Ok(Envelope::ok(
        "JOB_LOCATION_UPDATED",
        "Job location updated successfully",
        location,
    ))
}

/// DELETE /api/admin/job-locations/{id}/
pub async fn delete_job_location(
    State(state): State<AppState>,
    _staff: RequireStaff,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    if !JobLocationRepo::delete(&state.pool, id).await? {
        return Err(not_found("JobLocation", id));
    }
    tracing::info!(job_location_id = id, "Job location deleted");
    Ok(Envelope::ok(
        "JOB_LOCATION_DELETED",
        "Job location deleted successfully",
        deleted(id),
    ))
}
