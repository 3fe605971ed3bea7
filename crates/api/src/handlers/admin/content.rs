//! Administrative CRUD for the four content domains.
//!
//! Every write path that can change `status` goes through a repository
//! statement that also applies the publish/close stamps, including the
//! bulk status change.

use axum::extract::State;
use axum::response::IntoResponse;
use martech_core::error::CoreError;
use martech_core::status::{CONTENT_STATUSES, JOB_POSTING_STATUSES};
use martech_core::types::DbId;
use martech_db::models::blog::{CreateBlog, UpdateBlog};
use martech_db::models::case_study::{CreateCaseStudy, UpdateCaseStudy};
use martech_db::models::content::BulkStatusUpdate;
use martech_db::models::job_posting::{CreateJobPosting, UpdateJobPosting};
use martech_db::models::service::{CreateService, UpdateService};
use martech_db::repositories::{BlogRepo, CaseStudyRepo, JobPostingRepo, ServiceRepo};
use serde_json::json;

use super::{check_slug, check_status, deleted, not_found, slug_for_create};
use crate::error::AppResult;
use crate::extract::{ApiJson, ApiPath};
use crate::middleware::staff::RequireStaff;
use crate::response::Envelope;
use crate::state::AppState;

fn check_bulk(input: &BulkStatusUpdate, allowed: &[&str]) -> Result<(), CoreError> {
    if input.ids.is_empty() {
        return Err(CoreError::Validation("ids must not be empty".into()));
    }
    check_status(Some(input.status.as_str()), allowed)
}

// ---------------------------------------------------------------------------
// Blogs
// ---------------------------------------------------------------------------

/// POST /api/admin/blogs/
pub async fn create_blog(
    State(state): State<AppState>,
    _staff: RequireStaff,
    ApiJson(input): ApiJson<CreateBlog>,
) -> AppResult<impl IntoResponse> {
    check_status(input.status.as_deref(), CONTENT_STATUSES)?;
    let slug = slug_for_create(input.slug.as_deref(), input.title.as_deref())?;

    let blog = BlogRepo::create(&state.pool, &input, slug.as_deref()).await?;
    tracing::info!(blog_id = blog.summary.id, slug = ?blog.summary.slug, "Blog created");

    Ok(Envelope::created("BLOG_CREATED", "Blog created successfully", blog))
}

/// GET /api/admin/blogs/{id}/
pub async fn get_blog(
    State(state): State<AppState>,
    _staff: RequireStaff,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let blog = BlogRepo::find_detail(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("Blog", id))?;
    Ok(Envelope::ok("BLOG_RETRIEVED", "Blog retrieved successfully", blog))
}

/// PATCH /api/admin/blogs/{id}/
pub async fn update_blog(
    State(state): State<AppState>,
    _staff: RequireStaff,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(input): ApiJson<UpdateBlog>,
) -> AppResult<impl IntoResponse> {
    check_status(input.status.as_deref(), CONTENT_STATUSES)?;
    check_slug(input.slug.as_deref())?;

    let blog = BlogRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found("Blog", id))?;
    tracing::info!(blog_id = id, status = %blog.summary.status, "Blog updated");

    Ok(Envelope::ok("BLOG_UPDATED", "Blog updated successfully", blog))
}

/// DELETE /api/admin/blogs/{id}/
pub async fn delete_blog(
    State(state): State<AppState>,
    _staff: RequireStaff,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    if !BlogRepo::delete(&state.pool, id).await? {
        return Err(not_found("Blog", id));
    }
    tracing::info!(blog_id = id, "Blog deleted");
    Ok(Envelope::ok("BLOG_DELETED", "Blog deleted successfully", deleted(id)))
}

/// POST /api/admin/blogs/bulk-status/
pub async fn bulk_blog_status(
    State(state): State<AppState>,
    _staff: RequireStaff,
    ApiJson(input): ApiJson<BulkStatusUpdate>,
) -> AppResult<impl IntoResponse> {
    check_bulk(&input, CONTENT_STATUSES)?;

    let updated = BlogRepo::bulk_set_status(&state.pool, &input.ids, &input.status).await?;
    tracing::info!(updated, status = %input.status, "Blog statuses changed");

    Ok(Envelope::ok(
        "BLOGS_STATUS_UPDATED",
        "Blog statuses updated successfully",
        json!({ "updated": updated }),
    ))
}

// ---------------------------------------------------------------------------
// Case studies
// ---------------------------------------------------------------------------

/// POST /api/admin/case-studies/
pub async fn create_case_study(
    State(state): State<AppState>,
    _staff: RequireStaff,
    ApiJson(input): ApiJson<CreateCaseStudy>,
) -> AppResult<impl IntoResponse> {
    check_status(input.status.as_deref(), CONTENT_STATUSES)?;
    let slug = slug_for_create(input.slug.as_deref(), input.title.as_deref())?;

    let case_study = CaseStudyRepo::create(&state.pool, &input, slug.as_deref()).await?;
    tracing::info!(case_study_id = case_study.summary.id, "Case study created");

    Ok(Envelope::created(
        "CASE_STUDY_CREATED",
        "Case study created successfully",
        case_study,
    ))
}

/// GET /api/admin/case-studies/{id}/
pub async fn get_case_study(
    State(state): State<AppState>,
    _staff: RequireStaff,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let case_study = CaseStudyRepo::find_detail(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("CaseStudy", id))?;
    Ok(Envelope::ok(
        "CASE_STUDY_RETRIEVED",
        "Case study retrieved successfully",
        case_study,
    ))
}

/// PATCH /api/admin/case-studies/{id}/
pub async fn update_case_study(
    State(state): State<AppState>,
    _staff: RequireStaff,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(input): ApiJson<UpdateCaseStudy>,
) -> AppResult<impl IntoResponse> {
    check_status(input.status.as_deref(), CONTENT_STATUSES)?;
    check_slug(input.slug.as_deref())?;

    let case_study = CaseStudyRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found("CaseStudy", id))?;
    tracing::info!(case_study_id = id, "Case study updated");

    Ok(Envelope::ok(
        "CASE_STUDY_UPDATED",
        "Case study updated successfully",
        case_study,
    ))
}

/// DELETE /api/admin/case-studies/{id}/
pub async fn delete_case_study(
    State(state): State<AppState>,
    _staff: RequireStaff,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    if !CaseStudyRepo::delete(&state.pool, id).await? {
        return Err(not_found("CaseStudy", id));
    }
    tracing::info!(case_study_id = id, "Case study deleted");
    Ok(Envelope::ok(
        "CASE_STUDY_DELETED",
        "Case study deleted successfully",
        deleted(id),
    ))
}

/// POST /api/admin/case-studies/bulk-status/
pub async fn bulk_case_study_status(
    State(state): State<AppState>,
    _staff: RequireStaff,
    ApiJson(input): ApiJson<BulkStatusUpdate>,
) -> AppResult<impl IntoResponse> {
    check_bulk(&input, CONTENT_STATUSES)?;

    let updated = CaseStudyRepo::bulk_set_status(&state.pool, &input.ids, &input.status).await?;
    tracing::info!(updated, status = %input.status, "Case study statuses changed");

    Ok(Envelope::ok(
        "CASE_STUDIES_STATUS_UPDATED",
        "Case study statuses updated successfully",
        json!({ "updated": updated }),
    ))
}

// ---------------------------------------------------------------------------
// Job postings
// ---------------------------------------------------------------------------

/// POST /api/admin/job-postings/
pub async fn create_job_posting(
    State(state): State<AppState>,
    _staff: RequireStaff,
    ApiJson(input): ApiJson<CreateJobPosting>,
) -> AppResult<impl IntoResponse> {
    check_status(input.status.as_deref(), JOB_POSTING_STATUSES)?;
    let slug = slug_for_create(input.slug.as_deref(), input.title.as_deref())?;

    let posting = JobPostingRepo::create(&state.pool, &input, slug.as_deref()).await?;
    tracing::info!(job_posting_id = posting.summary.id, "Job posting created");

    Ok(Envelope::created(
        "JOB_POSTING_CREATED",
        "Job posting created successfully",
        posting,
    ))
}

/// GET /api/admin/job-postings/{id}/
pub async fn get_job_posting(
    State(state): State<AppState>,
    _staff: RequireStaff,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let posting = JobPostingRepo::find_detail(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("JobPosting", id))?;
    Ok(Envelope::ok(
        "JOB_POSTING_RETRIEVED",
        "Job posting retrieved successfully",
        posting,
    ))
}

/// PATCH /api/admin/job-postings/{id}/
pub async fn update_job_posting(
    State(state): State<AppState>,
    _staff: RequireStaff,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(input): ApiJson<UpdateJobPosting>,
) -> AppResult<impl IntoResponse> {
    check_status(input.status.as_deref(), JOB_POSTING_STATUSES)?;
    check_slug(input.slug.as_deref())?;

    let posting = JobPostingRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found("JobPosting", id))?;
    tracing::info!(job_posting_id = id, status = %posting.summary.status, "Job posting updated");

    Ok(Envelope::ok(
        "JOB_POSTING_UPDATED",
        "Job posting updated successfully",
        posting,
    ))
}

/// DELETE /api/admin/job-postings/{id}/
pub async fn delete_job_posting(
    State(state): State<AppState>,
    _staff: RequireStaff,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    if !JobPostingRepo::delete(&state.pool, id).await? {
        return Err(not_found("JobPosting", id));
    }
    tracing::info!(job_posting_id = id, "Job posting deleted");
    Ok(Envelope::ok(
        "JOB_POSTING_DELETED",
        "Job posting deleted successfully",
        deleted(id),
    ))
}

/// POST /api/admin/job-postings/bulk-status/
pub async fn bulk_job_posting_status(
    State(state): State<AppState>,
    _staff: RequireStaff,
    ApiJson(input): ApiJson<BulkStatusUpdate>,
) -> AppResult<impl IntoResponse> {
    check_bulk(&input, JOB_POSTING_STATUSES)?;

    let updated =
        JobPostingRepo::bulk_set_status(&state.pool, &input.ids, &input.status).await?;
    tracing::info!(updated, status = %input.status, "Job posting statuses changed");

    Ok(Envelope::ok(
        "JOB_POSTINGS_STATUS_UPDATED",
        "Job posting statuses updated successfully",
        json!({ "updated": updated }),
    ))
}

// ---------------------------------------------------------------------------
// Services
// ---------------------------------------------------------------------------

/// POST /api/admin/services/
pub async fn create_service(
    State(state): State<AppState>,
    _staff: RequireStaff,
    ApiJson(input): ApiJson<CreateService>,
) -> AppResult<impl IntoResponse> {
    check_status(input.status.as_deref(), CONTENT_STATUSES)?;
    let slug = slug_for_create(input.slug.as_deref(), input.title.as_deref())?;

    let service = ServiceRepo::create(&state.pool, &input, slug.as_deref()).await?;
    tracing::info!(service_id = service.summary.id, "Service created");

    Ok(Envelope::created(
        "SERVICE_CREATED",
        "Service created successfully",
        service,
    ))
}

/// GET /api/admin/services/{id}/
pub async fn get_service(
    State(state): State<AppState>,
    _staff: RequireStaff,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let service = ServiceRepo::find_detail(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("Service", id))?;
    Ok(Envelope::ok(
        "SERVICE_RETRIEVED",
        "Service retrieved successfully",
        service,
    ))
}

/// PATCH /api/admin/services/{id}/
pub async fn update_service(
    State(state): State<AppState>,
    _staff: RequireStaff,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(input): ApiJson<UpdateService>,
) -> AppResult<impl IntoResponse> {
    check_status(input.status.as_deref(), CONTENT_STATUSES)?;
    check_slug(input.slug.as_deref())?;

    let service = ServiceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found("Service", id))?;
    tracing::info!(service_id = id, "Service updated");

    Ok(Envelope::ok(
        "SERVICE_UPDATED",
        "Service updated successfully",
        service,
    ))
}

/// DELETE /api/admin/services/{id}/
pub async fn delete_service(
    State(state): State<AppState>,
    _staff: RequireStaff,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    if !ServiceRepo::delete(&state.pool, id).await? {
        return Err(not_found("Service", id));
    }
    tracing::info!(service_id = id, "Service deleted");
    Ok(Envelope::ok(
        "SERVICE_DELETED",
        "Service deleted successfully",
        deleted(id),
    ))
}

/// POST /api/admin/services/bulk-status/
pub async fn bulk_service_status(
    State(state): State<AppState>,
    _staff: RequireStaff,
    ApiJson(input): ApiJson<BulkStatusUpdate>,
) -> AppResult<impl IntoResponse> {
    check_bulk(&input, CONTENT_STATUSES)?;

    let updated = ServiceRepo::bulk_set_status(&state.pool, &input.ids, &input.status).await?;
    tracing::info!(updated, status = %input.status, "Service statuses changed");

    Ok(Envelope::ok(
        "SERVICES_STATUS_UPDATED",
        "Service statuses updated successfully",
        json!({ "updated": updated }),
    ))
}
