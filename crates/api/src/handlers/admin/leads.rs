//! Lead triage: every captured submission is listed newest first and can
//! be marked contacted/converted with staff notes.

use axum::extract::{OriginalUri, State};
use axum::http::Uri;
use axum::response::IntoResponse;
use martech_core::career::APPLICATION_STATUSES;
use martech_core::dynamic_form::FormOwner;
use martech_core::listing::parse_page;
use martech_core::types::DbId;
use martech_core::validation::FieldErrors;
use martech_db::models::content::LeadTriage;
use martech_db::models::job_application::ReviewJobApplication;
use martech_db::repositories::{
    ContactRepo, DynamicLeadRepo, JobApplicationRepo, ServiceLeadRepo,
};
use serde::Deserialize;
use serde_json::{Map, Value};

use super::{deleted, not_found, PageParams};
use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::handlers::{decode_submission, field_errors, page_meta};
use crate::middleware::staff::RequireStaff;
use crate::response::Envelope;
use crate::state::AppState;

/// Query string for `GET /api/admin/job-applications/`.
#[derive(Debug, Default, Deserialize)]
pub struct ApplicationListParams {
    pub job_posting: Option<DbId>,
    pub page: Option<String>,
}

// ---------------------------------------------------------------------------
// Dynamic leads
// ---------------------------------------------------------------------------

async fn list_dynamic(
    state: &AppState,
    uri: &Uri,
    owner: FormOwner,
    params: PageParams,
) -> AppResult<impl IntoResponse> {
    let page_no = parse_page(params.page.as_deref())?;
    let page = DynamicLeadRepo::list(&state.pool, owner, page_no).await?;
    let meta = page_meta(state, uri, page_no, page.total);
    Ok(Envelope::page(
        "LEADS_RETRIEVED",
        "Leads retrieved successfully",
        page.items,
        meta,
    ))
}

async fn triage_dynamic(
    state: &AppState,
    owner: FormOwner,
    id: DbId,
    input: LeadTriage,
) -> AppResult<impl IntoResponse> {
    let lead = DynamicLeadRepo::update_triage(&state.pool, owner, id, &input)
        .await?
        .ok_or_else(|| not_found("Lead", id))?;
    tracing::info!(owner = owner.entity_name(), lead_id = id, "Lead triaged");
    Ok(Envelope::ok("LEAD_UPDATED", "Lead updated successfully", lead))
}

/// GET /api/admin/blog-leads/
pub async fn list_blog_leads(
    State(state): State<AppState>,
    _staff: RequireStaff,
    OriginalUri(uri): OriginalUri,
    ApiQuery(params): ApiQuery<PageParams>,
) -> AppResult<impl IntoResponse> {
    list_dynamic(&state, &uri, FormOwner::Blog, params).await
}

/// PATCH /api/admin/blog-leads/{id}/
pub async fn triage_blog_lead(
    State(state): State<AppState>,
    _staff: RequireStaff,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(input): ApiJson<LeadTriage>,
) -> AppResult<impl IntoResponse> {
    triage_dynamic(&state, FormOwner::Blog, id, input).await
}

/// GET /api/admin/case-study-leads/
pub async fn list_case_study_leads(
    State(state): State<AppState>,
    _staff: RequireStaff,
    OriginalUri(uri): OriginalUri,
    ApiQuery(params): ApiQuery<PageParams>,
) -> AppResult<impl IntoResponse> {
    list_dynamic(&state, &uri, FormOwner::CaseStudy, params).await
}

/// PATCH /api/admin/case-study-leads/{id}/
pub async fn triage_case_study_lead(
    State(state): State<AppState>,
    _staff: RequireStaff,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(input): ApiJson<LeadTriage>,
) -> AppResult<impl IntoResponse> {
    triage_dynamic(&state, FormOwner::CaseStudy, id, input).await
}

// ---------------------------------------------------------------------------
// Service leads
// ---------------------------------------------------------------------------

/// GET /api/admin/service-leads/
pub async fn list_service_leads(
    State(state): State<AppState>,
    _staff: RequireStaff,
    OriginalUri(uri): OriginalUri,
    ApiQuery(params): ApiQuery<PageParams>,
) -> AppResult<impl IntoResponse> {
    let page_no = parse_page(params.page.as_deref())?;
    let page = ServiceLeadRepo::list(&state.pool, page_no).await?;
    let meta = page_meta(&state, &uri, page_no, page.total);
    Ok(Envelope::page(
        "SERVICE_LEADS_RETRIEVED",
        "Service leads retrieved successfully",
        page.items,
        meta,
    ))
}

/// PATCH /api/admin/service-leads/{id}/
pub async fn triage_service_lead(
    State(state): State<AppState>,
    _staff: RequireStaff,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(input): ApiJson<LeadTriage>,
) -> AppResult<impl IntoResponse> {
    let lead = ServiceLeadRepo::update_triage(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found("ServiceLead", id))?;
    tracing::info!(lead_id = id, "Service lead triaged");
    Ok(Envelope::ok(
        "SERVICE_LEAD_UPDATED",
        "Service lead updated successfully",
        lead,
    ))
}

// ---------------------------------------------------------------------------
// Contacts
// ---------------------------------------------------------------------------

/// GET /api/admin/contacts/
pub async fn list_contacts(
    State(state): State<AppState>,
    _staff: RequireStaff,
    OriginalUri(uri): OriginalUri,
    ApiQuery(params): ApiQuery<PageParams>,
) -> AppResult<impl IntoResponse> {
    let page_no = parse_page(params.page.as_deref())?;
    let page = ContactRepo::list(&state.pool, page_no).await?;
    let meta = page_meta(&state, &uri, page_no, page.total);
    Ok(Envelope::page(
        "CONTACTS_RETRIEVED",
        "Contacts retrieved successfully",
        page.items,
        meta,
    ))
}

/// PATCH /api/admin/contacts/{id}/
pub async fn triage_contact(
    State(state): State<AppState>,
    _staff: RequireStaff,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(input): ApiJson<LeadTriage>,
) -> AppResult<impl IntoResponse> {
    let contact = ContactRepo::update_triage(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found("Contact", id))?;
    tracing::info!(contact_id = id, "Contact triaged");
    Ok(Envelope::ok(
        "CONTACT_UPDATED",
        "Contact updated successfully",
        contact,
    ))
}

/// DELETE /api/admin/contacts/{id}/
pub async fn delete_contact(
    State(state): State<AppState>,
    _staff: RequireStaff,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    if !ContactRepo::delete(&state.pool, id).await? {
        return Err(not_found("Contact", id));
    }
    tracing::info!(contact_id = id, "Contact deleted");
    Ok(Envelope::ok(
        "CONTACT_DELETED",
        "Contact deleted successfully",
        deleted(id),
    ))
}

// ---------------------------------------------------------------------------
// Job applications
// ---------------------------------------------------------------------------

/// GET /api/admin/job-applications/?job_posting=&page=
pub async fn list_job_applications(
    State(state): State<AppState>,
    _staff: RequireStaff,
    OriginalUri(uri): OriginalUri,
    ApiQuery(params): ApiQuery<ApplicationListParams>,
) -> AppResult<impl IntoResponse> {
    let page_no = parse_page(params.page.as_deref())?;
    let page = JobApplicationRepo::list(&state.pool, params.job_posting, page_no).await?;
    let meta = page_meta(&state, &uri, page_no, page.total);
    Ok(Envelope::page(
        "JOB_APPLICATIONS_RETRIEVED",
        "Job applications retrieved successfully",
        page.items,
        meta,
    ))
}

/// GET /api/admin/job-applications/{id}/
pub async fn get_job_application(
    State(state): State<AppState>,
    _staff: RequireStaff,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let application = JobApplicationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("JobApplication", id))?;
    Ok(Envelope::ok(
        "JOB_APPLICATION_RETRIEVED",
        "Job application retrieved successfully",
        application,
    ))
}

/// PATCH /api/admin/job-applications/{id}/
///
/// Sending `reviewed_by` stamps `reviewed_at`.
pub async fn review_job_application(
    State(state): State<AppState>,
    _staff: RequireStaff,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(body): ApiJson<Map<String, Value>>,
) -> AppResult<impl IntoResponse> {
    let (input, mut errors) =
        decode_submission::<ReviewJobApplication>(body).map_err(review_failed)?;
    errors.merge(field_errors(&input));
    errors.check_choice("status", input.status.as_deref(), APPLICATION_STATUSES);
    errors.into_result().map_err(review_failed)?;

    let application = JobApplicationRepo::review(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found("JobApplication", id))?;
    tracing::info!(application_id = id, status = %application.status, "Job application reviewed");

    Ok(Envelope::ok(
        "JOB_APPLICATION_UPDATED",
        "Job application updated successfully",
        application,
    ))
}

fn review_failed(errors: FieldErrors) -> AppError {
    AppError::Submission {
        code: "JOB_APPLICATION_UPDATE_FAILED",
        message: "Job application update failed",
        errors,
    }
}

/// DELETE /api/admin/job-applications/{id}/
pub async fn delete_job_application(
    State(state): State<AppState>,
    _staff: RequireStaff,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    if !JobApplicationRepo::delete(&state.pool, id).await? {
        return Err(not_found("JobApplication", id));
    }
    tracing::info!(application_id = id, "Job application deleted");
    Ok(Envelope::ok(
        "JOB_APPLICATION_DELETED",
        "Job application deleted successfully",
        deleted(id),
    ))
}
