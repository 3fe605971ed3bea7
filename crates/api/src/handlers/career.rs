//! Public career endpoints: job postings and applications.

use axum::extract::{OriginalUri, State};
use axum::response::IntoResponse;
use martech_core::career::APPLICATION_SOURCES;
use martech_core::types::DbId;
use martech_core::validation::FieldErrors;
use martech_db::models::job_application::CreateJobApplication;
use martech_db::repositories::{JobApplicationRepo, JobPostingRepo};
use serde_json::{Map, Value};

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::handlers::{decode_submission, field_errors, page_meta};
use crate::query::JobPostingListParams;
use crate::response::{Envelope, Submission};
use crate::state::AppState;

/// GET /api/career/job-postings/
pub async fn list_job_postings(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    ApiQuery(params): ApiQuery<JobPostingListParams>,
) -> AppResult<impl IntoResponse> {
    let filter = params.into_filter()?;
    let page = JobPostingRepo::list_published(&state.pool, &filter).await?;
    let meta = page_meta(&state, &uri, filter.page, page.total);

    Ok(Envelope::page(
        "JOB_POSTINGS_RETRIEVED",
        "Job postings retrieved successfully",
        page.items,
        meta,
    ))
}

/// GET /api/career/job-postings/{id}/
pub async fn get_job_posting(
    State(state): State<AppState>,
    ApiPath(job_posting_id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let posting = JobPostingRepo::record_view(&state.pool, job_posting_id)
        .await?
        .ok_or_else(|| AppError::not_found("JOB_POSTING_NOT_FOUND", "Job posting not found"))?;

    Ok(Envelope::ok(
        "JOB_POSTING_RETRIEVED",
        "Job posting retrieved successfully",
        posting,
    ))
}

/// POST /api/career/job-applications/
///
/// Stores the application and bumps the posting's `applications_count`
/// in the same transaction. Nothing is written when validation fails.
pub async fn create_job_application(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<Map<String, Value>>,
) -> AppResult<impl IntoResponse> {
    let (input, mut errors) =
        decode_submission::<CreateJobApplication>(body).map_err(application_failed)?;
    errors.merge(field_errors(&input));
    errors.check_choice("source", input.source.as_deref(), APPLICATION_SOURCES);

    if let Some(posting_id) = input.job_posting {
        if !JobPostingRepo::exists(&state.pool, posting_id).await? {
            errors.missing_reference("job_posting", posting_id);
        }
    }

    errors.into_result().map_err(application_failed)?;

    let application = JobApplicationRepo::create(&state.pool, &input).await?;

    tracing::info!(
        application_id = application.id,
        job_posting_id = ?application.job_posting_id,
        "Job application created"
    );

    Ok(Envelope::created(
        "JOB_APPLICATION_CREATED",
        "Job application submitted successfully",
        Submission {
            id: application.id,
            fields: input,
            created_at: application.created_at,
        },
    ))
}

fn application_failed(errors: FieldErrors) -> AppError {
    AppError::Submission {
        code: "JOB_APPLICATION_CREATION_FAILED",
        message: "Job application submission failed",
        errors,
    }
}
