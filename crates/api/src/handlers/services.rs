//! Public service endpoints.

use axum::extract::{OriginalUri, State};
use axum::response::IntoResponse;
use martech_core::leads::{SERVICE_INQUIRY_TYPES, SERVICE_LEAD_SOURCES};
use martech_core::types::DbId;
use martech_core::validation::FieldErrors;
use martech_db::models::service_lead::CreateServiceLead;
use martech_db::repositories::{ServiceLeadRepo, ServiceRepo};
use serde_json::{Map, Value};

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::handlers::{decode_submission, field_errors, page_meta};
use crate::query::ServiceListParams;
use crate::response::{Envelope, Submission};
use crate::state::AppState;

/// GET /api/services/services/
pub async fn list_services(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    ApiQuery(params): ApiQuery<ServiceListParams>,
) -> AppResult<impl IntoResponse> {
    let filter = params.into_filter()?;
    let page = ServiceRepo::list_published(&state.pool, &filter).await?;
    let meta = page_meta(&state, &uri, filter.page, page.total);

    Ok(Envelope::page(
        "SERVICES_RETRIEVED",
        "Services retrieved successfully",
        page.items,
        meta,
    ))
}

/// GET /api/services/services/{id}/
pub async fn get_service(
    State(state): State<AppState>,
    ApiPath(service_id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let service = ServiceRepo::record_view(&state.pool, service_id)
        .await?
        .ok_or_else(|| AppError::not_found("SERVICE_NOT_FOUND", "Service not found"))?;

    Ok(Envelope::ok(
        "SERVICE_RETRIEVED",
        "Service retrieved successfully",
        service,
    ))
}

/// POST /api/services/service-leads/
///
/// Stores the inquiry and bumps the service's `inquiries_count` in the
/// same transaction.
pub async fn create_service_lead(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<Map<String, Value>>,
) -> AppResult<impl IntoResponse> {
    let (input, mut errors) =
        decode_submission::<CreateServiceLead>(body).map_err(service_lead_failed)?;
    errors.merge(field_errors(&input));
    errors.check_choice(
        "inquiry_type",
        input.inquiry_type.as_deref(),
        SERVICE_INQUIRY_TYPES,
    );
    errors.check_choice(
        "lead_source",
        input.lead_source.as_deref(),
        SERVICE_LEAD_SOURCES,
    );

    if let Some(service_id) = input.service {
        if !ServiceRepo::exists(&state.pool, service_id).await? {
            errors.missing_reference("service", service_id);
        }
    }

    errors.into_result().map_err(service_lead_failed)?;

    let lead = ServiceLeadRepo::create(&state.pool, &input).await?;

    tracing::info!(lead_id = lead.id, service_id = ?lead.service_id, "Service lead created");

    Ok(Envelope::created(
        "SERVICE_LEAD_CREATED",
        "Service inquiry submitted successfully",
        Submission {
            id: lead.id,
            fields: input,
            created_at: lead.created_at,
        },
    ))
}

fn service_lead_failed(errors: FieldErrors) -> AppError {
    AppError::Submission {
        code: "SERVICE_LEAD_CREATION_FAILED",
        message: "Service inquiry submission failed",
        errors,
    }
}
