//! Public case study endpoints.

use std::collections::HashMap;

use axum::extract::{OriginalUri, State};
use axum::response::IntoResponse;
use martech_core::dynamic_form::FormOwner;
use martech_core::types::DbId;
use martech_db::repositories::CaseStudyRepo;
use serde_json::{Map, Value};

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::handlers::{dynamic_form, page_meta};
use crate::query::CaseStudyListParams;
use crate::response::Envelope;
use crate::state::AppState;

/// GET /api/casestudy/case-studies/
pub async fn list_case_studies(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    ApiQuery(params): ApiQuery<CaseStudyListParams>,
) -> AppResult<impl IntoResponse> {
    let filter = params.into_filter()?;
    let page = CaseStudyRepo::list_published(&state.pool, &filter).await?;
    let meta = page_meta(&state, &uri, filter.page, page.total);

    Ok(Envelope::page(
        "CASE_STUDIES_RETRIEVED",
        "Case studies retrieved successfully",
        page.items,
        meta,
    ))
}

/// GET /api/casestudy/case-studies/{id}/
pub async fn get_case_study(
    State(state): State<AppState>,
    ApiPath(case_study_id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let case_study = CaseStudyRepo::record_view(&state.pool, case_study_id)
        .await?
        .ok_or_else(|| AppError::not_found("CASE_STUDY_NOT_FOUND", "Case study not found"))?;

    Ok(Envelope::ok(
        "CASE_STUDY_RETRIEVED",
        "Case study retrieved successfully",
        case_study,
    ))
}

/// GET /api/casestudy/dynamic-fields/?case_study_id=
pub async fn list_dynamic_fields(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<HashMap<String, String>>,
) -> AppResult<impl IntoResponse> {
    dynamic_form::list_fields(&state, FormOwner::CaseStudy, &params).await
}

/// POST /api/casestudy/case-study-leads/
pub async fn create_case_study_lead(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<Map<String, Value>>,
) -> AppResult<impl IntoResponse> {
    dynamic_form::create_lead(&state, FormOwner::CaseStudy, body).await
}
