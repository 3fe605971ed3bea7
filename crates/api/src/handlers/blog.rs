//! Public blog endpoints.

use std::collections::HashMap;

use axum::extract::{OriginalUri, State};
use axum::response::IntoResponse;
use martech_core::dynamic_form::FormOwner;
use martech_core::types::DbId;
use martech_db::repositories::BlogRepo;
use serde_json::{Map, Value};

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::handlers::{dynamic_form, page_meta};
use crate::query::BlogListParams;
use crate::response::Envelope;
use crate::state::AppState;

/// GET /api/blog/blogs/
///
/// One page of published posts.
pub async fn list_blogs(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    ApiQuery(params): ApiQuery<BlogListParams>,
) -> AppResult<impl IntoResponse> {
    let filter = params.into_filter()?;
    let page = BlogRepo::list_published(&state.pool, &filter).await?;
    let meta = page_meta(&state, &uri, filter.page, page.total);

    Ok(Envelope::page(
        "BLOGS_RETRIEVED",
        "Blogs retrieved successfully",
        page.items,
        meta,
    ))
}

/// GET /api/blog/blogs/{id}/
///
/// Counts a view and returns the full post. Drafts and archived posts are
/// reported exactly like missing ones.
pub async fn get_blog(
    State(state): State<AppState>,
    ApiPath(blog_id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let blog = BlogRepo::record_view(&state.pool, blog_id)
        .await?
        .ok_or_else(|| AppError::not_found("BLOG_NOT_FOUND", "Blog not found"))?;

    tracing::debug!(blog_id, views = blog.summary.views_count, "Blog viewed");

    Ok(Envelope::ok(
        "BLOG_RETRIEVED",
        "Blog retrieved successfully",
        blog,
    ))
}

/// GET /api/blog/dynamic-fields/?blog_id=
pub async fn list_dynamic_fields(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<HashMap<String, String>>,
) -> AppResult<impl IntoResponse> {
    dynamic_form::list_fields(&state, FormOwner::Blog, &params).await
}

/// POST /api/blog/blog-leads/
pub async fn create_blog_lead(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<Map<String, Value>>,
) -> AppResult<impl IntoResponse> {
    dynamic_form::create_lead(&state, FormOwner::Blog, body).await
}
