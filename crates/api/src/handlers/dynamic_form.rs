//! Shared dynamic lead-form logic for blogs and case studies.
//!
//! Both owners expose the same two operations: read the active field
//! schema for one item, and accept a free-form `data` object against it.
//! The keys of `data` are stored as submitted.

use std::collections::HashMap;

use martech_core::dynamic_form::FormOwner;
use martech_core::error::CoreError;
use martech_core::types::DbId;
use martech_core::validation::{FieldErrors, MSG_REQUIRED};
use martech_db::repositories::{DynamicFieldRepo, DynamicLeadRepo};
use serde_json::{json, Map, Value};

use crate::error::{AppError, AppResult};
use crate::response::Envelope;
use crate::state::AppState;

const MSG_EXPECTED_PK: &str = "Incorrect type. Expected pk value.";

/// Envelope codes and messages for one owner.
struct FormMessages {
    not_found: (&'static str, &'static str),
    fields: (&'static str, &'static str),
    created: (&'static str, &'static str),
    failed: (&'static str, &'static str),
}

fn messages(owner: FormOwner) -> FormMessages {
    match owner {
        FormOwner::Blog => FormMessages {
            not_found: ("BLOG_NOT_FOUND", "Blog not found"),
            fields: (
                "BLOG_DYNAMIC_FIELDS_RETRIEVED",
                "Blog dynamic fields retrieved successfully",
            ),
            created: ("BLOG_LEAD_CREATED", "Blog lead submitted successfully"),
            failed: ("BLOG_LEAD_CREATION_FAILED", "Blog lead submission failed"),
        },
        FormOwner::CaseStudy => FormMessages {
            not_found: ("CASE_STUDY_NOT_FOUND", "Case study not found"),
            fields: (
                "CASE_STUDY_DYNAMIC_FIELDS_RETRIEVED",
                "Case study dynamic fields retrieved successfully",
            ),
            created: (
                "CASE_STUDY_LEAD_CREATED",
                "Case study lead submitted successfully",
            ),
            failed: (
                "CASE_STUDY_LEAD_CREATION_FAILED",
                "Case study lead submission failed",
            ),
        },
    }
}

/// Read the required `blog_id` / `case_study_id` query parameter.
pub(crate) fn owner_id_param(
    owner: FormOwner,
    params: &HashMap<String, String>,
) -> Result<DbId, CoreError> {
    let param = owner.id_param();
    let raw = params
        .get(param)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| CoreError::Validation(format!("{param} query parameter is required")))?;
    raw.parse()
        .map_err(|_| CoreError::Validation(format!("{param} must be an integer")))
}

/// Active fields for one item, ordered by `sequence`.
///
/// The item only has to exist; its publication status is not checked.
pub(crate) async fn list_fields(
    state: &AppState,
    owner: FormOwner,
    params: &HashMap<String, String>,
) -> AppResult<Envelope<Value>> {
    let msgs = messages(owner);
    let param = owner.id_param();
    let owner_id = owner_id_param(owner, params)?;

    if !DynamicFieldRepo::owner_exists(&state.pool, owner, owner_id).await? {
        return Err(AppError::not_found(msgs.not_found.0, msgs.not_found.1));
    }

    let fields = DynamicFieldRepo::list_active(&state.pool, owner, owner_id).await?;

    let mut body = Map::new();
    body.insert(param.to_string(), json!(owner_id));
    body.insert("total_fields".into(), json!(fields.len()));
    body.insert("fields".into(), json!(fields));

    Ok(Envelope::ok(msgs.fields.0, msgs.fields.1, Value::Object(body)))
}

/// Accept `{<owner>: id, data: {...}}`.
///
/// Every problem is reported at once; nothing is stored unless the owner
/// exists and `data` is a JSON object.
pub(crate) async fn create_lead(
    state: &AppState,
    owner: FormOwner,
    body: Map<String, Value>,
) -> AppResult<Envelope<Value>> {
    let msgs = messages(owner);
    let field = owner.reference_field();
    let mut errors = FieldErrors::new();

    let owner_id = match body.get(field) {
        None | Some(Value::Null) => {
            errors.add(field, MSG_REQUIRED);
            None
        }
        Some(value) => {
            let id = value.as_i64();
            if id.is_none() {
                errors.add(field, MSG_EXPECTED_PK);
            }
            id
        }
    };

    let data = body.get("data");
    errors.require_object("data", data);

    if let Some(id) = owner_id {
        if !DynamicFieldRepo::owner_exists(&state.pool, owner, id).await? {
            errors.missing_reference(field, id);
        }
    }

    let (Some(owner_id), Some(data)) = (owner_id, data.filter(|d| d.is_object())) else {
        return Err(rejected(&msgs, errors));
    };
    if !errors.is_empty() {
        return Err(rejected(&msgs, errors));
    }

    let lead = DynamicLeadRepo::create(&state.pool, owner, owner_id, data).await?;

    tracing::info!(
        owner = owner.entity_name(),
        owner_id,
        lead_id = lead.id,
        "Dynamic lead created"
    );

    let mut receipt = Map::new();
    receipt.insert("id".into(), json!(lead.id));
    receipt.insert(field.to_string(), json!(owner_id));
    receipt.insert("data".into(), lead.data);
    receipt.insert("created_at".into(), json!(lead.created_at));

    Ok(Envelope::created(
        msgs.created.0,
        msgs.created.1,
        Value::Object(receipt),
    ))
}

fn rejected(msgs: &FormMessages, errors: FieldErrors) -> AppError {
    tracing::debug!(code = msgs.failed.0, ?errors, "Lead submission rejected");
    AppError::Submission {
        code: msgs.failed.0,
        message: msgs.failed.1,
        errors,
    }
}
