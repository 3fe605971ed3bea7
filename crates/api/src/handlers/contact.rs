//! Public contact form endpoint.

use axum::extract::State;
use axum::response::IntoResponse;
use martech_core::validation::FieldErrors;
use martech_db::models::contact::CreateContact;
use martech_db::repositories::ContactRepo;
use serde_json::{Map, Value};

use crate::error::{AppError, AppResult};
use crate::extract::ApiJson;
use crate::handlers::{decode_submission, field_errors};
use crate::response::{Envelope, Submission};
use crate::state::AppState;

/// POST /api/contact/contacts/
pub async fn create_contact(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<Map<String, Value>>,
) -> AppResult<impl IntoResponse> {
    let (input, mut errors) = decode_submission::<CreateContact>(body).map_err(contact_failed)?;
    errors.merge(field_errors(&input));
    errors.into_result().map_err(contact_failed)?;

    let contact = ContactRepo::create(&state.pool, &input).await?;

    tracing::info!(contact_id = contact.id, "Contact request created");

    Ok(Envelope::created(
        "CONTACT_CREATED",
        "Contact form submitted successfully",
        Submission {
            id: contact.id,
            fields: input,
            created_at: contact.created_at,
        },
    ))
}

fn contact_failed(errors: FieldErrors) -> AppError {
    AppError::Submission {
        code: "CONTACT_CREATION_FAILED",
        message: "Contact form submission failed",
        errors,
    }
}
