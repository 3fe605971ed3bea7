//! HTTP handlers, one module per public domain plus the staff-only
//! administrative surface under [`admin`].

pub mod admin;
pub mod blog;
pub mod career;
pub mod case_study;
pub mod contact;
pub mod dynamic_form;
pub mod privacy_policy;
pub mod services;
pub mod social_media;

use axum::http::Uri;
use martech_core::listing::page_links;
use martech_core::validation::{FieldErrors, NON_FIELD_ERRORS};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use serde_path_to_error::Segment;
use validator::Validate;

use crate::response::PageMeta;
use crate::state::AppState;

/// Pagination metadata for the current request. Links keep every query
/// parameter except `page`, prefixed by `PUBLIC_BASE_URL` when set.
pub(crate) fn page_meta(state: &AppState, uri: &Uri, page: i64, total: i64) -> PageMeta {
    let base = format!(
        "{}{}",
        state.config.public_base_url.as_deref().unwrap_or_default(),
        uri.path()
    );
    PageMeta::new(total, page_links(&base, uri.query(), page, total))
}

/// Run the derived field checks, collecting every failure.
pub(crate) fn field_errors<T: Validate>(input: &T) -> FieldErrors {
    match input.validate() {
        Ok(()) => FieldErrors::new(),
        Err(errors) => errors.into(),
    }
}

/// Decode a submission body into its typed payload.
///
/// A key whose value has the wrong type is recorded under its own name and
/// left out, so the remaining keys still decode and can be validated in the
/// same pass. The returned errors are empty when every key decoded.
pub(crate) fn decode_submission<T: DeserializeOwned>(
    mut body: Map<String, Value>,
) -> Result<(T, FieldErrors), FieldErrors> {
    let mut errors = FieldErrors::new();

    loop {
        let err = match serde_path_to_error::deserialize::<_, T>(Value::Object(body.clone())) {
            Ok(input) => return Ok((input, errors)),
            Err(err) => err,
        };

        let field = match err.path().iter().next() {
            Some(Segment::Map { key }) if body.contains_key(key) => key.clone(),
            _ => {
                errors.add(NON_FIELD_ERRORS, "Invalid data.");
                return Err(errors);
            }
        };
        errors.add(field.as_str(), type_message(err.inner()));
        body.remove(&field);
    }
}

/// Caller-facing wording for a value of the wrong type.
fn type_message(err: &serde_json::Error) -> &'static str {
    let text = err.to_string();
    let expected = text.rsplit_once("expected ").map_or("", |(_, e)| e);

    match expected {
        "i8" | "i16" | "i32" | "i64" | "u8" | "u16" | "u32" | "u64" => {
            "A valid integer is required."
        }
        "f32" | "f64" => "A valid number is required.",
        "a boolean" => "Must be a valid boolean.",
        "a string" | "a borrowed string" => "Not a valid string.",
        e if e.contains("date") => "Date has wrong format. Use YYYY-MM-DD.",
        _ => "Invalid value.",
    }
}
