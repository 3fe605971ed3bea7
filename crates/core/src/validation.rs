//! Field-level validation errors for public submissions.
//!
//! Submissions report every problem at once as a map of field name to
//! messages, e.g. `{"email": ["Enter a valid email address."]}`.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

/// Key used for errors that do not belong to a single field.
pub const NON_FIELD_ERRORS: &str = "non_field_errors";

pub const MSG_REQUIRED: &str = "This field is required.";
pub const MSG_NOT_OBJECT: &str = "Data must be a JSON object";

/// Field name -> list of human readable messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn merge(&mut self, other: FieldErrors) {
        for (field, messages) in other.0 {
            self.0.entry(field).or_default().extend(messages);
        }
    }

    /// `Ok(())` when nothing was recorded.
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Record a "required" error when `value` is missing or blank.
    pub fn require_text(&mut self, field: &str, value: Option<&str>) {
        if value.map(str::trim).map_or(true, str::is_empty) {
            self.add(field, MSG_REQUIRED);
        }
    }

    /// Record a "required" error when `value` is missing.
    pub fn require<T>(&mut self, field: &str, value: Option<&T>) {
        if value.is_none() {
            self.add(field, MSG_REQUIRED);
        }
    }

    /// Record an error when a present value is not one of `allowed`.
    pub fn check_choice(&mut self, field: &str, value: Option<&str>, allowed: &[&str]) {
        if let Some(v) = value {
            if !allowed.contains(&v) {
                self.add(field, format!("\"{v}\" is not a valid choice."));
            }
        }
    }

    /// Record an error when `value` is present but not a JSON object.
    pub fn require_object(&mut self, field: &str, value: Option<&Value>) {
        match value {
            None | Some(Value::Null) => self.add(field, MSG_REQUIRED),
            Some(Value::Object(_)) => {}
            Some(_) => self.add(field, MSG_NOT_OBJECT),
        }
    }

    /// Record the standard error for a foreign key that points nowhere.
    pub fn missing_reference(&mut self, field: &str, id: i64) {
        self.add(
            field,
            format!("Invalid pk \"{id}\" - object does not exist."),
        );
    }
}

impl From<validator::ValidationErrors> for FieldErrors {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut out = FieldErrors::new();
        for (field, list) in errors.field_errors() {
            for err in list.iter() {
                out.add(field.to_string(), describe(err));
            }
        }
        out
    }
}

fn describe(err: &validator::ValidationError) -> String {
    if let Some(msg) = &err.message {
        return msg.to_string();
    }
    match err.code.as_ref() {
        "email" => "Enter a valid email address.".into(),
        "url" => "Enter a valid URL.".into(),
        "length" => match err.params.get("max") {
            Some(max) => format!("Ensure this field has no more than {max} characters."),
            None => "Ensure this field has a valid length.".into(),
        },
        "range" => match (err.params.get("min"), err.params.get("max")) {
            (Some(min), Some(max)) => format!("Ensure this value is between {min} and {max}."),
            _ => "Ensure this value is within range.".into(),
        },
        other => format!("Invalid value ({other})."),
    }
}
