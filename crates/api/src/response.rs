//! The uniform response envelope.
//!
//! Every response, success or failure, has the shape
//! `{status, status_code, message_code, message, data?, count?, next?, previous?}`.
//! The pagination keys appear only on list responses; `data` is omitted
//! when there is no payload.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use martech_core::listing::PageLinks;
use martech_core::types::{DbId, Timestamp};
use serde::Serialize;

/// `count` / `next` / `previous` for paginated lists.
#[derive(Debug, Clone, Serialize)]
pub struct PageMeta {
    pub count: i64,
    pub next: Option<String>,
    pub previous: Option<String>,
}

impl PageMeta {
    pub fn new(count: i64, links: PageLinks) -> Self {
        Self {
            count,
            next: links.next,
            previous: links.previous,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub status: bool,
    pub status_code: u16,
    pub message_code: Option<&'static str>,
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(flatten)]
    pub page: Option<PageMeta>,
}

impl<T: Serialize> Envelope<T> {
    fn success(status: StatusCode, code: &'static str, message: &str, data: T) -> Self {
        Self {
            status: true,
            status_code: status.as_u16(),
            message_code: Some(code),
            message: Some(title_case(message)),
            data: Some(data),
            page: None,
        }
    }

    /// 200 with a payload.
    pub fn ok(code: &'static str, message: &str, data: T) -> Self {
        Self::success(StatusCode::OK, code, message, data)
    }

    /// 201 with a payload.
    pub fn created(code: &'static str, message: &str, data: T) -> Self {
        Self::success(StatusCode::CREATED, code, message, data)
    }

    /// 200 with one page of items plus `count` / `next` / `previous`.
    pub fn page(code: &'static str, message: &str, data: T, meta: PageMeta) -> Self {
        Self {
            page: Some(meta),
            ..Self::success(StatusCode::OK, code, message, data)
        }
    }
}

impl Envelope<serde_json::Value> {
    /// A failure envelope. `data` carries field errors for rejected
    /// submissions and is omitted otherwise.
    pub fn failure(
        status: StatusCode,
        code: &'static str,
        message: &str,
        data: Option<serde_json::Value>,
    ) -> Self {
        Self {
            status: false,
            status_code: status.as_u16(),
            message_code: Some(code),
            message: Some(title_case(message)),
            data,
            page: None,
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

/// Receipt returned after a public submission: the stored id and creation
/// time alongside the accepted fields.
#[derive(Debug, Serialize)]
pub struct Submission<T: Serialize> {
    pub id: DbId,
    #[serde(flatten)]
    pub fields: T,
    pub created_at: Timestamp,
}

/// Capitalise the first letter of every alphabetic run and lower-case the
/// rest, so `"Blog lead submitted successfully"` becomes
/// `"Blog Lead Submitted Successfully"`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}
