//! Staff-only handlers mounted under `/api/admin`.
//!
//! Every handler takes a [`RequireStaff`](crate::middleware::staff::RequireStaff)
//! extractor, so a request without the configured bearer token never
//! reaches the database. Responses use the same envelope as the public
//! API, including deletes.

pub mod content;
pub mod dynamic_fields;
pub mod leads;
pub mod site;
pub mod staff;
pub mod taxonomy;

use martech_core::error::CoreError;
use martech_core::slug::{resolve_slug, validate_slug};
use martech_core::status::validate_status;
use martech_core::types::DbId;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::AppError;

/// Query string for the paginated admin lists.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}

/// Check an optional status against the statuses a record kind accepts.
pub(crate) fn check_status(status: Option<&str>, allowed: &[&str]) -> Result<(), CoreError> {
    match status {
        Some(status) => validate_status(status, allowed),
        None => Ok(()),
    }
}

/// Validate an explicit slug, if one was sent.
pub(crate) fn check_slug(slug: Option<&str>) -> Result<(), CoreError> {
    match slug {
        Some(slug) => validate_slug(slug),
        None => Ok(()),
    }
}

/// The slug a new record is stored with: the explicit one when valid,
/// otherwise derived from its title or name.
pub(crate) fn slug_for_create(
    slug: Option<&str>,
    source: Option<&str>,
) -> Result<Option<String>, CoreError> {
    let explicit = slug.map(str::trim).filter(|s| !s.is_empty());
    check_slug(explicit)?;
    Ok(resolve_slug(explicit, source))
}

pub(crate) fn not_found(entity: &'static str, id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity, id })
}

/// `data` payload returned by delete endpoints.
pub(crate) fn deleted(id: DbId) -> Value {
    json!({ "id": id, "deleted": true })
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn slug_is_derived_from_title_when_absent() {
        let slug = slug_for_create(None, Some("Hello World!")).unwrap();
        assert_eq!(slug.as_deref(), Some("hello-world"));

        let slug = slug_for_create(Some("  "), Some("Hello World")).unwrap();
        assert_eq!(slug.as_deref(), Some("hello-world"));
    }

    #[test]
    fn explicit_slug_wins_and_is_validated() {
        let slug = slug_for_create(Some("custom_slug-1"), Some("Hello")).unwrap();
        assert_eq!(slug.as_deref(), Some("custom_slug-1"));

        assert_matches!(
            slug_for_create(Some("not a slug"), Some("Hello")),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn missing_status_is_accepted() {
        assert!(check_status(None, &["draft"]).is_ok());
        assert_matches!(
            check_status(Some("live"), &["draft"]),
            Err(CoreError::Validation(_))
        );
    }
}
