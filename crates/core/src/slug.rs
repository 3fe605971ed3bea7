//! URL slug derivation.
//!
//! A slug is derived exactly once, when a record is created without an
//! explicit one. Later title edits never touch it, and collisions are not
//! auto-suffixed: the unique constraint rejects them instead.

use unicode_normalization::UnicodeNormalization;

use crate::error::CoreError;

/// Maximum stored slug length for content records.
pub const MAX_SLUG_LEN: usize = 255;

/// Turn free text into a lowercase, hyphen-separated slug.
///
/// Punctuation is dropped, runs of whitespace and hyphens collapse into a
/// single hyphen, and leading/trailing hyphens and underscores are trimmed.
/// Accented letters are folded to their ASCII base through NFKD; whatever
/// is still outside ASCII afterwards is dropped.
pub fn slugify(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut pending_sep = false;

    for c in source.nfkd().flat_map(char::to_lowercase) {
        if c.is_ascii_alphanumeric() || c == '_' {
            if pending_sep && !out.is_empty() {
                out.push('-');
            }
            pending_sep = false;
            out.push(c);
        } else if c.is_whitespace() || c == '-' {
            pending_sep = true;
        }
    }

    out.trim_matches(|c| c == '-' || c == '_').to_string()
}

/// Pick the slug to store for a new record.
///
/// An explicit, non-blank slug wins. Otherwise the slug is derived from
/// `source` (a title or name). Returns `None` when neither produces
/// anything, which the caller stores as NULL.
pub fn resolve_slug(explicit: Option<&str>, source: Option<&str>) -> Option<String> {
    if let Some(s) = explicit.map(str::trim).filter(|s| !s.is_empty()) {
        return Some(s.to_string());
    }
    source.map(slugify).filter(|s| !s.is_empty())
}

/// Check that an explicitly supplied slug only uses `[A-Za-z0-9_-]`.
pub fn validate_slug(slug: &str) -> Result<(), CoreError> {
    if slug.is_empty() {
        return Err(CoreError::Validation("Slug must not be empty".into()));
    }
    if slug.len() > MAX_SLUG_LEN {
        return Err(CoreError::Validation(format!(
            "Slug must not exceed {MAX_SLUG_LEN} characters"
        )));
    }
    if !slug
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(CoreError::Validation(
            "Slug may only contain letters, numbers, underscores or hyphens".into(),
        ));
    }
    Ok(())
}
