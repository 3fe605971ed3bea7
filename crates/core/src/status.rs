//! Publication status lifecycle.
//!
//! Every content record carries a status. Entering `published` stamps
//! `published_at` and entering `closed` (job postings only) stamps
//! `closed_at`; each stamp is written once and survives later status
//! changes.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Status constants
// ---------------------------------------------------------------------------

pub const STATUS_DRAFT: &str = "draft";
pub const STATUS_PUBLISHED: &str = "published";
pub const STATUS_ARCHIVED: &str = "archived";
pub const STATUS_CLOSED: &str = "closed";

/// Statuses accepted by blogs, case studies and services.
pub const CONTENT_STATUSES: &[&str] = &[STATUS_DRAFT, STATUS_PUBLISHED, STATUS_ARCHIVED];

/// Statuses accepted by job postings.
pub const JOB_POSTING_STATUSES: &[&str] =
    &[STATUS_DRAFT, STATUS_PUBLISHED, STATUS_CLOSED, STATUS_ARCHIVED];

// ---------------------------------------------------------------------------
// Lifecycle stamps
// ---------------------------------------------------------------------------

/// A timestamp column written the first time a record enters `status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusStamp {
    pub status: &'static str,
    pub column: &'static str,
}

pub const PUBLISHED_STAMP: StatusStamp = StatusStamp {
    status: STATUS_PUBLISHED,
    column: "published_at",
};

pub const CLOSED_STAMP: StatusStamp = StatusStamp {
    status: STATUS_CLOSED,
    column: "closed_at",
};

pub const CONTENT_STAMPS: &[StatusStamp] = &[PUBLISHED_STAMP];
pub const JOB_POSTING_STAMPS: &[StatusStamp] = &[PUBLISHED_STAMP, CLOSED_STAMP];

/// Validate a status string against the statuses a record kind accepts.
pub fn validate_status(status: &str, allowed: &[&str]) -> Result<(), CoreError> {
    if allowed.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid status '{status}'. Must be one of: {}",
            allowed.join(", ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn content_statuses_reject_closed() {
        assert!(validate_status("published", CONTENT_STATUSES).is_ok());
        assert_matches!(
            validate_status("closed", CONTENT_STATUSES),
            Err(CoreError::Validation(msg)) if msg.contains("closed")
        );
    }

    #[test]
    fn job_postings_accept_closed() {
        assert!(validate_status("closed", JOB_POSTING_STATUSES).is_ok());
        assert!(validate_status("open", JOB_POSTING_STATUSES).is_err());
    }

    #[test]
    fn job_postings_stamp_both_columns() {
        let columns: Vec<_> = JOB_POSTING_STAMPS.iter().map(|s| s.column).collect();
        assert_eq!(columns, vec!["published_at", "closed_at"]);
    }
}
