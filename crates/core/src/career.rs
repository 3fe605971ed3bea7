//! Job posting and job application vocabularies.

pub const EXPERIENCE_LEVELS: &[&str] = &["entry", "mid", "senior", "executive"];

pub const APPLICATION_SOURCES: &[&str] = &[
    "website",
    "job_board",
    "referral",
    "linkedin",
    "indeed",
    "glassdoor",
    "other",
];

pub const APPLICATION_STATUS_PENDING: &str = "pending";

pub const APPLICATION_STATUSES: &[&str] = &[
    APPLICATION_STATUS_PENDING,
    "reviewing",
    "shortlisted",
    "interview_scheduled",
    "interviewed",
    "offer_extended",
    "offer_accepted",
    "offer_declined",
    "rejected",
    "withdrawn",
];

pub const DEFAULT_APPLICATION_SOURCE: &str = "website";

/// Reviewer ratings run from 0 to this value inclusive.
pub const MAX_RATING: i32 = 10;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_is_first_status() {
        assert_eq!(APPLICATION_STATUSES[0], "pending");
        assert!(APPLICATION_SOURCES.contains(&DEFAULT_APPLICATION_SOURCE));
    }
}
