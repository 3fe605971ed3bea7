//! Choice lists for lead and inquiry submissions.

// ---------------------------------------------------------------------------
// Service leads
// ---------------------------------------------------------------------------

pub const SERVICE_INQUIRY_TYPES: &[&str] =
    &["quote", "consultation", "demo", "information", "custom"];

pub const SERVICE_LEAD_SOURCES: &[&str] = &[
    "website",
    "service_page",
    "phone",
    "email",
    "referral",
    "social_media",
    "other",
];

pub const DEFAULT_SERVICE_INQUIRY_TYPE: &str = "information";
pub const DEFAULT_SERVICE_LEAD_SOURCE: &str = "website";

// ---------------------------------------------------------------------------
// Engagement scores
// ---------------------------------------------------------------------------

/// Weighted engagement for a blog post.
pub fn blog_engagement(views: i64, likes: i64, shares: i64) -> i64 {
    views + likes * 2 + shares * 3
}

/// Weighted engagement for a case study; downloads weigh the most.
pub fn case_study_engagement(views: i64, likes: i64, shares: i64, downloads: i64) -> i64 {
    blog_engagement(views, likes, shares) + downloads * 5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engagement_weights() {
        assert_eq!(blog_engagement(10, 2, 1), 17);
        assert_eq!(case_study_engagement(10, 2, 1, 3), 32);
    }

    #[test]
    fn defaults_are_valid_choices() {
        assert!(SERVICE_INQUIRY_TYPES.contains(&DEFAULT_SERVICE_INQUIRY_TYPE));
        assert!(SERVICE_LEAD_SOURCES.contains(&DEFAULT_SERVICE_LEAD_SOURCE));
    }
}
