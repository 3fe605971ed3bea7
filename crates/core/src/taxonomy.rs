//! Taxonomy kinds: the simple `{name, slug, description, is_active}`
//! classification records each content domain uses.

/// Every taxonomy table that shares the common name/slug shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaxonomyKind {
    BlogCategory,
    BlogTag,
    CaseStudyCategory,
    CaseStudyTag,
    Department,
    JobCategory,
    JobType,
    ServiceCategory,
}

impl TaxonomyKind {
    pub const ALL: [TaxonomyKind; 8] = [
        TaxonomyKind::BlogCategory,
        TaxonomyKind::BlogTag,
        TaxonomyKind::CaseStudyCategory,
        TaxonomyKind::CaseStudyTag,
        TaxonomyKind::Department,
        TaxonomyKind::JobCategory,
        TaxonomyKind::JobType,
        TaxonomyKind::ServiceCategory,
    ];

    /// URL segment used by the administrative API.
    pub fn path_segment(self) -> &'static str {
        match self {
            TaxonomyKind::BlogCategory => "blog-categories",
            TaxonomyKind::BlogTag => "blog-tags",
            TaxonomyKind::CaseStudyCategory => "case-study-categories",
            TaxonomyKind::CaseStudyTag => "case-study-tags",
            TaxonomyKind::Department => "departments",
            TaxonomyKind::JobCategory => "job-categories",
            TaxonomyKind::JobType => "job-types",
            TaxonomyKind::ServiceCategory => "service-categories",
        }
    }

    /// Singular entity name used in error messages.
    pub fn entity_name(self) -> &'static str {
        match self {
            TaxonomyKind::BlogCategory => "BlogCategory",
            TaxonomyKind::BlogTag => "BlogTag",
            TaxonomyKind::CaseStudyCategory => "CaseStudyCategory",
            TaxonomyKind::CaseStudyTag => "CaseStudyTag",
            TaxonomyKind::Department => "Department",
            TaxonomyKind::JobCategory => "JobCategory",
            TaxonomyKind::JobType => "JobType",
            TaxonomyKind::ServiceCategory => "ServiceCategory",
        }
    }

    pub fn from_path_segment(segment: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.path_segment() == segment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_segments_round_trip() {
        for kind in TaxonomyKind::ALL {
            assert_eq!(TaxonomyKind::from_path_segment(kind.path_segment()), Some(kind));
        }
        assert_eq!(TaxonomyKind::from_path_segment("colours"), None);
    }
}
