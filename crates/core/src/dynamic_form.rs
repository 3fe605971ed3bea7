//! Owners of staff-configured lead-capture forms.
//!
//! Blogs and case studies each carry an ordered list of dynamic fields, and
//! visitors submit leads against them as free-form JSON objects.

/// Content kind a dynamic field or dynamic lead belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormOwner {
    Blog,
    CaseStudy,
}

impl FormOwner {
    /// Entity name of the owning record, used in not-found errors.
    pub fn entity_name(self) -> &'static str {
        match self {
            FormOwner::Blog => "Blog",
            FormOwner::CaseStudy => "CaseStudy",
        }
    }

    /// Name of the owner reference in submissions and query strings.
    pub fn reference_field(self) -> &'static str {
        match self {
            FormOwner::Blog => "blog",
            FormOwner::CaseStudy => "case_study",
        }
    }

    /// Query parameter selecting the owner on the dynamic-fields endpoint.
    pub fn id_param(self) -> &'static str {
        match self {
            FormOwner::Blog => "blog_id",
            FormOwner::CaseStudy => "case_study_id",
        }
    }
}
