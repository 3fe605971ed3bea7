//! Raw query parameters for the public list endpoints and their conversion
//! into repository filters.
//!
//! Every parameter is read as an optional string so that presence can be
//! told apart from absence: `?is_featured=` filters to `false`, while
//! omitting the key applies no filter.

use martech_core::error::CoreError;
use martech_core::listing::{non_blank, parse_flag, parse_ordering, parse_page, Ordering};
use martech_core::search::{like_pattern, search_term};
use martech_db::models::blog::BlogListFilter;
use martech_db::models::case_study::CaseStudyListFilter;
use martech_db::models::job_posting::JobPostingListFilter;
use martech_db::models::service::ServiceListFilter;
use martech_db::repositories::{blog_repo, case_study_repo, job_posting_repo, service_repo};
use serde::Deserialize;

/// Default ordering for every public list: newest first.
pub const DEFAULT_ORDERING: Ordering = Ordering::desc("created_at");

fn slug(raw: Option<String>) -> Option<String> {
    non_blank(raw.as_deref()).map(str::to_string)
}

fn ordering(raw: Option<&str>, allowed: &[&'static str]) -> Result<Ordering, CoreError> {
    parse_ordering(raw, allowed, DEFAULT_ORDERING)
}

fn substring(raw: Option<String>) -> Option<String> {
    non_blank(raw.as_deref().map(str::trim)).map(like_pattern)
}

#[derive(Debug, Default, Deserialize)]
pub struct BlogListParams {
    pub category: Option<String>,
    pub tag: Option<String>,
    pub is_featured: Option<String>,
    pub search: Option<String>,
    pub ordering: Option<String>,
    pub page: Option<String>,
}

impl BlogListParams {
    pub fn into_filter(self) -> Result<BlogListFilter, CoreError> {
        Ok(BlogListFilter {
            ordering: ordering(self.ordering.as_deref(), blog_repo::ORDERING_COLUMNS)?,
            page: parse_page(self.page.as_deref())?,
            category: slug(self.category),
            tag: slug(self.tag),
            is_featured: parse_flag(self.is_featured.as_deref()),
            search: search_term(self.search.as_deref()),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct CaseStudyListParams {
    pub category: Option<String>,
    pub tag: Option<String>,
    pub industry: Option<String>,
    pub is_featured: Option<String>,
    pub search: Option<String>,
    pub ordering: Option<String>,
    pub page: Option<String>,
}

impl CaseStudyListParams {
    pub fn into_filter(self) -> Result<CaseStudyListFilter, CoreError> {
        Ok(CaseStudyListFilter {
            ordering: ordering(self.ordering.as_deref(), case_study_repo::ORDERING_COLUMNS)?,
            page: parse_page(self.page.as_deref())?,
            category: slug(self.category),
            tag: slug(self.tag),
            industry: substring(self.industry),
            is_featured: parse_flag(self.is_featured.as_deref()),
            search: search_term(self.search.as_deref()),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct JobPostingListParams {
    pub department: Option<String>,
    pub category: Option<String>,
    pub job_type: Option<String>,
    pub location: Option<String>,
    pub is_remote: Option<String>,
    pub experience_level: Option<String>,
    pub is_featured: Option<String>,
    pub is_urgent: Option<String>,
    pub search: Option<String>,
    pub ordering: Option<String>,
    pub page: Option<String>,
}

impl JobPostingListParams {
    pub fn into_filter(self) -> Result<JobPostingListFilter, CoreError> {
        Ok(JobPostingListFilter {
            ordering: ordering(self.ordering.as_deref(), job_posting_repo::ORDERING_COLUMNS)?,
            page: parse_page(self.page.as_deref())?,
            department: slug(self.department),
            category: slug(self.category),
            job_type: slug(self.job_type),
            location: slug(self.location),
            is_remote: parse_flag(self.is_remote.as_deref()),
            experience_level: slug(self.experience_level),
            is_featured: parse_flag(self.is_featured.as_deref()),
            is_urgent: parse_flag(self.is_urgent.as_deref()),
            search: search_term(self.search.as_deref()),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ServiceListParams {
    pub category: Option<String>,
    pub is_featured: Option<String>,
    pub is_popular: Option<String>,
    pub is_free: Option<String>,
    pub service_type: Option<String>,
    pub search: Option<String>,
    pub ordering: Option<String>,
    pub page: Option<String>,
}

impl ServiceListParams {
    pub fn into_filter(self) -> Result<ServiceListFilter, CoreError> {
        Ok(ServiceListFilter {
            ordering: ordering(self.ordering.as_deref(), service_repo::ORDERING_COLUMNS)?,
            page: parse_page(self.page.as_deref())?,
            category: slug(self.category),
            is_featured: parse_flag(self.is_featured.as_deref()),
            is_popular: parse_flag(self.is_popular.as_deref()),
            is_free: parse_flag(self.is_free.as_deref()),
            service_type: substring(self.service_type),
            search: search_term(self.search.as_deref()),
        })
    }
}

/// `?platform=` on the social media list.
#[derive(Debug, Default, Deserialize)]
pub struct PlatformParams {
    pub platform: Option<String>,
}

/// `?page=` on administrative lead lists.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}
