pub mod blog_repo;
pub mod case_study_repo;
pub mod contact_repo;
pub mod dynamic_field_repo;
pub mod dynamic_lead_repo;
pub mod job_application_repo;
pub mod job_location_repo;
pub mod job_posting_repo;
pub mod privacy_policy_repo;
pub mod service_lead_repo;
pub mod service_repo;
pub mod social_media_repo;
pub mod staff_user_repo;
pub mod taxonomy_repo;

pub use blog_repo::BlogRepo;
pub use case_study_repo::CaseStudyRepo;
pub use contact_repo::ContactRepo;
pub use dynamic_field_repo::DynamicFieldRepo;
pub use dynamic_lead_repo::DynamicLeadRepo;
pub use job_application_repo::JobApplicationRepo;
pub use job_location_repo::JobLocationRepo;
pub use job_posting_repo::JobPostingRepo;
pub use privacy_policy_repo::PrivacyPolicyRepo;
pub use service_lead_repo::ServiceLeadRepo;
pub use service_repo::ServiceRepo;
pub use social_media_repo::SocialMediaRepo;
pub use staff_user_repo::StaffUserRepo;
pub use taxonomy_repo::{TagLink, TaxonomyRepo};
