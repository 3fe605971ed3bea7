pub mod blog;
pub mod case_study;
pub mod contact;
pub mod content;
pub mod dynamic_field;
pub mod dynamic_lead;
pub mod job_application;
pub mod job_posting;
pub mod privacy_policy;
pub mod service;
pub mod service_lead;
pub mod social_media;
pub mod staff_user;
pub mod taxonomy;
