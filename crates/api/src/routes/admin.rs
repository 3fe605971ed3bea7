//! Routes mounted at `/api/admin`.

use axum::routing::{get, patch, post};
use axum::Router;

use super::RouteBoth;
use crate::handlers::admin::{content, dynamic_fields, leads, site, staff, taxonomy};
use crate::state::AppState;

/// All routes require the staff bearer token (enforced by handler
/// extractors).
///
/// ```text
/// GET    POST              /staff-users
/// GET    POST              /taxonomies/{kind}
/// GET    PATCH  DELETE     /taxonomies/{kind}/{id}
/// GET    POST              /job-locations
/// GET    PATCH  DELETE     /job-locations/{id}
///
/// POST                     /{blogs|case-studies|job-postings|services}
/// GET    PATCH  DELETE     /{blogs|case-studies|job-postings|services}/{id}
/// POST                     /{blogs|case-studies|job-postings|services}/bulk-status
///
/// GET    POST              /{blog|case-study}-dynamic-fields
/// PATCH  DELETE            /{blog|case-study}-dynamic-fields/{id}
///
/// GET                      /{blog|case-study|service}-leads
/// PATCH                    /{blog|case-study|service}-leads/{id}
/// GET                      /contacts
/// PATCH  DELETE            /contacts/{id}
/// GET                      /job-applications
/// GET    PATCH  DELETE     /job-applications/{id}
///
/// GET    POST              /social-media
/// PATCH  DELETE            /social-media/{id}
/// GET    POST              /privacy-policies
/// PATCH  DELETE            /privacy-policies/{id}
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        // Staff users and taxonomies.
        .route_both(
            "/staff-users",
            get(staff::list_staff_users).post(staff::create_staff_user),
        )
        .route_both(
            "/taxonomies/{kind}",
            get(taxonomy::list_taxonomies).post(taxonomy::create_taxonomy),
        )
        .route_both(
            "/taxonomies/{kind}/{id}",
            get(taxonomy::get_taxonomy)
                .patch(taxonomy::update_taxonomy)
                .delete(taxonomy::delete_taxonomy),
        )
        .route_both(
            "/job-locations",
            get(taxonomy::list_job_locations).post(taxonomy::create_job_location),
        )
        .route_both(
            "/job-locations/{id}",
            get(taxonomy::get_job_location)
                .patch(taxonomy::update_job_location)
                .delete(taxonomy::delete_job_location),
        )
        // Content.
        .route_both("/blogs", post(content::create_blog))
        .route_both(
            "/blogs/{id}",
            get(content::get_blog)
                .patch(content::update_blog)
                .delete(content::delete_blog),
        )
        .route_both("/blogs/bulk-status", post(content::bulk_blog_status))
        .route_both("/case-studies", post(content::create_case_study))
        .route_both(
            "/case-studies/{id}",
            get(content::get_case_study)
                .patch(content::update_case_study)
                .delete(content::delete_case_study),
        )
        .route_both(
            "/case-studies/bulk-status",
            post(content::bulk_case_study_status),
        )
        .route_both("/job-postings", post(content::create_job_posting))
        .route_both(
            "/job-postings/{id}",
            get(content::get_job_posting)
                .patch(content::update_job_posting)
                .delete(content::delete_job_posting),
        )
        .route_both(
            "/job-postings/bulk-status",
            post(content::bulk_job_posting_status),
        )
        .route_both("/services", post(content::create_service))
        .route_both(
            "/services/{id}",
            get(content::get_service)
                .patch(content::update_service)
                .delete(content::delete_service),
        )
        .route_both("/services/bulk-status", post(content::bulk_service_status))
        // Dynamic form fields.
        .route_both(
            "/blog-dynamic-fields",
            get(dynamic_fields::list_blog_fields).post(dynamic_fields::create_blog_field),
        )
        .route_both(
            "/blog-dynamic-fields/{id}",
            patch(dynamic_fields::update_blog_field).delete(dynamic_fields::delete_blog_field),
        )
        .route_both(
            "/case-study-dynamic-fields",
            get(dynamic_fields::list_case_study_fields)
                .post(dynamic_fields::create_case_study_field),
        )
        .route_both(
            "/case-study-dynamic-fields/{id}",
            patch(dynamic_fields::update_case_study_field)
                .delete(dynamic_fields::delete_case_study_field),
        )
        // Leads.
        .route_both("/blog-leads", get(leads::list_blog_leads))
        .route_both("/blog-leads/{id}", patch(leads::triage_blog_lead))
        .route_both("/case-study-leads", get(leads::list_case_study_leads))
        .route_both("/case-study-leads/{id}", patch(leads::triage_case_study_lead))
        .route_both("/service-leads", get(leads::list_service_leads))
        .route_both("/service-leads/{id}", patch(leads::triage_service_lead))
        .route_both("/contacts", get(leads::list_contacts))
        .route_both(
            "/contacts/{id}",
            patch(leads::triage_contact).delete(leads::delete_contact),
        )
        .route_both("/job-applications", get(leads::list_job_applications))
        .route_both(
            "/job-applications/{id}",
            get(leads::get_job_application)
                .patch(leads::review_job_application)
                .delete(leads::delete_job_application),
        )
        // Site content.
        .route_both(
            "/social-media",
            get(site::list_social_links).post(site::create_social_link),
        )
        .route_both(
            "/social-media/{id}",
            patch(site::update_social_link).delete(site::delete_social_link),
        )
        .route_both(
            "/privacy-policies",
            get(site::list_policies).post(site::create_policy),
        )
        .route_both(
            "/privacy-policies/{id}",
            patch(site::update_policy).delete(site::delete_policy),
        )
}
