//! Repository tests for lead capture: counter bumps, rollback on failure,
//! dynamic lead payloads and staff triage.

use assert_matches::assert_matches;
use martech_core::dynamic_form::FormOwner;
use martech_db::models::blog::CreateBlog;
use martech_db::models::contact::CreateContact;
use martech_db::models::content::LeadTriage;
use martech_db::models::job_application::{CreateJobApplication, ReviewJobApplication};
use martech_db::models::job_posting::CreateJobPosting;
use martech_db::models::service::CreateService;
use martech_db::models::service_lead::CreateServiceLead;
use martech_db::models::staff_user::CreateStaffUser;
use martech_db::repositories::{
    BlogRepo, ContactRepo, DynamicLeadRepo, JobApplicationRepo, JobPostingRepo, ServiceLeadRepo,
    ServiceRepo, StaffUserRepo,
};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn insert_service(pool: &PgPool) -> i64 {
    let input = CreateService {
        title: Some("Brand Strategy".into()),
        status: Some("published".into()),
        ..Default::default()
    };
    ServiceRepo::create(pool, &input, Some("brand-strategy"))
        .await
        .unwrap()
        .summary
        .id
}

async fn insert_posting(pool: &PgPool) -> i64 {
    let input = CreateJobPosting {
        title: Some("Designer".into()),
        status: Some("published".into()),
        ..Default::default()
    };
    JobPostingRepo::create(pool, &input, Some("designer"))
        .await
        .unwrap()
        .summary
        .id
}

async fn count(pool: &PgPool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap()
}

// ---------------------------------------------------------------------------
// Service leads
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_service_lead_bumps_inquiries(pool: PgPool) {
    let service_id = insert_service(&pool).await;

    let lead = ServiceLeadRepo::create(
        &pool,
        &CreateServiceLead {
            service: Some(service_id),
            full_name: Some("Grace".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(lead.inquiry_type, "information");
    assert_eq!(lead.lead_source, "website");

    let service = ServiceRepo::find_detail(&pool, service_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(service.summary.inquiries_count, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_concurrent_service_leads_are_all_counted(pool: PgPool) {
    let service_id = insert_service(&pool).await;
    let input = CreateServiceLead {
        service: Some(service_id),
        ..Default::default()
    };

    let inserts = (0..8).map(|_| ServiceLeadRepo::create(&pool, &input));
    let results = futures::future::join_all(inserts).await;
    assert!(results.iter().all(Result::is_ok));

    let service = ServiceRepo::find_detail(&pool, service_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(service.summary.inquiries_count, 8);
    assert_eq!(count(&pool, "service_leads").await, 8);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_service_lead_for_missing_service_leaves_nothing_behind(pool: PgPool) {
    let err = ServiceLeadRepo::create(
        &pool,
        &CreateServiceLead {
            service: Some(9_999),
            ..Default::default()
        },
    )
    .await
    .unwrap_err();
    assert_matches!(err, sqlx::Error::Database(ref db) if db.is_foreign_key_violation());
    assert_eq!(count(&pool, "service_leads").await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unattached_service_lead_is_accepted(pool: PgPool) {
    let lead = ServiceLeadRepo::create(&pool, &CreateServiceLead::default())
        .await
        .unwrap();
    assert_eq!(lead.service_id, None);
}

// ---------------------------------------------------------------------------
// Job applications
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_application_bumps_posting_counter(pool: PgPool) {
    let posting_id = insert_posting(&pool).await;

    let application = JobApplicationRepo::create(
        &pool,
        &CreateJobApplication {
            job_posting: Some(posting_id),
            first_name: Some("Ada".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(application.status, "pending");
    assert_eq!(application.source, "website");

    let posting = JobPostingRepo::find_detail(&pool, posting_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(posting.summary.applications_count, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_review_stamps_reviewed_at(pool: PgPool) {
    let reviewer = StaffUserRepo::create(
        &pool,
        &CreateStaffUser {
            username: "hiring-manager".into(),
            first_name: None,
            last_name: None,
            email: None,
            is_active: None,
        },
    )
    .await
    .unwrap();
    let application = JobApplicationRepo::create(&pool, &CreateJobApplication::default())
        .await
        .unwrap();
    assert!(application.reviewed_at.is_none());

    let notes_only = JobApplicationRepo::review(
        &pool,
        application.id,
        &ReviewJobApplication {
            notes: Some("Strong portfolio".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert!(notes_only.reviewed_at.is_none());

    let reviewed = JobApplicationRepo::review(
        &pool,
        application.id,
        &ReviewJobApplication {
            status: Some("reviewing".into()),
            reviewed_by: Some(reviewer.id),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(reviewed.status, "reviewing");
    assert_eq!(reviewed.reviewed_by, Some(reviewer.id));
    assert!(reviewed.reviewed_at.is_some());
    assert_eq!(reviewed.notes.as_deref(), Some("Strong portfolio"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deleting_posting_cascades_applications(pool: PgPool) {
    let posting_id = insert_posting(&pool).await;
    JobApplicationRepo::create(
        &pool,
        &CreateJobApplication {
            job_posting: Some(posting_id),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert!(JobPostingRepo::delete(&pool, posting_id).await.unwrap());
    assert_eq!(count(&pool, "job_applications").await, 0);
}

// ---------------------------------------------------------------------------
// Dynamic leads
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_dynamic_lead_stores_payload_verbatim(pool: PgPool) {
    let blog = BlogRepo::create(&pool, &CreateBlog::default(), None)
        .await
        .unwrap();
    let data = json!({"email": "a@b.co", "budget": 5000, "extra": {"nested": true}});

    let lead = DynamicLeadRepo::create(&pool, FormOwner::Blog, blog.summary.id, &data)
        .await
        .unwrap();
    assert_eq!(lead.owner_id, blog.summary.id);
    assert_eq!(lead.data, data);
    assert!(!lead.is_contacted);

    let triaged = DynamicLeadRepo::update_triage(
        &pool,
        FormOwner::Blog,
        lead.id,
        &LeadTriage {
            is_contacted: Some(true),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert!(triaged.is_contacted);
    assert_eq!(triaged.data, data);

    let page = DynamicLeadRepo::list(&pool, FormOwner::Blog, 1).await.unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(count(&pool, "case_study_leads").await, 0);
}

// ---------------------------------------------------------------------------
// Contacts
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_contact_triage_keeps_submission(pool: PgPool) {
    let contact = ContactRepo::create(
        &pool,
        &CreateContact {
            full_name: Some("Linus".into()),
            requirements: Some("New website".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let updated = ContactRepo::update_triage(
        &pool,
        contact.id,
        &LeadTriage {
            is_converted: Some(true),
            notes: Some("Signed".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert!(updated.is_converted);
    assert!(!updated.is_contacted);
    assert_eq!(updated.requirements.as_deref(), Some("New website"));

    assert!(ContactRepo::delete(&pool, contact.id).await.unwrap());
    assert!(ContactRepo::update_triage(&pool, contact.id, &LeadTriage::default())
        .await
        .unwrap()
        .is_none());
}
