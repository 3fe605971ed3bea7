//! Repository for `job_postings`.

use martech_core::status::JOB_POSTING_STAMPS;
use martech_core::taxonomy::TaxonomyKind;
use martech_core::types::DbId;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::models::content::Page;
use crate::models::job_posting::{
    CreateJobPosting, JobPostingDetail, JobPostingListFilter, JobPostingSummary, UpdateJobPosting,
};
use crate::repositories::{JobLocationRepo, TaxonomyRepo};
use crate::sql::{
    push_flag, push_page, push_search, push_slug_filter, staff_full_name, stamp_assignments,
    stamp_insert,
};

pub const SEARCH_COLUMNS: &[&str] = &[
    "title",
    "short_title",
    "short_description",
    "job_description",
    "skills_required",
];

pub const ORDERING_COLUMNS: &[&str] = &[
    "created_at",
    "updated_at",
    "published_at",
    "application_deadline",
    "title",
    "salary_min",
    "salary_max",
    "views_count",
    "applications_count",
];

const FROM: &str = "FROM job_postings j LEFT JOIN staff_users u ON u.id = j.recruiter_id";

fn summary_columns() -> String {
    format!(
        "j.id, j.title, j.short_title, j.slug, \
         j.department_id, j.category_id, j.job_type_id, j.location_id, \
         u.username AS recruiter_username, {full_name} AS recruiter_full_name, \
         j.short_description, j.salary_min::FLOAT8 AS salary_min, \
         j.salary_max::FLOAT8 AS salary_max, j.salary_currency, j.salary_period, \
         j.experience_level, j.experience_years_min, j.experience_years_max, \
         j.application_deadline, j.status, j.is_featured, j.is_pinned, j.is_urgent, \
         j.views_count, j.applications_count, j.published_at, j.closed_at, \
         j.created_at, j.updated_at",
        full_name = staff_full_name("u")
    )
}

fn detail_columns() -> String {
    format!(
        "{}, j.recruiter_id AS recruiter, j.job_description, j.responsibilities, \
         j.requirements, j.preferred_qualifications, j.skills_required, j.benefits, \
         j.education_required, j.application_url, j.application_email, \
         j.application_instructions, j.meta_title, j.meta_description, j.meta_keywords, \
         j.shares_count",
        summary_columns()
    )
}

pub struct JobPostingRepo;

impl JobPostingRepo {
    // -----------------------------------------------------------------------
    // Public reads
    // -----------------------------------------------------------------------

    pub async fn list_published(
        pool: &PgPool,
        filter: &JobPostingListFilter,
    ) -> Result<Page<JobPostingSummary>, sqlx::Error> {
        let mut count = QueryBuilder::<Postgres>::new(
            "SELECT COUNT(*) FROM job_postings j WHERE j.status = 'published'",
        );
        Self::push_filters(&mut count, filter);
        let total: i64 = count.build_query_scalar().fetch_one(pool).await?;

        let mut qb = QueryBuilder::<Postgres>::new(format!(
            "SELECT {} {FROM} WHERE j.status = 'published'",
            summary_columns()
        ));
        Self::push_filters(&mut qb, filter);
        push_page(&mut qb, "j", &filter.ordering, filter.page);

        let mut items = qb
            .build_query_as::<JobPostingSummary>()
            .fetch_all(pool)
            .await?;
        Self::attach_relations(pool, &mut items).await?;
        Ok(Page { items, total })
    }

    /// Count one view of a published posting and return its detail.
    pub async fn record_view(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<JobPostingDetail>, sqlx::Error> {
        let bumped = sqlx::query(
            "UPDATE job_postings SET views_count = views_count + 1 \
             WHERE id = $1 AND status = 'published'",
        )
        .bind(id)
        .execute(pool)
        .await?;

        if bumped.rows_affected() == 0 {
            return Ok(None);
        }
        Self::find_detail(pool, id).await
    }

    pub async fn find_detail(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<JobPostingDetail>, sqlx::Error> {
        let query = format!("SELECT {} {FROM} WHERE j.id = $1", detail_columns());
        let Some(mut detail) = sqlx::query_as::<_, JobPostingDetail>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
        else {
            return Ok(None);
        };
        Self::attach_relations(pool, std::slice::from_mut(&mut detail.summary)).await?;
        Ok(Some(detail))
    }

    /// Whether a posting with this id exists, in any status.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM job_postings WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    // -----------------------------------------------------------------------
    // Administrative writes
    // -----------------------------------------------------------------------

    pub async fn create(
        pool: &PgPool,
        input: &CreateJobPosting,
        slug: Option<&str>,
    ) -> Result<JobPostingDetail, sqlx::Error> {
        let (stamp_cols, stamp_vals) =
            stamp_insert(JOB_POSTING_STAMPS, "COALESCE($31, 'draft')");
        let query = format!(
            "INSERT INTO job_postings (title, short_title, slug, department_id, category_id, \
                 job_type_id, location_id, recruiter_id, short_description, job_description, \
                 responsibilities, requirements, preferred_qualifications, skills_required, \
                 salary_min, salary_max, salary_currency, salary_period, benefits, \
                 experience_level, experience_years_min, experience_years_max, \
                 education_required, application_deadline, application_url, application_email, \
                 application_instructions, meta_title, meta_description, meta_keywords, \
                 status, is_featured, is_pinned, is_urgent{stamp_cols}) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, \
                 $15::NUMERIC, $16::NUMERIC, COALESCE($17, 'USD'), COALESCE($18, 'yearly'), \
                 $19, $20, $21, $22, $23, $24, $25, $26, $27, $28, $29, $30, \
                 COALESCE($31, 'draft'), COALESCE($32, FALSE), COALESCE($33, FALSE), \
                 COALESCE($34, FALSE){stamp_vals}) \
             RETURNING id"
        );
        let id: DbId = sqlx::query_scalar(&query)
            .bind(&input.title)
            .bind(&input.short_title)
            .bind(slug)
            .bind(input.department_id)
            .bind(input.category_id)
            .bind(input.job_type_id)
            .bind(input.location_id)
            .bind(input.recruiter_id)
            .bind(&input.short_description)
            .bind(&input.job_description)
            .bind(&input.responsibilities)
            .bind(&input.requirements)
            .bind(&input.preferred_qualifications)
            .bind(&input.skills_required)
            .bind(input.salary_min)
            .bind(input.salary_max)
            .bind(&input.salary_currency)
            .bind(&input.salary_period)
            .bind(&input.benefits)
            .bind(&input.experience_level)
            .bind(input.experience_years_min)
            .bind(input.experience_years_max)
            .bind(&input.education_required)
            .bind(input.application_deadline)
            .bind(&input.application_url)
            .bind(&input.application_email)
            .bind(&input.application_instructions)
            .bind(&input.meta_title)
            .bind(&input.meta_description)
            .bind(&input.meta_keywords)
            .bind(&input.status)
            .bind(input.is_featured)
            .bind(input.is_pinned)
            .bind(input.is_urgent)
            .fetch_one(pool)
            .await?;

        Self::find_detail(pool, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// Partial update. Entering `published` or `closed` stamps the matching
    /// column once.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateJobPosting,
    ) -> Result<Option<JobPostingDetail>, sqlx::Error> {
        let stamps = stamp_assignments(JOB_POSTING_STAMPS, "COALESCE($32, status)");
        let query = format!(
            "UPDATE job_postings SET \
                 title = COALESCE($2, title), \
                 short_title = COALESCE($3, short_title), \
                 slug = COALESCE($4, slug), \
                 department_id = COALESCE($5, department_id), \
                 category_id = COALESCE($6, category_id), \
                 job_type_id = COALESCE($7, job_type_id), \
                 location_id = COALESCE($8, location_id), \
                 recruiter_id = COALESCE($9, recruiter_id), \
                 short_description = COALESCE($10, short_description), \
                 job_description = COALESCE($11, job_description), \
                 responsibilities = COALESCE($12, responsibilities), \
                 requirements = COALESCE($13, requirements), \
                 preferred_qualifications = COALESCE($14, preferred_qualifications), \
                 skills_required = COALESCE($15, skills_required), \
                 salary_min = COALESCE($16::NUMERIC, salary_min), \
                 salary_max = COALESCE($17::NUMERIC, salary_max), \
                 salary_currency = COALESCE($18, salary_currency), \
                 salary_period = COALESCE($19, salary_period), \
                 benefits = COALESCE($20, benefits), \
                 experience_level = COALESCE($21, experience_level), \
                 experience_years_min = COALESCE($22, experience_years_min), \
                 experience_years_max = COALESCE($23, experience_years_max), \
                 education_required = COALESCE($24, education_required), \
                 application_deadline = COALESCE($25, application_deadline), \
                 application_url = COALESCE($26, application_url), \
                 application_email = COALESCE($27, application_email), \
                 application_instructions = COALESCE($28, application_instructions), \
                 meta_title = COALESCE($29, meta_title), \
                 meta_description = COALESCE($30, meta_description), \
                 meta_keywords = COALESCE($31, meta_keywords), \
                 status = COALESCE($32, status){stamps}, \
                 is_featured = COALESCE($33, is_featured), \
                 is_pinned = COALESCE($34, is_pinned), \
                 is_urgent = COALESCE($35, is_urgent) \
             WHERE id = $1 \
             RETURNING id"
        );
        let updated: Option<DbId> = sqlx::query_scalar(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.short_title)
            .bind(&input.slug)
            .bind(input.department_id)
            .bind(input.category_id)
            .bind(input.job_type_id)
            .bind(input.location_id)
            .bind(input.recruiter_id)
            .bind(&input.short_description)
            .bind(&input.job_description)
            .bind(&input.responsibilities)
            .bind(&input.requirements)
            .bind(&input.preferred_qualifications)
            .bind(&input.skills_required)
            .bind(input.salary_min)
            .bind(input.salary_max)
            .bind(&input.salary_currency)
            .bind(&input.salary_period)
            .bind(&input.benefits)
            .bind(&input.experience_level)
            .bind(input.experience_years_min)
            .bind(input.experience_years_max)
            .bind(&input.education_required)
            .bind(input.application_deadline)
            .bind(&input.application_url)
            .bind(&input.application_email)
            .bind(&input.application_instructions)
            .bind(&input.meta_title)
            .bind(&input.meta_description)
            .bind(&input.meta_keywords)
            .bind(&input.status)
            .bind(input.is_featured)
            .bind(input.is_pinned)
            .bind(input.is_urgent)
            .fetch_optional(pool)
            .await?;

        match updated {
            Some(id) => Self::find_detail(pool, id).await,
            None => Ok(None),
        }
    }

    /// Bulk status change with the same stamping as [`Self::update`].
    pub async fn bulk_set_status(
        pool: &PgPool,
        ids: &[DbId],
        status: &str,
    ) -> Result<u64, sqlx::Error> {
        let query = format!(
            "UPDATE job_postings SET status = $1{} WHERE id = ANY($2)",
            stamp_assignments(JOB_POSTING_STAMPS, "$1")
        );
        let result = sqlx::query(&query)
            .bind(status)
            .bind(ids)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Delete a posting together with its applications.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM job_postings WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    fn push_filters(qb: &mut QueryBuilder<'_, Postgres>, filter: &JobPostingListFilter) {
        if let Some(slug) = &filter.department {
            push_slug_filter(qb, "j", "department_id", "departments", slug);
        }
        if let Some(slug) = &filter.category {
            push_slug_filter(qb, "j", "category_id", "job_categories", slug);
        }
        if let Some(slug) = &filter.job_type {
            push_slug_filter(qb, "j", "job_type_id", "job_types", slug);
        }
        if let Some(slug) = &filter.location {
            push_slug_filter(qb, "j", "location_id", "job_locations", slug);
        }
        if let Some(remote) = filter.is_remote {
            qb.push(" AND j.location_id IN (SELECT id FROM job_locations WHERE is_remote = ");
            qb.push_bind(remote);
            qb.push(")");
        }
        if let Some(level) = &filter.experience_level {
            qb.push(" AND j.experience_level = ");
            qb.push_bind(level.clone());
        }
        if let Some(v) = filter.is_featured {
            push_flag(qb, "j", "is_featured", v);
        }
        if let Some(v) = filter.is_urgent {
            push_flag(qb, "j", "is_urgent", v);
        }
        if let Some(pattern) = &filter.search {
            push_search(qb, "j", SEARCH_COLUMNS, pattern);
        }
    }

    async fn attach_relations(
        pool: &PgPool,
        items: &mut [JobPostingSummary],
    ) -> Result<(), sqlx::Error> {
        fn ids(items: &[JobPostingSummary], f: fn(&JobPostingSummary) -> Option<DbId>) -> Vec<DbId> {
            items.iter().filter_map(f).collect()
        }

        let departments = TaxonomyRepo::find_by_ids(
            pool,
            TaxonomyKind::Department,
            &ids(items, |j| j.department_id),
        )
        .await?;
        let categories = TaxonomyRepo::find_by_ids(
            pool,
            TaxonomyKind::JobCategory,
            &ids(items, |j| j.category_id),
        )
        .await?;
        let job_types =
            TaxonomyRepo::find_by_ids(pool, TaxonomyKind::JobType, &ids(items, |j| j.job_type_id))
                .await?;
        let locations = JobLocationRepo::find_by_ids(pool, &ids(items, |j| j.location_id)).await?;

        for item in items.iter_mut() {
            item.department = item.department_id.and_then(|id| departments.get(&id).cloned());
            item.category = item.category_id.and_then(|id| categories.get(&id).cloned());
            item.job_type = item.job_type_id.and_then(|id| job_types.get(&id).cloned());
            item.location = item.location_id.and_then(|id| locations.get(&id).cloned());
        }
        Ok(())
    }
}
