//! Repository for `case_studies` and their tag assignments.

use martech_core::dynamic_form::FormOwner;
use martech_core::leads::case_study_engagement;
use martech_core::status::CONTENT_STAMPS;
use martech_core::taxonomy::TaxonomyKind;
use martech_core::types::DbId;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::models::case_study::{
    CaseStudyDetail, CaseStudyListFilter, CaseStudySummary, CreateCaseStudy, UpdateCaseStudy,
};
use crate::models::content::Page;
use crate::repositories::{DynamicFieldRepo, TagLink, TaxonomyRepo};
use crate::sql::{
    push_flag, push_page, push_search, push_slug_filter, push_tag_filter, staff_full_name,
    stamp_assignments, stamp_insert,
};

/// Text columns matched by `?search=`.
pub const SEARCH_COLUMNS: &[&str] = &[
    "title",
    "short_title",
    "short_description",
    "content",
    "client_name",
    "client_industry",
];

/// Columns accepted by `?ordering=`.
pub const ORDERING_COLUMNS: &[&str] = &[
    "created_at",
    "updated_at",
    "published_at",
    "title",
    "views_count",
    "likes_count",
    "shares_count",
    "downloads_count",
];

const FROM: &str = "FROM case_studies c LEFT JOIN staff_users u ON u.id = c.author_id";

fn summary_columns() -> String {
    format!(
        "c.id, c.title, c.short_title, c.slug, c.category_id, \
         u.username AS author_username, {full_name} AS author_full_name, \
         c.short_description, c.banner_image, c.mobile_image, c.estimated_time, \
         c.client_name, c.client_industry, c.logo_image, c.status, \
         c.is_featured, c.is_pinned, c.views_count, c.likes_count, c.shares_count, \
         c.downloads_count, \
         c.published_at, c.created_at, c.updated_at",
        full_name = staff_full_name("u")
    )
}

fn detail_columns() -> String {
    format!(
        "{}, c.author_id AS author, c.content, c.project_duration, c.project_budget, \
         c.results_summary, c.lp_image, c.external_link, c.downloadable_file, \
         c.meta_title, c.meta_description, c.meta_keywords",
        summary_columns()
    )
}

pub struct CaseStudyRepo;

impl CaseStudyRepo {
    // -----------------------------------------------------------------------
    // Public reads
    // -----------------------------------------------------------------------

    /// One page of published case studies matching the filter.
    pub async fn list_published(
        pool: &PgPool,
        filter: &CaseStudyListFilter,
    ) -> Result<Page<CaseStudySummary>, sqlx::Error> {
        let mut count = QueryBuilder::<Postgres>::new(
            "SELECT COUNT(*) FROM case_studies c WHERE c.status = 'published'",
        );
        Self::push_filters(&mut count, filter);
        let total: i64 = count.build_query_scalar().fetch_one(pool).await?;

        let mut qb = QueryBuilder::<Postgres>::new(format!(
            "SELECT {} {FROM} WHERE c.status = 'published'",
            summary_columns()
        ));
        Self::push_filters(&mut qb, filter);
        push_page(&mut qb, "c", &filter.ordering, filter.page);

        let mut items = qb.build_query_as::<CaseStudySummary>().fetch_all(pool).await?;
        Self::attach_relations(pool, &mut items).await?;
        Ok(Page { items, total })
    }

    /// Count one view of a published case study and return its detail.
    ///
    /// Returns `None` when the case study does not exist or is not published.
    /// The increment happens in the database so concurrent views are never
    /// lost.
    pub async fn record_view(pool: &PgPool, id: DbId) -> Result<Option<CaseStudyDetail>, sqlx::Error> {
        let bumped = sqlx::query(
            "UPDATE case_studies SET views_count = views_count + 1 \
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

    /// Detail projection in any status.
    pub async fn find_detail(pool: &PgPool, id: DbId) -> Result<Option<CaseStudyDetail>, sqlx::Error> {
        let query = format!("SELECT {} {FROM} WHERE c.id = $1", detail_columns());
        let Some(mut detail) = sqlx::query_as::<_, CaseStudyDetail>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
        else {
            return Ok(None);
        };

        Self::attach_relations(pool, std::slice::from_mut(&mut detail.summary)).await?;
        let s = &detail.summary;
        detail.engagement_score = case_study_engagement(
            s.views_count.into(),
            s.likes_count.into(),
            s.shares_count.into(),
            s.downloads_count.into(),
        );
        detail.dynamic_fields = DynamicFieldRepo::list_active(pool, FormOwner::CaseStudy, id).await?;
        Ok(Some(detail))
    }

    // -----------------------------------------------------------------------
    // Administrative writes
    // -----------------------------------------------------------------------

    /// Insert a case study and its tag links in one transaction. The slug is
    /// resolved by the caller.
    pub async fn create(
        pool: &PgPool,
        input: &CreateCaseStudy,
        slug: Option<&str>,
    ) -> Result<CaseStudyDetail, sqlx::Error> {
        let (stamp_cols, stamp_vals) = stamp_insert(CONTENT_STAMPS, "COALESCE($14, 'draft')");
        let query = format!(
            "INSERT INTO case_studies (title, short_title, slug, author_id, category_id, \
                 short_description, content, banner_image, mobile_image, estimated_time, \
                 meta_title, meta_description, meta_keywords, status, is_featured, is_pinned, \
                 client_name, client_industry, project_duration, project_budget, \
                 results_summary, logo_image, lp_image, external_link, downloadable_file\
                 {stamp_cols}) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, \
                 COALESCE($14, 'draft'), COALESCE($15, FALSE), COALESCE($16, FALSE), \
                 $17, $18, $19, $20, $21, $22, $23, $24, $25\
                 {stamp_vals}) \
             RETURNING id"
        );

        let mut tx = pool.begin().await?;
        let id: DbId = sqlx::query_scalar(&query)
            .bind(&input.title)
            .bind(&input.short_title)
            .bind(slug)
            .bind(input.author_id)
            .bind(input.category_id)
            .bind(&input.short_description)
            .bind(&input.content)
            .bind(&input.banner_image)
            .bind(&input.mobile_image)
            .bind(input.estimated_time)
            .bind(&input.meta_title)
            .bind(&input.meta_description)
            .bind(&input.meta_keywords)
            .bind(&input.status)
            .bind(input.is_featured)
            .bind(input.is_pinned)
            .bind(&input.client_name)
            .bind(&input.client_industry)
            .bind(&input.project_duration)
            .bind(&input.project_budget)
            .bind(&input.results_summary)
            .bind(&input.logo_image)
            .bind(&input.lp_image)
            .bind(&input.external_link)
            .bind(&input.downloadable_file)
            .fetch_one(&mut *tx)
            .await?;
        TaxonomyRepo::replace_tags(&mut *tx, TagLink::CaseStudy, id, &input.tag_ids).await?;
        tx.commit().await?;

        Self::find_detail(pool, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// Partial update. A status change stamps `published_at` in the same
    /// statement; title changes never touch the slug.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCaseStudy,
    ) -> Result<Option<CaseStudyDetail>, sqlx::Error> {
        let stamps = stamp_assignments(CONTENT_STAMPS, "COALESCE($15, status)");
        let query = format!(
            "UPDATE case_studies SET \
                 title = COALESCE($2, title), \
                 short_title = COALESCE($3, short_title), \
                 slug = COALESCE($4, slug), \
                 author_id = COALESCE($5, author_id), \
                 category_id = COALESCE($6, category_id), \
                 short_description = COALESCE($7, short_description), \
                 content = COALESCE($8, content), \
                 banner_image = COALESCE($9, banner_image), \
                 mobile_image = COALESCE($10, mobile_image), \
                 estimated_time = COALESCE($11, estimated_time), \
                 meta_title = COALESCE($12, meta_title), \
                 meta_description = COALESCE($13, meta_description), \
                 meta_keywords = COALESCE($14, meta_keywords), \
                 status = COALESCE($15, status){stamps}, \
                 is_featured = COALESCE($16, is_featured), \
                 is_pinned = COALESCE($17, is_pinned), \
                 client_name = COALESCE($18, client_name), \
                 client_industry = COALESCE($19, client_industry), \
                 project_duration = COALESCE($20, project_duration), \
                 project_budget = COALESCE($21, project_budget), \
                 results_summary = COALESCE($22, results_summary), \
                 logo_image = COALESCE($23, logo_image), \
                 lp_image = COALESCE($24, lp_image), \
                 external_link = COALESCE($25, external_link), \
                 downloadable_file = COALESCE($26, downloadable_file) \
             WHERE id = $1 \
             RETURNING id"
        );

        let mut tx = pool.begin().await?;
        let updated: Option<DbId> = sqlx::query_scalar(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.short_title)
            .bind(&input.slug)
            .bind(input.author_id)
            .bind(input.category_id)
            .bind(&input.short_description)
            .bind(&input.content)
            .bind(&input.banner_image)
            .bind(&input.mobile_image)
            .bind(input.estimated_time)
            .bind(&input.meta_title)
            .bind(&input.meta_description)
            .bind(&input.meta_keywords)
            .bind(&input.status)
            .bind(input.is_featured)
            .bind(input.is_pinned)
            .bind(&input.client_name)
            .bind(&input.client_industry)
            .bind(&input.project_duration)
            .bind(&input.project_budget)
            .bind(&input.results_summary)
            .bind(&input.logo_image)
            .bind(&input.lp_image)
            .bind(&input.external_link)
            .bind(&input.downloadable_file)
            .fetch_optional(&mut *tx)
            .await?;

        if updated.is_none() {
            return Ok(None);
        }
        if let Some(tag_ids) = &input.tag_ids {
            TaxonomyRepo::replace_tags(&mut *tx, TagLink::CaseStudy, id, tag_ids).await?;
        }
        tx.commit().await?;

        Self::find_detail(pool, id).await
    }

    /// Set the status of many case studies at once, stamping exactly as a single
    /// update would. Returns the number of rows changed.
    pub async fn bulk_set_status(
        pool: &PgPool,
        ids: &[DbId],
        status: &str,
    ) -> Result<u64, sqlx::Error> {
        let query = format!(
            "UPDATE case_studies SET status = $1{} WHERE id = ANY($2)",
            stamp_assignments(CONTENT_STAMPS, "$1")
        );
        let result = sqlx::query(&query)
            .bind(status)
            .bind(ids)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Delete a case study. Its tag links, dynamic fields and leads cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM case_studies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    fn push_filters(qb: &mut QueryBuilder<'_, Postgres>, filter: &CaseStudyListFilter) {
        if let Some(slug) = &filter.category {
            push_slug_filter(qb, "c", "category_id", "case_study_categories", slug);
        }
        if let Some(slug) = &filter.tag {
            push_tag_filter(
                qb,
                "c",
                "case_study_tag_assignments",
                "case_study_id",
                "case_study_tags",
                slug,
            );
        }
        if let Some(pattern) = &filter.industry {
            qb.push(" AND c.client_industry ILIKE ");
            qb.push_bind(pattern.clone());
        }
        if let Some(v) = filter.is_featured {
            push_flag(qb, "c", "is_featured", v);
        }
        if let Some(pattern) = &filter.search {
            push_search(qb, "c", SEARCH_COLUMNS, pattern);
        }
    }

    async fn attach_relations(
        pool: &PgPool,
        items: &mut [CaseStudySummary],
    ) -> Result<(), sqlx::Error> {
        let category_ids: Vec<DbId> = items.iter().filter_map(|c| c.category_id).collect();
        let categories =
            TaxonomyRepo::find_by_ids(pool, TaxonomyKind::CaseStudyCategory, &category_ids).await?;

        let ids: Vec<DbId> = items.iter().map(|c| c.id).collect();
        let mut tags = TaxonomyRepo::tags_for(pool, TagLink::CaseStudy, &ids).await?;

        for item in items.iter_mut() {
            item.category = item.category_id.and_then(|id| categories.get(&id).cloned());
            item.tags = tags.remove(&item.id).unwrap_or_default();
        }
        Ok(())
    }
}
