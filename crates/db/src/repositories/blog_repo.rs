//! Repository for `blogs` and their tag assignments.

use martech_core::dynamic_form::FormOwner;
use martech_core::leads::blog_engagement;
use martech_core::status::CONTENT_STAMPS;
use martech_core::taxonomy::TaxonomyKind;
use martech_core::types::DbId;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::models::blog::{BlogDetail, BlogListFilter, BlogSummary, CreateBlog, UpdateBlog};
use crate::models::content::Page;
use crate::repositories::{DynamicFieldRepo, TagLink, TaxonomyRepo};
use crate::sql::{
    push_flag, push_page, push_search, push_slug_filter, push_tag_filter, staff_full_name,
    stamp_assignments, stamp_insert,
};

/// Text columns matched by `?search=`.
pub const SEARCH_COLUMNS: &[&str] = &["title", "short_title", "short_description", "content"];

/// Columns accepted by `?ordering=`.
pub const ORDERING_COLUMNS: &[&str] = &[
    "created_at",
    "updated_at",
    "published_at",
    "title",
    "views_count",
    "likes_count",
    "shares_count",
];

const FROM: &str = "FROM blogs b LEFT JOIN staff_users u ON u.id = b.author_id";

fn summary_columns() -> String {
    format!(
        "b.id, b.title, b.short_title, b.slug, b.category_id, \
         u.username AS author_username, {full_name} AS author_full_name, \
         b.short_description, b.banner_image, b.mobile_image, b.estimated_time, b.status, \
         b.is_featured, b.is_pinned, b.views_count, b.likes_count, b.shares_count, \
         b.published_at, b.created_at, b.updated_at",
        full_name = staff_full_name("u")
    )
}

fn detail_columns() -> String {
    format!(
        "{}, b.author_id AS author, b.content, b.meta_title, b.meta_description, b.meta_keywords",
        summary_columns()
    )
}

pub struct BlogRepo;

impl BlogRepo {
    // -----------------------------------------------------------------------
    // Public reads
    // -----------------------------------------------------------------------

    /// One page of published posts matching the filter.
    pub async fn list_published(
        pool: &PgPool,
        filter: &BlogListFilter,
    ) -> Result<Page<BlogSummary>, sqlx::Error> {
        let mut count = QueryBuilder::<Postgres>::new(
            "SELECT COUNT(*) FROM blogs b WHERE b.status = 'published'",
        );
        Self::push_filters(&mut count, filter);
        let total: i64 = count.build_query_scalar().fetch_one(pool).await?;

        let mut qb = QueryBuilder::<Postgres>::new(format!(
            "SELECT {} {FROM} WHERE b.status = 'published'",
            summary_columns()
        ));
        Self::push_filters(&mut qb, filter);
        push_page(&mut qb, "b", &filter.ordering, filter.page);

        let mut items = qb.build_query_as::<BlogSummary>().fetch_all(pool).await?;
        Self::attach_relations(pool, &mut items).await?;
        Ok(Page { items, total })
    }

    /// Count one view of a published post and return its detail.
    ///
    /// Returns `None` when the post does not exist or is not published.
    /// The increment happens in the database so concurrent views are never
    /// lost.
    pub async fn record_view(pool: &PgPool, id: DbId) -> Result<Option<BlogDetail>, sqlx::Error> {
        let bumped = sqlx::query(
            "UPDATE blogs SET views_count = views_count + 1 \
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
    pub async fn find_detail(pool: &PgPool, id: DbId) -> Result<Option<BlogDetail>, sqlx::Error> {
        let query = format!("SELECT {} {FROM} WHERE b.id = $1", detail_columns());
        let Some(mut detail) = sqlx::query_as::<_, BlogDetail>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
        else {
            return Ok(None);
        };

        Self::attach_relations(pool, std::slice::from_mut(&mut detail.summary)).await?;
        let s = &detail.summary;
        detail.engagement_score = blog_engagement(
            s.views_count.into(),
            s.likes_count.into(),
            s.shares_count.into(),
        );
        detail.dynamic_fields = DynamicFieldRepo::list_active(pool, FormOwner::Blog, id).await?;
        Ok(Some(detail))
    }

    // -----------------------------------------------------------------------
    // Administrative writes
    // -----------------------------------------------------------------------

    /// Insert a post and its tag links in one transaction. The slug is
    /// resolved by the caller.
    pub async fn create(
        pool: &PgPool,
        input: &CreateBlog,
        slug: Option<&str>,
    ) -> Result<BlogDetail, sqlx::Error> {
        let (stamp_cols, stamp_vals) = stamp_insert(CONTENT_STAMPS, "COALESCE($14, 'draft')");
        let query = format!(
            "INSERT INTO blogs (title, short_title, slug, author_id, category_id, \
                 short_description, content, banner_image, mobile_image, estimated_time, \
                 meta_title, meta_description, meta_keywords, status, is_featured, is_pinned\
                 {stamp_cols}) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, \
                 COALESCE($14, 'draft'), COALESCE($15, FALSE), COALESCE($16, FALSE)\
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
            .fetch_one(&mut *tx)
            .await?;
        TaxonomyRepo::replace_tags(&mut *tx, TagLink::Blog, id, &input.tag_ids).await?;
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
        input: &UpdateBlog,
    ) -> Result<Option<BlogDetail>, sqlx::Error> {
        let stamps = stamp_assignments(CONTENT_STAMPS, "COALESCE($15, status)");
        let query = format!(
            "UPDATE blogs SET \
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
                 is_pinned = COALESCE($17, is_pinned) \
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
            .fetch_optional(&mut *tx)
            .await?;

        if updated.is_none() {
            return Ok(None);
        }
        if let Some(tag_ids) = &input.tag_ids {
            TaxonomyRepo::replace_tags(&mut *tx, TagLink::Blog, id, tag_ids).await?;
        }
        tx.commit().await?;

        Self::find_detail(pool, id).await
    }

    /// Set the status of many posts at once, stamping exactly as a single
    /// update would. Returns the number of rows changed.
    pub async fn bulk_set_status(
        pool: &PgPool,
        ids: &[DbId],
        status: &str,
    ) -> Result<u64, sqlx::Error> {
        let query = format!(
            "UPDATE blogs SET status = $1{} WHERE id = ANY($2)",
            stamp_assignments(CONTENT_STAMPS, "$1")
        );
        let result = sqlx::query(&query)
            .bind(status)
            .bind(ids)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Delete a post. Its tag links, dynamic fields and leads cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM blogs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    fn push_filters(qb: &mut QueryBuilder<'_, Postgres>, filter: &BlogListFilter) {
        if let Some(slug) = &filter.category {
            push_slug_filter(qb, "b", "category_id", "categories", slug);
        }
        if let Some(slug) = &filter.tag {
            push_tag_filter(qb, "b", "blog_tag_assignments", "blog_id", "tags", slug);
        }
        if let Some(v) = filter.is_featured {
            push_flag(qb, "b", "is_featured", v);
        }
        if let Some(pattern) = &filter.search {
            push_search(qb, "b", SEARCH_COLUMNS, pattern);
        }
    }

    async fn attach_relations(pool: &PgPool, items: &mut [BlogSummary]) -> Result<(), sqlx::Error> {
        let category_ids: Vec<DbId> = items.iter().filter_map(|b| b.category_id).collect();
        let categories =
            TaxonomyRepo::find_by_ids(pool, TaxonomyKind::BlogCategory, &category_ids).await?;

        let ids: Vec<DbId> = items.iter().map(|b| b.id).collect();
        let mut tags = TaxonomyRepo::tags_for(pool, TagLink::Blog, &ids).await?;

        for item in items.iter_mut() {
            item.category = item.category_id.and_then(|id| categories.get(&id).cloned());
            item.tags = tags.remove(&item.id).unwrap_or_default();
        }
        Ok(())
    }
}
