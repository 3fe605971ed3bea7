//! Repository for `services`.

use martech_core::status::CONTENT_STAMPS;
use martech_core::taxonomy::TaxonomyKind;
use martech_core::types::DbId;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::models::content::Page;
use crate::models::service::{
    CreateService, ServiceDetail, ServiceListFilter, ServiceSummary, UpdateService,
};
use crate::repositories::TaxonomyRepo;
use crate::sql::{
    push_flag, push_page, push_search, push_slug_filter, staff_full_name, stamp_assignments,
    stamp_insert,
};

pub const SEARCH_COLUMNS: &[&str] = &[
    "title",
    "short_title",
    "short_description",
    "description",
    "features",
    "benefits",
];

pub const ORDERING_COLUMNS: &[&str] = &[
    "created_at",
    "updated_at",
    "published_at",
    "title",
    "price_starting_from",
    "views_count",
    "inquiries_count",
    "likes_count",
];

const FROM: &str = "FROM services s LEFT JOIN staff_users u ON u.id = s.author_id";

fn summary_columns() -> String {
    format!(
        "s.id, s.title, s.short_title, s.slug, s.category_id, \
         u.username AS author_username, {full_name} AS author_full_name, \
         s.short_description, s.banner_image, s.mobile_image, s.icon, \
         s.price_starting_from::FLOAT8 AS price_starting_from, s.price_currency, \
         s.price_period, s.is_free, s.has_custom_pricing, s.duration, s.delivery_time, \
         s.service_type, s.status, s.is_featured, s.is_pinned, s.is_popular, \
         s.views_count, s.inquiries_count, s.likes_count, \
         s.published_at, s.created_at, s.updated_at",
        full_name = staff_full_name("u")
    )
}

fn detail_columns() -> String {
    format!(
        "{}, s.author_id AS author, s.description, s.features, s.benefits, \
         s.meta_title, s.meta_description, s.meta_keywords",
        summary_columns()
    )
}

pub struct ServiceRepo;

impl ServiceRepo {
    // -----------------------------------------------------------------------
    // Public reads
    // -----------------------------------------------------------------------

    pub async fn list_published(
        pool: &PgPool,
        filter: &ServiceListFilter,
    ) -> Result<Page<ServiceSummary>, sqlx::Error> {
        let mut count = QueryBuilder::<Postgres>::new(
            "SELECT COUNT(*) FROM services s WHERE s.status = 'published'",
        );
        Self::push_filters(&mut count, filter);
        let total: i64 = count.build_query_scalar().fetch_one(pool).await?;

        let mut qb = QueryBuilder::<Postgres>::new(format!(
            "SELECT {} {FROM} WHERE s.status = 'published'",
            summary_columns()
        ));
        Self::push_filters(&mut qb, filter);
        push_page(&mut qb, "s", &filter.ordering, filter.page);

        let mut items = qb.build_query_as::<ServiceSummary>().fetch_all(pool).await?;
        Self::attach_categories(pool, &mut items).await?;
        Ok(Page { items, total })
    }

    /// Count one view of a published service and return its detail.
    pub async fn record_view(pool: &PgPool, id: DbId) -> Result<Option<ServiceDetail>, sqlx::Error> {
        let bumped = sqlx::query(
            "UPDATE services SET views_count = views_count + 1 \
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

    pub async fn find_detail(pool: &PgPool, id: DbId) -> Result<Option<ServiceDetail>, sqlx::Error> {
        let query = format!("SELECT {} {FROM} WHERE s.id = $1", detail_columns());
        let Some(mut detail) = sqlx::query_as::<_, ServiceDetail>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
        else {
            return Ok(None);
        };
        Self::attach_categories(pool, std::slice::from_mut(&mut detail.summary)).await?;
        Ok(Some(detail))
    }

    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM services WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    // -----------------------------------------------------------------------
    // Administrative writes
    // -----------------------------------------------------------------------

    pub async fn create(
        pool: &PgPool,
        input: &CreateService,
        slug: Option<&str>,
    ) -> Result<ServiceDetail, sqlx::Error> {
        let (stamp_cols, stamp_vals) = stamp_insert(CONTENT_STAMPS, "COALESCE($24, 'draft')");
        let query = format!(
            "INSERT INTO services (title, short_title, slug, category_id, author_id, \
                 short_description, description, features, benefits, banner_image, \
                 mobile_image, icon, price_starting_from, price_currency, price_period, \
                 is_free, has_custom_pricing, duration, delivery_time, service_type, \
                 meta_title, meta_description, meta_keywords, status, is_featured, \
                 is_pinned, is_popular{stamp_cols}) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13::NUMERIC, \
                 COALESCE($14, 'USD'), COALESCE($15, 'one_time'), COALESCE($16, FALSE), \
                 COALESCE($17, FALSE), $18, $19, $20, $21, $22, $23, \
                 COALESCE($24, 'draft'), COALESCE($25, FALSE), COALESCE($26, FALSE), \
                 COALESCE($27, FALSE){stamp_vals}) \
             RETURNING id"
        );
        let id: DbId = sqlx::query_scalar(&query)
            .bind(&input.title)
            .bind(&input.short_title)
            .bind(slug)
            .bind(input.category_id)
            .bind(input.author_id)
            .bind(&input.short_description)
            .bind(&input.description)
            .bind(&input.features)
            .bind(&input.benefits)
            .bind(&input.banner_image)
            .bind(&input.mobile_image)
            .bind(&input.icon)
            .bind(input.price_starting_from)
            .bind(&input.price_currency)
            .bind(&input.price_period)
            .bind(input.is_free)
            .bind(input.has_custom_pricing)
            .bind(&input.duration)
            .bind(&input.delivery_time)
            .bind(&input.service_type)
            .bind(&input.meta_title)
            .bind(&input.meta_description)
            .bind(&input.meta_keywords)
            .bind(&input.status)
            .bind(input.is_featured)
            .bind(input.is_pinned)
            .bind(input.is_popular)
            .fetch_one(pool)
            .await?;

        Self::find_detail(pool, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateService,
    ) -> Result<Option<ServiceDetail>, sqlx::Error> {
        let stamps = stamp_assignments(CONTENT_STAMPS, "COALESCE($25, status)");
        let query = format!(
            "UPDATE services SET \
                 title = COALESCE($2, title), \
                 short_title = COALESCE($3, short_title), \
                 slug = COALESCE($4, slug), \
                 category_id = COALESCE($5, category_id), \
                 author_id = COALESCE($6, author_id), \
                 short_description = COALESCE($7, short_description), \
                 description = COALESCE($8, description), \
                 features = COALESCE($9, features), \
                 benefits = COALESCE($10, benefits), \
                 banner_image = COALESCE($11, banner_image), \
                 mobile_image = COALESCE($12, mobile_image), \
                 icon = COALESCE($13, icon), \
                 price_starting_from = COALESCE($14::NUMERIC, price_starting_from), \
                 price_currency = COALESCE($15, price_currency), \
                 price_period = COALESCE($16, price_period), \
                 is_free = COALESCE($17, is_free), \
                 has_custom_pricing = COALESCE($18, has_custom_pricing), \
                 duration = COALESCE($19, duration), \
                 delivery_time = COALESCE($20, delivery_time), \
                 service_type = COALESCE($21, service_type), \
                 meta_title = COALESCE($22, meta_title), \
                 meta_description = COALESCE($23, meta_description), \
                 meta_keywords = COALESCE($24, meta_keywords), \
                 status = COALESCE($25, status){stamps}, \
                 is_featured = COALESCE($26, is_featured), \
                 is_pinned = COALESCE($27, is_pinned), \
                 is_popular = COALESCE($28, is_popular) \
             WHERE id = $1 \
             RETURNING id"
        );
        let updated: Option<DbId> = sqlx::query_scalar(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.short_title)
            .bind(&input.slug)
            .bind(input.category_id)
            .bind(input.author_id)
            .bind(&input.short_description)
            .bind(&input.description)
            .bind(&input.features)
            .bind(&input.benefits)
            .bind(&input.banner_image)
            .bind(&input.mobile_image)
            .bind(&input.icon)
            .bind(input.price_starting_from)
            .bind(&input.price_currency)
            .bind(&input.price_period)
            .bind(input.is_free)
            .bind(input.has_custom_pricing)
            .bind(&input.duration)
            .bind(&input.delivery_time)
            .bind(&input.service_type)
            .bind(&input.meta_title)
            .bind(&input.meta_description)
            .bind(&input.meta_keywords)
            .bind(&input.status)
            .bind(input.is_featured)
            .bind(input.is_pinned)
            .bind(input.is_popular)
            .fetch_optional(pool)
            .await?;

        match updated {
            Some(id) => Self::find_detail(pool, id).await,
            None => Ok(None),
        }
    }

    pub async fn bulk_set_status(
        pool: &PgPool,
        ids: &[DbId],
        status: &str,
    ) -> Result<u64, sqlx::Error> {
        let query = format!(
            "UPDATE services SET status = $1{} WHERE id = ANY($2)",
            stamp_assignments(CONTENT_STAMPS, "$1")
        );
        let result = sqlx::query(&query)
            .bind(status)
            .bind(ids)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM services WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    fn push_filters(qb: &mut QueryBuilder<'_, Postgres>, filter: &ServiceListFilter) {
        if let Some(slug) = &filter.category {
            push_slug_filter(qb, "s", "category_id", "service_categories", slug);
        }
        if let Some(v) = filter.is_featured {
            push_flag(qb, "s", "is_featured", v);
        }
        if let Some(v) = filter.is_popular {
            push_flag(qb, "s", "is_popular", v);
        }
        if let Some(v) = filter.is_free {
            push_flag(qb, "s", "is_free", v);
        }
        if let Some(pattern) = &filter.service_type {
            qb.push(" AND s.service_type ILIKE ");
            qb.push_bind(pattern.clone());
        }
        if let Some(pattern) = &filter.search {
            push_search(qb, "s", SEARCH_COLUMNS, pattern);
        }
    }

    async fn attach_categories(
        pool: &PgPool,
        items: &mut [ServiceSummary],
    ) -> Result<(), sqlx::Error> {
        let ids: Vec<DbId> = items.iter().filter_map(|s| s.category_id).collect();
        let categories =
            TaxonomyRepo::find_by_ids(pool, TaxonomyKind::ServiceCategory, &ids).await?;
        for item in items.iter_mut() {
            item.category = item.category_id.and_then(|id| categories.get(&id).cloned());
        }
        Ok(())
    }
}
