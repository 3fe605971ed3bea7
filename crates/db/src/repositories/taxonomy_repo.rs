//! Repository for the name/slug taxonomy tables and content-tag links.
//!
//! All eight taxonomy kinds share one column layout, so a single set of
//! functions serves them, keyed by [`TaxonomyKind`].

use std::collections::HashMap;

use martech_core::slug::resolve_slug;
use martech_core::taxonomy::TaxonomyKind;
use martech_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::taxonomy::{CreateTaxonomy, Taxonomy, UpdateTaxonomy};

const COLUMNS: &str = "id, name, slug, description, is_active, created_at, updated_at";

/// Database table holding a taxonomy kind.
pub fn table_name(kind: TaxonomyKind) -> &'static str {
    match kind {
        TaxonomyKind::BlogCategory => "categories",
        TaxonomyKind::BlogTag => "tags",
        TaxonomyKind::CaseStudyCategory => "case_study_categories",
        TaxonomyKind::CaseStudyTag => "case_study_tags",
        TaxonomyKind::Department => "departments",
        TaxonomyKind::JobCategory => "job_categories",
        TaxonomyKind::JobType => "job_types",
        TaxonomyKind::ServiceCategory => "service_categories",
    }
}

/// A content-to-tag join table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagLink {
    Blog,
    CaseStudy,
}

impl TagLink {
    fn table(self) -> &'static str {
        match self {
            TagLink::Blog => "blog_tag_assignments",
            TagLink::CaseStudy => "case_study_tag_assignments",
        }
    }

    fn owner_column(self) -> &'static str {
        match self {
            TagLink::Blog => "blog_id",
            TagLink::CaseStudy => "case_study_id",
        }
    }

    fn tag_kind(self) -> TaxonomyKind {
        match self {
            TagLink::Blog => TaxonomyKind::BlogTag,
            TagLink::CaseStudy => TaxonomyKind::CaseStudyTag,
        }
    }
}

pub struct TaxonomyRepo;

impl TaxonomyRepo {
    // -----------------------------------------------------------------------
    // CRUD
    // -----------------------------------------------------------------------

    /// Insert a taxonomy row, deriving the slug from the name when none is
    /// given.
    pub async fn create(
        pool: &PgPool,
        kind: TaxonomyKind,
        input: &CreateTaxonomy,
    ) -> Result<Taxonomy, sqlx::Error> {
        let slug = resolve_slug(input.slug.as_deref(), input.name.as_deref());
        let query = format!(
            "INSERT INTO {table} (name, slug, description, is_active) \
             VALUES ($1, $2, $3, COALESCE($4, TRUE)) \
             RETURNING {COLUMNS}",
            table = table_name(kind)
        );
        sqlx::query_as::<_, Taxonomy>(&query)
            .bind(&input.name)
            .bind(slug)
            .bind(&input.description)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        kind: TaxonomyKind,
        id: DbId,
    ) -> Result<Option<Taxonomy>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM {table} WHERE id = $1",
            table = table_name(kind)
        );
        sqlx::query_as::<_, Taxonomy>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool, kind: TaxonomyKind) -> Result<Vec<Taxonomy>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM {table} ORDER BY name NULLS LAST, id",
            table = table_name(kind)
        );
        sqlx::query_as::<_, Taxonomy>(&query).fetch_all(pool).await
    }

    /// Partial update. Renaming never re-derives the slug.
    pub async fn update(
        pool: &PgPool,
        kind: TaxonomyKind,
        id: DbId,
        input: &UpdateTaxonomy,
    ) -> Result<Option<Taxonomy>, sqlx::Error> {
        let query = format!(
            "UPDATE {table} SET \
                 name = COALESCE($2, name), \
                 slug = COALESCE($3, slug), \
                 description = COALESCE($4, description), \
                 is_active = COALESCE($5, is_active) \
             WHERE id = $1 \
             RETURNING {COLUMNS}",
            table = table_name(kind)
        );
        sqlx::query_as::<_, Taxonomy>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(&input.description)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Returns `true` if a row was deleted. Content referencing a deleted
    /// category keeps existing with its reference cleared.
    pub async fn delete(pool: &PgPool, kind: TaxonomyKind, id: DbId) -> Result<bool, sqlx::Error> {
        let query = format!("DELETE FROM {} WHERE id = $1", table_name(kind));
        let result = sqlx::query(&query).bind(id).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Batch loading for projections
    // -----------------------------------------------------------------------

    /// Load rows by id, keyed by id. Missing ids are simply absent.
    pub async fn find_by_ids(
        pool: &PgPool,
        kind: TaxonomyKind,
        ids: &[DbId],
    ) -> Result<HashMap<DbId, Taxonomy>, sqlx::Error> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        let query = format!(
            "SELECT {COLUMNS} FROM {table} WHERE id = ANY($1)",
            table = table_name(kind)
        );
        let rows = sqlx::query_as::<_, Taxonomy>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(|t| (t.id, t)).collect())
    }

    /// Tags of each owner, keyed by owner id, ordered by tag name.
    pub async fn tags_for(
        pool: &PgPool,
        link: TagLink,
        owner_ids: &[DbId],
    ) -> Result<HashMap<DbId, Vec<Taxonomy>>, sqlx::Error> {
        if owner_ids.is_empty() {
            return Ok(HashMap::new());
        }

        #[derive(sqlx::FromRow)]
        struct Row {
            owner_id: DbId,
            #[sqlx(flatten)]
            tag: Taxonomy,
        }

        let query = format!(
            "SELECT a.{owner} AS owner_id, t.id, t.name, t.slug, t.description, t.is_active, \
                    t.created_at, t.updated_at \
             FROM {links} a \
             JOIN {tags} t ON t.id = a.tag_id \
             WHERE a.{owner} = ANY($1) \
             ORDER BY t.name NULLS LAST, t.id",
            owner = link.owner_column(),
            links = link.table(),
            tags = table_name(link.tag_kind()),
        );
        let rows = sqlx::query_as::<_, Row>(&query)
            .bind(owner_ids)
            .fetch_all(pool)
            .await?;

        let mut out: HashMap<DbId, Vec<Taxonomy>> = HashMap::new();
        for row in rows {
            out.entry(row.owner_id).or_default().push(row.tag);
        }
        Ok(out)
    }

    /// Replace the tag set of one owner. Runs on the caller's transaction.
    pub async fn replace_tags(
        conn: &mut PgConnection,
        link: TagLink,
        owner_id: DbId,
        tag_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        let delete = format!(
            "DELETE FROM {} WHERE {} = $1",
            link.table(),
            link.owner_column()
        );
        sqlx::query(&delete).bind(owner_id).execute(&mut *conn).await?;

        if tag_ids.is_empty() {
            return Ok(());
        }
        let insert = format!(
            "INSERT INTO {} ({}, tag_id) \
             SELECT $1, UNNEST($2::BIGINT[]) \
             ON CONFLICT DO NOTHING",
            link.table(),
            link.owner_column()
        );
        sqlx::query(&insert)
            .bind(owner_id)
            .bind(tag_ids)
            .execute(&mut *conn)
            .await?;
        Ok(())
    }
}
