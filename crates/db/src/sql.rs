//! SQL fragments shared by the content repositories.

use martech_core::listing::{page_offset, Ordering, PAGE_SIZE};
use martech_core::status::StatusStamp;
use sqlx::{Postgres, QueryBuilder};

/// `SET` assignments that stamp lifecycle columns the first time a record
/// enters the matching status. `status_expr` is the SQL expression holding
/// the record's new status.
///
/// Each assignment starts with a comma so it can follow `status = ...`.
pub fn stamp_assignments(stamps: &[StatusStamp], status_expr: &str) -> String {
    stamps
        .iter()
        .map(|s| {
            format!(
                ", {col} = CASE WHEN {status_expr} = '{status}' AND {col} IS NULL \
                 THEN NOW() ELSE {col} END",
                col = s.column,
                status = s.status,
            )
        })
        .collect()
}

/// Column names and value expressions that stamp lifecycle columns on
/// INSERT when the record is created directly in a stamped status.
pub fn stamp_insert(stamps: &[StatusStamp], status_expr: &str) -> (String, String) {
    let columns = stamps.iter().map(|s| format!(", {}", s.column)).collect();
    let values = stamps
        .iter()
        .map(|s| format!(", CASE WHEN {status_expr} = '{}' THEN NOW() END", s.status))
        .collect();
    (columns, values)
}

/// Display name of a joined staff user: "first last", falling back to the
/// username when both name parts are blank.
pub fn staff_full_name(alias: &str) -> String {
    format!(
        "COALESCE(NULLIF(TRIM(CONCAT_WS(' ', {alias}.first_name, {alias}.last_name)), ''), \
         {alias}.username)"
    )
}

/// Append `AND (col1 ILIKE $n OR col2 ILIKE $n ...)` for a search pattern.
pub fn push_search(
    qb: &mut QueryBuilder<'_, Postgres>,
    alias: &str,
    columns: &[&str],
    pattern: &str,
) {
    qb.push(" AND (");
    for (i, col) in columns.iter().enumerate() {
        if i > 0 {
            qb.push(" OR ");
        }
        qb.push(format!("{alias}.{col} ILIKE "));
        qb.push_bind(pattern.to_string());
    }
    qb.push(")");
}

/// Append `AND <alias>.<col> IN (SELECT id FROM <table> WHERE slug = $n)`.
pub fn push_slug_filter(
    qb: &mut QueryBuilder<'_, Postgres>,
    alias: &str,
    column: &str,
    table: &str,
    slug: &str,
) {
    qb.push(format!(
        " AND {alias}.{column} IN (SELECT id FROM {table} WHERE slug = "
    ));
    qb.push_bind(slug.to_string());
    qb.push(")");
}

/// Append an `EXISTS` tag-slug filter over a content-to-tag join table.
///
/// Each content row appears at most once, however many of its tags match.
pub fn push_tag_filter(
    qb: &mut QueryBuilder<'_, Postgres>,
    alias: &str,
    links_table: &str,
    owner_column: &str,
    tags_table: &str,
    slug: &str,
) {
    qb.push(format!(
        " AND EXISTS (SELECT 1 FROM {links_table} a JOIN {tags_table} t ON t.id = a.tag_id \
         WHERE a.{owner_column} = {alias}.id AND t.slug = "
    ));
    qb.push_bind(slug.to_string());
    qb.push(")");
}

/// Append `AND <alias>.<col> = $n` for a boolean flag filter.
pub fn push_flag(qb: &mut QueryBuilder<'_, Postgres>, alias: &str, column: &str, value: bool) {
    qb.push(format!(" AND {alias}.{column} = "));
    qb.push_bind(value);
}

/// Append `ORDER BY ... LIMIT ... OFFSET ...` for a 1-based page.
pub fn push_page(
    qb: &mut QueryBuilder<'_, Postgres>,
    alias: &str,
    ordering: &Ordering,
    page: i64,
) {
    qb.push(" ORDER BY ");
    qb.push(ordering.to_sql(alias));
    qb.push(" LIMIT ");
    qb.push_bind(PAGE_SIZE);
    qb.push(" OFFSET ");
    qb.push_bind(page_offset(page));
}

#[cfg(test)]
mod tests {
    use martech_core::status::{CONTENT_STAMPS, JOB_POSTING_STAMPS};

    use super::*;

    #[test]
    fn update_stamps_only_fill_empty_columns() {
        let sql = stamp_assignments(CONTENT_STAMPS, "$2");
        assert_eq!(
            sql,
            ", published_at = CASE WHEN $2 = 'published' AND published_at IS NULL \
             THEN NOW() ELSE published_at END"
        );
    }

    #[test]
    fn job_postings_stamp_closed_at_too() {
        let sql = stamp_assignments(JOB_POSTING_STAMPS, "$1");
        assert!(sql.contains("published_at = CASE WHEN $1 = 'published'"));
        assert!(sql.contains("closed_at = CASE WHEN $1 = 'closed' AND closed_at IS NULL"));
    }

    #[test]
    fn insert_stamps_line_up() {
        let (cols, vals) = stamp_insert(JOB_POSTING_STAMPS, "$9");
        assert_eq!(cols, ", published_at, closed_at");
        assert_eq!(
            vals,
            ", CASE WHEN $9 = 'published' THEN NOW() END, CASE WHEN $9 = 'closed' THEN NOW() END"
        );
    }

    #[test]
    fn search_clause_binds_each_column() {
        let mut qb = QueryBuilder::<Postgres>::new("SELECT 1 FROM blogs b WHERE TRUE");
        push_search(&mut qb, "b", &["title", "content"], "%x%");
        assert_eq!(
            qb.sql(),
            "SELECT 1 FROM blogs b WHERE TRUE AND (b.title ILIKE $1 OR b.content ILIKE $2)"
        );
    }
}
