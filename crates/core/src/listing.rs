//! List-endpoint parameters: boolean flags, ordering, pagination and page
//! links.
//!
//! Every public list uses a fixed page size of [`PAGE_SIZE`] and returns
//! `count`, `next` and `previous` alongside the page of items.

use crate::error::CoreError;

/// Items per page on every paginated list.
pub const PAGE_SIZE: i64 = 20;

/// Return the value only when it is present and non-empty.
///
/// Query parameters like `?category=` are treated as absent.
pub fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.filter(|v| !v.is_empty())
}

/// Interpret a boolean query flag.
///
/// Any present value applies the filter: `true` (any case) means `true`,
/// every other string means `false`. An absent parameter applies no filter.
pub fn parse_flag(raw: Option<&str>) -> Option<bool> {
    raw.map(|v| v.eq_ignore_ascii_case("true"))
}

// ---------------------------------------------------------------------------
// Ordering
// ---------------------------------------------------------------------------

/// A whitelisted sort column plus direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ordering {
    pub column: &'static str,
    pub descending: bool,
}

impl Ordering {
    pub const fn desc(column: &'static str) -> Self {
        Self {
            column,
            descending: true,
        }
    }

    pub const fn asc(column: &'static str) -> Self {
        Self {
            column,
            descending: false,
        }
    }

    /// Render as an `ORDER BY` clause for the given table alias, with the
    /// primary key as a stable tiebreaker.
    pub fn to_sql(&self, alias: &str) -> String {
        let dir = if self.descending { "DESC" } else { "ASC" };
        format!("{alias}.{} {dir}, {alias}.id {dir}", self.column)
    }
}

/// Parse `?ordering=` (`field` or `-field`) against a whitelist.
pub fn parse_ordering(
    raw: Option<&str>,
    allowed: &[&'static str],
    default: Ordering,
) -> Result<Ordering, CoreError> {
    let Some(raw) = non_blank(raw.map(str::trim)) else {
        return Ok(default);
    };

    let (name, descending) = match raw.strip_prefix('-') {
        Some(rest) => (rest, true),
        None => (raw, false),
    };

    allowed
        .iter()
        .find(|c| **c == name)
        .map(|column| Ordering { column, descending })
        .ok_or_else(|| {
            CoreError::Validation(format!(
                "Invalid ordering '{raw}'. Must be one of: {}",
                allowed.join(", ")
            ))
        })
}

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

/// Parse `?page=` (1-based). Absent means page 1.
pub fn parse_page(raw: Option<&str>) -> Result<i64, CoreError> {
    match non_blank(raw) {
        None => Ok(1),
        Some(v) => match v.parse::<i64>() {
            Ok(n) if n >= 1 => Ok(n),
            _ => Err(CoreError::Validation(format!("Invalid page '{v}'"))),
        },
    }
}

/// Row offset for a 1-based page number.
pub fn page_offset(page: i64) -> i64 {
    (page.max(1) - 1).saturating_mul(PAGE_SIZE)
}

/// Absolute `next` / `previous` links for a page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLinks {
    pub next: Option<String>,
    pub previous: Option<String>,
}

/// Build `next` / `previous` links by rewriting the `page` parameter of the
/// current request's query string. Other parameters are preserved. The link
/// to page 1 drops the `page` parameter entirely.
pub fn page_links(base: &str, query: Option<&str>, page: i64, total: i64) -> PageLinks {
    let last_page = if total <= 0 {
        1
    } else {
        (total + PAGE_SIZE - 1) / PAGE_SIZE
    };

    let next = (page < last_page).then(|| with_page(base, query, Some(page + 1)));
    let previous = (page > 1).then(|| {
        let target = page - 1;
        // Past-the-end requests link back to the last real page.
        let target = target.min(last_page);
        with_page(base, query, (target > 1).then_some(target))
    });

    PageLinks { next, previous }
}

fn with_page(base: &str, query: Option<&str>, page: Option<i64>) -> String {
    let mut pairs: Vec<String> = query
        .unwrap_or_default()
        .split('&')
        .filter(|p| !p.is_empty())
        .filter(|p| p.split('=').next() != Some("page"))
        .map(str::to_string)
        .collect();

    if let Some(n) = page {
        pairs.push(format!("page={n}"));
    }

    if pairs.is_empty() {
        base.to_string()
    } else {
        format!("{base}?{}", pairs.join("&"))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    const BLOG_ORDERING: &[&str] = &["created_at", "published_at", "views_count", "title"];

    #[test]
    fn flag_semantics() {
        assert_eq!(parse_flag(None), None);
        assert_eq!(parse_flag(Some("true")), Some(true));
        assert_eq!(parse_flag(Some("TRUE")), Some(true));
        assert_eq!(parse_flag(Some("false")), Some(false));
        assert_eq!(parse_flag(Some("yes")), Some(false));
        assert_eq!(parse_flag(Some("")), Some(false));
    }

    #[test]
    fn ordering_defaults_when_absent() {
        let default = Ordering::desc("created_at");
        assert_eq!(parse_ordering(None, BLOG_ORDERING, default).unwrap(), default);
        assert_eq!(parse_ordering(Some(""), BLOG_ORDERING, default).unwrap(), default);
    }

    #[test]
    fn ordering_parses_direction() {
        let default = Ordering::desc("created_at");
        assert_eq!(
            parse_ordering(Some("-views_count"), BLOG_ORDERING, default).unwrap(),
            Ordering::desc("views_count")
        );
        assert_eq!(
            parse_ordering(Some("title"), BLOG_ORDERING, default).unwrap(),
            Ordering::asc("title")
        );
    }

    #[test]
    fn ordering_rejects_unknown_columns() {
        let default = Ordering::desc("created_at");
        assert_matches!(
            parse_ordering(Some("password; DROP TABLE blogs"), BLOG_ORDERING, default),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn ordering_sql_has_tiebreaker() {
        assert_eq!(
            Ordering::desc("created_at").to_sql("b"),
            "b.created_at DESC, b.id DESC"
        );
    }

    #[test]
    fn page_parsing() {
        assert_eq!(parse_page(None).unwrap(), 1);
        assert_eq!(parse_page(Some("3")).unwrap(), 3);
        assert!(parse_page(Some("0")).is_err());
        assert!(parse_page(Some("abc")).is_err());
        assert_eq!(page_offset(1), 0);
        assert_eq!(page_offset(3), 40);
    }

    #[test]
    fn links_on_single_page() {
        let links = page_links("/api/blog/blogs/", None, 1, 5);
        assert_eq!(links, PageLinks::default());
    }

    #[test]
    fn links_preserve_other_params() {
        let links = page_links("/api/blog/blogs/", Some("search=rust&page=2"), 2, 45);
        assert_eq!(
            links.next.as_deref(),
            Some("/api/blog/blogs/?search=rust&page=3")
        );
        assert_eq!(links.previous.as_deref(), Some("/api/blog/blogs/?search=rust"));
    }

    #[test]
    fn links_past_the_end() {
        let links = page_links("/x", Some("page=9"), 9, 45);
        assert_eq!(links.next, None);
        assert_eq!(links.previous.as_deref(), Some("/x?page=3"));
    }
}
