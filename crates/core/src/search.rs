//! Free-text search helpers.

/// Build a case-insensitive substring pattern for `ILIKE`, escaping the
/// wildcard characters in the user's term.
pub fn like_pattern(term: &str) -> String {
    let mut out = String::with_capacity(term.len() + 2);
    out.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('%');
    out
}

/// Normalise a raw `?search=` value. Blank terms disable search.
pub fn search_term(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim).filter(|t| !t.is_empty()).map(like_pattern)
}
