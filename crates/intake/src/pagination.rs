//! Counting list resources from a `Link` response header.
//!
//! Requesting a list with `per_page=1` makes the page number of the
//! `rel="last"` link equal to the item count.

use regex::Regex;
use std::sync::LazyLock;

static LAST_PAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"page=(\d+)>; rel="last""#).expect("valid regex"));

/// Commit count when no `Link` header was returned.
pub const DEFAULT_COMMIT_COUNT: u64 = 0;
/// Contributor count when no `Link` header was returned.
pub const DEFAULT_CONTRIBUTOR_COUNT: u64 = 1;

/// Page number of the `last` relation, or 1 when the header has none.
pub fn last_page(link_header: &str) -> u64 {
    LAST_PAGE
        .captures(link_header)
        .and_then(|c| c[1].parse().ok())
        .unwrap_or(1)
}

/// Commits from the `Link` header of a `per_page=1` commits listing.
pub fn commit_count(link_header: Option<&str>) -> u64 {
    link_header.map_or(DEFAULT_COMMIT_COUNT, last_page)
}

/// Contributors from the `Link` header of a `per_page=1` contributors listing.
pub fn contributor_count(link_header: Option<&str>) -> u64 {
    link_header.map_or(DEFAULT_CONTRIBUTOR_COUNT, last_page)
}
