//! Catalog query vocabulary: visibility and pagination constants, sort keys,
//! the filter set, and query-parameter parsing helpers.
//!
//! Lives in `core` (no internal deps) so the repository layer and the HTTP
//! layer share one definition of the filter semantics. Parsing is lenient on
//! purpose: absent or non-numeric range bounds are no-ops, unknown sort keys
//! fall back to the default ordering, and the page number is clamped rather
//! than rejected.

/// The only campaign status visible to default catalog queries.
pub const STATUS_PUBLISHED: &str = "published";

/// Fixed number of items per catalog page.
pub const PAGE_SIZE: usize = 10;

// ---------------------------------------------------------------------------
// Sort keys
// ---------------------------------------------------------------------------

/// Orderings the catalog can serve.
///
/// `Popular` is special: the order is delegated entirely to the vote
/// aggregation collaborator and never re-derived locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Popular,
    New,
    Title,
    Duration,
    Players,
    Age,
}

impl SortKey {
    /// Parse a `sort` query parameter. Absent or unknown values fall back to
    /// [`SortKey::Popular`].
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("new") => Self::New,
            Some("title") => Self::Title,
            Some("duration") => Self::Duration,
            Some("players") => Self::Players,
            Some("age") => Self::Age,
            _ => Self::Popular,
        }
    }
}

// ---------------------------------------------------------------------------
// Filter set
// ---------------------------------------------------------------------------

/// Filter set applied to one catalog search. Request-scoped, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilters {
    /// Case-insensitive substring matched against title OR short description.
    pub query: Option<String>,
    /// Required tags; a matching campaign must carry ALL of them.
    pub tags: Vec<String>,
    /// Explicit status override. Empty means published-only visibility.
    pub statuses: Vec<String>,
    /// Inclusive bounds on `duration_hours`, each independently optional.
    pub duration_min: Option<i32>,
    pub duration_max: Option<i32>,
    /// Inclusive bounds on `players_min` / `players_max`.
    pub players_min: Option<i32>,
    pub players_max: Option<i32>,
    /// Exact-match age label.
    pub age: Option<String>,
}

// ---------------------------------------------------------------------------
// Query parameter parsing
// ---------------------------------------------------------------------------

/// Split a comma-separated parameter into trimmed, non-empty entries.
pub fn parse_csv(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(|part| part.trim().to_string())
            .filter(|part| !part.is_empty())
            .collect()
    })
    .unwrap_or_default()
}

/// Parse a numeric range bound. Absent or non-numeric input is a no-op.
pub fn parse_bound(raw: Option<&str>) -> Option<i32> {
    raw.and_then(|s| s.trim().parse().ok())
}

/// Parse a 1-based page number, clamped to at least 1. Invalid input falls
/// back to the first page. There is no upper bound: a page past the end of
/// the result set yields an empty page, not an error.
pub fn parse_page(raw: Option<&str>) -> u32 {
    raw.and_then(|s| s.trim().parse::<u32>().ok())
        .map(|page| page.max(1))
        .unwrap_or(1)
}

/// Normalize a free-text parameter: trimmed, `None` when empty.
pub fn parse_text(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
