//! Query string and request body DTOs for the catalog endpoints.

use serde::Deserialize;

use questboard_core::catalog::{parse_bound, parse_csv, parse_text, CatalogFilters};

/// Raw query parameters for `GET /campaigns`.
///
/// Every field arrives as an optional string so parsing can stay lenient:
/// invalid numeric bounds are ignored, unknown sort keys fall back to
/// popular, and a bad page number falls back to the first page.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogParams {
    pub query: Option<String>,
    /// Comma-separated required tags.
    pub tags: Option<String>,
    pub sort: Option<String>,
    pub page: Option<String>,
    pub duration_min: Option<String>,
    pub duration_max: Option<String>,
    pub players_min: Option<String>,
    pub players_max: Option<String>,
    pub age: Option<String>,
    /// Comma-separated status override (admin views); absent means
    /// published-only.
    pub statuses: Option<String>,
}

impl CatalogParams {
    /// Convert raw parameters into the filter set the repository applies.
    pub fn filters(&self) -> CatalogFilters {
        CatalogFilters {
            query: parse_text(self.query.as_deref()),
            tags: parse_csv(self.tags.as_deref()),
            statuses: parse_csv(self.statuses.as_deref()),
            duration_min: parse_bound(self.duration_min.as_deref()),
            duration_max: parse_bound(self.duration_max.as_deref()),
            players_min: parse_bound(self.players_min.as_deref()),
            players_max: parse_bound(self.players_max.as_deref()),
            age: parse_text(self.age.as_deref()),
        }
    }
}

/// Request body for `POST /votes`.
///
/// Fields default to empty strings so a missing field reaches the handler's
/// validation (400) instead of a serde rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteRequest {
    #[serde(default)]
    pub campaign_id: String,
    #[serde(default)]
    pub fingerprint: String,
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn filters_parse_all_fields() {
        let params = CatalogParams {
            query: Some("  dragon  ".into()),
            tags: Some("rpg, horror".into()),
            sort: Some("new".into()),
            page: Some("2".into()),
            duration_min: Some("2".into()),
            duration_max: Some("8".into()),
            players_min: Some("3".into()),
            players_max: Some("6".into()),
            age: Some("12+".into()),
            statuses: Some("draft,published".into()),
        };

        let filters = params.filters();
        assert_eq!(filters.query.as_deref(), Some("dragon"));
        assert_eq!(filters.tags, vec!["rpg", "horror"]);
        assert_eq!(filters.statuses, vec!["draft", "published"]);
        assert_eq!(filters.duration_min, Some(2));
        assert_eq!(filters.duration_max, Some(8));
        assert_eq!(filters.players_min, Some(3));
        assert_eq!(filters.players_max, Some(6));
        assert_eq!(filters.age.as_deref(), Some("12+"));
    }

    #[test]
    fn invalid_numeric_bounds_are_no_ops() {
        let params = CatalogParams {
            duration_min: Some("short".into()),
            players_max: Some("".into()),
            ..CatalogParams::default()
        };

        let filters = params.filters();
        assert_matches!(filters.duration_min, None);
        assert_matches!(filters.players_max, None);
    }

    #[test]
    fn empty_params_produce_default_filters() {
        let filters = CatalogParams::default().filters();
        assert_eq!(filters, CatalogFilters::default());
    }
}
