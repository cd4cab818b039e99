//! Response body types for the catalog and voting endpoints.
//!
//! Shapes are part of the public contract, including the historical
//! asymmetry of `votes30d` on list items vs `votes` on the detail view.

use serde::Serialize;

use questboard_db::models::campaign::Campaign;

use crate::catalog::Facets;

/// One catalog page entry: a campaign merged with its rolling vote count.
#[derive(Debug, Serialize)]
pub struct CatalogItem {
    #[serde(flatten)]
    pub campaign: Campaign,
    /// Votes received in the aggregation window; 0 when the aggregator
    /// returned no row for this campaign.
    pub votes30d: i64,
}

/// Response body for `GET /campaigns`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub items: Vec<CatalogItem>,
    /// Size of the full filtered set, independent of pagination.
    pub total: usize,
    pub page: u32,
    pub page_size: usize,
    pub facets: Facets,
}

/// Response body for `GET /campaigns/{slug}`.
#[derive(Debug, Serialize)]
pub struct CampaignDetail {
    #[serde(flatten)]
    pub campaign: Campaign,
    pub votes: i64,
}

/// Acknowledgement for an accepted vote.
#[derive(Debug, Serialize)]
pub struct VoteAccepted {
    pub success: bool,
}
