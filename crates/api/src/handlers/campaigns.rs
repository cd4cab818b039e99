//! Handlers for the campaign catalog.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;

use questboard_core::catalog::{parse_page, SortKey, PAGE_SIZE};
use questboard_core::error::CoreError;
use questboard_core::types::DbId;
use questboard_db::repositories::CampaignRepo;

use crate::catalog;
use crate::error::{AppError, AppResult};
use crate::query::CatalogParams;
use crate::response::{CampaignDetail, SearchResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /campaigns
// ---------------------------------------------------------------------------

/// Search the catalog.
///
/// Fetches the full filtered set, computes facets over it, resolves the
/// ordering (via the vote aggregator for `popular`), then slices the
/// requested page and merges vote counts in. Facets and `total` always
/// describe the whole filtered set, not the page.
pub async fn search_campaigns(
    State(state): State<AppState>,
    Query(params): Query<CatalogParams>,
) -> AppResult<impl IntoResponse> {
    let filters = params.filters();
    let sort = SortKey::parse(params.sort.as_deref());
    let page = parse_page(params.page.as_deref());

    let campaigns = CampaignRepo::search(&state.pool, &filters).await?;
    let total = campaigns.len();

    let facets = catalog::compute_facets(&campaigns);

    let ids: Vec<DbId> = campaigns.iter().map(|campaign| campaign.id).collect();
    let agg = state.aggregator.aggregate(&ids).await?;

    let ordered = catalog::order_ids(&campaigns, &agg, sort);
    let page_ids = catalog::page_slice(&ordered, page).to_vec();
    let items = catalog::assemble_page(campaigns, &page_ids, &agg);

    tracing::debug!(total, page, ?sort, "Catalog search served");

    Ok(Json(SearchResponse {
        items,
        total,
        page,
        page_size: PAGE_SIZE,
        facets,
    }))
}

// ---------------------------------------------------------------------------
// GET /campaigns/{slug}
// ---------------------------------------------------------------------------

/// Look up one published campaign by slug and merge its vote count.
///
/// Absent and unpublished campaigns produce the same not-found reply, so
/// slug probing cannot reveal drafts.
pub async fn get_campaign_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let campaign = CampaignRepo::find_published_by_slug(&state.pool, &slug)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Campaign",
        }))?;

    let agg = state.aggregator.aggregate(&[campaign.id]).await?;
    let votes = agg.first().map(|row| row.votes).unwrap_or(0);

    Ok(Json(CampaignDetail { campaign, votes }))
}
