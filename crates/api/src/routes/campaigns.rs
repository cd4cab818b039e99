//! Route definitions for the campaign catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::campaigns;
use crate::state::AppState;

/// Catalog routes mounted at `/campaigns`.
///
/// ```text
/// GET /          -> search_campaigns
/// GET /{slug}    -> get_campaign_by_slug
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(campaigns::search_campaigns))
        .route("/{slug}", get(campaigns::get_campaign_by_slug))
}
