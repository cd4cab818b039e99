//! Route definitions, one module per resource.

pub mod campaigns;
pub mod health;
pub mod votes;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /campaigns           catalog search
/// /campaigns/{slug}    single published campaign with vote count
/// /votes               anonymous vote submission
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/campaigns", campaigns::router())
        .nest("/votes", votes::router())
}
