//! Route definitions for vote submission.

use axum::routing::post;
use axum::Router;

use crate::handlers::votes;
use crate::state::AppState;

/// Vote routes mounted at `/votes`.
///
/// ```text
/// POST /    -> submit_vote
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(votes::submit_vote))
}
