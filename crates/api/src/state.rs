use std::sync::Arc;

use questboard_core::aggregation::VoteAggregator;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: questboard_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Vote aggregation collaborator. Its row order drives the `popular`
    /// sort; tests substitute their own implementation.
    pub aggregator: Arc<dyn VoteAggregator>,
}
