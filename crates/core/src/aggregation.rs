//! Vote aggregation collaborator contract.
//!
//! The catalog's `popular` sort is *defined as* the order of the rows the
//! aggregator returns; the pipeline never re-sorts in that case. Keeping the
//! collaborator behind a trait makes that an explicit, injectable dependency
//! rather than a hardcoded popularity formula, and lets tests substitute
//! their own ordering.

use async_trait::async_trait;

use crate::error::CoreError;
use crate::types::DbId;

/// Rolling vote count for one campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteAggregateRow {
    pub campaign_id: DbId,
    pub votes: i64,
}

/// Batched vote-count aggregation over a set of campaign ids.
#[async_trait]
pub trait VoteAggregator: Send + Sync {
    /// Aggregate vote counts for the given campaigns.
    ///
    /// The order of the returned rows is authoritative for the `popular`
    /// sort. A campaign absent from the result is treated as having zero
    /// votes, never as an error.
    async fn aggregate(&self, ids: &[DbId]) -> Result<Vec<VoteAggregateRow>, CoreError>;
}
