//! Postgres implementation of the vote aggregation collaborator.

use async_trait::async_trait;
use sqlx::PgPool;

use questboard_core::aggregation::{VoteAggregateRow, VoteAggregator};
use questboard_core::error::CoreError;
use questboard_core::types::DbId;

/// Counts votes over a rolling 30-day window, straight from the `votes`
/// table.
///
/// Returns one row per requested campaign (zero-vote campaigns included),
/// ordered by vote count descending with newer campaigns first on ties.
/// That row order is what the catalog's `popular` sort reproduces.
pub struct PgVoteAggregator {
    pool: PgPool,
}

impl PgVoteAggregator {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VoteAggregator for PgVoteAggregator {
    async fn aggregate(&self, ids: &[DbId]) -> Result<Vec<VoteAggregateRow>, CoreError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows: Vec<(DbId, i64)> = sqlx::query_as(
            "SELECT c.id, COUNT(v.id)::BIGINT AS votes \
             FROM campaigns c \
             LEFT JOIN votes v \
               ON v.campaign_id = c.id \
              AND v.created_at >= NOW() - INTERVAL '30 days' \
             WHERE c.id = ANY($1) \
             GROUP BY c.id, c.created_at \
             ORDER BY votes DESC, c.created_at DESC",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|err| {
            tracing::error!(error = %err, "Vote aggregation query failed");
            CoreError::Upstream("vote aggregation unavailable".into())
        })?;

        Ok(rows
            .into_iter()
            .map(|(campaign_id, votes)| VoteAggregateRow { campaign_id, votes })
            .collect())
    }
}
