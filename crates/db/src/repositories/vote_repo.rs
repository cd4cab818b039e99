//! Repository for the `votes` table.

use sqlx::PgPool;

use questboard_core::types::DbId;

use crate::models::vote::{NewVote, Vote};

/// Column list for `votes` SELECT queries.
const COLUMNS: &str = "id, campaign_id, fingerprint_hash, ip_hash, user_agent_hash, created_at";

/// Insert and existence-check operations for votes.
pub struct VoteRepo;

impl VoteRepo {
    /// Whether a vote already exists for this (campaign, fingerprint hash)
    /// pair. This is the duplicate check the submission flow runs before
    /// inserting.
    pub async fn exists(
        pool: &PgPool,
        campaign_id: DbId,
        fingerprint_hash: &str,
    ) -> Result<bool, sqlx::Error> {
        let row: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM votes WHERE campaign_id = $1 AND fingerprint_hash = $2)",
        )
        .bind(campaign_id)
        .bind(fingerprint_hash)
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }

    /// Record a vote.
    ///
    /// The unique index on (campaign_id, fingerprint_hash) rejects a
    /// concurrent duplicate that slipped past [`VoteRepo::exists`]; the
    /// caller maps that violation to a conflict.
    pub async fn insert(pool: &PgPool, input: &NewVote) -> Result<Vote, sqlx::Error> {
        let query = format!(
            "INSERT INTO votes (campaign_id, fingerprint_hash, ip_hash, user_agent_hash) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Vote>(&query)
            .bind(input.campaign_id)
            .bind(&input.fingerprint_hash)
            .bind(&input.ip_hash)
            .bind(&input.user_agent_hash)
            .fetch_one(pool)
            .await
    }
}
