//! Vote entity model and insert DTO.
//!
//! Only one-way hashes of the fingerprint, client IP, and user agent are
//! persisted; raw values never reach the database. Votes are created once
//! per accepted submission and never mutated or deleted.

use serde::Serialize;
use sqlx::FromRow;

use questboard_core::types::{DbId, Timestamp};

/// A row from the `votes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Vote {
    pub id: DbId,
    pub campaign_id: DbId,
    pub fingerprint_hash: String,
    pub ip_hash: String,
    /// NULL when the submitting request carried no user-agent header.
    pub user_agent_hash: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for recording a new vote.
#[derive(Debug, Clone)]
pub struct NewVote {
    pub campaign_id: DbId,
    pub fingerprint_hash: String,
    pub ip_hash: String,
    pub user_agent_hash: Option<String>,
}
