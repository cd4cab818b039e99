//! Campaign entity model.
//!
//! Campaigns are read-only to this service: editorial tooling owns all
//! writes, and any field except `id` may change between requests, so rows
//! are re-read on every request and never cached.

use serde::Serialize;
use sqlx::FromRow;

use questboard_core::types::{DbId, Timestamp};

/// A row from the `campaigns` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Campaign {
    pub id: DbId,
    /// Unique, used for direct lookup.
    pub slug: String,
    /// `draft`, `published`, ...; only `published` is visible by default.
    pub status: String,
    pub title: String,
    pub short_description: String,
    /// Set semantics: order irrelevant, duplicates not meaningful.
    pub tags: Vec<String>,
    pub duration_hours: Option<i32>,
    pub players_min: Option<i32>,
    pub players_max: Option<i32>,
    /// Age category label, e.g. `"12+"`.
    pub age: Option<String>,
    pub cover_url: Option<String>,
    /// Recency sort key.
    pub created_at: Timestamp,
}
