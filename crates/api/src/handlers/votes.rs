//! Handler for anonymous vote submission.

use axum::extract::State;
use axum::http::header::USER_AGENT;
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use axum::Json;

use questboard_core::error::CoreError;
use questboard_core::hashing::sha256_hex;
use questboard_core::types::DbId;
use questboard_db::models::vote::NewVote;
use questboard_db::repositories::{CampaignRepo, VoteRepo};

use crate::error::{AppError, AppResult};
use crate::query::VoteRequest;
use crate::response::VoteAccepted;
use crate::state::AppState;

/// Sentinel hashed in place of the client IP when neither forwarded-for nor
/// real-ip headers are present.
const UNKNOWN_IP: &str = "0.0.0.0";

// ---------------------------------------------------------------------------
// POST /votes
// ---------------------------------------------------------------------------

/// Record one anonymous vote per (campaign, fingerprint).
///
/// Only hashes of the fingerprint, client IP, and user agent are persisted.
/// Nonexistent and unpublished campaigns get the same not-found reply, so
/// the endpoint cannot be used to probe drafts.
pub async fn submit_vote(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<VoteRequest>,
) -> AppResult<impl IntoResponse> {
    if body.campaign_id.is_empty() || body.fingerprint.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "campaignId and fingerprint are required".into(),
        )));
    }

    // An unparseable id cannot reference any campaign; report it exactly
    // like a nonexistent one.
    let campaign_id: DbId = body.campaign_id.parse().map_err(|_| campaign_not_found())?;

    if !CampaignRepo::published_exists(&state.pool, campaign_id).await? {
        return Err(campaign_not_found());
    }

    let fingerprint_hash = sha256_hex(body.fingerprint.as_bytes());

    if VoteRepo::exists(&state.pool, campaign_id, &fingerprint_hash).await? {
        return Err(AppError::Core(CoreError::Conflict("Already voted".into())));
    }

    let ip = client_ip(&headers);
    let user_agent = headers
        .get(USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");

    let vote = NewVote {
        campaign_id,
        fingerprint_hash,
        ip_hash: sha256_hex(ip.as_bytes()),
        user_agent_hash: (!user_agent.is_empty()).then(|| sha256_hex(user_agent.as_bytes())),
    };

    VoteRepo::insert(&state.pool, &vote).await?;
    tracing::info!(%campaign_id, "Vote recorded");

    Ok(Json(VoteAccepted { success: true }))
}

fn campaign_not_found() -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Campaign",
    })
}

/// Client IP used for hashing: first `x-forwarded-for` entry, then
/// `x-real-ip`, then the fixed sentinel.
fn client_ip(headers: &HeaderMap) -> String {
    if let Some(forwarded) = headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
    {
        if let Some(first) = forwarded.split(',').next() {
            let first = first.trim();
            if !first.is_empty() {
                return first.to_string();
            }
        }
    }

    if let Some(real_ip) = headers
        .get("x-real-ip")
        .and_then(|value| value.to_str().ok())
    {
        let real_ip = real_ip.trim();
        if !real_ip.is_empty() {
            return real_ip.to_string();
        }
    }

    UNKNOWN_IP.to_string()
}
