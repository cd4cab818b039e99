//! Shared helpers for HTTP-level integration tests.
//!
//! Tests drive the real router (same middleware stack as production) via
//! `tower::ServiceExt::oneshot`. Campaigns are seeded with plain SQL because
//! the service under test is read-only over them.

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use questboard_api::config::ServerConfig;
use questboard_api::router::build_app_router;
use questboard_api::state::AppState;
use questboard_core::types::Timestamp;
use questboard_db::aggregation::PgVoteAggregator;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router over the given pool, wired with the
/// real Postgres vote aggregator -- the same stack `main.rs` serves.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool: pool.clone(),
        config: Arc::new(config.clone()),
        aggregator: Arc::new(PgVoteAggregator::new(pool)),
    };
    build_app_router(state, &config)
}

/// Send a GET request to the app.
pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    post_json_with_headers(app, uri, body, &[]).await
}

/// Send a POST request with a JSON body and extra headers.
pub async fn post_json_with_headers(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    headers: &[(&str, &str)],
) -> Response {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/json");
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    app.oneshot(builder.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap()
}

/// Collect a response body into parsed JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body should be JSON")
}

/// Campaign seed row. Defaults mirror a freshly created published listing
/// with no optional metadata.
pub struct CampaignSeed {
    pub slug: String,
    pub status: String,
    pub title: String,
    pub short_description: String,
    pub tags: Vec<String>,
    pub duration_hours: Option<i32>,
    pub players_min: Option<i32>,
    pub players_max: Option<i32>,
    pub age: Option<String>,
    pub created_at: Option<Timestamp>,
}

impl CampaignSeed {
    /// A published campaign with just a slug and title.
    pub fn published(slug: &str, title: &str) -> Self {
        Self {
            slug: slug.to_string(),
            status: "published".to_string(),
            title: title.to_string(),
            short_description: String::new(),
            tags: Vec::new(),
            duration_hours: None,
            players_min: None,
            players_max: None,
            age: None,
            created_at: None,
        }
    }

    /// Same, but in `draft` status.
    pub fn draft(slug: &str, title: &str) -> Self {
        Self {
            status: "draft".to_string(),
            ..Self::published(slug, title)
        }
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn duration(mut self, hours: i32) -> Self {
        self.duration_hours = Some(hours);
        self
    }

    pub fn players(mut self, min: i32, max: i32) -> Self {
        self.players_min = Some(min);
        self.players_max = Some(max);
        self
    }

    pub fn age(mut self, age: &str) -> Self {
        self.age = Some(age.to_string());
        self
    }

    pub fn description(mut self, text: &str) -> Self {
        self.short_description = text.to_string();
        self
    }

    pub fn created_at(mut self, at: Timestamp) -> Self {
        self.created_at = Some(at);
        self
    }
}

/// Insert a campaign row directly, returning its id.
pub async fn insert_campaign(pool: &PgPool, seed: CampaignSeed) -> Uuid {
    let row: (Uuid,) = sqlx::query_as(
        "INSERT INTO campaigns \
            (slug, status, title, short_description, tags, duration_hours, \
             players_min, players_max, age, created_at) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, COALESCE($10, NOW())) \
         RETURNING id",
    )
    .bind(&seed.slug)
    .bind(&seed.status)
    .bind(&seed.title)
    .bind(&seed.short_description)
    .bind(&seed.tags)
    .bind(seed.duration_hours)
    .bind(seed.players_min)
    .bind(seed.players_max)
    .bind(&seed.age)
    .bind(seed.created_at)
    .fetch_one(pool)
    .await
    .expect("campaign seed insert should succeed");
    row.0
}

/// Insert a vote row directly (for seeding popularity counts).
pub async fn insert_vote(pool: &PgPool, campaign_id: Uuid, fingerprint_hash: &str) {
    sqlx::query(
        "INSERT INTO votes (campaign_id, fingerprint_hash, ip_hash) VALUES ($1, $2, $3)",
    )
    .bind(campaign_id)
    .bind(fingerprint_hash)
    .bind("seed-ip-hash")
    .execute(pool)
    .await
    .expect("vote seed insert should succeed");
}
