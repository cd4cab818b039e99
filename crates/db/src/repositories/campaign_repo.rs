//! Repository for the `campaigns` table.

use sqlx::PgPool;

use questboard_core::catalog::{CatalogFilters, STATUS_PUBLISHED};
use questboard_core::types::DbId;

use crate::models::campaign::Campaign;

/// Column list for `campaigns` SELECT queries.
const COLUMNS: &str = "\
    id, slug, status, title, short_description, tags, duration_hours, \
    players_min, players_max, age, cover_url, created_at";

/// Read-only query operations for campaigns.
pub struct CampaignRepo;

impl CampaignRepo {
    /// Fetch the full set of campaigns matching the given filters.
    ///
    /// Every filter predicate is pushed into the WHERE clause, but the whole
    /// matching set is materialized: facets are computed over it and the
    /// `popular` ordering needs the complete id list, so pagination cannot
    /// happen here.
    pub async fn search(
        pool: &PgPool,
        filters: &CatalogFilters,
    ) -> Result<Vec<Campaign>, sqlx::Error> {
        let (where_clause, bind_values) = build_catalog_filter(filters);

        let query = format!("SELECT {COLUMNS} FROM campaigns {where_clause}");

        let q = bind_filter_values(sqlx::query_as::<_, Campaign>(&query), &bind_values);
        q.fetch_all(pool).await
    }

    /// Find one published campaign by slug.
    ///
    /// Unpublished campaigns are reported as absent, so slug probing cannot
    /// distinguish drafts from listings that never existed.
    pub async fn find_published_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<Campaign>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM campaigns WHERE slug = $1 AND status = $2");
        sqlx::query_as::<_, Campaign>(&query)
            .bind(slug)
            .bind(STATUS_PUBLISHED)
            .fetch_optional(pool)
            .await
    }

    /// Whether a published campaign with this id exists. Used by the vote
    /// flow, where drafts must look exactly like nonexistent campaigns.
    pub async fn published_exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let row: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM campaigns WHERE id = $1 AND status = $2)",
        )
        .bind(id)
        .bind(STATUS_PUBLISHED)
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }
}

// ---------------------------------------------------------------------------
// Internal helpers for dynamic query building
// ---------------------------------------------------------------------------

/// Typed bind value for dynamically-built catalog queries.
enum BindValue {
    Text(String),
    TextArray(Vec<String>),
    Int(i32),
}

/// Build a WHERE clause and bind values from catalog filters.
///
/// Returns `(where_clause, bind_values)`. The clause always contains at
/// least the status restriction, so it always starts with `WHERE `.
fn build_catalog_filter(filters: &CatalogFilters) -> (String, Vec<BindValue>) {
    let mut conditions: Vec<String> = Vec::new();
    let mut bind_idx = 1u32;
    let mut bind_values: Vec<BindValue> = Vec::new();

    // Visibility: explicit status override, or published-only by default.
    if filters.statuses.is_empty() {
        conditions.push(format!("status = ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(BindValue::Text(STATUS_PUBLISHED.to_string()));
    } else {
        conditions.push(format!("status = ANY(${bind_idx})"));
        bind_idx += 1;
        bind_values.push(BindValue::TextArray(filters.statuses.clone()));
    }

    // Free text: substring match across title OR short description.
    if let Some(ref query) = filters.query {
        conditions.push(format!(
            "(title ILIKE ${bind_idx} OR short_description ILIKE ${bind_idx})"
        ));
        bind_idx += 1;
        bind_values.push(BindValue::Text(format!("%{query}%")));
    }

    // Tags: containment, the row's tag set must include ALL requested tags.
    if !filters.tags.is_empty() {
        conditions.push(format!("tags @> ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(BindValue::TextArray(filters.tags.clone()));
    }

    if let Some(min) = filters.duration_min {
        conditions.push(format!("duration_hours >= ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(BindValue::Int(min));
    }

    if let Some(max) = filters.duration_max {
        conditions.push(format!("duration_hours <= ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(BindValue::Int(max));
    }

    if let Some(min) = filters.players_min {
        conditions.push(format!("players_min >= ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(BindValue::Int(min));
    }

    if let Some(max) = filters.players_max {
        conditions.push(format!("players_max <= ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(BindValue::Int(max));
    }

    if let Some(ref age) = filters.age {
        conditions.push(format!("age = ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(BindValue::Text(age.clone()));
    }

    (
        format!("WHERE {}", conditions.join(" AND ")),
        bind_values,
    )
}

/// Bind a slice of `BindValue` to a sqlx `QueryAs`.
fn bind_filter_values<'q, O>(
    mut q: sqlx::query::QueryAs<'q, sqlx::Postgres, O, sqlx::postgres::PgArguments>,
    bind_values: &'q [BindValue],
) -> sqlx::query::QueryAs<'q, sqlx::Postgres, O, sqlx::postgres::PgArguments> {
    for val in bind_values {
        match val {
            BindValue::Text(v) => q = q.bind(v.as_str()),
            BindValue::TextArray(v) => q = q.bind(v.as_slice()),
            BindValue::Int(v) => q = q.bind(*v),
        }
    }
    q
}
