//! In-memory stages of the catalog query pipeline.
//!
//! The repository pushes every filter predicate into SQL and returns the
//! full matching set; the stages here need that whole set, so they run in
//! memory, in this order:
//!
//! 1. facets over the filtered set (before pagination),
//! 2. one batched vote-aggregation call (issued by the handler),
//! 3. ordering of the full id list (delegated to the aggregator for
//!    `popular`),
//! 4. page slicing and vote-count merge.

use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

use questboard_core::aggregation::VoteAggregateRow;
use questboard_core::catalog::{SortKey, PAGE_SIZE};
use questboard_core::types::DbId;
use questboard_db::models::campaign::Campaign;

use crate::response::CatalogItem;

// ---------------------------------------------------------------------------
// Facets
// ---------------------------------------------------------------------------

/// Inclusive numeric range present in a filtered result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RangeFacet {
    pub min: i32,
    pub max: i32,
}

/// Summary of the distinct values and numeric ranges in a filtered result
/// set, computed before pagination. Drives the filter UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Facets {
    pub tags: Vec<String>,
    pub statuses: Vec<String>,
    pub ages: Vec<String>,
    pub duration: RangeFacet,
    pub players: RangeFacet,
}

/// Compute facets over the full filtered set in a single pass.
///
/// Distinct lists come back alphabetically sorted. Ages sort lexically even
/// when the labels are numeric ("12" before "8") -- the filter UI has always
/// shown them that way. Range minima fall back to 0 when no row carries a
/// value; maxima start at 0.
pub fn compute_facets(campaigns: &[Campaign]) -> Facets {
    let mut tags: BTreeSet<&str> = BTreeSet::new();
    let mut statuses: BTreeSet<&str> = BTreeSet::new();
    let mut ages: BTreeSet<&str> = BTreeSet::new();
    let mut duration_min: Option<i32> = None;
    let mut duration_max = 0;
    let mut players_min: Option<i32> = None;
    let mut players_max = 0;

    for campaign in campaigns {
        for tag in &campaign.tags {
            tags.insert(tag);
        }
        statuses.insert(&campaign.status);
        if let Some(ref age) = campaign.age {
            ages.insert(age);
        }
        if let Some(duration) = campaign.duration_hours {
            duration_min = Some(duration_min.map_or(duration, |min| min.min(duration)));
            duration_max = duration_max.max(duration);
        }
        if let Some(players) = campaign.players_min {
            players_min = Some(players_min.map_or(players, |min| min.min(players)));
        }
        if let Some(players) = campaign.players_max {
            players_max = players_max.max(players);
        }
    }

    Facets {
        tags: tags.into_iter().map(String::from).collect(),
        statuses: statuses.into_iter().map(String::from).collect(),
        ages: ages.into_iter().map(String::from).collect(),
        duration: RangeFacet {
            min: duration_min.unwrap_or(0),
            max: duration_max,
        },
        players: RangeFacet {
            min: players_min.unwrap_or(0),
            max: players_max,
        },
    }
}

// ---------------------------------------------------------------------------
// Ordering
// ---------------------------------------------------------------------------

/// Resolve the full ordered id list for the filtered set.
///
/// For [`SortKey::Popular`] the aggregator's row order is authoritative and
/// is used verbatim; every other key sorts the filtered rows locally. Local
/// sorts are stable, so equal keys keep the fetch order.
pub fn order_ids(campaigns: &[Campaign], agg: &[VoteAggregateRow], sort: SortKey) -> Vec<DbId> {
    match sort {
        SortKey::Popular => agg.iter().map(|row| row.campaign_id).collect(),
        SortKey::New => sorted_ids(campaigns, |a, b| b.created_at.cmp(&a.created_at)),
        SortKey::Title => sorted_ids(campaigns, |a, b| a.title.cmp(&b.title)),
        SortKey::Duration => sorted_ids(campaigns, |a, b| {
            a.duration_hours
                .unwrap_or(0)
                .cmp(&b.duration_hours.unwrap_or(0))
        }),
        SortKey::Players => sorted_ids(campaigns, |a, b| {
            a.players_min.unwrap_or(0).cmp(&b.players_min.unwrap_or(0))
        }),
        SortKey::Age => sorted_ids(campaigns, |a, b| {
            age_rank(a.age.as_deref()).cmp(&age_rank(b.age.as_deref()))
        }),
    }
}

fn sorted_ids<F>(campaigns: &[Campaign], mut cmp: F) -> Vec<DbId>
where
    F: FnMut(&Campaign, &Campaign) -> Ordering,
{
    let mut refs: Vec<&Campaign> = campaigns.iter().collect();
    refs.sort_by(|a, b| cmp(a, b));
    refs.into_iter().map(|campaign| campaign.id).collect()
}

/// Numeric rank of an age label, taken from its digit prefix so `"12+"`
/// ranks as 12. Missing or non-numeric labels rank 0.
fn age_rank(age: Option<&str>) -> i64 {
    let label = match age {
        Some(label) => label.trim(),
        None => return 0,
    };
    let end = label
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(label.len());
    label[..end].parse().unwrap_or(0)
}

// ---------------------------------------------------------------------------
// Pagination & assembly
// ---------------------------------------------------------------------------

/// Slice one page out of the ordered id list.
///
/// `page` is 1-based and already clamped to >= 1. A page past the end of
/// the list yields an empty slice, never an error.
pub fn page_slice(ids: &[DbId], page: u32) -> &[DbId] {
    let start = (page as usize - 1).saturating_mul(PAGE_SIZE);
    if start >= ids.len() {
        return &[];
    }
    let end = (start + PAGE_SIZE).min(ids.len());
    &ids[start..end]
}

/// Assemble the response items for one page: each campaign merged with its
/// aggregated vote count (0 when the aggregator returned no row for it).
pub fn assemble_page(
    campaigns: Vec<Campaign>,
    page_ids: &[DbId],
    agg: &[VoteAggregateRow],
) -> Vec<CatalogItem> {
    let votes: HashMap<DbId, i64> = agg
        .iter()
        .map(|row| (row.campaign_id, row.votes))
        .collect();
    let mut by_id: HashMap<DbId, Campaign> = campaigns
        .into_iter()
        .map(|campaign| (campaign.id, campaign))
        .collect();

    page_ids
        .iter()
        .filter_map(|id| by_id.remove(id))
        .map(|campaign| {
            let votes30d = votes.get(&campaign.id).copied().unwrap_or(0);
            CatalogItem {
                campaign,
                votes30d,
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
