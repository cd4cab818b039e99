//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument.

pub mod campaign_repo;
pub mod vote_repo;

pub use campaign_repo::CampaignRepo;
pub use vote_repo::VoteRepo;
