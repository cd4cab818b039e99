//! Domain logic for the campaign catalog and voting services.
//!
//! Pure code only: error taxonomy, shared type aliases, the catalog's filter
//! and sort vocabulary, the hashing helper used for anonymized vote metadata,
//! and the vote aggregation collaborator contract. No database or HTTP
//! dependencies, so both the repository layer and the API layer build on it.

pub mod aggregation;
pub mod catalog;
pub mod error;
pub mod hashing;
pub mod types;
