//! SHA-256 hex digests for anonymized vote metadata.
//!
//! The voting service never persists raw fingerprints, client IPs, or user
//! agents -- only these irreversible digests. The digest is deterministic so
//! the duplicate-vote check can compare hashes across requests.

use sha2::{Digest, Sha256};

/// Compute a SHA-256 hex digest of the given bytes.
pub fn sha256_hex(data: &[u8]) -> String {
    let hash = Sha256::digest(data);
    format!("{hash:x}")
}
