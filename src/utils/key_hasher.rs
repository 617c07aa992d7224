//! Short key derivation.
//!
//! Keys are a truncated SHA-256 digest of the raw URL, so the same URL
//! always maps to the same key without any lookup.

use sha2::{Digest, Sha256};

use crate::domain::ports::KeyHasher;

/// Number of hex characters kept from the digest.
const KEY_LENGTH: usize = 8;

/// [`KeyHasher`] producing 8 lowercase hex characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256KeyHasher;

impl KeyHasher for Sha256KeyHasher {
    fn hash(&self, url: &str) -> String {
        let digest = Sha256::digest(url.as_bytes());
        let mut key = hex::encode(digest);
        key.truncate(KEY_LENGTH);
        key
    }
}
