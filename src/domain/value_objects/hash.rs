//! Content Hash Value Object
//!
//! A validated, immutable fingerprint of a file's bytes.
//! The sync component compares these against remote object metadata.

use std::fmt;

use serde::{Serialize, Serializer};
use sha2::{Digest, Sha256};

/// Content hash value object
///
/// Lowercase hex-encoded SHA-256 digest of the exact file bytes.
/// No normalization is applied before hashing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentHash(String);

impl ContentHash {
    /// Length of the hex digest
    pub const HEX_LEN: usize = 64;

    /// Compute the hash of raw bytes
    pub fn from_bytes(content: &[u8]) -> Self {
        let digest = Sha256::digest(content);
        Self(format!("{:x}", digest))
    }

    /// Wrap an already computed hex digest, lowercasing it.
    ///
    /// Returns `None` unless the input is exactly 64 hex characters.
    pub fn from_hex(hex: &str) -> Option<Self> {
        if hex.len() == Self::HEX_LEN && hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            Some(Self(hex.to_ascii_lowercase()))
        } else {
            None
        }
    }

    /// Get the hex digest
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ContentHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for ContentHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}
