//! Content Digest Value Object
//!
//! A `sha256:`-prefixed digest over a byte sequence. Used for lock record
//! digests and for checking downloaded archives against the repository index.

use std::fmt;

use sha2::{Digest, Sha256};

/// Content digest value object
///
/// Wraps a SHA-256 hex string with the `sha256:` prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentDigest(String);

impl ContentDigest {
    /// Prefix for SHA-256 digests
    pub const PREFIX: &'static str = "sha256:";

    /// Create a digest from a hex string, with or without prefix
    pub fn new(raw: &str) -> Self {
        let hex = raw.strip_prefix(Self::PREFIX).unwrap_or(raw);
        Self(format!("{}{}", Self::PREFIX, hex.to_ascii_lowercase()))
    }

    /// Compute the SHA-256 digest of `bytes`
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let hash = Sha256::digest(bytes);
        Self(format!("{}{:x}", Self::PREFIX, hash))
    }

    /// Full digest string with prefix
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Hex part without prefix
    pub fn hex(&self) -> &str {
        self.0.strip_prefix(Self::PREFIX).unwrap_or(&self.0)
    }

    /// Compare against a raw string (with or without prefix, any case)
    pub fn matches_str(&self, s: &str) -> bool {
        let other = s.strip_prefix(Self::PREFIX).unwrap_or(s);
        self.hex().eq_ignore_ascii_case(other)
    }
}

impl fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ContentDigest {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
