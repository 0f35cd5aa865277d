//! Normalized, hashable word tokens.

use serde::{Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// FNV-1a offset basis for 32-bit hashes.
const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;

/// FNV-1a prime for 32-bit hashes.
const FNV_PRIME: u32 = 0x0100_0193;

/// Computes a 32-bit FNV-1a hash over the code points of `text`.
///
/// Each character is folded in as its full code point (not its UTF-8 bytes),
/// so non-ASCII text hashes differently from the byte-oriented variant.
pub fn fnv1a_32(text: &str) -> u32 {
    text.chars().fold(FNV_OFFSET_BASIS, |hash, c| {
        (hash ^ u32::from(c)).wrapping_mul(FNV_PRIME)
    })
}

/// A stable 32-bit hash that does not depend on process-level random state.
///
/// [`BucketSet`](crate::set::BucketSet) derives bucket indices from this value,
/// so two runs over the same input always produce the same bucket layout.
pub trait StableHash {
    fn stable_hash(&self) -> i32;
}

/// A lower-cased unit of text.
///
/// Cloning is cheap: the text is shared behind an `Arc`, so the same token can
/// sit in the dictionary list, the sorted list and the bucket set at once.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Token(Arc<str>);

impl Token {
    /// Lower-cases `text` and wraps it. No other normalization is applied.
    pub fn normalize(text: &str) -> Self {
        Self(Arc::from(text.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for the placeholder a doubled delimiter leaves in a raw stream.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The FNV-1a hash of the normalized text as an unsigned word.
    pub fn hash32(&self) -> u32 {
        fnv1a_32(&self.0)
    }
}

impl StableHash for Token {
    #[allow(clippy::cast_possible_wrap)]
    fn stable_hash(&self) -> i32 {
        // Reinterpret the bits; bucket indexing takes the magnitude.
        self.hash32() as i32
    }
}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.hash32());
    }
}

impl From<&str> for Token {
    fn from(text: &str) -> Self {
        Self::normalize(text)
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token({:?})", &*self.0)
    }
}

impl Serialize for Token {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}
