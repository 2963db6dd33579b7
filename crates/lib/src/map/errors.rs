//! Error types for ordered map operations.
//!
//! These cover the structural failures of [`OrderedMap`](super::OrderedMap):
//! positional inserts that cannot be placed, anchors that do not resolve,
//! and keys that are missing or already present.

use thiserror::Error;

/// Structured error types for ordered map operations.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    /// The key being inserted is already present in the map
    #[error("Duplicate key: {key}")]
    DuplicateKey { key: String },

    /// No entry matched the requested anchor
    #[error("Anchor not found: {anchor}")]
    AnchorNotFound { anchor: String },

    /// The requested key is not present in the map
    #[error("Key not found: {key}")]
    KeyNotFound { key: String },

    /// A positional insert resolved to a negative index
    #[error("Index {index} out of range for map of length {len}")]
    IndexOutOfRange { index: isize, len: usize },
}

impl MapError {
    /// Check if this error indicates a missing key or anchor
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            MapError::KeyNotFound { .. } | MapError::AnchorNotFound { .. }
        )
    }

    /// Check if this error indicates a key collision
    pub fn is_duplicate(&self) -> bool {
        matches!(self, MapError::DuplicateKey { .. })
    }

    /// Check if this error is a positional range failure
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, MapError::IndexOutOfRange { .. })
    }

    /// Get the key if this is a key-related error
    pub fn key(&self) -> Option<&str> {
        match self {
            MapError::DuplicateKey { key } | MapError::KeyNotFound { key } => Some(key),
            MapError::AnchorNotFound { anchor } => Some(anchor),
            MapError::IndexOutOfRange { .. } => None,
        }
    }
}

impl From<MapError> for crate::Error {
    fn from(err: MapError) -> Self {
        crate::Error::Map(err)
    }
}
