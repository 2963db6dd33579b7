//! Error types for resource construction, typed access, and validation.
//!
//! Every variant names the kind it was raised for, so a caller can report
//! the failure without re-walking the document.

use thiserror::Error;

use crate::{
    map::MapError,
    schema::{Kind, Version},
};

/// Structured error types for resource operations.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResourceError {
    /// A required key is absent at validation time
    #[error("{kind} is missing required key '{key}'")]
    MissingRequiredKey { kind: String, key: String },

    /// A key forbidden for this kind is present
    #[error("{kind} must not have key '{key}'")]
    ProhibitedKey { kind: String, key: String },

    /// A value violates its category, an enumeration, or a structural rule
    #[error("Illegal value for '{key}' on {kind}: {reason}")]
    IllegalValue {
        kind: String,
        key: String,
        reason: String,
    },

    /// An abstract kind was constructed directly
    #[error("{kind} is abstract and cannot be instantiated")]
    AbstractInstantiation { kind: String },

    /// The kind does not exist in the requested schema version
    #[error("{kind} is not defined in presentation version {version}")]
    UnsupportedKind { version: Version, kind: Kind },

    /// A category-specific accessor was used on a key of another category
    #[error("'{key}' on {kind} is not {expected}")]
    NotAField {
        kind: String,
        key: String,
        expected: String,
    },

    /// A positional insert on the node's entries failed
    #[error("{kind}: {source}")]
    Structure {
        kind: String,
        #[source]
        source: MapError,
    },
}

impl ResourceError {
    /// Check if this error was raised by `validate`
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            ResourceError::MissingRequiredKey { .. }
                | ResourceError::ProhibitedKey { .. }
                | ResourceError::IllegalValue { .. }
        )
    }

    /// Check if this error is a missing required key
    pub fn is_missing_key(&self) -> bool {
        matches!(self, ResourceError::MissingRequiredKey { .. })
    }

    /// Check if this error is a prohibited key
    pub fn is_prohibited_key(&self) -> bool {
        matches!(self, ResourceError::ProhibitedKey { .. })
    }

    /// Check if this error is an illegal value
    pub fn is_illegal_value(&self) -> bool {
        matches!(self, ResourceError::IllegalValue { .. })
    }

    /// Check if this error came from constructing a kind
    pub fn is_construction_error(&self) -> bool {
        matches!(
            self,
            ResourceError::AbstractInstantiation { .. } | ResourceError::UnsupportedKind { .. }
        )
    }

    /// Check if this error is an ordered-map violation on the node's entries
    pub fn is_structural_error(&self) -> bool {
        matches!(self, ResourceError::Structure { .. })
    }

    /// Get the offending key, if any
    pub fn key(&self) -> Option<&str> {
        match self {
            ResourceError::MissingRequiredKey { key, .. }
            | ResourceError::ProhibitedKey { key, .. }
            | ResourceError::IllegalValue { key, .. }
            | ResourceError::NotAField { key, .. } => Some(key),
            ResourceError::Structure { source, .. } => source.key(),
            _ => None,
        }
    }

    /// Get the kind name the error was raised for
    pub fn kind(&self) -> String {
        match self {
            ResourceError::MissingRequiredKey { kind, .. }
            | ResourceError::ProhibitedKey { kind, .. }
            | ResourceError::IllegalValue { kind, .. }
            | ResourceError::AbstractInstantiation { kind }
            | ResourceError::NotAField { kind, .. }
            | ResourceError::Structure { kind, .. } => kind.clone(),
            ResourceError::UnsupportedKind { kind, .. } => kind.to_string(),
        }
    }
}

impl From<ResourceError> for crate::Error {
    fn from(err: ResourceError) -> Self {
        crate::Error::Resource(err)
    }
}
