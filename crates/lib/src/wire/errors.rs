//! Error types for wire-form parsing and canonicalization.

use thiserror::Error;

/// Structured error types for the wire module.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WireError {
    /// The input was not something a document can be parsed from
    #[error("Invalid input: {reason}")]
    InvalidArgument { reason: String },

    /// The input named a file that does not exist
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// The document parsed, but its top level is not a typed resource
    #[error("Expected a typed resource, found {found}")]
    NotAResource { found: String },
}

impl WireError {
    /// Check if this error is about the shape of the caller's input
    pub fn is_argument_error(&self) -> bool {
        matches!(
            self,
            WireError::InvalidArgument { .. } | WireError::FileNotFound { .. }
        )
    }

    /// Check if this error indicates a missing file
    pub fn is_not_found(&self) -> bool {
        matches!(self, WireError::FileNotFound { .. })
    }

    /// Check if the top level resolved to something other than a node
    pub fn is_not_a_resource(&self) -> bool {
        matches!(self, WireError::NotAResource { .. })
    }
}

impl From<WireError> for crate::Error {
    fn from(err: WireError) -> Self {
        crate::Error::Wire(err)
    }
}
