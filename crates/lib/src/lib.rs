//!
//! Folio: a document model for the IIIF Presentation API.
//! This library builds, validates, parses and canonicalizes presentation
//! documents in both schema versions 2 and 3.
//!
//! ## Core Concepts
//!
//! * **OrderedMap (`map::OrderedMap`)**: An insertion-ordered key/value container with positional inserts. Every document node stores its entries in one.
//! * **Value (`value::Value`)**: The closed set of shapes a document value can take: scalars, lists, plain maps and typed nodes.
//! * **Schemas (`schema::SchemaDescriptor`)**: Flattened, per-kind descriptions of required and prohibited keys, key categories and legal enumerations, built once from a static inheritance table per `schema::Version`.
//! * **Resources (`resource::Resource`)**: A typed node. It checks writes against its schema's key categories and validates itself on demand.
//! * **Registry (`registry::TypeRegistry`)**: Resolves wire discriminators (`"sc:Manifest"`, `"Canvas"`) to kinds while parsing.
//! * **Wire (`wire`)**: Canonical JSON output (`wire::to_wire`) and polymorphic parsing (`wire::from_wire`, `wire::parse`).
//!
//! ## Example
//!
//! ```
//! use folio::{Resource, schema::{Kind, Version}, wire::WireOptions};
//!
//! let mut canvas = Resource::new(Version::V3, Kind::Canvas)?;
//! canvas.set("id", "https://example.org/iiif/book1/canvas/p1")?;
//!
//! let mut sequence = Resource::new(Version::V3, Kind::Sequence)?;
//! sequence.push("items", canvas)?;
//!
//! let mut manifest = Resource::new(Version::V3, Kind::Manifest)?;
//! manifest.set("label", "Book 1")?;
//! assert!(manifest.validate().unwrap_err().is_missing_key());
//!
//! manifest.set("id", "https://example.org/iiif/book1/manifest")?;
//! manifest.push("items", sequence)?;
//!
//! let wire = manifest.to_wire(WireOptions::default())?;
//! assert_eq!(wire.keys().next(), Some("@context"));
//! # Ok::<(), folio::Error>(())
//! ```

pub mod constants;
pub mod factory;
pub mod map;
pub mod registry;
pub mod resource;
pub mod schema;
pub mod value;
pub mod wire;

pub use map::OrderedMap;
pub use resource::Resource;
pub use schema::{Kind, Version};
pub use value::Value;

/// Result type used throughout the Folio library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Folio library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured ordered-map errors from the map module
    #[error(transparent)]
    Map(map::MapError),

    /// Structured construction and validation errors from the resource module
    #[error(transparent)]
    Resource(resource::ResourceError),

    /// Structured input and parsing errors from the wire module
    #[error(transparent)]
    Wire(wire::WireError),

    /// A value conversion found the wrong shape
    #[error(transparent)]
    Value(value::TypeMismatch),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Map(_) => "map",
            Error::Resource(_) => "resource",
            Error::Wire(_) => "wire",
            Error::Value(_) => "value",
            Error::Io(_) => "io",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error indicates a key or file was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Map(map_err) => map_err.is_not_found(),
            Error::Wire(wire_err) => wire_err.is_not_found(),
            Error::Resource(resource::ResourceError::Structure { source, .. }) => {
                source.is_not_found()
            }
            _ => false,
        }
    }

    /// Check if this error was raised by resource validation.
    pub fn is_validation_error(&self) -> bool {
        match self {
            Error::Resource(resource_err) => resource_err.is_validation_error(),
            _ => false,
        }
    }

    /// Check if this error is an ordered-map structural violation.
    pub fn is_structural_error(&self) -> bool {
        match self {
            Error::Map(_) => true,
            Error::Resource(resource_err) => resource_err.is_structural_error(),
            _ => false,
        }
    }

    /// Check if this error is about the caller's input.
    pub fn is_argument_error(&self) -> bool {
        match self {
            Error::Wire(wire_err) => wire_err.is_argument_error(),
            _ => false,
        }
    }

    /// Check if this error is a value type mismatch.
    pub fn is_type_error(&self) -> bool {
        matches!(self, Error::Value(_))
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        matches!(self, Error::Io(_))
    }

    /// Check if this error came from JSON (de)serialization.
    pub fn is_serialization_error(&self) -> bool {
        matches!(self, Error::Serialize(_))
    }
}
