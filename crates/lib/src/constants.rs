//! Constants used throughout the folio library.
//!
//! This module provides central definitions for the JSON-LD markers, context
//! URIs and discriminator keys of both IIIF Presentation schema versions.

/// JSON-LD context key, injected into top-level wire output.
pub const CONTEXT_KEY: &str = "@context";

/// Version 2 identifier key.
pub const V2_ID_KEY: &str = "@id";

/// Version 2 discriminator key.
pub const V2_TYPE_KEY: &str = "@type";

/// Version 2 presentation context.
pub const V2_CONTEXT: &str = "http://iiif.io/api/presentation/2/context.json";

/// Version 3 identifier key.
pub const V3_ID_KEY: &str = "id";

/// Version 3 discriminator key.
pub const V3_TYPE_KEY: &str = "type";

/// Version 3 context, emitted as a two-element list in this order.
pub const V3_CONTEXT: [&str; 2] = [
    "http://www.w3.org/ns/anno.jsonld",
    "http://iiif.io/api/presentation/3/context.json",
];

/// Discriminator that is demoted to a plain resource inside a version 3
/// collection, where manifests are referenced rather than embedded.
pub const EMBEDDED_MANIFEST_TYPE: &str = "Manifest";

/// Legal `viewing_direction` values, shared by both versions.
pub const VIEWING_DIRECTIONS: &[&str] = &[
    "left-to-right",
    "right-to-left",
    "top-to-bottom",
    "bottom-to-top",
];

/// Exact `nav_date` layout.
pub const NAV_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Suffix appended to an image service base to address the full image.
pub const FULL_IMAGE_PATH: &str = "full/full/0/default.jpg";
