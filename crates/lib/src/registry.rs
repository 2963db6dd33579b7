//! Discriminator lookup for parsing.
//!
//! Each schema version has one [`TypeRegistry`], built on first use from the
//! version's kind table. Only concrete kinds that declare a discriminator
//! are registered; untyped kinds ([`Kind::Resource`], [`Kind::Service`]) are
//! reachable only as explicit defaults during parsing.

use std::{collections::HashMap, sync::LazyLock};

use tracing::trace;

use crate::{
    Resource,
    resource::ResourceError,
    schema::{Kind, SchemaDescriptor, Version},
};

static REGISTRIES: LazyLock<[TypeRegistry; 2]> =
    LazyLock::new(|| [TypeRegistry::build(Version::V2), TypeRegistry::build(Version::V3)]);

/// Maps discriminator strings to concrete kinds for one schema version.
#[derive(Debug)]
pub struct TypeRegistry {
    version: Version,
    entries: HashMap<&'static str, Kind>,
}

impl TypeRegistry {
    /// Returns the shared registry for `version`.
    pub fn for_version(version: Version) -> &'static TypeRegistry {
        match version {
            Version::V2 => &REGISTRIES[0],
            Version::V3 => &REGISTRIES[1],
        }
    }

    fn build(version: Version) -> Self {
        let entries = SchemaDescriptor::all(version)
            .filter(|schema| !schema.is_abstract())
            .filter_map(|schema| Some((schema.discriminator()?, schema.kind())))
            .collect();
        Self { version, entries }
    }

    pub fn version(&self) -> Version {
        self.version
    }

    /// Resolves a discriminator to its kind, if registered.
    pub fn resolve(&self, discriminator: &str) -> Option<Kind> {
        let kind = self.entries.get(discriminator).copied();
        trace!(version = %self.version, discriminator, kind = ?kind, "Resolved discriminator");
        kind
    }

    /// Resolves a discriminator and creates an empty node of that kind.
    ///
    /// Returns `None` for unregistered discriminators.
    pub fn instantiate(&self, discriminator: &str) -> Option<Result<Resource, ResourceError>> {
        self.resolve(discriminator)
            .map(|kind| Resource::bare(self.version, kind))
    }

    /// Every registered discriminator, sorted.
    pub fn discriminators(&self) -> Vec<&'static str> {
        let mut all: Vec<_> = self.entries.keys().copied().collect();
        all.sort_unstable();
        all
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
