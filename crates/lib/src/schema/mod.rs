//! Declarative per-kind schemas.
//!
//! Each schema version declares its kinds in a static inheritance table
//! ([`v2::KINDS`], [`v3::KINDS`]). A table row lists only what a kind adds to
//! its parent. The table is walked once, on first use, to produce one
//! flattened, immutable [`SchemaDescriptor`] per `(Version, Kind)`:
//!
//! - required and prohibited keys accumulate, ancestors first
//! - key categories accumulate, a child's entry replacing its parent's
//! - legal enumerations accumulate per key
//!
//! Descriptors are pure data. Behavior lives in [`crate::resource`].

use std::{collections::HashMap, fmt, str::FromStr, sync::LazyLock};

use crate::{Value, constants, wire::case};

pub mod v2;
pub mod v3;


/// IIIF Presentation schema version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Version {
    /// Presentation API 2.x (`@id` / `@type`)
    V2,
    /// Presentation API 3.x (`id` / `type`)
    V3,
}

impl Version {
    /// All supported versions
    pub const ALL: [Version; 2] = [Version::V2, Version::V3];

    /// The discriminator key on the wire and internally
    pub fn type_key(self) -> &'static str {
        match self {
            Version::V2 => constants::V2_TYPE_KEY,
            Version::V3 => constants::V3_TYPE_KEY,
        }
    }

    /// The identifier key on the wire and internally
    pub fn id_key(self) -> &'static str {
        match self {
            Version::V2 => constants::V2_ID_KEY,
            Version::V3 => constants::V3_ID_KEY,
        }
    }

    /// The `@context` value injected into top-level wire output
    pub fn context(self) -> Value {
        match self {
            Version::V2 => Value::from(constants::V2_CONTEXT),
            Version::V3 => Value::from(constants::V3_CONTEXT.to_vec()),
        }
    }

    fn table(self) -> &'static [KindDef] {
        match self {
            Version::V2 => v2::KINDS,
            Version::V3 => v3::KINDS,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Version::V2 => f.write_str("2"),
            Version::V3 => f.write_str("3"),
        }
    }
}

impl FromStr for Version {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_start_matches(['v', 'V']) {
            "2" | "2.0" | "2.1" => Ok(Version::V2),
            "3" | "3.0" => Ok(Version::V3),
            other => Err(format!("unsupported presentation version: {other}")),
        }
    }
}

/// The closed set of resource kinds across both schema versions.
///
/// Not every kind exists in every version; see [`SchemaDescriptor::lookup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    AbstractResource,
    Manifest,
    Collection,
    Sequence,
    Canvas,
    Range,
    Layer,
    AnnotationList,
    AnnotationPage,
    AnnotationCollection,
    Annotation,
    Choice,
    Resource,
    ImageResource,
    Service,
}

impl Kind {
    /// Human-readable kind name
    pub fn name(self) -> &'static str {
        match self {
            Kind::AbstractResource => "AbstractResource",
            Kind::Manifest => "Manifest",
            Kind::Collection => "Collection",
            Kind::Sequence => "Sequence",
            Kind::Canvas => "Canvas",
            Kind::Range => "Range",
            Kind::Layer => "Layer",
            Kind::AnnotationList => "AnnotationList",
            Kind::AnnotationPage => "AnnotationPage",
            Kind::AnnotationCollection => "AnnotationCollection",
            Kind::Annotation => "Annotation",
            Kind::Choice => "Choice",
            Kind::Resource => "Resource",
            Kind::ImageResource => "ImageResource",
            Kind::Service => "Service",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Value category assigned to a known key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Any value; never auto-populated
    Any,
    /// Text only
    Text,
    /// List only; auto-populated on first mutable access
    Array,
    /// Mapping only
    Hash,
    /// Positive integer
    Int,
    /// Positive integer or float
    Numeric,
    /// Absolute http(s) URI, or a list of them
    Uri,
    /// A node of the given kind or one of its descendants
    Node(Kind),
}

impl Category {
    /// Short description used in error messages
    pub fn describe(self) -> String {
        match self {
            Category::Any => "any value".to_string(),
            Category::Text => "a string".to_string(),
            Category::Array => "an array".to_string(),
            Category::Hash => "a hash".to_string(),
            Category::Int => "a positive integer".to_string(),
            Category::Numeric => "a positive number".to_string(),
            Category::Uri => "an http(s) URI".to_string(),
            Category::Node(kind) => format!("a {kind} node"),
        }
    }
}

/// One row of a version's inheritance table.
///
/// Every list holds only the row's own additions.
#[derive(Debug)]
pub struct KindDef {
    pub kind: Kind,
    pub parent: Option<Kind>,
    pub discriminator: Option<&'static str>,
    pub is_abstract: bool,
    pub required: &'static [&'static str],
    pub prohibited: &'static [&'static str],
    pub fields: &'static [(&'static str, Category)],
    pub enumerations: &'static [(&'static str, &'static [&'static str])],
    pub defaults: &'static [(&'static str, &'static str)],
}

impl KindDef {
    /// A row with nothing but a kind, to be filled with struct update syntax
    pub const fn base(kind: Kind) -> Self {
        Self {
            kind,
            parent: None,
            discriminator: None,
            is_abstract: false,
            required: &[],
            prohibited: &[],
            fields: &[],
            enumerations: &[],
            defaults: &[],
        }
    }
}

/// A known key, its category, and its external alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub alias: String,
    pub category: Category,
}

/// Flattened schema for one kind in one version.
#[derive(Debug, PartialEq)]
pub struct SchemaDescriptor {
    version: Version,
    kind: Kind,
    ancestry: Vec<Kind>,
    discriminator: Option<&'static str>,
    is_abstract: bool,
    required: Vec<&'static str>,
    prohibited: Vec<&'static str>,
    fields: Vec<FieldSpec>,
    enumerations: Vec<(&'static str, Vec<&'static str>)>,
    defaults: Vec<(&'static str, &'static str)>,
}

static DESCRIPTORS: LazyLock<HashMap<(Version, Kind), SchemaDescriptor>> = LazyLock::new(|| {
    let mut all = HashMap::new();
    for version in Version::ALL {
        for def in version.table() {
            all.insert((version, def.kind), flatten(version, def, version.table()));
        }
    }
    all
});

fn flatten(version: Version, def: &KindDef, table: &'static [KindDef]) -> SchemaDescriptor {
    // Root first
    let mut chain = vec![def];
    let mut parent = def.parent;
    while let Some(kind) = parent {
        match table.iter().find(|row| row.kind == kind) {
            Some(row) => {
                chain.push(row);
                parent = row.parent;
            }
            None => break,
        }
    }
    let ancestry = chain.iter().map(|row| row.kind).collect();
    chain.reverse();

    let mut descriptor = SchemaDescriptor {
        version,
        kind: def.kind,
        ancestry,
        discriminator: def.discriminator,
        is_abstract: def.is_abstract,
        required: Vec::new(),
        prohibited: Vec::new(),
        fields: Vec::new(),
        enumerations: Vec::new(),
        defaults: Vec::new(),
    };

    for row in chain {
        extend_unique(&mut descriptor.required, row.required);
        extend_unique(&mut descriptor.prohibited, row.prohibited);
        for &(key, category) in row.fields {
            match descriptor.fields.iter_mut().find(|f| f.key == key) {
                Some(existing) => existing.category = category,
                None => descriptor.fields.push(FieldSpec {
                    key,
                    alias: case::to_external(key),
                    category,
                }),
            }
        }
        for &(key, values) in row.enumerations {
            match descriptor.enumerations.iter_mut().find(|(k, _)| *k == key) {
                Some((_, legal)) => extend_unique(legal, values),
                None => descriptor.enumerations.push((key, values.to_vec())),
            }
        }
        for &(key, value) in row.defaults {
            match descriptor.defaults.iter_mut().find(|(k, _)| *k == key) {
                Some(existing) => existing.1 = value,
                None => descriptor.defaults.push((key, value)),
            }
        }
    }

    descriptor
}

fn extend_unique(target: &mut Vec<&'static str>, additions: &[&'static str]) {
    for item in additions {
        if !target.contains(item) {
            target.push(item);
        }
    }
}

impl SchemaDescriptor {
    /// Returns the descriptor for `kind` in `version`, if that kind exists there.
    pub fn lookup(version: Version, kind: Kind) -> Option<&'static SchemaDescriptor> {
        DESCRIPTORS.get(&(version, kind))
    }

    /// Iterates every descriptor declared for `version`, in table order.
    pub fn all(version: Version) -> impl Iterator<Item = &'static SchemaDescriptor> {
        version
            .table()
            .iter()
            .filter_map(move |def| Self::lookup(version, def.kind))
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// The literal written into and matched against the discriminator key
    pub fn discriminator(&self) -> Option<&'static str> {
        self.discriminator
    }

    pub fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    /// Returns true if this kind is `kind` or descends from it
    pub fn is_a(&self, kind: Kind) -> bool {
        self.ancestry.contains(&kind)
    }

    /// Required keys, ancestors' first
    pub fn required_keys(&self) -> &[&'static str] {
        &self.required
    }

    /// Prohibited keys, ancestors' first
    pub fn prohibited_keys(&self) -> &[&'static str] {
        &self.prohibited
    }

    /// Every categorized key
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Finds a field by its internal name or its external alias
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields
            .iter()
            .find(|f| f.key == name || f.alias == name)
    }

    /// Category of a key, by internal name or alias
    pub fn category(&self, name: &str) -> Option<Category> {
        self.field(name).map(|f| f.category)
    }

    /// Internal storage key for `name`, resolving external aliases
    pub fn canonical_key<'a>(&self, name: &'a str) -> &'a str {
        match self.field(name) {
            Some(field) => field.key,
            None => name,
        }
    }

    /// Legal literal values for an enumerated key
    pub fn legal_values(&self, key: &str) -> Option<&[&'static str]> {
        self.enumerations
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, legal)| legal.as_slice())
    }

    /// Every enumerated key with its legal values
    pub fn enumerations(&self) -> impl Iterator<Item = (&'static str, &[&'static str])> {
        self.enumerations
            .iter()
            .map(|(key, legal)| (*key, legal.as_slice()))
    }

    /// Values seeded at construction besides the discriminator
    pub fn defaults(&self) -> &[(&'static str, &'static str)] {
        &self.defaults
    }
}
