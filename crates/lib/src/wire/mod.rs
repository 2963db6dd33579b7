//! Conversion between resource trees and the JSON wire form.
//!
//! # To wire
//!
//! [`to_wire`] validates a node (unless [`WireOptions::force`] is set), then
//! rebuilds it as a plain [`OrderedMap`]:
//!
//! - `@`-prefixed keys are hoisted to the front in sorted order
//! - the version's `@context` is injected at the top level if absent
//! - nested nodes are canonicalized recursively, without a context
//! - null values and empty lists are dropped
//! - keys are renamed to their external camelCase form, in place
//!
//! # From wire
//!
//! [`from_wire`] walks a parsed mapping and resolves each object's kind
//! from its discriminator through the version's [`TypeRegistry`]. Objects
//! without a registered discriminator become plain maps, except under the
//! keys `service` (a [`Kind::Service`] node) and `resource`/`body` (a
//! [`Kind::Resource`] node).
//!
//! Inside a collection, a `Manifest` discriminator resolves to a plain
//! [`Kind::Resource`]: collections reference manifests rather than embed
//! them.

use std::{fs, path::Path};

use tracing::{debug, trace};

use crate::{
    OrderedMap, Resource, Value,
    constants::{CONTEXT_KEY, EMBEDDED_MANIFEST_TYPE},
    registry::TypeRegistry,
    resource::ResourceError,
    schema::{Kind, Version},
};

pub mod case;
pub mod errors;

pub use errors::WireError;

/// Options for [`to_wire`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WireOptions {
    /// Skip validation
    pub force: bool,
    /// Inject the version's `@context` at the top level if absent
    pub include_context: bool,
    /// Hoist `@`-prefixed keys to the front, sorted
    pub sort_ld_keys: bool,
}

impl Default for WireOptions {
    fn default() -> Self {
        Self {
            force: false,
            include_context: true,
            sort_ld_keys: true,
        }
    }
}

impl WireOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub fn include_context(mut self, include_context: bool) -> Self {
        self.include_context = include_context;
        self
    }

    pub fn sort_ld_keys(mut self, sort_ld_keys: bool) -> Self {
        self.sort_ld_keys = sort_ld_keys;
        self
    }

    fn nested(self) -> Self {
        Self {
            include_context: false,
            ..self
        }
    }
}

/// JSON text layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsonStyle {
    #[default]
    Compact,
    Pretty,
}

/// Canonicalizes a resource tree into its wire form.
///
/// # Errors
///
/// The first validation failure found in the tree, unless `options.force`
/// is set.
pub fn to_wire(node: &Resource, options: WireOptions) -> Result<OrderedMap<Value>, ResourceError> {
    debug!(
        kind = %node.kind(),
        version = %node.version(),
        force = options.force,
        "Canonicalizing resource"
    );
    node_to_wire(node, options)
}

fn node_to_wire(node: &Resource, options: WireOptions) -> Result<OrderedMap<Value>, ResourceError> {
    if !options.force {
        node.validate()?;
    }
    let nested = options.nested();
    let inject_context = options.include_context && !node.contains_key(CONTEXT_KEY);
    let mut out = OrderedMap::with_capacity(node.len() + 1);

    if options.sort_ld_keys {
        let mut linked_data = Vec::new();
        for (key, value) in node.iter().filter(|(key, _)| key.starts_with('@')) {
            linked_data.push((key, value_to_wire(value, nested)?));
        }
        if inject_context {
            linked_data.push((CONTEXT_KEY, node.version().context()));
        }
        linked_data.sort_by(|a, b| a.0.cmp(b.0));
        out.extend(linked_data);
    } else if inject_context {
        out.set(CONTEXT_KEY, node.version().context());
    }

    for (key, value) in node.iter() {
        if options.sort_ld_keys && key.starts_with('@') {
            continue;
        }
        trace!(kind = %node.kind(), key, "Canonicalizing entry");
        out.set(key, value_to_wire(value, nested)?);
    }

    out.remove_empties();
    out.rename_keys(case::to_external);
    Ok(out)
}

fn value_to_wire(value: &Value, options: WireOptions) -> Result<Value, ResourceError> {
    Ok(match value {
        Value::Node(node) => Value::Map(node_to_wire(node, options)?),
        Value::Map(map) => {
            let mut out = OrderedMap::with_capacity(map.len());
            for (key, value) in map {
                out.set(case::to_external(key), value_to_wire(value, options)?);
            }
            Value::Map(out)
        }
        Value::List(items) => Value::List(
            items
                .iter()
                .map(|item| value_to_wire(item, options))
                .collect::<Result<_, _>>()?,
        ),
        scalar => scalar.clone(),
    })
}

/// Parses a wire mapping into a resource tree.
///
/// Returns a [`Value::Node`] when the top level resolves to a kind, and a
/// [`Value::Map`] otherwise.
pub fn from_wire(raw: &OrderedMap<Value>, version: Version) -> Result<Value, ResourceError> {
    debug!(version = %version, keys = raw.len(), "Parsing wire document");
    Parser {
        version,
        registry: TypeRegistry::for_version(version),
    }
    .mapping(raw, None, false)
}

struct Parser {
    version: Version,
    registry: &'static TypeRegistry,
}

impl Parser {
    fn mapping(
        &self,
        raw: &OrderedMap<Value>,
        default: Option<Kind>,
        in_collection: bool,
    ) -> Result<Value, ResourceError> {
        let discriminator = raw.get(self.version.type_key()).and_then(Value::as_text);
        let resolved = discriminator.and_then(|name| {
            if in_collection && name == EMBEDDED_MANIFEST_TYPE {
                Some(Kind::Resource)
            } else {
                self.registry.resolve(name)
            }
        });
        if let Some(name) = discriminator
            && resolved.is_none()
        {
            debug!(
                discriminator = name,
                default = ?default,
                "Unregistered discriminator, using default"
            );
        }
        let kind = resolved.or(default);
        let in_collection = in_collection || kind == Some(Kind::Collection);

        let mut fields = OrderedMap::with_capacity(raw.len());
        for (key, value) in raw {
            let key = case::to_internal(key);
            let value = self.value(&key, value, in_collection)?;
            fields.set(key, value);
        }

        match kind {
            Some(kind) => Ok(Value::from(Resource::with_fields(
                self.version,
                kind,
                fields,
            )?)),
            None => Ok(Value::Map(fields)),
        }
    }

    fn value(&self, key: &str, value: &Value, in_collection: bool) -> Result<Value, ResourceError> {
        match value {
            Value::Map(map) => self.mapping(map, default_kind(key, false), in_collection),
            Value::List(items) => items
                .iter()
                .map(|item| match item {
                    Value::Map(map) => {
                        self.mapping(map, default_kind(key, true), in_collection)
                    }
                    other => Ok(other.clone()),
                })
                .collect::<Result<_, _>>()
                .map(Value::List),
            other => Ok(other.clone()),
        }
    }
}

/// Kind used for an object under `key` when its discriminator resolves to
/// nothing.
fn default_kind(key: &str, in_list: bool) -> Option<Kind> {
    match key {
        "service" => Some(Kind::Service),
        "resource" | "body" if !in_list => Some(Kind::Resource),
        _ => None,
    }
}

/// Something a document can be parsed from.
#[derive(Debug, Clone)]
pub enum Input<'a> {
    /// A JSON file on disk
    Path(&'a Path),
    /// JSON text
    Json(&'a str),
    /// An already-parsed mapping
    Map(OrderedMap<Value>),
    /// An already-parsed value; must be a mapping
    Value(Value),
}

impl<'a> Input<'a> {
    /// Treats text starting with `{` or `[` as JSON and anything else as a
    /// file path.
    pub fn detect(text: &'a str) -> Self {
        if text.trim_start().starts_with(['{', '[']) {
            Input::Json(text)
        } else {
            Input::Path(Path::new(text))
        }
    }
}

impl<'a> From<&'a Path> for Input<'a> {
    fn from(path: &'a Path) -> Self {
        Input::Path(path)
    }
}

impl From<OrderedMap<Value>> for Input<'_> {
    fn from(map: OrderedMap<Value>) -> Self {
        Input::Map(map)
    }
}

impl From<Value> for Input<'_> {
    fn from(value: Value) -> Self {
        Input::Value(value)
    }
}

impl From<serde_json::Value> for Input<'_> {
    fn from(value: serde_json::Value) -> Self {
        Input::Value(Value::from(value))
    }
}

/// Reads and parses a document from any supported input form.
///
/// # Errors
///
/// - [`WireError::FileNotFound`] for a path that does not exist
/// - [`WireError::InvalidArgument`] if the input is not a JSON object
/// - [`crate::Error::Io`] or [`crate::Error::Serialize`] for unreadable input
pub fn parse<'a>(input: impl Into<Input<'a>>, version: Version) -> crate::Result<Value> {
    let raw = match input.into() {
        Input::Path(path) => {
            if !path.exists() {
                return Err(WireError::FileNotFound {
                    path: path.display().to_string(),
                }
                .into());
            }
            let text = fs::read_to_string(path)?;
            serde_json::from_str::<Value>(&text)?
        }
        Input::Json(text) => serde_json::from_str::<Value>(text)?,
        Input::Map(map) => Value::Map(map),
        Input::Value(value) => value,
    };
    match raw {
        Value::Map(map) => Ok(from_wire(&map, version)?),
        other => Err(WireError::InvalidArgument {
            reason: format!("expected a JSON object, found {}", other.type_name()),
        }
        .into()),
    }
}

/// Like [`parse`], but requires the document to resolve to a typed node.
pub fn parse_resource<'a>(input: impl Into<Input<'a>>, version: Version) -> crate::Result<Resource> {
    match parse(input, version)? {
        Value::Node(node) => Ok(*node),
        other => Err(WireError::NotAResource {
            found: other.type_name().to_string(),
        }
        .into()),
    }
}

/// Canonicalizes a resource tree and renders it as JSON text.
pub fn to_json(node: &Resource, options: WireOptions, style: JsonStyle) -> crate::Result<String> {
    let wire = to_wire(node, options)?;
    Ok(match style {
        JsonStyle::Compact => serde_json::to_string(&wire)?,
        JsonStyle::Pretty => serde_json::to_string_pretty(&wire)?,
    })
}

impl Resource {
    /// See [`to_wire`].
    pub fn to_wire(&self, options: WireOptions) -> Result<OrderedMap<Value>, ResourceError> {
        to_wire(self, options)
    }

    /// See [`to_json`].
    pub fn to_json(&self, options: WireOptions, style: JsonStyle) -> crate::Result<String> {
        to_json(self, options, style)
    }
}
