//! Typed document nodes.
//!
//! A [`Resource`] is an [`OrderedMap`] bound to the [`SchemaDescriptor`] of
//! one kind in one schema version. The descriptor drives everything the node
//! does beyond plain map storage:
//!
//! - [`Resource::set`] checks the value against the key's [`Category`]
//! - [`Resource::get`] and friends resolve external aliases (`seeAlso`) to
//!   the internal key (`see_also`)
//! - [`Resource::insert`] and the anchored inserts place checked entries
//!   at a position
//! - [`Resource::array_mut`] auto-populates array-only keys
//! - [`Resource::validate`] enforces required/prohibited keys, enumerations
//!   and structural rules
//!
//! # Usage
//!
//! ```
//! use folio::{Resource, Value, schema::{Kind, Version}};
//!
//! let mut manifest = Resource::new(Version::V3, Kind::Manifest).unwrap();
//! assert_eq!(manifest.type_name(), Some("Manifest"));
//!
//! manifest.set("label", "A book").unwrap();
//! manifest.set("seeAlso", vec![Value::from("https://example.org/about")]).unwrap();
//! assert!(manifest.raw().contains_key("see_also"));
//!
//! // Wrong category
//! assert!(manifest.set("items", "not a list").is_err());
//! ```

use std::fmt;

use crate::{
    OrderedMap, Value,
    map::{Anchor, MapError},
    schema::{Category, Kind, SchemaDescriptor, Version},
};

pub mod errors;
mod validate;

pub use errors::ResourceError;

/// A typed node: ordered entries plus the schema of its kind.
#[derive(Clone)]
pub struct Resource {
    schema: &'static SchemaDescriptor,
    fields: OrderedMap<Value>,
}

impl Resource {
    /// Creates a node of `kind`, seeded with its discriminator and defaults.
    ///
    /// # Errors
    ///
    /// - [`ResourceError::UnsupportedKind`] if `kind` is not part of `version`
    /// - [`ResourceError::AbstractInstantiation`] if `kind` is abstract
    pub fn new(version: Version, kind: Kind) -> Result<Self, ResourceError> {
        let mut resource = Self::bare(version, kind)?;
        resource.seed_defaults();
        Ok(resource)
    }

    /// Creates a node from initial entries, then seeds whatever discriminator
    /// or defaults the entries did not supply.
    ///
    /// Entries are stored without category checks. Keys that name a schema
    /// field by its external alias are stored under the internal name.
    pub fn with_fields(
        version: Version,
        kind: Kind,
        mut fields: OrderedMap<Value>,
    ) -> Result<Self, ResourceError> {
        let mut resource = Self::bare(version, kind)?;
        let schema = resource.schema;
        fields.rename_keys(|key| schema.canonical_key(key).to_string());
        resource.fields = fields;
        resource.seed_defaults();
        Ok(resource)
    }

    /// Creates an empty node with nothing seeded.
    pub fn bare(version: Version, kind: Kind) -> Result<Self, ResourceError> {
        let schema = SchemaDescriptor::lookup(version, kind)
            .ok_or(ResourceError::UnsupportedKind { version, kind })?;
        if schema.is_abstract() {
            return Err(ResourceError::AbstractInstantiation {
                kind: kind.to_string(),
            });
        }
        Ok(Self {
            schema,
            fields: OrderedMap::new(),
        })
    }

    /// Adds the discriminator (at the front) and kind defaults (at the end)
    /// where they are absent.
    pub(crate) fn seed_defaults(&mut self) {
        let type_key = self.version().type_key();
        if let Some(discriminator) = self.schema.discriminator()
            && !self.fields.contains_key(type_key)
        {
            let seeded = self.fields.unshift(type_key, discriminator);
            debug_assert!(seeded.is_ok(), "discriminator key is absent");
        }
        for &(key, value) in self.schema.defaults() {
            if !self.fields.contains_key(key) {
                self.fields.set(key, value);
            }
        }
    }

    pub fn schema(&self) -> &'static SchemaDescriptor {
        self.schema
    }

    pub fn kind(&self) -> Kind {
        self.schema.kind()
    }

    pub fn version(&self) -> Version {
        self.schema.version()
    }

    /// Returns true if this node's kind is `kind` or descends from it
    pub fn is_a(&self, kind: Kind) -> bool {
        self.schema.is_a(kind)
    }

    /// The stored entries, in order, under their internal keys
    pub fn raw(&self) -> &OrderedMap<Value> {
        &self.fields
    }

    /// Mutable access to the stored entries, bypassing category checks
    pub fn raw_mut(&mut self) -> &mut OrderedMap<Value> {
        &mut self.fields
    }

    /// Consumes the node, returning its entries
    pub fn into_fields(self) -> OrderedMap<Value> {
        self.fields
    }

    /// Gets a value by internal key or external alias
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(self.schema.canonical_key(key))
    }

    /// Gets a mutable value by internal key or external alias
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        let key = self.schema.canonical_key(key);
        self.fields.get_mut(key)
    }

    /// Returns true if the key (or its alias) is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(self.schema.canonical_key(key))
    }

    /// Sets a value after checking it against the key's category.
    ///
    /// Known keys are stored under their internal name whichever alias was
    /// used. Keys outside the schema are stored as given.
    ///
    /// # Errors
    ///
    /// [`ResourceError::IllegalValue`] if the value does not fit the category.
    pub fn set(
        &mut self,
        key: &str,
        value: impl Into<Value>,
    ) -> Result<Option<Value>, ResourceError> {
        let value = value.into();
        let key = self.checked_key(key, &value)?;
        Ok(self.fields.set(key, value))
    }

    /// Inserts a new entry at `index` after checking the value against the
    /// key's category.
    ///
    /// Index handling follows [`OrderedMap::insert`].
    ///
    /// # Errors
    ///
    /// - [`ResourceError::IllegalValue`] if the value does not fit the category
    /// - [`ResourceError::Structure`] if the index is out of range or the key
    ///   (under either name) is already present
    pub fn insert(
        &mut self,
        index: isize,
        key: &str,
        value: impl Into<Value>,
    ) -> Result<(), ResourceError> {
        let value = value.into();
        let key = self.checked_key(key, &value)?;
        self.fields
            .insert(index, key, value)
            .map_err(|source| self.structural(source))
    }

    /// Inserts a new entry at the front. See [`Resource::insert`].
    pub fn unshift(&mut self, key: &str, value: impl Into<Value>) -> Result<(), ResourceError> {
        self.insert(0, key, value)
    }

    /// Inserts a new entry immediately before the entry matched by `anchor`.
    ///
    /// A key anchor may use either the internal name or the external alias.
    ///
    /// # Errors
    ///
    /// As [`Resource::insert`], with [`ResourceError::Structure`] also
    /// raised when no entry matches the anchor.
    pub fn insert_before<'a>(
        &mut self,
        anchor: impl Into<Anchor<'a, Value>>,
        key: &str,
        value: impl Into<Value>,
    ) -> Result<(), ResourceError> {
        let value = value.into();
        let key = self.checked_key(key, &value)?;
        let anchor = self.resolve_anchor(anchor.into());
        self.fields
            .insert_before(anchor, key, value)
            .map_err(|source| self.structural(source))
    }

    /// Inserts a new entry immediately after the entry matched by `anchor`.
    ///
    /// Errors as [`Resource::insert_before`].
    pub fn insert_after<'a>(
        &mut self,
        anchor: impl Into<Anchor<'a, Value>>,
        key: &str,
        value: impl Into<Value>,
    ) -> Result<(), ResourceError> {
        let value = value.into();
        let key = self.checked_key(key, &value)?;
        let anchor = self.resolve_anchor(anchor.into());
        self.fields
            .insert_after(anchor, key, value)
            .map_err(|source| self.structural(source))
    }

    /// Stores a value without any category check
    pub fn insert_raw(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.set(key, value)
    }

    /// Removes a key (or its alias) if present
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let key = self.schema.canonical_key(key);
        self.fields.remove(key)
    }

    /// Removes a key (or its alias), signalling [`MapError::KeyNotFound`]
    pub fn delete(&mut self, key: &str) -> Result<Value, MapError> {
        let key = self.schema.canonical_key(key);
        self.fields.delete(key)
    }

    /// Returns the list stored under an array-only key, creating and storing
    /// an empty one on first access.
    ///
    /// Repeated calls return the same list, so pushes accumulate.
    pub fn array_mut(&mut self, key: &str) -> Result<&mut Vec<Value>, ResourceError> {
        let schema = self.schema;
        let key = match schema.field(key) {
            Some(field) if field.category == Category::Array => field.key,
            _ => {
                return Err(ResourceError::NotAField {
                    kind: schema.kind().to_string(),
                    key: key.to_string(),
                    expected: Category::Array.describe(),
                });
            }
        };
        if !self.fields.contains_key(key) {
            self.fields.set(key, Value::List(Vec::new()));
        }
        match self.fields.get_mut(key) {
            Some(Value::List(items)) => Ok(items),
            _ => Err(ResourceError::IllegalValue {
                kind: schema.kind().to_string(),
                key: key.to_string(),
                reason: format!("must be {}", Category::Array.describe()),
            }),
        }
    }

    /// Appends a value to an array-only key. See [`Resource::array_mut`].
    pub fn push(&mut self, key: &str, value: impl Into<Value>) -> Result<(), ResourceError> {
        self.array_mut(key)?.push(value.into());
        Ok(())
    }

    /// Iterates over the stored keys in order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys()
    }

    /// Iterates over stored `(key, value)` pairs in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The identifier (`@id` or `id`), if it is text
    pub fn id(&self) -> Option<&str> {
        self.fields
            .get(self.version().id_key())
            .and_then(Value::as_text)
    }

    /// The stored discriminator value, if it is text
    pub fn type_name(&self) -> Option<&str> {
        self.fields
            .get(self.version().type_key())
            .and_then(Value::as_text)
    }

    /// The label, if present
    pub fn label(&self) -> Option<&Value> {
        self.fields.get("label")
    }

    /// Resolves `key` to its internal name and checks `value` against the
    /// field's category. Keys outside the schema pass through unchecked.
    fn checked_key<'k>(&self, key: &'k str, value: &Value) -> Result<&'k str, ResourceError> {
        match self.schema.field(key) {
            Some(field) => {
                self.check_category(field.key, field.category, value)?;
                Ok(field.key)
            }
            None => Ok(key),
        }
    }

    fn resolve_anchor<'a>(&self, anchor: Anchor<'a, Value>) -> Anchor<'a, Value> {
        match anchor {
            Anchor::Key(key) => Anchor::Key(self.schema.canonical_key(key)),
            predicate => predicate,
        }
    }

    fn structural(&self, source: MapError) -> ResourceError {
        ResourceError::Structure {
            kind: self.kind().to_string(),
            source,
        }
    }

    fn check_category(
        &self,
        key: &str,
        category: Category,
        value: &Value,
    ) -> Result<(), ResourceError> {
        let ok = match category {
            Category::Any => true,
            Category::Text => matches!(value, Value::Text(_)),
            Category::Array => matches!(value, Value::List(_)),
            Category::Hash => matches!(value, Value::Map(_) | Value::Node(_)),
            Category::Int => matches!(value, Value::Int(n) if *n > 0),
            Category::Numeric => value.as_f64().is_some_and(|n| n > 0.0),
            Category::Uri => validate::is_uri_value(value),
            Category::Node(kind) => value.as_node().is_some_and(|node| node.is_a(kind)),
        };
        if ok {
            Ok(())
        } else {
            Err(self.illegal(key, format!("must be {}", category.describe())))
        }
    }

    pub(crate) fn illegal(&self, key: &str, reason: impl Into<String>) -> ResourceError {
        ResourceError::IllegalValue {
            kind: self.kind().to_string(),
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}

impl PartialEq for Resource {
    fn eq(&self, other: &Self) -> bool {
        self.version() == other.version()
            && self.kind() == other.kind()
            && self.fields == other.fields
    }
}

impl fmt::Debug for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resource")
            .field("version", &self.version())
            .field("kind", &self.kind())
            .field("fields", &self.fields)
            .finish()
    }
}
