//! Order-preserving associative container.
//!
//! [`OrderedMap`] is the storage underneath every document node. Unlike a
//! `HashMap`, the position of every entry is part of its meaning: JSON-LD
//! documents are emitted in the order their keys were set, and that order has
//! to survive replacement, key renaming, and positional inserts.
//!
//! # Semantics
//!
//! - [`OrderedMap::set`] replaces an existing value **in place**; new keys are
//!   appended at the end.
//! - [`OrderedMap::insert`] places a new entry at an index. Negative indices
//!   count from the end, so `-1` appends.
//! - [`OrderedMap::insert_before`] / [`OrderedMap::insert_after`] place a new
//!   entry relative to an [`Anchor`], either a key or a predicate.
//! - [`OrderedMap::rename_keys`] rewrites every key without moving any entry.
//!
//! Structural operations rebuild the backing vector. Documents are single
//! presentation objects, so linear time is fine here.
//!
//! ```
//! use folio::map::OrderedMap;
//!
//! let mut map: OrderedMap<i64> = OrderedMap::new();
//! map.set("a", 1);
//! map.set("b", 2);
//! map.set("c", 3);
//! map.insert(2, "x", 9).unwrap();
//! assert_eq!(map.keys().collect::<Vec<_>>(), ["a", "b", "x", "c"]);
//!
//! map.set("a", 10);
//! assert_eq!(map.keys().next(), Some("a"));
//! ```

use std::fmt;

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{MapAccess, Visitor},
    ser::SerializeMap,
};

use crate::Value;

pub mod errors;


pub use errors::MapError;

/// Locates the entry that a relative insert is placed against.
///
/// An anchor is either an exact key or a predicate over `(key, value)`;
/// the first entry that matches wins.
pub enum Anchor<'a, V> {
    /// The entry whose key equals this string
    Key(&'a str),
    /// The first entry for which the predicate holds
    Predicate(Box<dyn Fn(&str, &V) -> bool + 'a>),
}

impl<'a, V> Anchor<'a, V> {
    /// Builds a predicate anchor.
    pub fn matching(predicate: impl Fn(&str, &V) -> bool + 'a) -> Self {
        Anchor::Predicate(Box::new(predicate))
    }

    fn describe(&self) -> String {
        match self {
            Anchor::Key(key) => (*key).to_string(),
            Anchor::Predicate(_) => "<predicate>".to_string(),
        }
    }
}

impl<'a, V> From<&'a str> for Anchor<'a, V> {
    fn from(key: &'a str) -> Self {
        Anchor::Key(key)
    }
}

impl<'a, V> From<&'a String> for Anchor<'a, V> {
    fn from(key: &'a String) -> Self {
        Anchor::Key(key.as_str())
    }
}

impl<V> fmt::Debug for Anchor<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Anchor::Key(key) => f.debug_tuple("Key").field(key).finish(),
            Anchor::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

/// An ordered sequence of `(key, value)` pairs with unique keys.
///
/// Insertion order is semantically significant. Every mutation documented
/// on this type keeps the relative order of the entries it does not touch.
#[derive(Clone, PartialEq)]
pub struct OrderedMap<V = Value> {
    entries: Vec<(String, V)>,
}

impl<V> OrderedMap<V> {
    /// Creates an empty map
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Creates an empty map with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the position of `key`, if present
    pub fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    /// Returns true if the map contains `key`
    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Gets the value stored under `key`
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Gets a mutable reference to the value stored under `key`
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.entries
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Sets `key` to `value`, returning the previous value.
    ///
    /// An existing key keeps its position; a new key is appended.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<V>) -> Option<V> {
        let key = key.into();
        let value = value.into();
        match self.get_mut(&key) {
            Some(slot) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Removes `key`, returning its value or [`MapError::KeyNotFound`].
    pub fn delete(&mut self, key: &str) -> Result<V, MapError> {
        self.remove(key).ok_or_else(|| MapError::KeyNotFound {
            key: key.to_string(),
        })
    }

    /// Removes `key` if present
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let index = self.position(key)?;
        Some(self.entries.remove(index).1)
    }

    /// Inserts a new entry at `index`.
    ///
    /// Negative indices are normalized to `len + 1 + index`, so `-1` appends
    /// and `-2` places the entry before the current last one. An index at or
    /// past the end appends.
    ///
    /// # Errors
    ///
    /// - [`MapError::IndexOutOfRange`] if the normalized index is negative
    /// - [`MapError::DuplicateKey`] if `key` is already present
    pub fn insert(
        &mut self,
        index: isize,
        key: impl Into<String>,
        value: impl Into<V>,
    ) -> Result<(), MapError> {
        let len = self.entries.len();
        let normalized = if index < 0 {
            len as isize + 1 + index
        } else {
            index
        };
        if normalized < 0 {
            return Err(MapError::IndexOutOfRange { index, len });
        }

        let key = key.into();
        if self.contains_key(&key) {
            return Err(MapError::DuplicateKey { key });
        }

        let at = (normalized as usize).min(len);
        let tail = self.entries.split_off(at);
        self.entries.push((key, value.into()));
        self.entries.extend(tail);
        Ok(())
    }

    /// Inserts a new entry at the front of the map.
    pub fn unshift(&mut self, key: impl Into<String>, value: impl Into<V>) -> Result<(), MapError> {
        self.insert(0, key, value)
    }

    /// Inserts a new entry immediately before the entry matched by `anchor`.
    ///
    /// # Errors
    ///
    /// - [`MapError::AnchorNotFound`] if no entry matches
    /// - [`MapError::DuplicateKey`] if `key` is already present
    pub fn insert_before<'a>(
        &mut self,
        anchor: impl Into<Anchor<'a, V>>,
        key: impl Into<String>,
        value: impl Into<V>,
    ) -> Result<(), MapError>
    where
        V: 'a,
    {
        let index = self.locate(&anchor.into())?;
        self.insert_at_anchor(index, key.into(), value.into())
    }

    /// Inserts a new entry immediately after the entry matched by `anchor`.
    ///
    /// Errors as [`OrderedMap::insert_before`].
    pub fn insert_after<'a>(
        &mut self,
        anchor: impl Into<Anchor<'a, V>>,
        key: impl Into<String>,
        value: impl Into<V>,
    ) -> Result<(), MapError>
    where
        V: 'a,
    {
        let index = self.locate(&anchor.into())?;
        self.insert_at_anchor(index + 1, key.into(), value.into())
    }

    fn locate(&self, anchor: &Anchor<'_, V>) -> Result<usize, MapError> {
        let found = match anchor {
            Anchor::Key(key) => self.position(key),
            Anchor::Predicate(predicate) => {
                self.entries.iter().position(|(k, v)| predicate(k, v))
            }
        };
        found.ok_or_else(|| MapError::AnchorNotFound {
            anchor: anchor.describe(),
        })
    }

    fn insert_at_anchor(&mut self, index: usize, key: String, value: V) -> Result<(), MapError> {
        if self.contains_key(&key) {
            return Err(MapError::DuplicateKey { key });
        }
        self.entries.insert(index, (key, value));
        Ok(())
    }

    /// Applies `transform` to every key without moving any entry.
    ///
    /// Keys for which `transform` returns the same string are untouched. If
    /// two keys collapse onto the same name, the later value replaces the
    /// earlier one at the earlier position, matching [`OrderedMap::set`].
    pub fn rename_keys(&mut self, mut transform: impl FnMut(&str) -> String) {
        let entries = std::mem::take(&mut self.entries);
        self.entries.reserve(entries.len());
        for (key, value) in entries {
            let renamed = transform(&key);
            let key = if renamed == key { key } else { renamed };
            self.set(key, value);
        }
    }

    /// Keeps only the entries for which `keep` returns true
    pub fn retain(&mut self, mut keep: impl FnMut(&str, &V) -> bool) {
        self.entries.retain(|(k, v)| keep(k, v));
    }

    /// Iterates over the keys in order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Iterates over the values in order
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Iterates mutably over the values in order
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut V> {
        self.entries.iter_mut().map(|(_, v)| v)
    }

    /// Iterates over `(key, value)` pairs in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterates over `(key, value)` pairs in order with mutable values
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut V)> {
        self.entries.iter_mut().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the first entry
    pub fn first(&self) -> Option<(&str, &V)> {
        self.entries.first().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the last entry
    pub fn last(&self) -> Option<(&str, &V)> {
        self.entries.last().map(|(k, v)| (k.as_str(), v))
    }
}

impl<V: Clone> OrderedMap<V> {
    /// Returns a new map with `other` merged over `self`.
    ///
    /// Conflicting keys take `other`'s value at `self`'s position; keys only
    /// in `other` are appended in `other`'s order.
    pub fn merge(&self, other: &OrderedMap<V>) -> Self {
        let mut merged = self.clone();
        merged.merge_into(other);
        merged
    }

    /// Merges `other` into `self` in place. See [`OrderedMap::merge`].
    pub fn merge_into(&mut self, other: &OrderedMap<V>) {
        for (key, value) in other.iter() {
            self.set(key, value.clone());
        }
    }

    /// Like [`OrderedMap::merge`], resolving conflicts with `combine`.
    ///
    /// `combine` receives `(key, own_value, other_value)` and its result is
    /// stored at the existing position.
    pub fn merge_with(
        &self,
        other: &OrderedMap<V>,
        combine: impl FnMut(&str, &V, &V) -> V,
    ) -> Self {
        let mut merged = self.clone();
        merged.merge_into_with(other, combine);
        merged
    }

    /// In-place form of [`OrderedMap::merge_with`].
    pub fn merge_into_with(
        &mut self,
        other: &OrderedMap<V>,
        mut combine: impl FnMut(&str, &V, &V) -> V,
    ) {
        for (key, theirs) in other.iter() {
            match self.get_mut(key) {
                Some(ours) => {
                    let combined = combine(key, ours, theirs);
                    *ours = combined;
                }
                None => {
                    self.entries.push((key.to_string(), theirs.clone()));
                }
            }
        }
    }
}

impl OrderedMap<Value> {
    /// Deletes every entry whose value is null or an empty list.
    pub fn remove_empties(&mut self) {
        self.entries.retain(|(_, v)| !v.is_empty_value());
    }
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for OrderedMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(k, v)| (k, v)))
            .finish()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for OrderedMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = OrderedMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Into<String>, V> Extend<(K, V)> for OrderedMap<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl<V> IntoIterator for OrderedMap<V> {
    type Item = (String, V);
    type IntoIter = std::vec::IntoIter<(String, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a OrderedMap<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = Box<dyn Iterator<Item = (&'a str, &'a V)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

impl<V: Serialize> Serialize for OrderedMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedMapVisitor<V>(std::marker::PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedMapVisitor<V> {
            type Value = OrderedMap<V>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut map = OrderedMap::with_capacity(access.size_hint().unwrap_or(0));
                // Duplicate keys follow `set`: last value, first position.
                while let Some((key, value)) = access.next_entry::<String, V>()? {
                    map.set(key, value);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(OrderedMapVisitor(std::marker::PhantomData))
    }
}
