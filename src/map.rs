//! Ordered map type for config sections.
//!
//! This module provides [`Section`], a wrapper around [`IndexMap`] that maintains
//! insertion order for section entries. A section written as `{b=1 a=2}` iterates
//! `b` before `a`, and the stringifier reproduces that order unless asked to sort
//! (see [`KeyOrder`](crate::KeyOrder)).
//!
//! Keys are unique. Inserting a key that is already present replaces its value in
//! place, which is how the parser implements "last write wins" for duplicate keys.
//!
//! ## Examples
//!
//! ```rust
//! use serde_cfg::{Section, Value};
//!
//! let mut section = Section::new();
//! section.insert("name".to_string(), Value::from("server"));
//! section.insert("port".to_string(), Value::from(8080));
//!
//! assert_eq!(section.len(), 2);
//! assert_eq!(section.get("port").and_then(|v| v.as_int().ok()), Some(8080));
//! ```

use crate::Value;
use indexmap::IndexMap;
use std::collections::{BTreeMap, HashMap};

/// An insertion-ordered map of string keys to config values.
///
/// # Examples
///
/// ```rust
/// use serde_cfg::{Section, Value};
///
/// let mut section = Section::new();
/// section.insert("first".to_string(), Value::from(1));
/// section.insert("second".to_string(), Value::from(2));
/// section.insert("first".to_string(), Value::from(3));
///
/// // The replaced key keeps its original position
/// let keys: Vec<_> = section.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// assert_eq!(section.get("first"), Some(&Value::Int(3)));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Section(IndexMap<String, Value>);

impl Section {
    /// Creates an empty `Section`.
    #[must_use]
    pub fn new() -> Self {
        Section(IndexMap::new())
    }

    /// Creates an empty `Section` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Section(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the section.
    ///
    /// If the section already contained this key, the value is replaced in place
    /// and the old value is returned.
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.0.get_mut(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Removes a key, preserving the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the section, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the section, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, Value> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the section, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> indexmap::map::IterMut<'_, String, Value> {
        self.0.iter_mut()
    }

    /// Returns the entries ordered by key instead of by insertion.
    #[must_use]
    pub fn sorted_entries(&self) -> Vec<(&String, &Value)> {
        let mut entries: Vec<_> = self.0.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

impl From<HashMap<String, Value>> for Section {
    fn from(map: HashMap<String, Value>) -> Self {
        Section(map.into_iter().collect())
    }
}

impl From<BTreeMap<String, Value>> for Section {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Section(map.into_iter().collect())
    }
}

impl From<Section> for HashMap<String, Value> {
    fn from(section: Section) -> Self {
        section.0.into_iter().collect()
    }
}

impl IntoIterator for Section {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Section {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Value)> for Section {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Section(IndexMap::from_iter(iter))
    }
}

impl Extend<(String, Value)> for Section {
    fn extend<T: IntoIterator<Item = (String, Value)>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}
