//! Ordered parameter map for custom properties.
//!
//! This module provides [`ParamMap`], a wrapper around [`IndexMap`] that keeps
//! parameters in insertion order. Parameter order is visible in the rendered
//! line, so a hash map would make output nondeterministic.
//!
//! ## Examples
//!
//! ```rust
//! use vcard3::ParamMap;
//!
//! let mut params = ParamMap::new();
//! params.insert("type", "work");
//! params.insert("pref", "1");
//!
//! let keys: Vec<_> = params.keys().map(String::as_str).collect();
//! assert_eq!(keys, vec!["type", "pref"]);
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An insertion-ordered map of parameter names to parameter values.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParamMap(IndexMap<String, String>);

impl ParamMap {
    /// Creates an empty `ParamMap`.
    #[must_use]
    pub fn new() -> Self {
        ParamMap(IndexMap::new())
    }

    /// Creates an empty `ParamMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        ParamMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a parameter.
    ///
    /// If the key was already present its value is replaced in place, keeping
    /// the original position, and the old value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vcard3::ParamMap;
    ///
    /// let mut params = ParamMap::new();
    /// assert!(params.insert("type", "home").is_none());
    /// assert_eq!(params.insert("type", "work").as_deref(), Some("home"));
    /// ```
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when no parameters are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, String> {
        self.0.keys()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, String> {
        self.0.iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ParamMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        ParamMap(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl From<HashMap<String, String>> for ParamMap {
    /// Converts from a `HashMap`. Iteration order of the source is unspecified,
    /// so keys are sorted to keep output stable.
    fn from(map: HashMap<String, String>) -> Self {
        let mut entries: Vec<_> = map.into_iter().collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        ParamMap(entries.into_iter().collect())
    }
}

impl IntoIterator for ParamMap {
    type Item = (String, String);
    type IntoIter = indexmap::map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ParamMap {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
