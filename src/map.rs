//! Ordered entries of a variables file.
//!
//! [`Entry`] is one `KEY="VALUE"` line. [`VarMap`] is a whole document: a
//! wrapper around [`IndexMap`] that keeps entries in the order they were read,
//! so writing a parsed document reproduces its lines.
//!
//! Values stay raw. The typed accessors convert on demand and never cache.
//!
//! ## Examples
//!
//! ```rust
//! use serde_vars::VarMap;
//!
//! let mut vars = VarMap::new();
//! vars.insert("GOOS".to_string(), "linux".to_string());
//! vars.insert("CGO_ENABLED".to_string(), "1".to_string());
//!
//! assert_eq!(vars.get("GOOS"), Some("linux"));
//! assert_eq!(vars.get_bool("CGO_ENABLED").unwrap(), Some(true));
//! assert_eq!(vars.get_bool("MISSING").unwrap(), None);
//! ```

use crate::convert::{convert, parse_bool};
use crate::float::parse_float;
use crate::{Kind, Result, VarValue};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// One `KEY="VALUE"` line: a key and its raw, unconverted value.
///
/// # Examples
///
/// ```rust
/// use serde_vars::Entry;
///
/// let entry = Entry::new("GOARCH", "amd64");
/// assert_eq!(entry.to_string(), "GOARCH=\"amd64\"");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Entry {
    pub key: String,
    pub value: String,
}

impl Entry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Entry {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}=\"{}\"", self.key, self.value)
    }
}

/// Byte offset of the first character that keeps `key` from being an
/// identifier (`[A-Za-z_][A-Za-z0-9_]*`), or `None` if it is one.
pub(crate) fn invalid_key_offset(key: &str) -> Option<usize> {
    let mut chars = key.char_indices();
    match chars.next() {
        None => return Some(0),
        Some((_, c)) if c.is_ascii_alphabetic() || c == '_' => {}
        Some((i, _)) => return Some(i),
    }
    chars
        .find(|(_, c)| !(c.is_ascii_alphanumeric() || *c == '_'))
        .map(|(i, _)| i)
}

/// An insertion-ordered map from keys to raw values.
///
/// # Examples
///
/// ```rust
/// use serde_vars::VarMap;
///
/// let mut vars = VarMap::new();
/// vars.insert("first".to_string(), "1".to_string());
/// vars.insert("second".to_string(), "2".to_string());
///
/// let keys: Vec<_> = vars.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VarMap(IndexMap<String, String>);

impl VarMap {
    /// Creates an empty `VarMap`.
    #[must_use]
    pub fn new() -> Self {
        VarMap(IndexMap::new())
    }

    /// Creates an empty `VarMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        VarMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the value is replaced in place
    /// and the old value is returned; the key keeps its original position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_vars::VarMap;
    ///
    /// let mut vars = VarMap::new();
    /// assert!(vars.insert("CC".to_string(), "gcc".to_string()).is_none());
    /// assert_eq!(vars.insert("CC".to_string(), "clang".to_string()).as_deref(), Some("gcc"));
    /// ```
    pub fn insert(&mut self, key: String, value: String) -> Option<String> {
        self.0.insert(key, value)
    }

    /// Returns the raw value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Returns `true` if the map contains `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Converts the value for `key` with [`parse_bool`].
    ///
    /// # Errors
    ///
    /// Returns the conversion error when the key is present but its value is
    /// not a canonical boolean spelling.
    pub fn get_bool(&self, key: &str) -> Result<Option<bool>> {
        self.get(key).map(parse_bool).transpose()
    }

    /// Converts the value for `key` with [`parse_float`].
    ///
    /// # Errors
    ///
    /// Returns the conversion error when the key is present but its value is
    /// not a valid numeral, or overflows (the error then carries `±Inf`).
    pub fn get_float(&self, key: &str) -> Result<Option<f64>> {
        self.get(key).map(parse_float).transpose()
    }

    /// Converts the value for `key` to the requested [`Kind`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_vars::{Kind, VarMap, VarValue};
    ///
    /// let mut vars = VarMap::new();
    /// vars.insert("RATIO".to_string(), "625e-3".to_string());
    /// assert_eq!(vars.get_as("RATIO", Kind::Float).unwrap(), Some(VarValue::Float(0.625)));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns the conversion error when the key is present but cannot be
    /// converted.
    pub fn get_as(&self, key: &str, kind: Kind) -> Result<Option<VarValue>> {
        self.get(key).map(|raw| convert(raw, kind)).transpose()
    }

    /// Removes `key`, preserving the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.shift_remove(key)
    }

    /// Returns the number of entries in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, String> {
        self.0.keys()
    }

    /// Returns an iterator over the raw values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, String> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, String> {
        self.0.iter()
    }

    /// Returns the entries of the map as owned [`Entry`] values, in order.
    pub fn entries(&self) -> impl Iterator<Item = Entry> + '_ {
        self.0.iter().map(|(k, v)| Entry::new(k.as_str(), v.as_str()))
    }
}

impl From<HashMap<String, String>> for VarMap {
    fn from(map: HashMap<String, String>) -> Self {
        VarMap(map.into_iter().collect())
    }
}

impl From<VarMap> for HashMap<String, String> {
    fn from(map: VarMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for VarMap {
    type Item = (String, String);
    type IntoIter = indexmap::map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a VarMap {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, String)> for VarMap {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        VarMap(IndexMap::from_iter(iter))
    }
}

impl FromIterator<Entry> for VarMap {
    fn from_iter<T: IntoIterator<Item = Entry>>(iter: T) -> Self {
        iter.into_iter().map(|e| (e.key, e.value)).collect()
    }
}

impl Serialize for VarMap {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.0.iter())
    }
}

impl<'de> Deserialize<'de> for VarMap {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        IndexMap::<String, String>::deserialize(deserializer).map(VarMap)
    }
}
