//! Extracted `"key: value"` lines and the key/value mapping built from them.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;

/// One extracted `"<key>: <value>"` line.
///
/// Lines are only constructed through [`SpecLine::bounded`], which enforces
/// that key and value are non-empty, differ from each other and stay under
/// the configured length bounds.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SpecLine {
    text: String,
    key_len: usize,
}

impl SpecLine {
    /// Build a line from already-normalized parts, or `None` when the pair is noise.
    ///
    /// Lengths are counted in characters and both bounds are exclusive.
    pub fn bounded(key: &str, value: &str, max_key_len: usize, max_value_len: usize) -> Option<Self> {
        if key.is_empty() || value.is_empty() || key == value {
            return None;
        }
        if key.chars().count() >= max_key_len || value.chars().count() >= max_value_len {
            return None;
        }
        Some(Self {
            text: format!("{}: {}", key, value),
            key_len: key.len(),
        })
    }

    pub fn key(&self) -> &str {
        &self.text[..self.key_len]
    }

    pub fn value(&self) -> &str {
        &self.text[self.key_len + 2..]
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl AsRef<str> for SpecLine {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for SpecLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl Serialize for SpecLine {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

/// Mapping from specification key to value for one page.
///
/// Keys are unique. Inserting an existing key replaces its value but keeps the
/// position where the key first appeared, so iteration follows page order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpecMap {
    entries: Vec<(String, String)>,
}

impl SpecMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a pair, returning the value it replaced.
    pub fn insert(&mut self, key: String, value: String) -> Option<String> {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Serialize for SpecMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// Turn extracted lines into a [`SpecMap`].
///
/// Each line is split at its first colon: the key is everything before it and
/// the value everything after it, untrimmed. A line without a colon becomes a
/// key with an empty value. Later duplicates overwrite earlier ones.
///
/// ```rust
/// use specsieve::to_map;
///
/// let map = to_map(["Weight: 250g", "Color: Black", "Weight: 300g"]);
/// assert_eq!(map.get("Weight"), Some(" 300g"));
/// assert_eq!(map.len(), 2);
/// ```
pub fn to_map<I, S>(lines: I) -> SpecMap
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut map = SpecMap::new();
    for line in lines {
        let line = line.as_ref();
        let (key, value) = match line.find(':') {
            Some(idx) => (&line[..idx], &line[idx + 1..]),
            None => (line, ""),
        };
        map.insert(key.to_string(), value.to_string());
    }
    map
}
