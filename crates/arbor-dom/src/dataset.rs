//! Dataset (metadata store)
//!
//! Per-node string map for arbitrary auxiliary data, distinct from
//! generic attributes.

use std::collections::HashMap;

/// String map backing an element's dataset
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringMap {
    data: HashMap<String, String>,
}

impl StringMap {
    /// Create empty string map
    pub fn new() -> Self {
        Self::default()
    }

    /// Get value by key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(|s| s.as_str())
    }

    /// Set value by key, overwriting
    pub fn set(&mut self, key: &str, value: &str) {
        self.data.insert(key.to_string(), value.to_string());
    }

    /// Delete by key, returns whether it existed
    pub fn delete(&mut self, key: &str) -> bool {
        self.data.remove(key).is_some()
    }

    /// Check if key exists
    pub fn has(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the map is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get all keys
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(|s| s.as_str())
    }

    /// Iterate over entries
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.data.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
