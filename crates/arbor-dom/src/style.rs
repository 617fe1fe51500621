//! Inline styles
//!
//! Per-element style declaration map. Empty property names or values
//! are ignored on write, matching the lenient host utilities.

use std::collections::HashMap;

/// Inline style declaration map
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleMap {
    declarations: HashMap<String, String>,
}

impl StyleMap {
    /// Create empty style map
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a style property; empty property or value is a no-op
    pub fn set(&mut self, property: &str, value: &str) {
        if !property.is_empty() && !value.is_empty() {
            self.declarations.insert(property.to_string(), value.to_string());
        }
    }

    /// Get a style property value
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations.get(property).map(|s| s.as_str())
    }

    /// Remove a style property, returns whether it existed
    pub fn remove(&mut self, property: &str) -> bool {
        self.declarations.remove(property).is_some()
    }

    /// Number of declarations
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Check if the map is empty
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Iterate over declarations
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.declarations.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
