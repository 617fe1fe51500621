//! Element configuration
//!
//! Typed configuration consumed once per factory call. Arbitrary named
//! properties live in a dedicated field rather than leftover keys.

use std::fmt;
use std::rc::Rc;

use arbor_dom::{Event, EventHandler, PropValue};

/// Position index: a number or a string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexValue {
    Number(i64),
    Text(String),
}

impl fmt::Display for IndexValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for IndexValue {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for IndexValue {
    fn from(n: i32) -> Self {
        Self::Number(n as i64)
    }
}

impl From<&str> for IndexValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for IndexValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// Configuration for one element, consumed by the factory.
///
/// Only `tag` is required; every other facet is optional and silently
/// skipped when absent or empty.
#[derive(Default)]
pub struct ElementConfig {
    /// Element tag; must be a recognized identifier
    pub tag: String,
    /// Space-separated class tokens
    pub classes: Option<String>,
    /// Position index, stored in the dataset under `index`
    pub index: Option<IndexValue>,
    /// Space-separated `key:value` dataset tokens
    pub data_sources: Option<String>,
    /// Generic attributes, applied in insertion order
    pub attributes: Vec<(String, String)>,
    /// Arbitrary named properties
    pub properties: Vec<(String, PropValue)>,
    /// Event listeners: event name and handler
    pub listeners: Vec<(String, EventHandler)>,
}

impl ElementConfig {
    /// Start a configuration for the given tag
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Set the space-separated class tokens
    pub fn classes(mut self, tokens: impl Into<String>) -> Self {
        self.classes = Some(tokens.into());
        self
    }

    /// Set the position index
    pub fn index(mut self, index: impl Into<IndexValue>) -> Self {
        self.index = Some(index.into());
        self
    }

    /// Set the space-separated `key:value` dataset tokens
    pub fn data_sources(mut self, tokens: impl Into<String>) -> Self {
        self.data_sources = Some(tokens.into());
        self
    }

    /// Add a generic attribute
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Add a named property
    pub fn prop(mut self, name: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.properties.push((name.into(), value.into()));
        self
    }

    /// Add an event listener
    pub fn on(mut self, event: impl Into<String>, handler: impl Fn(&Event) + 'static) -> Self {
        self.listeners.push((event.into(), Rc::new(handler)));
        self
    }
}

impl fmt::Debug for ElementConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementConfig")
            .field("tag", &self.tag)
            .field("classes", &self.classes)
            .field("index", &self.index)
            .field("data_sources", &self.data_sources)
            .field("attributes", &self.attributes)
            .field("properties", &self.properties)
            .field(
                "listeners",
                &self.listeners.iter().map(|(e, _)| e).collect::<Vec<_>>(),
            )
            .finish()
    }
}
