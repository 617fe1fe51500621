//! Tree nodes
//!
//! Compact node representation: sibling/child links by NodeId instead
//! of pointers, node-specific data behind an enum discriminant.

use std::collections::HashMap;

use crate::{Listener, NodeId, PropValue, StringMap, StyleMap, TokenList};

/// A node in the arena tree
#[derive(Debug)]
pub struct Node {
    /// Parent node (NONE if detached or root)
    pub parent: NodeId,
    /// First child
    pub first_child: NodeId,
    /// Last child (for O(1) append)
    pub last_child: NodeId,
    /// Previous sibling
    pub prev_sibling: NodeId,
    /// Next sibling
    pub next_sibling: NodeId,
    /// Node-specific data
    pub data: NodeData,
}

impl Node {
    fn detached(data: NodeData) -> Self {
        Self {
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            prev_sibling: NodeId::NONE,
            next_sibling: NodeId::NONE,
            data,
        }
    }

    /// Create a new element node
    pub fn element(tag: impl Into<String>) -> Self {
        Self::detached(NodeData::Element(ElementData::new(tag)))
    }

    /// Create a new text node
    pub fn text(content: impl Into<String>) -> Self {
        Self::detached(NodeData::Text(TextData {
            content: content.into(),
        }))
    }

    /// Create a root node
    pub fn root() -> Self {
        Self::detached(NodeData::Root)
    }

    /// Check if this is an element
    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element(_))
    }

    /// Check if this is text
    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self.data, NodeData::Text(_))
    }

    /// Get element data if this is an element
    #[inline]
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get mutable element data
    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get text content if this is a text node
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(t) => Some(&t.content),
            _ => None,
        }
    }
}

/// Node-specific data
#[derive(Debug)]
pub enum NodeData {
    /// Tree root (not an element)
    Root,
    /// Element
    Element(ElementData),
    /// Text content
    Text(TextData),
}

/// Element-specific data
#[derive(Debug, Default)]
pub struct ElementData {
    /// Tag name; immutable once created
    tag: String,
    /// Cached id attribute (very common lookup)
    pub id: Option<String>,
    /// Class token list
    pub classes: TokenList,
    /// Generic attributes, in insertion order
    pub attrs: Vec<Attribute>,
    /// Dataset (metadata store)
    pub dataset: StringMap,
    /// Inline style declarations
    pub style: StyleMap,
    /// Arbitrary named properties
    pub properties: HashMap<String, PropValue>,
    /// Registered event listeners, in registration order
    pub listeners: Vec<Listener>,
}

impl ElementData {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Tag name
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Get an attribute value
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Set an attribute, overwriting any existing value
    pub fn set_attr(&mut self, name: &str, value: &str) {
        for attr in self.attrs.iter_mut() {
            if attr.name == name {
                attr.value = value.to_string();
                return;
            }
        }
        self.attrs.push(Attribute {
            name: name.to_string(),
            value: value.to_string(),
        });
    }

    /// Remove an attribute, returns whether it existed
    pub fn remove_attr(&mut self, name: &str) -> bool {
        let before = self.attrs.len();
        self.attrs.retain(|a| a.name != name);
        self.attrs.len() != before
    }

    /// Get a named property
    pub fn property(&self, key: &str) -> Option<&PropValue> {
        self.properties.get(key)
    }
}

/// Text node data
#[derive(Debug)]
pub struct TextData {
    pub content: String,
}

/// Attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_attr_overwrites() {
        let mut el = ElementData::new("div");
        el.set_attr("title", "a");
        el.set_attr("title", "b");
        assert_eq!(el.get_attr("title"), Some("b"));
        assert_eq!(el.attrs.len(), 1);
    }

    #[test]
    fn test_remove_attr() {
        let mut el = ElementData::new("div");
        el.set_attr("role", "button");
        assert!(el.remove_attr("role"));
        assert!(!el.remove_attr("role"));
        assert_eq!(el.get_attr("role"), None);
    }

    #[test]
    fn test_node_kinds() {
        assert!(Node::element("div").is_element());
        assert!(Node::text("hi").is_text());
        assert_eq!(Node::text("hi").as_text(), Some("hi"));
        assert!(!Node::root().is_element());
    }
}
