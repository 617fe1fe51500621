//! Element queries
//!
//! Lookup by id, class, tag, and simple selector (`*`, `tag`, `.class`,
//! `#id`).

use crate::{ElementData, NodeId, Tree};

/// Simple selector for matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleSelector {
    Universal,
    Tag(String),
    Class(String),
    Id(String),
}

impl SimpleSelector {
    /// Parse a simple selector string
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }

        if s == "*" {
            Some(Self::Universal)
        } else if let Some(id) = s.strip_prefix('#') {
            Some(Self::Id(id.to_string()))
        } else if let Some(class) = s.strip_prefix('.') {
            Some(Self::Class(class.to_string()))
        } else {
            Some(Self::Tag(s.to_lowercase()))
        }
    }

    /// Check whether an element matches this selector
    pub fn matches(&self, element: &ElementData) -> bool {
        match self {
            Self::Universal => true,
            Self::Tag(tag) => element.tag().eq_ignore_ascii_case(tag),
            Self::Class(class) => element.classes.contains(class),
            Self::Id(id) => element.id.as_deref() == Some(id),
        }
    }
}

impl Tree {
    fn find_all(&self, selector: &SimpleSelector) -> Vec<NodeId> {
        self.descendants(self.root())
            .into_iter()
            .filter(|&id| self.element(id).is_some_and(|el| selector.matches(el)))
            .collect()
    }

    fn find_first(&self, selector: &SimpleSelector) -> Option<NodeId> {
        self.descendants(self.root())
            .into_iter()
            .find(|&id| self.element(id).is_some_and(|el| selector.matches(el)))
    }

    /// Find an element by its id
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.find_first(&SimpleSelector::Id(id.to_string()))
    }

    /// Find all elements carrying a class
    pub fn get_elements_by_class_name(&self, class: &str) -> Vec<NodeId> {
        self.find_all(&SimpleSelector::Class(class.to_string()))
    }

    /// Find all elements of a tag
    pub fn get_elements_by_tag_name(&self, tag: &str) -> Vec<NodeId> {
        self.find_all(&SimpleSelector::Tag(tag.to_lowercase()))
    }

    /// Find the first element matching a simple selector
    pub fn query_selector(&self, selector: &str) -> Option<NodeId> {
        let selector = SimpleSelector::parse(selector)?;
        self.find_first(&selector)
    }

    /// Find all elements matching a simple selector
    pub fn query_selector_all(&self, selector: &str) -> Vec<NodeId> {
        match SimpleSelector::parse(selector) {
            Some(selector) => self.find_all(&selector),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(SimpleSelector::parse("*"), Some(SimpleSelector::Universal));
        assert_eq!(
            SimpleSelector::parse("#main"),
            Some(SimpleSelector::Id("main".to_string()))
        );
        assert_eq!(
            SimpleSelector::parse(".btn"),
            Some(SimpleSelector::Class("btn".to_string()))
        );
        assert_eq!(
            SimpleSelector::parse("DIV"),
            Some(SimpleSelector::Tag("div".to_string()))
        );
        assert_eq!(SimpleSelector::parse("  "), None);
    }

    #[test]
    fn test_query_by_id_and_class() {
        let mut tree = Tree::new();
        let div = tree.create_element("div");
        let span = tree.create_element("span");
        tree.append_child(tree.root(), div);
        tree.append_child(div, span);
        tree.set_attribute(span, "id", "inner");
        tree.add_class(div, "box");

        assert_eq!(tree.get_element_by_id("inner"), Some(span));
        assert_eq!(tree.get_element_by_id("missing"), None);
        assert_eq!(tree.get_elements_by_class_name("box"), vec![div]);
        assert_eq!(tree.query_selector("#inner"), Some(span));
        assert_eq!(tree.query_selector_all("*").len(), 2);
    }

    #[test]
    fn test_query_by_tag_document_order() {
        let mut tree = Tree::new();
        let a = tree.create_element("p");
        let b = tree.create_element("p");
        tree.append_child(tree.root(), a);
        tree.append_child(tree.root(), b);

        assert_eq!(tree.get_elements_by_tag_name("p"), vec![a, b]);
        assert_eq!(tree.query_selector("p"), Some(a));
    }
}
