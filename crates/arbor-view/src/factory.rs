//! Element factory
//!
//! Validates the tag, creates the node, applies each configured facet
//! in a fixed order, then attaches the node to its parent.
//!
//! Application order: classes, index, data sources, attributes,
//! properties, event listeners, attach. Attachment is last so a
//! partially configured node is never observable as a child. Later
//! facets may overwrite state set by earlier ones.

use arbor_dom::{EventHandler, NodeId, PropValue, Tree};

use crate::config::{ElementConfig, IndexValue};
use crate::registry::{self, InvalidTagError};

/// Reserved dataset key for the position index
const INDEX_KEY: &str = "index";

/// Create a fully configured element and append it to `parent`.
///
/// Fails with [`InvalidTagError`] before any node is created; on
/// failure the parent's children are untouched. No other facet fails:
/// malformed dataset tokens are skipped silently.
pub fn create(
    tree: &mut Tree,
    parent: NodeId,
    config: ElementConfig,
) -> Result<NodeId, InvalidTagError> {
    let tag = registry::validate(&config.tag)?;
    let node = tree.create_element(tag);

    apply_classes(tree, node, config.classes.as_deref());
    apply_index(tree, node, config.index.as_ref());
    apply_data_sources(tree, node, config.data_sources.as_deref());
    apply_attributes(tree, node, &config.attributes);
    apply_properties(tree, node, config.properties);
    apply_listeners(tree, node, config.listeners);

    tree.append_child(parent, node);
    tracing::debug!(tag, ?node, "created element");
    Ok(node)
}

/// Add space-separated class tokens to the node's class set.
///
/// Union semantics: empty tokens dropped, existing classes kept,
/// duplicates ignored.
pub fn apply_classes(tree: &mut Tree, node: NodeId, tokens: Option<&str>) {
    let Some(tokens) = tokens else { return };
    for token in tokens.split_whitespace() {
        tree.add_class(node, token);
    }
}

/// Store the position index in the dataset under `index`.
///
/// A numeric index is always applied, including 0. An empty string
/// carries no value and is skipped.
pub fn apply_index(tree: &mut Tree, node: NodeId, index: Option<&IndexValue>) {
    let Some(index) = index else { return };
    if let IndexValue::Text(s) = index {
        if s.is_empty() {
            return;
        }
    }
    if let Some(el) = tree.element_mut(node) {
        el.dataset.set(INDEX_KEY, &index.to_string());
    }
}

/// Write space-separated `key:value` tokens into the node's dataset.
///
/// Each token splits once on `:`; a token is applied only when both
/// key and value are non-empty. Malformed tokens are skipped, never an
/// error.
pub fn apply_data_sources(tree: &mut Tree, node: NodeId, tokens: Option<&str>) {
    let Some(tokens) = tokens else { return };
    let Some(el) = tree.element_mut(node) else { return };
    for token in tokens.split_whitespace() {
        if let Some((key, value)) = token.split_once(':') {
            if !key.is_empty() && !value.is_empty() {
                el.dataset.set(key, value);
            }
        }
    }
}

/// Set each pair verbatim as a generic attribute, overwriting
pub fn apply_attributes(tree: &mut Tree, node: NodeId, attributes: &[(String, String)]) {
    for (name, value) in attributes {
        tree.set_attribute(node, name, value);
    }
}

/// Assign each pair as a named property on the node.
///
/// Reflected keys (`id`, `text`) overwrite node state set by earlier
/// facets; see [`Tree::set_property`].
pub fn apply_properties(tree: &mut Tree, node: NodeId, properties: Vec<(String, PropValue)>) {
    for (key, value) in properties {
        tree.set_property(node, &key, value);
    }
}

/// Register each handler against the node for its event name.
///
/// No deduplication: repeated entries register independent handlers.
pub fn apply_listeners(tree: &mut Tree, node: NodeId, listeners: Vec<(String, EventHandler)>) {
    for (event, handler) in listeners {
        tree.add_event_listener(node, event, handler);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_classes_union() {
        let mut tree = Tree::new();
        let node = tree.create_element("div");
        tree.add_class(node, "existing");

        apply_classes(&mut tree, node, Some("a  b"));
        let el = tree.element(node).unwrap();
        assert!(el.classes.contains("existing"));
        assert!(el.classes.contains("a"));
        assert!(el.classes.contains("b"));
        assert_eq!(el.classes.len(), 3);
    }

    #[test]
    fn test_apply_classes_idempotent() {
        let mut tree = Tree::new();
        let node = tree.create_element("div");

        apply_classes(&mut tree, node, Some("a b"));
        apply_classes(&mut tree, node, Some("a b"));
        assert_eq!(tree.element(node).unwrap().classes.len(), 2);
    }

    #[test]
    fn test_apply_index_zero_is_kept() {
        let mut tree = Tree::new();
        let node = tree.create_element("li");

        apply_index(&mut tree, node, Some(&IndexValue::Number(0)));
        assert_eq!(tree.element(node).unwrap().dataset.get("index"), Some("0"));
    }

    #[test]
    fn test_apply_index_empty_string_skipped() {
        let mut tree = Tree::new();
        let node = tree.create_element("li");

        apply_index(&mut tree, node, Some(&IndexValue::Text(String::new())));
        apply_index(&mut tree, node, None);
        assert!(tree.element(node).unwrap().dataset.is_empty());
    }

    #[test]
    fn test_apply_data_sources_skips_malformed() {
        let mut tree = Tree::new();
        let node = tree.create_element("div");

        apply_data_sources(&mut tree, node, Some("k: v: nocolon ok:1"));
        let el = tree.element(node).unwrap();
        assert_eq!(el.dataset.len(), 1);
        assert_eq!(el.dataset.get("ok"), Some("1"));
    }

    #[test]
    fn test_apply_data_sources_value_keeps_extra_colons() {
        let mut tree = Tree::new();
        let node = tree.create_element("div");

        apply_data_sources(&mut tree, node, Some("href:https://example.com"));
        assert_eq!(
            tree.element(node).unwrap().dataset.get("href"),
            Some("https://example.com")
        );
    }
}
