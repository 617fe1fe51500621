//! Reactive text binding
//!
//! Couples one named value with a target node's text content. The
//! handle's explicit setter is the sole mutation path: the text update
//! happens before the value is committed, so the target never lags the
//! stored value.

use std::collections::HashMap;

use arbor_dom::{NodeId, PropValue, Tree};

/// Handle tracking one named value rendered as a node's text
#[derive(Debug)]
pub struct TextBinding {
    target: NodeId,
    name: String,
    value: PropValue,
    extra: HashMap<String, PropValue>,
}

/// Bind `name` to `target`'s text content, rendering `initial` at once
pub fn bind_text(
    tree: &mut Tree,
    target: NodeId,
    name: impl Into<String>,
    initial: impl Into<PropValue>,
) -> TextBinding {
    let name = name.into();
    let initial = initial.into();
    tree.set_text_content(target, &initial.to_string());
    tracing::debug!(%name, ?target, "bound text");
    TextBinding {
        target,
        name,
        value: initial,
        extra: HashMap::new(),
    }
}

impl TextBinding {
    /// Write a named value through the binding.
    ///
    /// A write to the bound name updates the target's text first, then
    /// commits the value. Writes to any other name are stored but never
    /// touch the target.
    pub fn set(&mut self, tree: &mut Tree, name: &str, value: impl Into<PropValue>) {
        let value = value.into();
        if name == self.name {
            tree.set_text_content(self.target, &value.to_string());
            self.value = value;
        } else {
            self.extra.insert(name.to_string(), value);
        }
    }

    /// Current value of the bound name
    pub fn value(&self) -> &PropValue {
        &self.value
    }

    /// Read any stored value by name
    pub fn get(&self, name: &str) -> Option<&PropValue> {
        if name == self.name {
            Some(&self.value)
        } else {
            self.extra.get(name)
        }
    }

    /// The bound variable name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The target node
    pub fn target(&self) -> NodeId {
        self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_value_rendered() {
        let mut tree = Tree::new();
        let node = tree.create_element("div");
        tree.append_child(tree.root(), node);

        let binding = bind_text(&mut tree, node, "text", "Hello");
        assert_eq!(tree.text_content(node), "Hello");
        assert_eq!(binding.value(), &PropValue::from("Hello"));
    }

    #[test]
    fn test_write_updates_text_and_value() {
        let mut tree = Tree::new();
        let node = tree.create_element("div");
        tree.append_child(tree.root(), node);

        let mut binding = bind_text(&mut tree, node, "text", "Hello");
        binding.set(&mut tree, "text", "World");

        assert_eq!(tree.text_content(node), "World");
        assert_eq!(binding.value(), &PropValue::from("World"));
    }

    #[test]
    fn test_other_names_stored_but_inert() {
        let mut tree = Tree::new();
        let node = tree.create_element("div");
        tree.append_child(tree.root(), node);

        let mut binding = bind_text(&mut tree, node, "count", 1);
        binding.set(&mut tree, "label", "ignored");

        assert_eq!(tree.text_content(node), "1");
        assert_eq!(binding.get("label"), Some(&PropValue::from("ignored")));
        assert_eq!(binding.value(), &PropValue::from(1));
    }

    #[test]
    fn test_sequential_writes() {
        let mut tree = Tree::new();
        let node = tree.create_element("span");
        tree.append_child(tree.root(), node);

        let mut binding = bind_text(&mut tree, node, "count", 0);
        for n in 1..=5 {
            binding.set(&mut tree, "count", n);
            assert_eq!(tree.text_content(node), n.to_string());
            assert_eq!(binding.value(), &PropValue::from(n));
        }
    }
}
