//! Arena tree
//!
//! Owns every node; parent/child edges are NodeId links. Nodes are
//! never freed, detaching only unlinks the edge.

use crate::{ElementData, Event, EventHandler, Listener, Node, NodeId, PropValue};

/// Result type for tree operations
pub type DomResult<T> = Result<T, DomError>;

/// Tree operation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("node not found")]
    NotFound,

    #[error("node is not a child of the given parent")]
    NotAChild,
}

/// Arena-based node tree
#[derive(Debug)]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Tree {
    /// Create a new tree containing only the root node
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::root()],
        }
    }

    /// Root node ID
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    /// Get element data for a node
    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id).and_then(Node::as_element)
    }

    /// Get mutable element data for a node
    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        self.get_mut(id).and_then(Node::as_element_mut)
    }

    /// Number of nodes in the arena (detached nodes included)
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree holds only the root
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Create a detached element node
    pub fn create_element(&mut self, tag: impl Into<String>) -> NodeId {
        self.push(Node::element(tag))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, content: impl Into<String>) -> NodeId {
        self.push(Node::text(content))
    }

    // ----- structure -----

    /// Append `child` as the last child of `parent`.
    ///
    /// Detaches `child` from its current parent first. Invalid IDs,
    /// self-appends, and appends that would make a node its own
    /// ancestor are ignored; the tree stays acyclic.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if parent == child
            || self.get(parent).is_none()
            || self.get(child).is_none()
            || self.is_inclusive_ancestor(child, parent)
        {
            return;
        }
        self.detach(child);

        let last = self.nodes[parent.index()].last_child;
        if last.is_valid() {
            self.nodes[last.index()].next_sibling = child;
            self.nodes[child.index()].prev_sibling = last;
        } else {
            self.nodes[parent.index()].first_child = child;
        }
        self.nodes[parent.index()].last_child = child;
        self.nodes[child.index()].parent = parent;
    }

    /// Remove `child` from `parent`, returning the detached node's ID
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId> {
        self.get(parent).ok_or(DomError::NotFound)?;
        let actual_parent = self.get(child).ok_or(DomError::NotFound)?.parent;
        if actual_parent != parent {
            return Err(DomError::NotAChild);
        }
        self.detach(child);
        Ok(child)
    }

    /// Check whether `node` is `descendant` or one of its ancestors
    fn is_inclusive_ancestor(&self, node: NodeId, descendant: NodeId) -> bool {
        let mut cursor = descendant;
        while cursor.is_valid() {
            if cursor == node {
                return true;
            }
            cursor = self.nodes[cursor.index()].parent;
        }
        false
    }

    /// Unlink a node from its parent and siblings
    fn detach(&mut self, id: NodeId) {
        let (parent, prev, next) = {
            let node = &self.nodes[id.index()];
            (node.parent, node.prev_sibling, node.next_sibling)
        };
        if !parent.is_valid() {
            return;
        }

        if prev.is_valid() {
            self.nodes[prev.index()].next_sibling = next;
        } else {
            self.nodes[parent.index()].first_child = next;
        }
        if next.is_valid() {
            self.nodes[next.index()].prev_sibling = prev;
        } else {
            self.nodes[parent.index()].last_child = prev;
        }

        let node = &mut self.nodes[id.index()];
        node.parent = NodeId::NONE;
        node.prev_sibling = NodeId::NONE;
        node.next_sibling = NodeId::NONE;
    }

    /// Iterate over the children of a node
    pub fn children(&self, parent: NodeId) -> Children<'_> {
        Children {
            tree: self,
            next: self.get(parent).map_or(NodeId::NONE, |n| n.first_child),
        }
    }

    /// Number of children of a node
    pub fn child_count(&self, parent: NodeId) -> usize {
        self.children(parent).count()
    }

    /// Check whether `node` is a direct child of `parent`
    pub fn contains(&self, parent: NodeId, node: NodeId) -> bool {
        self.get(node).is_some_and(|n| n.parent == parent)
    }

    /// Collect the IDs of `root` and all its descendants, preorder
    pub(crate) fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            out.push(id);
            // Push in reverse so the first child is visited first
            let children: Vec<NodeId> = self.children(id).collect();
            for child in children.into_iter().rev() {
                stack.push(child);
            }
        }
        out
    }

    // ----- text -----

    /// Concatenated text of a node and all its descendants
    pub fn text_content(&self, node: NodeId) -> String {
        let mut out = String::new();
        for id in self.descendants(node) {
            if let Some(text) = self.get(id).and_then(Node::as_text) {
                out.push_str(text);
            }
        }
        out
    }

    /// Replace a node's children with a single text node.
    ///
    /// On a text node, rewrites its content in place.
    pub fn set_text_content(&mut self, node: NodeId, text: &str) {
        let Some(n) = self.get_mut(node) else { return };
        if let crate::NodeData::Text(data) = &mut n.data {
            data.content = text.to_string();
            return;
        }
        while self.nodes[node.index()].first_child.is_valid() {
            let first = self.nodes[node.index()].first_child;
            self.detach(first);
        }
        let text_node = self.create_text(text);
        self.append_child(node, text_node);
    }

    // ----- attributes and properties -----

    /// Set an attribute. The `id` and `class` attributes reflect into
    /// the cached id and the class list.
    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        let Some(el) = self.element_mut(node) else { return };
        el.set_attr(name, value);
        match name {
            "id" => el.id = Some(value.to_string()),
            "class" => el.classes.set_value(value),
            _ => {}
        }
    }

    /// Get an attribute value
    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.element(node).and_then(|el| el.get_attr(name))
    }

    /// Remove an attribute, clearing the reflected state for `id`/`class`
    pub fn remove_attribute(&mut self, node: NodeId, name: &str) -> bool {
        let Some(el) = self.element_mut(node) else { return false };
        let removed = el.remove_attr(name);
        if removed {
            match name {
                "id" => el.id = None,
                "class" => el.classes.set_value(""),
                _ => {}
            }
        }
        removed
    }

    /// Assign a named property.
    ///
    /// Reflected keys mirror host property semantics: `id` sets the id
    /// attribute, `text` replaces the node's text content. Every other
    /// key lands verbatim in the element's property store.
    pub fn set_property(&mut self, node: NodeId, key: &str, value: PropValue) {
        match key {
            "id" => self.set_attribute(node, "id", &value.to_string()),
            "text" => self.set_text_content(node, &value.to_string()),
            _ => {
                if let Some(el) = self.element_mut(node) {
                    el.properties.insert(key.to_string(), value);
                }
            }
        }
    }

    /// Get a named property
    pub fn property(&self, node: NodeId, key: &str) -> Option<&PropValue> {
        self.element(node).and_then(|el| el.property(key))
    }

    // ----- classes -----

    /// Add a single class token
    pub fn add_class(&mut self, node: NodeId, class: &str) {
        if let Some(el) = self.element_mut(node) {
            el.classes.add(class);
        }
    }

    /// Add multiple class tokens
    pub fn add_classes(&mut self, node: NodeId, classes: &[&str]) {
        if let Some(el) = self.element_mut(node) {
            for class in classes {
                el.classes.add(class);
            }
        }
    }

    /// Remove multiple class tokens
    pub fn remove_classes(&mut self, node: NodeId, classes: &[&str]) {
        if let Some(el) = self.element_mut(node) {
            for class in classes {
                el.classes.remove(class);
            }
        }
    }

    /// Toggle a class token, returns the new membership state
    pub fn toggle_class(&mut self, node: NodeId, class: &str) -> bool {
        self.element_mut(node)
            .is_some_and(|el| el.classes.toggle(class))
    }

    /// Check class membership
    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.element(node).is_some_and(|el| el.classes.contains(class))
    }

    // ----- styles -----

    /// Set an inline style property; empty property or value is a no-op
    pub fn set_style(&mut self, node: NodeId, property: &str, value: &str) {
        if let Some(el) = self.element_mut(node) {
            el.style.set(property, value);
        }
    }

    /// Get an inline style property value
    pub fn style(&self, node: NodeId, property: &str) -> Option<&str> {
        self.element(node).and_then(|el| el.style.get(property))
    }

    /// Remove an inline style property
    pub fn remove_style(&mut self, node: NodeId, property: &str) -> bool {
        self.element_mut(node)
            .is_some_and(|el| el.style.remove(property))
    }

    // ----- events -----

    /// Register an event listener. Repeated registration adds
    /// independent listeners, no deduplication.
    pub fn add_event_listener(
        &mut self,
        node: NodeId,
        event: impl Into<String>,
        handler: EventHandler,
    ) {
        if let Some(el) = self.element_mut(node) {
            el.listeners.push(Listener::new(event, handler));
        }
    }

    /// Number of listeners registered on `node` for `event`
    pub fn listener_count(&self, node: NodeId, event: &str) -> usize {
        self.element(node)
            .map_or(0, |el| el.listeners.iter().filter(|l| l.event == event).count())
    }

    /// Dispatch an event to `node`, invoking every listener registered
    /// for its name in registration order. Returns the number invoked.
    pub fn dispatch(&self, node: NodeId, event: &str) -> usize {
        let Some(el) = self.element(node) else { return 0 };
        let handlers: Vec<EventHandler> = el
            .listeners
            .iter()
            .filter(|l| l.event == event)
            .map(|l| l.handler.clone())
            .collect();

        let ev = Event {
            name: event.to_string(),
            target: node,
        };
        for handler in &handlers {
            handler(&ev);
        }
        tracing::debug!(event, invoked = handlers.len(), "dispatched event");
        handlers.len()
    }
}

/// Iterator over a node's children
pub struct Children<'a> {
    tree: &'a Tree,
    next: NodeId,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        if !self.next.is_valid() {
            return None;
        }
        let current = self.next;
        self.next = self.tree.get(current).map_or(NodeId::NONE, |n| n.next_sibling);
        Some(current)
    }
}
