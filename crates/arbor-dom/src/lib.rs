//! Arbor DOM - UI node tree
//!
//! Arena-based node tree with class lists, datasets, attributes,
//! inline styles, event listeners, and simple selector queries.

mod classlist;
mod dataset;
mod events;
mod node;
mod query;
mod style;
mod tree;
mod value;

pub use classlist::TokenList;
pub use dataset::StringMap;
pub use events::{Event, EventHandler, Listener};
pub use node::{Attribute, ElementData, Node, NodeData, TextData};
pub use query::SimpleSelector;
pub use style::StyleMap;
pub use tree::{Children, DomError, DomResult, Tree};
pub use value::PropValue;

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Sentinel for "no node"
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check if this ID refers to a node
    #[inline]
    pub fn is_valid(&self) -> bool {
        *self != Self::NONE
    }

    #[inline]
    pub(crate) fn index(&self) -> usize {
        self.0 as usize
    }
}
