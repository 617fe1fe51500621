//! Arbor View - declarative element construction
//!
//! Turns a typed configuration into a fully configured node attached
//! to a parent, and keeps a node's text in sync with a tracked value.

mod binding;
mod config;
mod factory;
mod registry;

pub use binding::{TextBinding, bind_text};
pub use config::{ElementConfig, IndexValue};
pub use factory::{
    apply_attributes, apply_classes, apply_data_sources, apply_index, apply_listeners,
    apply_properties, create,
};
pub use registry::{InvalidTagError, VALID_ELEMENTS, validate};

// The host environment types callers hold alongside this crate's API
pub use arbor_dom::{Event, EventHandler, NodeId, PropValue, Tree};
