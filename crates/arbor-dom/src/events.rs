//! Events
//!
//! String-keyed listener registration and synchronous dispatch.

use std::fmt;
use std::rc::Rc;

use crate::NodeId;

/// A dispatched event
#[derive(Debug, Clone)]
pub struct Event {
    /// Event name (e.g. "click")
    pub name: String,
    /// Node the event was dispatched on
    pub target: NodeId,
}

/// Handler invoked when a matching event is dispatched
pub type EventHandler = Rc<dyn Fn(&Event)>;

/// A registered listener: event name plus handler
#[derive(Clone)]
pub struct Listener {
    pub event: String,
    pub handler: EventHandler,
}

impl Listener {
    pub fn new(event: impl Into<String>, handler: EventHandler) -> Self {
        Self {
            event: event.into(),
            handler,
        }
    }
}

impl fmt::Debug for Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listener").field("event", &self.event).finish()
    }
}
