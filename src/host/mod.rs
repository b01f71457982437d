//! The UI runtime a mask is bound into.
//!
//! Bindings only need a handful of operations from the host: find the control
//! inside an element, read and write its text and selection, register
//! listeners and dispatch events. [`Host`] captures exactly that, and
//! [`Document`] implements it in memory.

mod document;
mod selection;

use std::fmt;
use std::rc::Rc;

pub use document::Document;
pub use selection::SelectionRange;

/// Opaque identifier for an element in a [`Host`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn as_raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for NodeId {
    #[inline]
    fn from(raw: u64) -> Self {
        Self::from_raw(raw)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What kind of element a node is, as far as target resolution cares.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Input,
    TextArea,
    ContentEditable,
    /// Anything else (a wrapper `div`, a component root, ...).
    Container,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Input,
    Change,
    KeyDown,
    KeyUp,
    Paste,
    Focus,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Backspace,
    Delete,
    /// The decimal key on the numeric keypad.
    KeypadDecimal,
    /// Arrows, Tab, Enter and every other key the masks ignore.
    Other,
}

/// An event delivered to listeners.
#[derive(Clone, Debug, PartialEq)]
pub struct Event {
    pub kind: EventKind,
    /// The key for keyboard events.
    pub key: Option<Key>,
    pub ctrl: bool,
    pub meta: bool,
    /// True for notifications raised by a binding rather than by the user.
    pub synthetic: bool,
    default_prevented: bool,
}

impl Event {
    /// A user-originated event.
    pub fn new(kind: EventKind) -> Self {
        Event {
            kind,
            key: None,
            ctrl: false,
            meta: false,
            synthetic: false,
            default_prevented: false,
        }
    }

    /// A keyboard event for `key`.
    pub fn key(kind: EventKind, key: Key) -> Self {
        Event {
            key: Some(key),
            ..Event::new(kind)
        }
    }

    /// A notification raised by a binding after it corrected the value.
    pub fn synthetic(kind: EventKind) -> Self {
        Event {
            synthetic: true,
            ..Event::new(kind)
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    /// Ask the host to skip its default action (e.g. inserting a typed key).
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Identifies a registered listener so it can be removed again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

/// An event callback. It receives the host so it can read and correct the
/// control it was registered on.
pub type Listener<H> = Rc<dyn Fn(&mut H, &mut Event)>;

/// The operations a binding needs from the UI runtime.
///
/// Text positions are character indices. Methods taking an unknown node are
/// no-ops (or return `None`/`false`).
pub trait Host: Sized + 'static {
    fn kind(&self, node: NodeId) -> Option<NodeKind>;

    /// Every node below `node`, in document order, excluding `node` itself.
    fn descendants(&self, node: NodeId) -> Vec<NodeId>;

    fn value(&self, node: NodeId) -> Option<String>;

    /// Replace the text of `node`. Like a browser, this moves the caret to the
    /// end of the new text.
    fn set_value(&mut self, node: NodeId, value: &str);

    fn selection(&self, node: NodeId) -> Option<SelectionRange>;

    /// Set the selection, clamped to the current text.
    fn set_selection(&mut self, node: NodeId, range: SelectionRange);

    fn is_focused(&self, node: NodeId) -> bool;

    /// Register `listener` for `kind` events on `node`. Returns `None` if the
    /// node does not exist.
    fn add_listener(
        &mut self,
        node: NodeId,
        kind: EventKind,
        listener: Listener<Self>,
    ) -> Option<ListenerId>;

    /// Returns true if the listener was registered and is now removed.
    fn remove_listener(&mut self, node: NodeId, id: ListenerId) -> bool;

    /// Deliver `event` to the listeners of `node`, synchronously and in
    /// registration order. Returns false if a listener prevented the default
    /// action.
    fn dispatch(&mut self, node: NodeId, event: Event) -> bool;
}
