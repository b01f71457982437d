//! In-memory host.
//!
//! Holds an element tree with text values, selections, focus and listeners,
//! and replays user edits with the same event order a browser uses:
//! `keydown`, the edit itself, `input`, then `keyup`.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use super::{Event, EventKind, Host, Key, Listener, ListenerId, NodeId, NodeKind, SelectionRange};

struct NodeData {
    kind: NodeKind,
    children: Vec<NodeId>,
    value: String,
    selection: SelectionRange,
    listeners: Vec<(ListenerId, EventKind, Listener<Document>)>,
}

impl NodeData {
    fn new(kind: NodeKind) -> Self {
        NodeData {
            kind,
            children: Vec::new(),
            value: String::new(),
            selection: SelectionRange::default(),
            listeners: Vec::new(),
        }
    }
}

/// An element tree held in memory.
///
/// # Example
///
/// ```
/// use inputmask::host::{Document, Host, NodeKind};
///
/// let mut doc = Document::new();
/// let input = doc.create(NodeKind::Input);
/// doc.focus(input);
/// doc.type_text(input, "hello");
///
/// assert_eq!(doc.value(input).as_deref(), Some("hello"));
/// ```
#[derive(Default)]
pub struct Document {
    nodes: HashMap<NodeId, NodeData>,
    focused: Option<NodeId>,
    next_node: u64,
    next_listener: u64,
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("nodes", &self.nodes.len())
            .field("focused", &self.focused)
            .finish()
    }
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detached node.
    pub fn create(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId::from_raw(self.next_node);
        self.next_node += 1;
        self.nodes.insert(id, NodeData::new(kind));
        id
    }

    /// Create a node as the last child of `parent`.
    ///
    /// If `parent` does not exist the node is created detached.
    pub fn append(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let id = self.create(kind);
        if let Some(parent) = self.nodes.get_mut(&parent) {
            parent.children.push(id);
        }
        id
    }

    /// Number of listeners currently registered on `node`.
    pub fn listener_count(&self, node: NodeId) -> usize {
        self.nodes.get(&node).map_or(0, |n| n.listeners.len())
    }

    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    /// Give `node` focus and fire `focus` on it.
    pub fn focus(&mut self, node: NodeId) {
        if !self.nodes.contains_key(&node) {
            return;
        }
        self.focused = Some(node);
        self.dispatch(node, Event::new(EventKind::Focus));
    }

    pub fn blur(&mut self) {
        self.focused = None;
    }

    /// Type `text` one character at a time at the current selection.
    pub fn type_text(&mut self, node: NodeId, text: &str) {
        for c in text.chars() {
            if !self.dispatch(node, Event::key(EventKind::KeyDown, Key::Char(c))) {
                self.dispatch(node, Event::key(EventKind::KeyUp, Key::Char(c)));
                continue;
            }
            let mut buf = [0u8; 4];
            self.replace_selection(node, c.encode_utf8(&mut buf));
            self.dispatch(node, Event::new(EventKind::Input));
            self.dispatch(node, Event::key(EventKind::KeyUp, Key::Char(c)));
        }
    }

    /// Press a key that does not insert text, such as the keypad decimal.
    pub fn press(&mut self, node: NodeId, key: Key) -> bool {
        let accepted = self.dispatch(node, Event::key(EventKind::KeyDown, key));
        self.dispatch(node, Event::key(EventKind::KeyUp, key));
        accepted
    }

    /// Delete the selection, or the character before the caret.
    pub fn backspace(&mut self, node: NodeId) {
        self.erase(node, Key::Backspace);
    }

    /// Delete the selection, or the character after the caret.
    pub fn delete(&mut self, node: NodeId) {
        self.erase(node, Key::Delete);
    }

    /// Paste `text` over the current selection.
    pub fn paste(&mut self, node: NodeId, text: &str) {
        if !self.dispatch(node, Event::new(EventKind::Paste)) {
            return;
        }
        self.replace_selection(node, text);
        self.dispatch(node, Event::new(EventKind::Input));
    }

    fn erase(&mut self, node: NodeId, key: Key) {
        if self.dispatch(node, Event::key(EventKind::KeyDown, key)) {
            let edited = match self.nodes.get(&node) {
                Some(data) => {
                    let len = data.value.chars().count();
                    let sel = data.selection.clamp(len);
                    if !sel.is_empty() {
                        Some(sel)
                    } else if key == Key::Backspace && sel.start > 0 {
                        Some(SelectionRange::new(sel.start - 1, sel.start))
                    } else if key == Key::Delete && sel.end < len {
                        Some(SelectionRange::new(sel.end, sel.end + 1))
                    } else {
                        None
                    }
                }
                None => None,
            };
            if let Some(range) = edited {
                self.set_selection(node, range);
                self.replace_selection(node, "");
                self.dispatch(node, Event::new(EventKind::Input));
            }
        }
        self.dispatch(node, Event::key(EventKind::KeyUp, key));
    }

    fn replace_selection(&mut self, node: NodeId, text: &str) {
        let Some(data) = self.nodes.get_mut(&node) else {
            return;
        };
        let sel = data.selection.clamp(data.value.chars().count());
        let start = byte_index(&data.value, sel.start);
        let end = byte_index(&data.value, sel.end);
        data.value.replace_range(start..end, text);
        data.selection = SelectionRange::caret(sel.start + text.chars().count());
    }

    fn has_listener(&self, node: NodeId, id: ListenerId) -> bool {
        self.nodes
            .get(&node)
            .is_some_and(|n| n.listeners.iter().any(|(lid, _, _)| *lid == id))
    }
}

/// Byte offset of the `chars`-th character, or the end of the string.
fn byte_index(s: &str, chars: usize) -> usize {
    s.char_indices().nth(chars).map_or(s.len(), |(i, _)| i)
}

impl Host for Document {
    fn kind(&self, node: NodeId) -> Option<NodeKind> {
        self.nodes.get(&node).map(|n| n.kind)
    }

    fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = match self.nodes.get(&node) {
            Some(n) => n.children.iter().rev().copied().collect(),
            None => return out,
        };
        while let Some(id) = stack.pop() {
            out.push(id);
            if let Some(n) = self.nodes.get(&id) {
                stack.extend(n.children.iter().rev().copied());
            }
        }
        out
    }

    fn value(&self, node: NodeId) -> Option<String> {
        self.nodes.get(&node).map(|n| n.value.clone())
    }

    fn set_value(&mut self, node: NodeId, value: &str) {
        if let Some(n) = self.nodes.get_mut(&node) {
            n.value = value.to_string();
            n.selection = SelectionRange::caret(value.chars().count());
        }
    }

    fn selection(&self, node: NodeId) -> Option<SelectionRange> {
        self.nodes.get(&node).map(|n| n.selection)
    }

    fn set_selection(&mut self, node: NodeId, range: SelectionRange) {
        if let Some(n) = self.nodes.get_mut(&node) {
            n.selection = range.clamp(n.value.chars().count());
        }
    }

    fn is_focused(&self, node: NodeId) -> bool {
        self.focused == Some(node)
    }

    fn add_listener(
        &mut self,
        node: NodeId,
        kind: EventKind,
        listener: Listener<Self>,
    ) -> Option<ListenerId> {
        let data = self.nodes.get_mut(&node)?;
        let id = ListenerId::from_raw(self.next_listener);
        self.next_listener += 1;
        data.listeners.push((id, kind, listener));
        Some(id)
    }

    fn remove_listener(&mut self, node: NodeId, id: ListenerId) -> bool {
        let Some(data) = self.nodes.get_mut(&node) else {
            return false;
        };
        let before = data.listeners.len();
        data.listeners.retain(|(lid, _, _)| *lid != id);
        data.listeners.len() != before
    }

    fn dispatch(&mut self, node: NodeId, mut event: Event) -> bool {
        let listeners: Vec<(ListenerId, Listener<Self>)> = match self.nodes.get(&node) {
            Some(n) => n
                .listeners
                .iter()
                .filter(|(_, kind, _)| *kind == event.kind)
                .map(|(id, _, l)| (*id, Rc::clone(l)))
                .collect(),
            None => return true,
        };
        for (id, listener) in listeners {
            // A listener removed by an earlier one in this dispatch must not run.
            if self.has_listener(node, id) {
                listener(self, &mut event);
            }
        }
        !event.default_prevented()
    }
}
