//! Binding masks to elements and releasing them again.
//!
//! Every directive goes through the same path: resolve the control inside
//! the element, register its handlers with [`attach`], and hand back an
//! [`Attachment`] that removes exactly those handlers on [`Attachment::detach`].

mod money;
mod registry;
mod transform;

pub use money::MoneyDirective;
pub use registry::{Directive, DirectiveRegistry};
pub use transform::TransformDirective;

use tracing::debug;

use crate::error::BindError;
use crate::host::{Event, EventKind, Host, Listener, ListenerId, NodeId, NodeKind};

/// Something that can be bound to an element of a host.
pub trait Binding<H: Host> {
    /// Register this binding's handlers on `element` (or the control inside it).
    fn bind(&self, host: &mut H, element: NodeId) -> Result<Attachment, BindError>;
}

/// The handlers one binding registered on one control.
#[derive(Debug)]
#[must_use = "dropping an Attachment leaves its listeners registered"]
pub struct Attachment {
    target: NodeId,
    listeners: Vec<ListenerId>,
}

impl Attachment {
    /// The control the handlers are registered on.
    pub fn target(&self) -> NodeId {
        self.target
    }

    pub fn is_attached(&self) -> bool {
        !self.listeners.is_empty()
    }

    /// Remove every handler this attachment registered. Calling it again does
    /// nothing.
    pub fn detach<H: Host>(&mut self, host: &mut H) {
        if self.listeners.is_empty() {
            return;
        }
        let count = self.listeners.len();
        for id in self.listeners.drain(..) {
            host.remove_listener(self.target, id);
        }
        debug!(target_node = %self.target, listeners = count, "detached binding");
    }
}

/// Find the text control a binding should listen on.
///
/// Looks below `element` for an input, then a textarea, then a
/// contenteditable node, and falls back to `element` itself.
pub fn resolve_target<H: Host>(host: &H, element: NodeId) -> NodeId {
    let descendants = host.descendants(element);
    [NodeKind::Input, NodeKind::TextArea, NodeKind::ContentEditable]
        .into_iter()
        .find_map(|kind| {
            descendants
                .iter()
                .copied()
                .find(|node| host.kind(*node) == Some(kind))
        })
        .unwrap_or(element)
}

/// Register `handlers` on `target`.
///
/// Either every handler is registered or none is.
pub fn attach<H: Host>(
    host: &mut H,
    target: NodeId,
    handlers: Vec<(EventKind, Listener<H>)>,
) -> Result<Attachment, BindError> {
    let mut attachment = Attachment {
        target,
        listeners: Vec::with_capacity(handlers.len()),
    };
    for (kind, listener) in handlers {
        match host.add_listener(target, kind, listener) {
            Some(id) => attachment.listeners.push(id),
            None => {
                attachment.detach(host);
                return Err(BindError::UnknownElement {
                    node: target.as_raw(),
                });
            }
        }
    }
    debug!(
        target_node = %target,
        listeners = attachment.listeners.len(),
        "attached binding"
    );
    Ok(attachment)
}

/// Tell observers of `target` that its value was corrected.
pub(crate) fn notify_changed<H: Host>(host: &mut H, target: NodeId) {
    host.dispatch(target, Event::synthetic(EventKind::Input));
    host.dispatch(target, Event::synthetic(EventKind::Change));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::Document;
    use std::rc::Rc;

    fn noop() -> Listener<Document> {
        Rc::new(|_: &mut Document, _: &mut Event| {})
    }

    #[test]
    fn test_resolve_target_priority() {
        let mut doc = Document::new();
        let root = doc.create(NodeKind::Container);
        let editable = doc.append(root, NodeKind::ContentEditable);
        let area = doc.append(root, NodeKind::TextArea);
        assert_eq!(resolve_target(&doc, root), area);

        let input = doc.append(root, NodeKind::Input);
        assert_eq!(resolve_target(&doc, root), input);

        assert_eq!(resolve_target(&doc, editable), editable);
    }

    #[test]
    fn test_attach_and_detach_twice() {
        let mut doc = Document::new();
        let input = doc.create(NodeKind::Input);
        let mut attachment = attach(
            &mut doc,
            input,
            vec![(EventKind::Input, noop()), (EventKind::KeyUp, noop())],
        )
        .unwrap();
        assert_eq!(doc.listener_count(input), 2);
        assert!(attachment.is_attached());

        attachment.detach(&mut doc);
        assert_eq!(doc.listener_count(input), 0);
        attachment.detach(&mut doc);
        assert!(!attachment.is_attached());
    }

    #[test]
    fn test_detach_leaves_other_listeners() {
        let mut doc = Document::new();
        let input = doc.create(NodeKind::Input);
        let mut first = attach(&mut doc, input, vec![(EventKind::Input, noop())]).unwrap();
        let _second = attach(&mut doc, input, vec![(EventKind::Input, noop())]).unwrap();

        first.detach(&mut doc);
        assert_eq!(doc.listener_count(input), 1);
    }

    #[test]
    fn test_attach_unknown_node() {
        let mut doc = Document::new();
        let err = attach(
            &mut doc,
            NodeId::from_raw(42),
            vec![(EventKind::Input, noop())],
        )
        .unwrap_err();
        assert_eq!(err, BindError::UnknownElement { node: 42 });
    }
}
