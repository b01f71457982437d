//! The directive behind every text transform.

use std::rc::Rc;

use tracing::trace;

use super::{attach, notify_changed, resolve_target, Attachment, Binding};
use crate::error::BindError;
use crate::host::{Event, EventKind, Host, Listener, NodeId};
use crate::options::NumericMode;
use crate::transform::TransformRule;

/// Rewrites a control's text with a [`TransformRule`] on every edit.
///
/// Listens to `input`, `keyup` and `paste`. When the rule changes the text,
/// the new value is written back, the selection restored, and synthetic
/// `input` and `change` events dispatched. Unchanged text dispatches nothing.
#[derive(Debug, Clone, Copy)]
pub struct TransformDirective {
    rule: TransformRule,
}

impl TransformDirective {
    pub fn new(rule: TransformRule) -> Self {
        TransformDirective { rule }
    }

    pub fn uppercase() -> Self {
        Self::new(TransformRule::Uppercase)
    }

    pub fn capitalize() -> Self {
        Self::new(TransformRule::Capitalize)
    }

    pub fn unaccent() -> Self {
        Self::new(TransformRule::Unaccent)
    }

    pub fn unaccent_uppercase() -> Self {
        Self::new(TransformRule::UnaccentUppercase)
    }

    pub fn numeric(mode: NumericMode) -> Self {
        Self::new(TransformRule::Numeric(mode))
    }

    pub fn rule(&self) -> TransformRule {
        self.rule
    }
}

impl<H: Host> Binding<H> for TransformDirective {
    fn bind(&self, host: &mut H, element: NodeId) -> Result<Attachment, BindError> {
        if host.kind(element).is_none() {
            return Err(BindError::UnknownElement {
                node: element.as_raw(),
            });
        }
        let target = resolve_target(host, element);
        let rule = self.rule;

        let on_edit: Listener<H> = Rc::new(move |host: &mut H, _: &mut Event| {
            apply_rule(host, target, rule);
        });
        let mut handlers = vec![
            (EventKind::Input, Rc::clone(&on_edit)),
            (EventKind::KeyUp, Rc::clone(&on_edit)),
            (EventKind::Paste, on_edit),
        ];
        if rule.filters_keys() {
            let on_keydown: Listener<H> = Rc::new(move |_: &mut H, event: &mut Event| {
                if rule.rejects_key(event) {
                    event.prevent_default();
                }
            });
            handlers.push((EventKind::KeyDown, on_keydown));
        }
        attach(host, target, handlers)
    }
}

/// Apply `rule` to the text of `target`. Returns true if the text changed.
fn apply_rule<H: Host>(host: &mut H, target: NodeId, rule: TransformRule) -> bool {
    let Some(value) = host.value(target) else {
        return false;
    };
    let transformed = rule.apply(&value);
    if transformed == value {
        return false;
    }

    let selection = host.selection(target);
    host.set_value(target, &transformed);
    if let Some(selection) = selection {
        host.set_selection(target, selection);
    }
    trace!(target_node = %target, ?rule, "transformed value");
    notify_changed(host, target);
    true
}
