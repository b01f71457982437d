//! The currency mask directive.

use std::cell::Cell;
use std::rc::Rc;

use tracing::{debug, trace, warn};

use super::{attach, notify_changed, Attachment, Binding};
use crate::cursor::{focus_caret, CursorState};
use crate::error::BindError;
use crate::formatter::render_fixed;
use crate::host::{Event, EventKind, Host, Key, Listener, NodeId, NodeKind, SelectionRange};
use crate::options::{EmptyValue, FormatConfig};

/// Formats a control as currency while the user types.
///
/// Binding fails with [`BindError::TargetNotUnique`] unless the element is an
/// input or contains exactly one input: a mask that silently formats nothing
/// would let unformatted amounts through.
#[derive(Debug, Clone, PartialEq)]
pub struct MoneyDirective {
    config: FormatConfig,
}

impl MoneyDirective {
    pub fn new(config: FormatConfig) -> Self {
        MoneyDirective { config }
    }

    pub fn config(&self) -> &FormatConfig {
        &self.config
    }
}

impl<H: Host> Binding<H> for MoneyDirective {
    fn bind(&self, host: &mut H, element: NodeId) -> Result<Attachment, BindError> {
        let target = match money_target(host, element) {
            Ok(target) => target,
            Err(err) => {
                warn!(element = %element, error = %err, "cannot bind money mask");
                return Err(err);
            }
        };
        let config = Rc::new(self.config.clone());
        let erasing = Rc::new(Cell::new(false));
        let notifying = Rc::new(Cell::new(false));

        let track_erase = {
            let erasing = Rc::clone(&erasing);
            move |_: &mut H, event: &mut Event| {
                erasing.set(matches!(event.key, Some(Key::Backspace) | Some(Key::Delete)));
            }
        };
        let on_key: Listener<H> = Rc::new(track_erase);
        let on_input: Listener<H> = {
            let config = Rc::clone(&config);
            let erasing = Rc::clone(&erasing);
            let notifying = Rc::clone(&notifying);
            Rc::new(move |host: &mut H, _: &mut Event| {
                // Our own notification must not start another pass.
                if notifying.get() {
                    return;
                }
                mask(host, target, &config, erasing.get(), &notifying);
            })
        };
        let on_focus: Listener<H> = {
            let config = Rc::clone(&config);
            Rc::new(move |host: &mut H, _: &mut Event| {
                if let Some(value) = host.value(target) {
                    let caret = focus_caret(&value, &config);
                    host.set_selection(target, SelectionRange::caret(caret));
                }
            })
        };

        let attachment = attach(
            host,
            target,
            vec![
                (EventKind::KeyDown, Rc::clone(&on_key)),
                (EventKind::KeyUp, on_key),
                (EventKind::Input, on_input),
                (EventKind::Focus, on_focus),
            ],
        )?;
        // Format whatever the control already holds.
        mask(host, target, &config, false, &notifying);
        debug!(target_node = %target, precision = config.decimals(), "bound money mask");
        Ok(attachment)
    }
}

/// The element itself if it is an input, otherwise its only descendant input.
fn money_target<H: Host>(host: &H, element: NodeId) -> Result<NodeId, BindError> {
    match host.kind(element) {
        None => Err(BindError::UnknownElement {
            node: element.as_raw(),
        }),
        Some(NodeKind::Input) => Ok(element),
        Some(_) => {
            let inputs: Vec<NodeId> = host
                .descendants(element)
                .into_iter()
                .filter(|node| host.kind(*node) == Some(NodeKind::Input))
                .collect();
            match inputs.as_slice() {
                [input] => Ok(*input),
                _ => Err(BindError::TargetNotUnique {
                    found: inputs.len(),
                }),
            }
        }
    }
}

/// One formatting pass over `target`. Returns true if the text changed.
///
/// `notifying` is raised while the synthetic events go out.
fn mask<H: Host>(
    host: &mut H,
    target: NodeId,
    config: &FormatConfig,
    erasing: bool,
    notifying: &Cell<bool>,
) -> bool {
    let Some(current) = host.value(target) else {
        return false;
    };

    let (source, cursor) = if erasing && is_minimal(&current, config) {
        // The value is gone once the replacement is written, so the caret
        // restarts from the end.
        (empty_replacement(config), CursorState::default())
    } else {
        let caret = host
            .selection(target)
            .map_or_else(|| current.chars().count(), |s| s.end);
        let cursor = CursorState::from_caret(&current, caret);
        (current.clone(), cursor)
    };

    let formatted = config.format(source.as_str());
    if formatted == current {
        return false;
    }

    host.set_value(target, &formatted);
    if host.is_focused(target) {
        let caret = cursor.reposition(&formatted, config);
        host.set_selection(target, SelectionRange::caret(caret));
    }
    trace!(target_node = %target, value = %formatted, "masked value");
    notifying.set(true);
    notify_changed(host, target);
    notifying.set(false);
    true
}

/// Whether erasing has left nothing but the zero padding of the decimals,
/// e.g. `"R$ 0,0"` after backspacing `"R$ 0,01"`.
fn is_minimal(value: &str, config: &FormatConfig) -> bool {
    let mut count = 0;
    for digit in config.strip_affixes(value).chars().filter(char::is_ascii_digit) {
        if digit != '0' {
            return false;
        }
        count += 1;
    }
    count <= config.decimals()
}

/// The text a cleared field is reset to before formatting.
fn empty_replacement(config: &FormatConfig) -> String {
    match &config.empty_value {
        EmptyValue::Number(n) => render_fixed(*n, config.decimals()),
        EmptyValue::Text(text) => match config.empty_value.as_number() {
            Some(n) => render_fixed(n, config.decimals()),
            None => text.clone(),
        },
    }
}
