//! Text transform directives bound to an in-memory document.

use std::cell::Cell;
use std::rc::Rc;

use inputmask::host::{Document, Event, EventKind, Host, Key, Listener, NodeId, NodeKind, SelectionRange};
use inputmask::{Binding, NumericMode, TransformDirective, TransformRule};

fn bound(directive: TransformDirective) -> (Document, NodeId, inputmask::Attachment) {
    let mut doc = Document::new();
    let input = doc.create(NodeKind::Input);
    let attachment = directive.bind(&mut doc, input).unwrap();
    doc.focus(input);
    (doc, input, attachment)
}

fn count_synthetic(doc: &mut Document, node: NodeId, kind: EventKind) -> Rc<Cell<usize>> {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let listener: Listener<Document> = Rc::new(move |_: &mut Document, event: &mut Event| {
        if event.synthetic {
            counter.set(counter.get() + 1);
        }
    });
    doc.add_listener(node, kind, listener).unwrap();
    calls
}

#[test]
fn test_uppercase() {
    let (mut doc, input, _attachment) = bound(TransformDirective::uppercase());
    doc.type_text(input, "rua das flores");
    assert_eq!(doc.value(input).as_deref(), Some("RUA DAS FLORES"));
}

#[test]
fn test_capitalize() {
    let (mut doc, input, _attachment) = bound(TransformDirective::capitalize());
    doc.type_text(input, "joão DA silva");
    assert_eq!(doc.value(input).as_deref(), Some("João Da Silva"));
}

#[test]
fn test_unaccent_on_paste() {
    let (mut doc, input, _attachment) = bound(TransformDirective::unaccent());
    doc.paste(input, "Ação Conceição");
    assert_eq!(doc.value(input).as_deref(), Some("Acao Conceicao"));
}

#[test]
fn test_unaccent_uppercase() {
    let (mut doc, input, _attachment) = bound(TransformDirective::unaccent_uppercase());
    doc.type_text(input, "são paulo");
    assert_eq!(doc.value(input).as_deref(), Some("SAO PAULO"));
}

#[test]
fn test_numeric_decimal_strips_letters() {
    let (mut doc, input, _attachment) = bound(TransformDirective::numeric(NumericMode::Decimal));
    doc.type_text(input, "1a,5x.2");
    assert_eq!(doc.value(input).as_deref(), Some("1,5.2"));
}

#[test]
fn test_numeric_integer_rejects_decimal_keys() {
    let (mut doc, input, _attachment) = bound(TransformDirective::numeric(NumericMode::Integer));
    let inputs = count_synthetic(&mut doc, input, EventKind::Input);

    doc.type_text(input, "12,5.0");
    assert_eq!(doc.value(input).as_deref(), Some("1250"));
    // Rejected keys never reached the field, so nothing needed correcting.
    assert_eq!(inputs.get(), 0);

    assert!(!doc.press(input, Key::KeypadDecimal));
    assert!(doc.press(input, Key::Other));
}

#[test]
fn test_numeric_integer_allows_shortcuts() {
    let (mut doc, input, _attachment) = bound(TransformDirective::numeric(NumericMode::Integer));
    let with_ctrl = Event::key(EventKind::KeyDown, Key::Char('.')).with_ctrl();
    assert!(doc.dispatch(input, with_ctrl));
    let with_meta = Event::key(EventKind::KeyDown, Key::Char(',')).with_meta();
    assert!(doc.dispatch(input, with_meta));
}

#[test]
fn test_numeric_integer_strips_pasted_separators() {
    let (mut doc, input, _attachment) = bound(TransformDirective::numeric(NumericMode::Integer));
    doc.paste(input, "1.234,56");
    assert_eq!(doc.value(input).as_deref(), Some("123456"));
}

#[test]
fn test_selection_restored_after_rewrite() {
    let (mut doc, input, _attachment) = bound(TransformDirective::uppercase());
    doc.set_value(input, "abcdef");
    doc.set_selection(input, SelectionRange::new(1, 4));
    doc.dispatch(input, Event::new(EventKind::Input));

    assert_eq!(doc.value(input).as_deref(), Some("ABCDEF"));
    assert_eq!(doc.selection(input), Some(SelectionRange::new(1, 4)));
}

#[test]
fn test_caret_kept_when_typing_in_the_middle() {
    let (mut doc, input, _attachment) = bound(TransformDirective::uppercase());
    doc.type_text(input, "AC");
    doc.set_selection(input, SelectionRange::caret(1));
    doc.type_text(input, "b");
    assert_eq!(doc.value(input).as_deref(), Some("ABC"));
    assert_eq!(doc.selection(input), Some(SelectionRange::caret(2)));
}

#[test]
fn test_notifies_input_and_change_once() {
    let (mut doc, input, _attachment) = bound(TransformDirective::uppercase());
    let inputs = count_synthetic(&mut doc, input, EventKind::Input);
    let changes = count_synthetic(&mut doc, input, EventKind::Change);

    doc.type_text(input, "a");
    assert_eq!(inputs.get(), 1);
    assert_eq!(changes.get(), 1);
}

#[test]
fn test_no_notification_when_unchanged() {
    let (mut doc, input, _attachment) = bound(TransformDirective::uppercase());
    let inputs = count_synthetic(&mut doc, input, EventKind::Input);
    let changes = count_synthetic(&mut doc, input, EventKind::Change);

    doc.type_text(input, "ABC 123");
    assert_eq!(inputs.get(), 0);
    assert_eq!(changes.get(), 0);
}

#[test]
fn test_detach_stops_transforming() {
    let (mut doc, input, mut attachment) = bound(TransformDirective::uppercase());
    let changes = count_synthetic(&mut doc, input, EventKind::Change);

    attachment.detach(&mut doc);
    doc.type_text(input, "abc");
    assert_eq!(doc.value(input).as_deref(), Some("abc"));
    assert_eq!(changes.get(), 0);
    // Only the counting listener is left.
    assert_eq!(doc.listener_count(input), 1);
}

#[test]
fn test_resolves_nested_control() {
    let mut doc = Document::new();
    let wrapper = doc.create(NodeKind::Container);
    let area = doc.append(wrapper, NodeKind::TextArea);
    let attachment = TransformDirective::uppercase().bind(&mut doc, wrapper).unwrap();
    assert_eq!(attachment.target(), area);
    assert_eq!(doc.listener_count(wrapper), 0);

    doc.type_text(area, "x");
    assert_eq!(doc.value(area).as_deref(), Some("X"));
}

#[test]
fn test_custom_rule() {
    fn no_spaces(value: &str) -> String {
        value.replace(' ', "")
    }
    let (mut doc, input, _attachment) = bound(TransformDirective::new(TransformRule::Custom(no_spaces)));
    doc.type_text(input, "a b c");
    assert_eq!(doc.value(input).as_deref(), Some("abc"));
}
