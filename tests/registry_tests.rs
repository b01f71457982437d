//! Binding directives by name through the registry.

use inputmask::host::{Document, Host, NodeKind};
use inputmask::{BindError, ConfigError, Directive, DirectiveRegistry, NumericMode, TransformRule};

#[test]
fn test_money_with_json_options() {
    let registry = DirectiveRegistry::new();
    let mut doc = Document::new();
    let input = doc.create(NodeKind::Input);
    let options = r#"{"prefix": "R$ ", "decimal": ",", "thousands": ".", "precision": 2}"#;

    let attachment = registry.bind(&mut doc, "money", input, Some(options)).unwrap();
    assert!(attachment.is_some());

    doc.focus(input);
    doc.type_text(input, "123456");
    assert_eq!(doc.value(input).as_deref(), Some("R$ 1.234,56"));
}

#[test]
fn test_money_camel_case_keys() {
    let registry = DirectiveRegistry::new();
    let options = r#"{"decimalSeparator": ",", "thousandsSeparator": " ", "suffix": " €", "emptyValue": 0}"#;
    match registry.resolve("money", Some(options)).unwrap() {
        Some(Directive::Money(money)) => {
            assert_eq!(money.config().decimal_separator, ",");
            assert_eq!(money.config().thousands_separator, " ");
            assert_eq!(money.config().suffix, " €");
            assert_eq!(money.config().empty_value.as_number(), Some(0.0));
        }
        other => panic!("expected a money directive, got {other:?}"),
    }
}

#[test]
fn test_money_without_options_binds_nothing() {
    let registry = DirectiveRegistry::new();
    let mut doc = Document::new();
    let input = doc.create(NodeKind::Input);

    assert!(registry.bind(&mut doc, "money", input, None).unwrap().is_none());
    assert_eq!(doc.listener_count(input), 0);
}

#[test]
fn test_money_invalid_json() {
    let registry = DirectiveRegistry::new();
    let mut doc = Document::new();
    let input = doc.create(NodeKind::Input);

    let err = registry
        .bind(&mut doc, "money", input, Some("{prefix: R$}"))
        .unwrap_err();
    assert!(matches!(err, BindError::Config(ConfigError::Json(_))));
    assert_eq!(doc.listener_count(input), 0);
}

#[test]
fn test_money_target_error_propagates() {
    let registry = DirectiveRegistry::new();
    let mut doc = Document::new();
    let wrapper = doc.create(NodeKind::Container);

    let err = registry
        .bind(&mut doc, "money", wrapper, Some("{}"))
        .unwrap_err();
    assert_eq!(err, BindError::TargetNotUnique { found: 0 });
}

#[test]
fn test_numeric_modes() {
    let registry = DirectiveRegistry::new();
    let rule = |options: Option<&str>| match registry.resolve("numeric", options).unwrap() {
        Some(Directive::Transform(t)) => t.rule(),
        other => panic!("expected a transform directive, got {other:?}"),
    };

    assert!(matches!(rule(Some("\"integer\"")), TransformRule::Numeric(NumericMode::Integer)));
    assert!(matches!(rule(Some("integer")), TransformRule::Numeric(NumericMode::Integer)));
    assert!(matches!(rule(Some("\"decimal\"")), TransformRule::Numeric(NumericMode::Decimal)));
    assert!(matches!(rule(None), TransformRule::Numeric(NumericMode::Decimal)));
}

#[test]
fn test_numeric_invalid_mode() {
    let registry = DirectiveRegistry::new();
    let err = registry.resolve("numeric", Some("\"hex\"")).unwrap_err();
    assert_eq!(
        err,
        BindError::Config(ConfigError::InvalidNumericMode("hex".to_string()))
    );
}

#[test]
fn test_numeric_integer_by_name() {
    let registry = DirectiveRegistry::new();
    let mut doc = Document::new();
    let input = doc.create(NodeKind::Input);
    let _attachment = registry
        .bind(&mut doc, "numeric", input, Some("\"integer\""))
        .unwrap();

    doc.type_text(input, "1.5a");
    assert_eq!(doc.value(input).as_deref(), Some("15"));
}

#[test]
fn test_transforms_ignore_options() {
    let registry = DirectiveRegistry::new();
    let mut doc = Document::new();
    let input = doc.create(NodeKind::Input);
    let _attachment = registry
        .bind(&mut doc, "upper-case", input, Some("anything"))
        .unwrap();

    doc.type_text(input, "abc");
    assert_eq!(doc.value(input).as_deref(), Some("ABC"));
}

#[test]
fn test_unknown_directive() {
    let registry = DirectiveRegistry::new();
    let mut doc = Document::new();
    let input = doc.create(NodeKind::Input);

    let err = registry.bind(&mut doc, "mask", input, None).unwrap_err();
    assert_eq!(
        err,
        BindError::UnknownDirective {
            name: "mask".to_string()
        }
    );
    assert_eq!(err.to_string(), "unknown directive 'mask'");
}

#[test]
fn test_register_custom_rule() {
    fn digits_only(value: &str) -> String {
        value.chars().filter(char::is_ascii_digit).collect()
    }

    let mut registry = DirectiveRegistry::new();
    assert!(!registry.contains("digits"));
    registry.register("digits", TransformRule::Custom(digits_only));
    assert!(registry.contains("digits"));

    let mut doc = Document::new();
    let input = doc.create(NodeKind::Input);
    let _attachment = registry.bind(&mut doc, "digits", input, None).unwrap();
    doc.type_text(input, "a1-2");
    assert_eq!(doc.value(input).as_deref(), Some("12"));
}

#[test]
fn test_register_replaces_builtin() {
    let mut registry = DirectiveRegistry::new();
    registry.register("upper-case", TransformRule::Capitalize);
    match registry.resolve("upper-case", None).unwrap() {
        Some(Directive::Transform(t)) => assert!(matches!(t.rule(), TransformRule::Capitalize)),
        other => panic!("expected a transform directive, got {other:?}"),
    }
}
