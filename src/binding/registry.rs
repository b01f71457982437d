//! Directives looked up by name.

use std::collections::HashMap;

use tracing::debug;

use super::{Attachment, Binding, MoneyDirective, TransformDirective};
use crate::cache;
use crate::error::{BindError, ConfigError};
use crate::host::{Host, NodeId};
use crate::options::NumericMode;
use crate::transform::TransformRule;

/// A directive ready to bind.
#[derive(Debug, Clone)]
pub enum Directive {
    Money(MoneyDirective),
    Transform(TransformDirective),
}

impl<H: Host> Binding<H> for Directive {
    fn bind(&self, host: &mut H, element: NodeId) -> Result<Attachment, BindError> {
        match self {
            Directive::Money(money) => money.bind(host, element),
            Directive::Transform(transform) => transform.bind(host, element),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Factory {
    Money,
    Numeric,
    Transform(TransformRule),
}

/// Maps directive names to directives.
///
/// Comes with `money`, `upper-case`, `capitalize`, `unaccent`,
/// `unaccent-upper-case` and `numeric`. Options are JSON text:
///
/// - `money` takes a [`FormatConfig`](crate::FormatConfig) object. Without
///   options nothing is bound.
/// - `numeric` takes `"integer"` or `"decimal"` (default `"decimal"`).
/// - the other directives ignore their options.
#[derive(Debug, Clone)]
pub struct DirectiveRegistry {
    factories: HashMap<String, Factory>,
}

impl Default for DirectiveRegistry {
    fn default() -> Self {
        let mut factories = HashMap::new();
        factories.insert("money".to_string(), Factory::Money);
        factories.insert("numeric".to_string(), Factory::Numeric);
        factories.insert(
            "upper-case".to_string(),
            Factory::Transform(TransformRule::Uppercase),
        );
        factories.insert(
            "capitalize".to_string(),
            Factory::Transform(TransformRule::Capitalize),
        );
        factories.insert(
            "unaccent".to_string(),
            Factory::Transform(TransformRule::Unaccent),
        );
        factories.insert(
            "unaccent-upper-case".to_string(),
            Factory::Transform(TransformRule::UnaccentUppercase),
        );
        DirectiveRegistry { factories }
    }
}

impl DirectiveRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a transform directive under `name`, replacing any directive
    /// already registered with that name.
    pub fn register(&mut self, name: impl Into<String>, rule: TransformRule) {
        self.factories
            .insert(name.into(), Factory::Transform(rule));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Build the directive `name` from its options.
    ///
    /// Returns `Ok(None)` for a money directive without options.
    pub fn resolve(&self, name: &str, options: Option<&str>) -> Result<Option<Directive>, BindError> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| BindError::UnknownDirective {
                name: name.to_string(),
            })?;
        let directive = match (factory, options) {
            (Factory::Money, None) => return Ok(None),
            (Factory::Money, Some(options)) => {
                Directive::Money(MoneyDirective::new(cache::get_or_parse(options)?))
            }
            (Factory::Numeric, options) => {
                let mode = match options {
                    Some(options) => parse_numeric_mode(options)?,
                    None => NumericMode::default(),
                };
                Directive::Transform(TransformDirective::numeric(mode))
            }
            (Factory::Transform(rule), _) => Directive::Transform(TransformDirective::new(*rule)),
        };
        Ok(Some(directive))
    }

    /// Resolve `name` and bind it to `element`.
    pub fn bind<H: Host>(
        &self,
        host: &mut H,
        name: &str,
        element: NodeId,
        options: Option<&str>,
    ) -> Result<Option<Attachment>, BindError> {
        match self.resolve(name, options)? {
            Some(directive) => directive.bind(host, element).map(Some),
            None => {
                debug!(directive = name, element = %element, "no options given, skipping binding");
                Ok(None)
            }
        }
    }
}

/// Accepts a JSON string (`"integer"`) or the bare word.
fn parse_numeric_mode(options: &str) -> Result<NumericMode, ConfigError> {
    let word = serde_json::from_str::<String>(options)
        .unwrap_or_else(|_| options.trim().to_string());
    word.parse()
}
