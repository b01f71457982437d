//! Values that can be fed to the currency formatter.

/// A value to format: either what the user typed or a number from the model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    /// A numeric value, rendered with the configured precision first
    Number(f64),
    /// Text as found in the control
    Text(&'a str),
    /// Nothing at all
    Empty,
}

impl<'a> From<f64> for Value<'a> {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl<'a> From<f32> for Value<'a> {
    fn from(n: f32) -> Self {
        Value::Number(n as f64)
    }
}

impl<'a> From<i64> for Value<'a> {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl<'a> From<i32> for Value<'a> {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(s: &'a str) -> Self {
        Value::Text(s)
    }
}

impl<'a> From<&'a String> for Value<'a> {
    fn from(s: &'a String) -> Self {
        Value::Text(s.as_str())
    }
}

impl<'a> From<()> for Value<'a> {
    fn from(_: ()) -> Self {
        Value::Empty
    }
}

impl<'a, T> From<Option<T>> for Value<'a>
where
    T: Into<Value<'a>>,
{
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Empty, Into::into)
    }
}

impl<'a> Value<'a> {
    /// Returns true if this value counts as a cleared field.
    pub fn is_empty(&self) -> bool {
        matches!(self, Value::Empty | Value::Text(""))
    }

    /// Returns a type name for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Text(_) => "text",
            Value::Empty => "empty",
        }
    }
}
