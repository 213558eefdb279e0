//! Typed values produced by argument scanning.
//!
//! Every captured token, default and stored tree node is a [`Value`]: a
//! closed variant over booleans, integers, strings and nested objects.
//! Values serialize untagged, so an [`Object`] renders as plain JSON.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Nested mapping from key to [`Value`].
pub type Object = BTreeMap<String, Value>;

/// A typed scalar or nested object.
///
/// # Examples
///
/// ```
/// use argtree_core::Value;
///
/// assert_eq!(Value::coerce("true"), Value::Bool(true));
/// assert_eq!(Value::coerce("-12"), Value::Int(-12));
/// assert_eq!(Value::coerce("1.5"), Value::String("1.5".into()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Boolean value.
    Bool(bool),
    /// Signed 64-bit integer.
    Int(i64),
    /// Text, kept verbatim.
    String(String),
    /// Nested mapping created by dotted paths.
    Object(Object),
}

impl Value {
    /// Converts a raw token into a typed value.
    ///
    /// Rules, in order: a boolean literal (see [`parse_bool_literal`]), a
    /// base-10 integer that parses fully, otherwise the token as a string.
    /// There is no floating point and no quoting or escaping.
    pub fn coerce(token: &str) -> Self {
        if let Some(b) = parse_bool_literal(token) {
            return Value::Bool(b);
        }
        match token.parse::<i64>() {
            Ok(n) => Value::Int(n),
            Err(_) => Value::String(token.to_string()),
        }
    }

    /// Returns the type name with its article, as used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Bool(_) => "a bool",
            Value::Int(_) => "an int",
            Value::String(_) => "a string",
            Value::Object(_) => "an object",
        }
    }

    /// Returns the boolean, if this is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer, if this is one.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the string slice, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the nested object, if this is one.
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    pub(crate) fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| format!("{self:?}"))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::String(s) => f.write_str(s),
            Value::Object(_) => f.write_str(&self.to_json()),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Object> for Value {
    fn from(o: Object) -> Self {
        Value::Object(o)
    }
}

/// Declared type of a registered option.
///
/// Renders as `string`, `int` or `bool` in usage text and config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    /// Text value, taken verbatim.
    String,
    /// Base-10 integer.
    Int,
    /// Boolean; may be given without a value.
    Bool,
}

impl ValueType {
    /// Returns `true` if `value` is of this type.
    pub fn accepts(self, value: &Value) -> bool {
        matches!(
            (self, value),
            (ValueType::String, Value::String(_))
                | (ValueType::Int, Value::Int(_))
                | (ValueType::Bool, Value::Bool(_))
        )
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValueType::String => "string",
            ValueType::Int => "int",
            ValueType::Bool => "bool",
        })
    }
}

/// Recognises `true` / `false`, ignoring ASCII case.
///
/// Shared by both scanning modes so a boolean literal means the same thing
/// whether or not the option was declared.
///
/// ```
/// use argtree_core::parse_bool_literal;
///
/// assert_eq!(parse_bool_literal("TRUE"), Some(true));
/// assert_eq!(parse_bool_literal("False"), Some(false));
/// assert_eq!(parse_bool_literal("yes"), None);
/// ```
pub fn parse_bool_literal(token: &str) -> Option<bool> {
    if token.eq_ignore_ascii_case("true") {
        Some(true)
    } else if token.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}
