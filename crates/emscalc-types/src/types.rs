use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Raw inputs for one computation, keyed by field name as declared in the
/// calculator's field contract. Produced by the caller (form state, API
/// payload), consumed by the input validator.
pub type InputSet = HashMap<String, RawValue>;

/// A raw value as supplied by a caller before validation.
///
/// Form fields arrive as text more often than not, so the untagged serde
/// representation accepts `"140"`, `140` and `140.0` alike; the validator is
/// responsible for turning any of these into a typed number or rejecting it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RawValue {
    /// Integer value (listed before `Number` so untagged deserialization
    /// keeps whole JSON numbers integral)
    Integer(i64),
    /// Floating point value
    Number(f64),
    /// Boolean value (checklist findings)
    Boolean(bool),
    /// Text value (free text, enum selections, unparsed numerics)
    Text(String),
    /// Null value (an explicitly empty form field)
    Null,
}

impl RawValue {
    /// Numeric view of this value. `Text` is parsed, so `"12.5"` yields
    /// `Some(12.5)`; non-numeric text, booleans and null yield `None`.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        #[allow(clippy::cast_precision_loss)]
        match self {
            Self::Number(f) => Some(*f),
            Self::Integer(i) => Some(*i as f64),
            Self::Text(s) => s.trim().parse::<f64>().ok(),
            Self::Boolean(_) | Self::Null => None,
        }
    }

    /// Boolean view of this value. Text forms `"true"`/`"false"` are
    /// accepted since checkbox state is often serialized that way.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            Self::Text(s) => match s.trim() {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            },
            Self::Number(_) | Self::Integer(_) | Self::Null => None,
        }
    }

    /// Text view of this value, if it is text.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Whether the value is missing for validation purposes. An empty or
    /// whitespace-only string is how a blank form field arrives.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Get the type name as a string
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Integer(_) => "integer",
            Self::Boolean(_) => "boolean",
            Self::Text(_) => "text",
            Self::Null => "null",
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Text(s) => write!(f, "{s}"),
            Self::Null => write!(f, "null"),
        }
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_parses_to_number() {
        assert_eq!(RawValue::Text("140".into()).as_f64(), Some(140.0));
        assert_eq!(RawValue::Text(" 12.5 ".into()).as_f64(), Some(12.5));
        assert_eq!(RawValue::Text("abc".into()).as_f64(), None);
        assert_eq!(RawValue::Boolean(true).as_f64(), None);
    }

    #[test]
    fn empty_detection() {
        assert!(RawValue::Null.is_empty());
        assert!(RawValue::Text("   ".into()).is_empty());
        assert!(!RawValue::Text("0".into()).is_empty());
        assert!(!RawValue::Number(0.0).is_empty());
    }

    #[test]
    fn untagged_json_forms() {
        let v: RawValue = serde_json::from_str("140.5").unwrap();
        assert_eq!(v, RawValue::Number(140.5));
        let v: RawValue = serde_json::from_str("\"140\"").unwrap();
        assert_eq!(v, RawValue::Text("140".into()));
        let v: RawValue = serde_json::from_str("true").unwrap();
        assert_eq!(v, RawValue::Boolean(true));
    }
}
