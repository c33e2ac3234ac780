//! Runtime values

use serde::{Deserialize, Serialize};
use std::fmt;

/// A value of the language
///
/// There is no null value. Evaluations that produce nothing return
/// `None` instead (see the interpreter).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Numeric value (always floating point)
    Number(f64),
    /// String value
    Text(String),
    /// Boolean value
    Boolean(bool),
}

/// Kind of a value, used when reporting type errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    Number,
    Text,
    Boolean,
}

impl ValueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Number => "numeric",
            ValueKind::Text => "string",
            ValueKind::Boolean => "boolean",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    /// Returns the kind of this value
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Number(_) => ValueKind::Number,
            Value::Text(_) => ValueKind::Text,
            Value::Boolean(_) => ValueKind::Boolean,
        }
    }

    /// Tries to get as number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Tries to get as string
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Tries to get as boolean
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

/// Formats a number the way the console shows it: integral values have
/// no fractional part, negative zero prints as `0`.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if n == 0.0 {
        "0".to_string()
    } else {
        format!("{}", n)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => f.write_str(&format_number(*n)),
            Value::Text(s) => f.write_str(s),
            Value::Boolean(b) => write!(f, "{}", b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_display() {
        assert_eq!(Value::Number(8.0).to_string(), "8");
        assert_eq!(Value::Number(2.5).to_string(), "2.5");
        assert_eq!(Value::Number(-0.0).to_string(), "0");
        assert_eq!(Value::Number(f64::INFINITY).to_string(), "Infinity");
    }

    #[test]
    fn test_text_and_boolean_display() {
        assert_eq!(Value::from("hi there").to_string(), "hi there");
        assert_eq!(Value::Boolean(false).to_string(), "false");
    }

    #[test]
    fn test_kinds() {
        assert_eq!(Value::Number(1.0).kind(), ValueKind::Number);
        assert_eq!(Value::from("x").kind(), ValueKind::Text);
        assert_eq!(Value::Boolean(true).kind(), ValueKind::Boolean);
        assert_eq!(ValueKind::Boolean.to_string(), "boolean");
    }

    #[test]
    fn test_equality_across_kinds() {
        assert_ne!(Value::Number(1.0), Value::Boolean(true));
        assert_ne!(Value::from("1"), Value::Number(1.0));
        assert_eq!(Value::from("a"), Value::from("a"));
    }

    #[test]
    fn test_untagged_serialization() {
        assert_eq!(serde_json::to_string(&Value::Number(3.0)).unwrap(), "3.0");
        assert_eq!(serde_json::to_string(&Value::from("s")).unwrap(), "\"s\"");
        let v: Value = serde_json::from_str("true").unwrap();
        assert_eq!(v, Value::Boolean(true));
    }
}
