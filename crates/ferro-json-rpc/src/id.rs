use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier correlating a JSON-RPC request with its response.
///
/// JSON-RPC 1.0 permits any scalar here. Notifications use [`Id::Null`];
/// everything else is a number or a string. The variant order matters:
/// untagged deserialization tries integers before floats so that `1`
/// round-trips as `Number(1)` rather than `Float(1.0)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    Number(i64),
    Float(f64),
    String(String),
    Null,
}

impl Id {
    /// Whether this id marks a notification.
    pub fn is_null(&self) -> bool {
        matches!(self, Id::Null)
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Id::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Id::String(s) => Some(s),
            _ => None,
        }
    }
}

impl Default for Id {
    fn default() -> Self {
        Id::Null
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::Number(n) => write!(f, "{}", n),
            Id::Float(x) => write!(f, "{}", x),
            Id::String(s) => write!(f, "{}", s),
            Id::Null => write!(f, "null"),
        }
    }
}

impl From<i64> for Id {
    fn from(n: i64) -> Self {
        Id::Number(n)
    }
}

impl From<i32> for Id {
    fn from(n: i32) -> Self {
        Id::Number(n as i64)
    }
}

impl From<f64> for Id {
    fn from(x: f64) -> Self {
        Id::Float(x)
    }
}

impl From<&str> for Id {
    fn from(s: &str) -> Self {
        Id::String(s.to_string())
    }
}

impl From<String> for Id {
    fn from(s: String) -> Self {
        Id::String(s)
    }
}
