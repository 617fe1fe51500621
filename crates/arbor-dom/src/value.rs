//! Property values
//!
//! Typed stand-in for the dynamically-typed values a host environment
//! lets callers assign to node properties.

use std::fmt;

/// A value assignable to a node property or tracked by a text binding
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl PropValue {
    /// Check if this is the type's zero-equivalent (empty string, 0, false)
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Str(s) => s.is_empty(),
            Self::Int(n) => *n == 0,
            Self::Float(f) => *f == 0.0,
            Self::Bool(b) => !b,
        }
    }

    /// Get string contents if this is a string value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for PropValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for PropValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<i64> for PropValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for PropValue {
    fn from(n: i32) -> Self {
        Self::Int(n as i64)
    }
}

impl From<f64> for PropValue {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<bool> for PropValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}
