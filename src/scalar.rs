//! Nullable scalar operand type.
//!
//! `Scalar` stands in for SQL's three-valued values: every registry entry
//! receives and returns scalars, with `Scalar::Null` as the pervasive
//! "unknown/no value" marker. Temporal scalars always carry an instant
//! (`DateTime<Utc>`); a naive date/time cannot be represented here.

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// A single, possibly-null scalar operand.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Timestamp(DateTime<Utc>),
}

impl Scalar {
    /// True for the logical-null marker.
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Scalar::Null)
    }

    /// Boolean payload, if this is a boolean.
    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Scalar::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Numeric payload widened to f64, if this is numeric.
    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Int(n) => Some(*n as f64),
            Scalar::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Integer payload. Accepts floats with no fractional part, since
    /// compiled literals may arrive as either class.
    #[inline]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Scalar::Int(n) => Some(*n),
            Scalar::Float(f) if f.fract() == 0.0 && f.is_finite() => Some(*f as i64),
            _ => None,
        }
    }

    /// Text payload, if this is text.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Timestamp payload, if this is a temporal value.
    #[inline]
    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            Scalar::Timestamp(dt) => Some(*dt),
            _ => None,
        }
    }

    /// Human-readable type tag for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Scalar::Null => "null",
            Scalar::Bool(_) => "bool",
            Scalar::Int(_) => "int",
            Scalar::Float(_) => "float",
            Scalar::Text(_) => "text",
            Scalar::Timestamp(_) => "timestamp",
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => write!(f, "null"),
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Int(n) => write!(f, "{}", n),
            Scalar::Float(v) => write!(f, "{}", v),
            Scalar::Text(s) => write!(f, "{}", s),
            Scalar::Timestamp(dt) => {
                write!(f, "{}", dt.to_rfc3339_opts(SecondsFormat::Millis, true))
            }
        }
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Bool(b)
    }
}

impl From<i32> for Scalar {
    fn from(n: i32) -> Self {
        Scalar::Int(n as i64)
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar::Int(n)
    }
}

impl From<f64> for Scalar {
    fn from(f: f64) -> Self {
        Scalar::Float(f)
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::Text(s)
    }
}

impl From<DateTime<Utc>> for Scalar {
    fn from(dt: DateTime<Utc>) -> Self {
        Scalar::Timestamp(dt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        assert!(Scalar::Null.is_null());
        assert!(!Scalar::Bool(false).is_null());

        assert_eq!(Scalar::Int(7).as_f64(), Some(7.0));
        assert_eq!(Scalar::Float(2.5).as_f64(), Some(2.5));
        assert_eq!(Scalar::Text("x".into()).as_f64(), None);

        assert_eq!(Scalar::Int(3).as_int(), Some(3));
        assert_eq!(Scalar::Float(3.0).as_int(), Some(3));
        assert_eq!(Scalar::Float(3.5).as_int(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Scalar::Null.to_string(), "null");
        assert_eq!(Scalar::Bool(true).to_string(), "true");
        assert_eq!(Scalar::Int(-4).to_string(), "-4");
        assert_eq!(Scalar::Text("abc".into()).to_string(), "abc");
    }

    #[test]
    fn test_serialize_untagged() {
        assert_eq!(serde_json::to_string(&Scalar::Null).unwrap(), "null");
        assert_eq!(serde_json::to_string(&Scalar::Int(5)).unwrap(), "5");
        assert_eq!(
            serde_json::to_string(&Scalar::Text("hi".into())).unwrap(),
            "\"hi\""
        );
    }

    #[test]
    fn test_type_name() {
        assert_eq!(Scalar::Null.type_name(), "null");
        assert_eq!(Scalar::Float(1.0).type_name(), "float");
    }
}
