//! Scalar values accepted inside the projected object.

use std::fmt;

use serde_json::{Number, Value};

use crate::error::{kind_of, ProjectError};

/// A scalar config value. Objects and arrays have no string form here.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    String(String),
    Number(Number),
    Bool(bool),
    Null,
}

impl ConfigValue {
    /// Convert a JSON value found under `key`.
    pub fn from_json(key: &str, value: &Value) -> Result<Self, ProjectError> {
        match value {
            Value::String(s) => Ok(Self::String(s.clone())),
            Value::Number(n) => Ok(Self::Number(n.clone())),
            Value::Bool(b) => Ok(Self::Bool(*b)),
            Value::Null => Ok(Self::Null),
            Value::Array(_) | Value::Object(_) => Err(ProjectError::UnsupportedValue {
                key: key.to_string(),
                kind: kind_of(value),
            }),
        }
    }
}

/// Plain string form, written between the quotes. Strings are not escaped.
impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{}", n),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Null => f.write_str("null"),
        }
    }
}
