use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while projecting the blueprint config.
#[derive(Error, Debug)]
pub enum ProjectError {
    #[error("Failed to read input file: {}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse JSON in {}", .path.display())]
    ParseInput {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Blueprint config must be a JSON object, found {0}")]
    RootNotObject(&'static str),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Field '{field}' must be a JSON object, found {kind}")]
    FieldNotObject { field: String, kind: &'static str },

    #[error("Value for '{key}' must be a string, number, boolean or null, found {kind}")]
    UnsupportedValue { key: String, kind: &'static str },

    #[error("Failed to write output file: {}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ProjectError>;

/// Human-readable name of a JSON value's type, for error messages.
pub(crate) fn kind_of(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
