//! Fatal errors raised while loading a theme configuration.

use std::io;
use std::path::PathBuf;

use serde_json::Value;
use thiserror::Error;

/// Errors that abort a configuration load.
///
/// No partially built configuration is ever returned alongside one of
/// these; warnings are reported separately through
/// [`ConfigWarning`](crate::domain::ConfigWarning).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The source could not be deserialized at all.
    #[error("Failed to parse {source_name}: {message}")]
    Parse { source_name: String, message: String },

    /// A required top-level section is missing or has the wrong type.
    #[error("Invalid configuration at `{path}`: expected {expected}, found {found}")]
    Shape {
        path: String,
        expected: &'static str,
        found: &'static str,
    },

    /// The configuration file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

impl ConfigError {
    pub(crate) fn parse(source_name: impl Into<String>, message: impl ToString) -> Self {
        Self::Parse {
            source_name: source_name.into(),
            message: message.to_string(),
        }
    }

    pub(crate) fn missing(path: impl Into<String>, expected: &'static str) -> Self {
        Self::Shape {
            path: path.into(),
            expected,
            found: "nothing",
        }
    }

    pub(crate) fn mistyped(path: impl Into<String>, expected: &'static str, found: &Value) -> Self {
        Self::Shape {
            path: path.into(),
            expected,
            found: value_kind(found),
        }
    }

    pub const fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }

    pub const fn is_shape(&self) -> bool {
        matches!(self, Self::Shape { .. })
    }
}

/// Human name of a JSON value's type, used in error and warning messages.
pub(crate) const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}
