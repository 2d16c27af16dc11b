//! Non-fatal anomalies collected while loading a configuration.

use std::fmt;

use serde::Serialize;

/// A field-level anomaly. The configuration is still returned; the
/// consuming tool proceeds with best-effort defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConfigWarning {
    /// A token name outside the category's known set. The value is kept.
    UnknownKey { path: String },
    /// A section this loader does not interpret. Kept in the extensions.
    UnknownSection { path: String },
    /// An expected token is absent; an empty string was substituted.
    MissingKey { path: String },
    /// A token value is the empty string.
    EmptyValue { path: String },
    /// A token value is not a string; an empty string was substituted.
    InvalidValue { path: String, found: &'static str },
    /// An empty glob pattern was skipped.
    EmptyGlob { index: usize },
}

impl ConfigWarning {
    /// Dotted path of the offending field, e.g. `colors.accent`.
    pub fn path(&self) -> String {
        match self {
            Self::UnknownKey { path }
            | Self::UnknownSection { path }
            | Self::MissingKey { path }
            | Self::EmptyValue { path }
            | Self::InvalidValue { path, .. } => path.clone(),
            Self::EmptyGlob { index } => format!("content[{index}]"),
        }
    }

    /// Whether the consuming tool will see an empty value for this field.
    pub const fn substitutes_default(&self) -> bool {
        matches!(
            self,
            Self::MissingKey { .. } | Self::EmptyValue { .. } | Self::InvalidValue { .. }
        )
    }
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownKey { path } => write!(f, "{path}: unrecognized token name"),
            Self::UnknownSection { path } => write!(f, "{path}: unrecognized section, kept as-is"),
            Self::MissingKey { path } => write!(f, "{path}: missing, using an empty value"),
            Self::EmptyValue { path } => write!(f, "{path}: empty value"),
            Self::InvalidValue { path, found } => {
                write!(f, "{path}: expected a string, found {found}; using an empty value")
            }
            Self::EmptyGlob { index } => write!(f, "content[{index}]: empty glob pattern skipped"),
        }
    }
}
