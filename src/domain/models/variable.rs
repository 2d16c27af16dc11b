//! CSS custom-property references (`var(--name)`) used as token values.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A parsed `var(--name)` or `var(--name, fallback)` value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableReference {
    /// Property name without the leading `--`.
    pub name: String,
    /// Text after the first comma, trimmed.
    pub fallback: Option<String>,
}

impl VariableReference {
    /// Parse a token value. Returns `None` for anything that is not a
    /// single variable reference.
    pub fn parse(value: &str) -> Option<Self> {
        let inner = value.trim().strip_prefix("var(")?.strip_suffix(')')?;
        let (name, fallback) = match inner.split_once(',') {
            Some((name, fallback)) => (name.trim(), Some(fallback.trim().to_string())),
            None => (inner.trim(), None),
        };

        let name = name.strip_prefix("--")?;
        let valid = !name.is_empty()
            && name
                .chars()
                .all(|c| c.is_alphanumeric() || c == '-' || c == '_');
        valid.then(|| Self {
            name: name.to_string(),
            fallback: fallback.filter(|f| !f.is_empty()),
        })
    }
}

impl fmt::Display for VariableReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.fallback {
            Some(fallback) => write!(f, "var(--{}, {fallback})", self.name),
            None => write!(f, "var(--{})", self.name),
        }
    }
}

/// A runtime variable and the tokens that reference it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariableUsage {
    pub name: String,
    /// Token paths such as `colors.accent`, in category then name order.
    pub used_by: Vec<String>,
    /// Distinct fallbacks declared alongside the reference.
    pub fallbacks: Vec<String>,
}

impl VariableUsage {
    pub(crate) const fn new(name: String) -> Self {
        Self {
            name,
            used_by: Vec::new(),
            fallbacks: Vec::new(),
        }
    }

    pub(crate) fn record(&mut self, token_path: String, fallback: Option<String>) {
        self.used_by.push(token_path);
        if let Some(fallback) = fallback {
            if !self.fallbacks.contains(&fallback) {
                self.fallbacks.push(fallback);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_reference() {
        let reference = VariableReference::parse("var(--header-bg)").unwrap();
        assert_eq!(reference.name, "header-bg");
        assert_eq!(reference.fallback, None);
        assert_eq!(reference.to_string(), "var(--header-bg)");
    }

    #[test]
    fn test_parse_with_fallback() {
        let reference = VariableReference::parse(" var(--font-sans, system-ui) ").unwrap();
        assert_eq!(reference.name, "font-sans");
        assert_eq!(reference.fallback.as_deref(), Some("system-ui"));
    }

    #[test]
    fn test_parse_nested_fallback() {
        let reference = VariableReference::parse("var(--link-hover, var(--link-color))").unwrap();
        assert_eq!(reference.name, "link-hover");
        assert_eq!(reference.fallback.as_deref(), Some("var(--link-color)"));
    }

    #[test]
    fn test_rejects_literals() {
        assert_eq!(VariableReference::parse("#1e1e2e"), None);
        assert_eq!(VariableReference::parse("var(accent)"), None);
        assert_eq!(VariableReference::parse("var(--)"), None);
        assert_eq!(VariableReference::parse("var(--a b)"), None);
        assert_eq!(VariableReference::parse(""), None);
    }

    #[test]
    fn test_usage_deduplicates_fallbacks() {
        let mut usage = VariableUsage::new("accent".to_string());
        usage.record("colors.accent".to_string(), Some("red".to_string()));
        usage.record("colors.link".to_string(), Some("red".to_string()));
        usage.record("colors.text".to_string(), None);
        assert_eq!(usage.used_by.len(), 3);
        assert_eq!(usage.fallbacks, vec!["red"]);
    }
}
