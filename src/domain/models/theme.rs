use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::variable::{VariableReference, VariableUsage};

/// Token name to token value, sorted by name.
pub type TokenMap = BTreeMap<String, String>;

/// Key holding the single value of `borderRadius` and `boxShadow`.
pub const DEFAULT_TOKEN: &str = "DEFAULT";

/// The design-token categories read from `theme.extend`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenCategory {
    /// `colors`: semantic color names
    Colors,
    /// `borderRadius`: the `DEFAULT` radius
    BorderRadius,
    /// `boxShadow`: the `DEFAULT` shadow
    BoxShadow,
    /// `fontFamily`: `sans` and `serif`
    FontFamily,
    /// `fontSize`: `base`, `lg` and `sm`
    FontSize,
}

impl TokenCategory {
    /// Every category, in the order they are validated.
    pub const ALL: [Self; 5] = [
        Self::Colors,
        Self::BorderRadius,
        Self::BoxShadow,
        Self::FontFamily,
        Self::FontSize,
    ];

    /// Key of this category under `theme.extend`.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Colors => "colors",
            Self::BorderRadius => "borderRadius",
            Self::BoxShadow => "boxShadow",
            Self::FontFamily => "fontFamily",
            Self::FontSize => "fontSize",
        }
    }

    /// The closed set of token names expected in this category.
    pub const fn known_keys(self) -> &'static [&'static str] {
        match self {
            Self::Colors => &[
                "base",
                "surface",
                "text",
                "accent",
                "header-bg",
                "footer-bg",
                "nav-bg",
                "nav-text",
                "button-bg",
                "button-hover",
                "input-bg",
                "input-text",
                "input-border",
                "code-bg",
                "code-text",
                "quote-bg",
                "quote-border",
                "link",
                "link-hover",
            ],
            Self::BorderRadius | Self::BoxShadow => &[DEFAULT_TOKEN],
            Self::FontFamily => &["sans", "serif"],
            Self::FontSize => &["base", "lg", "sm"],
        }
    }

    /// Whether `name` belongs to the known set of this category.
    pub fn is_known(self, name: &str) -> bool {
        self.known_keys().contains(&name)
    }

    /// Category stored under `key` in `theme.extend`.
    ///
    /// ```
    /// use themeconf::TokenCategory;
    ///
    /// assert_eq!(TokenCategory::from_key("fontSize"), Some(TokenCategory::FontSize));
    /// assert_eq!(TokenCategory::from_key("spacing"), None);
    /// ```
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.key() == key)
    }

    /// Dotted path of a token, e.g. `colors.accent`.
    pub fn token_path(self, name: &str) -> String {
        format!("{}.{name}", self.key())
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// An entry of the `plugins` sequence, kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PluginDescriptor(pub Value);

impl PluginDescriptor {
    /// Plugin name, when the descriptor is a bare string or carries a
    /// `name` field.
    pub fn name(&self) -> Option<&str> {
        match &self.0 {
            Value::String(name) => Some(name),
            Value::Object(fields) => fields.get("name").and_then(Value::as_str),
            _ => None,
        }
    }
}

/// Unrecognized keys, retained where they were found.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Extensions {
    /// Top-level keys besides `content`, `theme` and `plugins`.
    pub root: Map<String, Value>,
    /// Keys of `theme` besides `extend`.
    pub theme: Map<String, Value>,
    /// Keys of `theme.extend` that are not a token category.
    pub extend: Map<String, Value>,
}

impl Extensions {
    /// True when the source had no unrecognized keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty() && self.theme.is_empty() && self.extend.is_empty()
    }
}

/// A validated theme configuration.
///
/// Built once by [`ConfigLoader`](crate::infrastructure::config::ConfigLoader)
/// and read-only afterwards. Every category in [`TokenCategory::ALL`] is
/// always present; expected tokens that were missing from the source hold
/// an empty string.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    content_globs: Vec<String>,
    tokens: BTreeMap<TokenCategory, TokenMap>,
    plugins: Vec<PluginDescriptor>,
    extensions: Extensions,
}

static NO_TOKENS: TokenMap = TokenMap::new();

impl ThemeConfig {
    pub(crate) fn new(
        content_globs: Vec<String>,
        tokens: BTreeMap<TokenCategory, TokenMap>,
        plugins: Vec<PluginDescriptor>,
        extensions: Extensions,
    ) -> Self {
        Self {
            content_globs,
            tokens,
            plugins,
            extensions,
        }
    }

    /// Glob patterns of the files to scan for class usage, in source order.
    pub fn content_globs(&self) -> &[String] {
        &self.content_globs
    }

    /// All tokens of a category, known and unknown.
    pub fn tokens(&self, category: TokenCategory) -> &TokenMap {
        self.tokens.get(&category).unwrap_or(&NO_TOKENS)
    }

    /// Value of a single token.
    pub fn token(&self, category: TokenCategory, name: &str) -> Option<&str> {
        self.tokens(category).get(name).map(String::as_str)
    }

    /// The `colors` tokens.
    pub fn color_tokens(&self) -> &TokenMap {
        self.tokens(TokenCategory::Colors)
    }

    /// The `fontFamily` tokens.
    pub fn font_family(&self) -> &TokenMap {
        self.tokens(TokenCategory::FontFamily)
    }

    /// The `fontSize` tokens.
    pub fn font_size(&self) -> &TokenMap {
        self.tokens(TokenCategory::FontSize)
    }

    /// The `borderRadius.DEFAULT` value.
    pub fn radius(&self) -> &str {
        self.token(TokenCategory::BorderRadius, DEFAULT_TOKEN)
            .unwrap_or_default()
    }

    /// The `boxShadow.DEFAULT` value.
    pub fn shadow(&self) -> &str {
        self.token(TokenCategory::BoxShadow, DEFAULT_TOKEN)
            .unwrap_or_default()
    }

    /// Plugin descriptors in source order.
    pub fn plugins(&self) -> &[PluginDescriptor] {
        &self.plugins
    }

    /// Unrecognized sections kept from the source.
    pub fn extensions(&self) -> &Extensions {
        &self.extensions
    }

    /// Number of tokens across all categories.
    pub fn token_count(&self) -> usize {
        self.tokens.values().map(BTreeMap::len).sum()
    }

    /// Iterate over every token as `(category, name, value)`.
    pub fn iter_tokens(&self) -> impl Iterator<Item = (TokenCategory, &str, &str)> {
        self.tokens.iter().flat_map(|(category, tokens)| {
            tokens
                .iter()
                .map(move |(name, value)| (*category, name.as_str(), value.as_str()))
        })
    }

    /// Runtime variables referenced by the theme, with the tokens using them.
    ///
    /// Values that are not `var(--name)` references are skipped.
    pub fn variable_usage(&self) -> Vec<VariableUsage> {
        let mut usage: BTreeMap<String, VariableUsage> = BTreeMap::new();
        for (category, name, value) in self.iter_tokens() {
            let Some(reference) = VariableReference::parse(value) else {
                continue;
            };
            usage
                .entry(reference.name.clone())
                .or_insert_with(|| VariableUsage::new(reference.name.clone()))
                .record(category.token_path(name), reference.fallback);
        }
        usage.into_values().collect()
    }

    /// Names of the runtime variables the theme depends on, sorted.
    pub fn variables(&self) -> Vec<String> {
        self.variable_usage().into_iter().map(|usage| usage.name).collect()
    }

    /// Render the configuration back into its source document shape.
    ///
    /// Loading the returned document yields a configuration equal to `self`.
    pub fn to_document(&self) -> Value {
        let mut extend = self.extensions.extend.clone();
        for (category, tokens) in &self.tokens {
            let entries: Map<String, Value> = tokens
                .iter()
                .map(|(name, value)| (name.clone(), Value::String(value.clone())))
                .collect();
            extend.insert(category.key().to_string(), Value::Object(entries));
        }

        let mut theme = self.extensions.theme.clone();
        theme.insert("extend".to_string(), Value::Object(extend));

        let mut root = self.extensions.root.clone();
        root.insert(
            "content".to_string(),
            Value::Array(
                self.content_globs
                    .iter()
                    .cloned()
                    .map(Value::String)
                    .collect(),
            ),
        );
        root.insert("theme".to_string(), Value::Object(theme));
        root.insert(
            "plugins".to_string(),
            Value::Array(self.plugins.iter().map(|plugin| plugin.0.clone()).collect()),
        );
        Value::Object(root)
    }
}
