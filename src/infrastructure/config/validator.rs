//! Shape validation of a parsed configuration document.
//!
//! Structural problems in `content`, `theme`, `theme.extend` and `plugins`
//! abort with [`ConfigError::Shape`]. Anything below the category level is
//! recorded as a [`ConfigWarning`] and replaced with a default.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::domain::errors::value_kind;
use crate::domain::{
    ConfigError, ConfigResult, ConfigWarning, Extensions, PluginDescriptor, ThemeConfig,
    TokenCategory, TokenMap,
};

const ROOT_SECTIONS: [&str; 3] = ["content", "theme", "plugins"];

/// Validate `document` and build the configuration it describes.
pub(crate) fn validate(document: &Value) -> ConfigResult<(ThemeConfig, Vec<ConfigWarning>)> {
    let mut validator = Validator::default();
    let config = validator.run(document)?;
    Ok((config, validator.warnings))
}

#[derive(Default)]
struct Validator {
    warnings: Vec<ConfigWarning>,
}

impl Validator {
    fn run(&mut self, document: &Value) -> ConfigResult<ThemeConfig> {
        let root = document
            .as_object()
            .ok_or_else(|| ConfigError::mistyped("<root>", "a mapping", document))?;

        let content = required(root, "content", "content", "a sequence of glob strings")?;
        let content_globs = self.content_globs(content)?;

        let theme = required(root, "theme", "theme", "a mapping with an `extend` section")?;
        let theme = theme
            .as_object()
            .ok_or_else(|| ConfigError::mistyped("theme", "a mapping with an `extend` section", theme))?;
        let extend = required(theme, "extend", "theme.extend", "a mapping of token categories")?;
        let extend = extend
            .as_object()
            .ok_or_else(|| ConfigError::mistyped("theme.extend", "a mapping of token categories", extend))?;

        let plugins = required(root, "plugins", "plugins", "a sequence of plugin descriptors")?;
        let plugins = plugins
            .as_array()
            .ok_or_else(|| ConfigError::mistyped("plugins", "a sequence of plugin descriptors", plugins))?
            .iter()
            .cloned()
            .map(PluginDescriptor)
            .collect();

        let mut tokens = BTreeMap::new();
        for category in TokenCategory::ALL {
            let entries = match extend.get(category.key()) {
                None => None,
                Some(Value::Object(entries)) => Some(entries),
                Some(other) => {
                    return Err(ConfigError::mistyped(
                        format!("theme.extend.{category}"),
                        "a mapping of token names to strings",
                        other,
                    ))
                }
            };
            tokens.insert(category, self.category(category, entries));
        }

        let extensions = Extensions {
            root: self.unknown_sections(root, &ROOT_SECTIONS, ""),
            theme: self.unknown_sections(theme, &["extend"], "theme."),
            extend: self.unknown_extend_sections(extend),
        };

        Ok(ThemeConfig::new(content_globs, tokens, plugins, extensions))
    }

    fn content_globs(&mut self, content: &Value) -> ConfigResult<Vec<String>> {
        let patterns = content
            .as_array()
            .ok_or_else(|| ConfigError::mistyped("content", "a sequence of glob strings", content))?;

        let mut globs = Vec::with_capacity(patterns.len());
        for (index, pattern) in patterns.iter().enumerate() {
            match pattern {
                Value::String(glob) if glob.is_empty() => {
                    self.warnings.push(ConfigWarning::EmptyGlob { index });
                }
                Value::String(glob) => globs.push(glob.clone()),
                other => {
                    return Err(ConfigError::mistyped(
                        format!("content[{index}]"),
                        "a glob string",
                        other,
                    ))
                }
            }
        }
        Ok(globs)
    }

    fn category(&mut self, category: TokenCategory, entries: Option<&Map<String, Value>>) -> TokenMap {
        let mut tokens = TokenMap::new();

        for (name, value) in entries.into_iter().flatten() {
            let path = category.token_path(name);
            if !category.is_known(name) {
                self.warnings.push(ConfigWarning::UnknownKey { path: path.clone() });
            }
            let value = match value {
                Value::String(text) => {
                    if text.is_empty() {
                        self.warnings.push(ConfigWarning::EmptyValue { path });
                    }
                    text.clone()
                }
                other => {
                    self.warnings.push(ConfigWarning::InvalidValue {
                        path,
                        found: value_kind(other),
                    });
                    String::new()
                }
            };
            tokens.insert(name.clone(), value);
        }

        for name in category.known_keys() {
            if !tokens.contains_key(*name) {
                self.warnings.push(ConfigWarning::MissingKey {
                    path: category.token_path(name),
                });
                tokens.insert((*name).to_string(), String::new());
            }
        }

        tokens
    }

    fn unknown_sections(
        &mut self,
        section: &Map<String, Value>,
        known: &[&str],
        prefix: &str,
    ) -> Map<String, Value> {
        let mut unknown = Map::new();
        for (key, value) in section {
            if known.contains(&key.as_str()) {
                continue;
            }
            self.warnings.push(ConfigWarning::UnknownSection {
                path: format!("{prefix}{key}"),
            });
            unknown.insert(key.clone(), value.clone());
        }
        unknown
    }

    fn unknown_extend_sections(&mut self, extend: &Map<String, Value>) -> Map<String, Value> {
        let known: Vec<&str> = TokenCategory::ALL.iter().map(|c| c.key()).collect();
        self.unknown_sections(extend, &known, "theme.extend.")
    }
}

fn required<'a>(
    section: &'a Map<String, Value>,
    key: &str,
    path: &str,
    expected: &'static str,
) -> ConfigResult<&'a Value> {
    section
        .get(key)
        .ok_or_else(|| ConfigError::missing(path, expected))
}
