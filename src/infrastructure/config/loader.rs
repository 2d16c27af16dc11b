use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::js_module;
use super::validator;
use crate::domain::{ConfigError, ConfigResult, ConfigWarning, ThemeConfig};

/// Text formats a configuration source can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceFormat {
    /// Plain JSON document
    Json,
    /// YAML document
    Yaml,
    /// `module.exports = { ... }` / `export default { ... }`
    JsModule,
}

impl SourceFormat {
    /// Format implied by a file extension, if any.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            "js" | "cjs" | "mjs" => Some(Self::JsModule),
            _ => None,
        }
    }

    /// Guess the format of text whose origin gives no hint.
    pub fn sniff(text: &str) -> Self {
        if js_module::looks_like_module(text) {
            Self::JsModule
        } else if text.trim_start().starts_with('{') {
            Self::Json
        } else {
            Self::Yaml
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Json => "JSON",
            Self::Yaml => "YAML",
            Self::JsModule => "JS module",
        })
    }
}

/// Where a configuration is read from.
#[derive(Debug, Clone)]
pub enum ConfigSource {
    /// An already deserialized document.
    Document(Value),
    /// Configuration text in a known format.
    Text {
        /// Raw configuration text
        text: String,
        /// Format the text is written in
        format: SourceFormat,
    },
    /// A file; the format follows the extension, or is sniffed from the
    /// content when the extension is not recognized.
    File(PathBuf),
}

impl From<Value> for ConfigSource {
    fn from(value: Value) -> Self {
        Self::Document(value)
    }
}

impl From<PathBuf> for ConfigSource {
    fn from(path: PathBuf) -> Self {
        Self::File(path)
    }
}

impl From<&Path> for ConfigSource {
    fn from(path: &Path) -> Self {
        Self::File(path.to_path_buf())
    }
}

/// A successfully loaded configuration and the warnings raised on the way.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadOutcome {
    /// The validated configuration
    pub config: ThemeConfig,
    /// Non-fatal anomalies, in the order they were found
    pub warnings: Vec<ConfigWarning>,
}

impl LoadOutcome {
    /// True when the source matched the expected schema exactly.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Drop the warnings and keep the configuration.
    pub fn into_config(self) -> ThemeConfig {
        self.config
    }
}

/// Loads and validates theme configurations.
///
/// Loading is a pure transform of the source: nothing is cached and no
/// state is shared between calls.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load, validate and return the configuration described by `source`.
    ///
    /// Fails with [`ConfigError::Parse`] when the source cannot be
    /// deserialized and [`ConfigError::Shape`] when `content`, `theme` or
    /// `plugins` is missing or mistyped. All other anomalies are returned
    /// as warnings next to the configuration.
    pub fn load(source: impl Into<ConfigSource>) -> ConfigResult<LoadOutcome> {
        match source.into() {
            ConfigSource::Document(document) => Self::load_value(&document),
            ConfigSource::Text { text, format } => Self::load_str(&text, format),
            ConfigSource::File(path) => Self::load_file(path),
        }
    }

    /// Load a configuration file.
    pub fn load_file(path: impl AsRef<Path>) -> ConfigResult<LoadOutcome> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let format = SourceFormat::from_path(path).unwrap_or_else(|| SourceFormat::sniff(&text));
        let document = Self::parse(&text, format, &path.display().to_string())?;
        Self::finish(&document, &path.display().to_string())
    }

    /// Load configuration text in the given format.
    pub fn load_str(text: &str, format: SourceFormat) -> ConfigResult<LoadOutcome> {
        let label = format!("{format} source");
        let document = Self::parse(text, format, &label)?;
        Self::finish(&document, &label)
    }

    /// Validate an in-memory document.
    pub fn load_value(document: &Value) -> ConfigResult<LoadOutcome> {
        Self::finish(document, "in-memory document")
    }

    /// Deserialize `text` into a generic document without validating it.
    pub fn parse(text: &str, format: SourceFormat, source_name: &str) -> ConfigResult<Value> {
        match format {
            SourceFormat::Json => {
                serde_json::from_str(text).map_err(|err| ConfigError::parse(source_name, err))
            }
            SourceFormat::Yaml => {
                serde_yaml::from_str(text).map_err(|err| ConfigError::parse(source_name, err))
            }
            SourceFormat::JsModule => {
                js_module::parse_module(text).map_err(|err| ConfigError::parse(source_name, err))
            }
        }
    }

    fn finish(document: &Value, source_name: &str) -> ConfigResult<LoadOutcome> {
        let (config, warnings) = validator::validate(document).inspect_err(|err| {
            tracing::debug!(source = source_name, error = %err, "configuration rejected");
        })?;

        tracing::debug!(
            source = source_name,
            globs = config.content_globs().len(),
            tokens = config.token_count(),
            warnings = warnings.len(),
            "configuration loaded"
        );

        Ok(LoadOutcome { config, warnings })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const MINIMAL_YAML: &str = r"
content:
  - ./templates/**/*.html
theme:
  extend:
    colors:
      accent: var(--accent)
plugins: []
";

    fn temp_file(suffix: &str, contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        write!(file, "{contents}").unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            SourceFormat::from_path(Path::new("tailwind.config.js")),
            Some(SourceFormat::JsModule)
        );
        assert_eq!(
            SourceFormat::from_path(Path::new("theme.YML")),
            Some(SourceFormat::Yaml)
        );
        assert_eq!(SourceFormat::from_path(Path::new("theme.json")), Some(SourceFormat::Json));
        assert_eq!(SourceFormat::from_path(Path::new("theme.conf")), None);
        assert_eq!(SourceFormat::from_path(Path::new("theme")), None);
    }

    #[test]
    fn test_sniff() {
        assert_eq!(SourceFormat::sniff("module.exports = {}"), SourceFormat::JsModule);
        assert_eq!(SourceFormat::sniff("  {\"content\": []}"), SourceFormat::Json);
        assert_eq!(SourceFormat::sniff("content: []"), SourceFormat::Yaml);
        assert_eq!(
            SourceFormat::sniff("{\"note\": \"replaces export default\"}"),
            SourceFormat::Json
        );
    }

    #[test]
    fn test_json_mentioning_exports_loads_as_json() {
        let file = temp_file(
            ".conf",
            "{\"content\": [\"x\"], \"theme\": {\"extend\": {}}, \"plugins\": [], \"note\": \"replaces export default\"}",
        );
        let outcome = ConfigLoader::load_file(file.path()).unwrap();
        assert_eq!(outcome.config.content_globs(), ["x"]);
        assert_eq!(
            outcome.config.extensions().root["note"],
            json!("replaces export default")
        );
    }

    #[test]
    fn test_load_yaml_str() {
        let outcome = ConfigLoader::load_str(MINIMAL_YAML, SourceFormat::Yaml).unwrap();
        assert_eq!(outcome.config.content_globs(), ["./templates/**/*.html"]);
        assert_eq!(outcome.config.color_tokens()["accent"], "var(--accent)");
        // everything but `colors.accent` is missing
        assert!(!outcome.is_clean());
        assert!(outcome
            .warnings
            .iter()
            .all(|w| matches!(w, ConfigWarning::MissingKey { .. })));
    }

    #[test]
    fn test_load_value_and_source_conversion() {
        let document = json!({"content": [], "theme": {"extend": {}}, "plugins": []});
        let by_ref = ConfigLoader::load_value(&document).unwrap();
        let by_source = ConfigLoader::load(document).unwrap();
        assert_eq!(by_ref, by_source);
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = ConfigLoader::load_str("{\"content\": [", SourceFormat::Json).unwrap_err();
        assert!(err.is_parse(), "expected parse error, got {err:?}");
    }

    #[test]
    fn test_malformed_yaml_is_parse_error() {
        let err = ConfigLoader::load_str("content: [unclosed", SourceFormat::Yaml).unwrap_err();
        assert!(err.is_parse());
    }

    #[test]
    fn test_load_file_by_extension() {
        let file = temp_file(".yaml", MINIMAL_YAML);
        let outcome = ConfigLoader::load_file(file.path()).unwrap();
        assert_eq!(outcome.config.color_tokens()["accent"], "var(--accent)");
    }

    #[test]
    fn test_load_js_file() {
        let file = temp_file(
            ".js",
            "module.exports = { content: ['*.html'], theme: { extend: {} }, plugins: [] }",
        );
        let outcome = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(outcome.config.content_globs(), ["*.html"]);
    }

    #[test]
    fn test_load_file_sniffs_unknown_extension() {
        let file = temp_file(".conf", "{\"content\": [], \"theme\": {\"extend\": {}}, \"plugins\": []}");
        assert!(ConfigLoader::load_file(file.path()).is_ok());
    }

    #[test]
    fn test_parse_error_names_the_file() {
        let file = temp_file(".js", "module.exports = { plugins: [require('x')] }");
        let err = ConfigLoader::load_file(file.path()).unwrap_err();
        match err {
            ConfigError::Parse { source_name, message } => {
                assert_eq!(source_name, file.path().display().to_string());
                assert!(message.contains("require"));
            }
            other => panic!("Expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ConfigLoader::load_file(dir.path().join("absent.js")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
