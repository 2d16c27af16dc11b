//! themeconf - theme configuration loader for utility-CSS generators
//!
//! Reads the `content` globs and `theme.extend` design tokens of a
//! Tailwind-style configuration (JSON, YAML, or a declarative
//! `module.exports = { ... }` file), validates them against the expected
//! token names, and hands an immutable [`ThemeConfig`] to the build tool.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): the configuration model, warnings and errors
//! - **Infrastructure Layer** (`infrastructure`): source readers, validation,
//!   tool settings and logging
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```no_run
//! use themeconf::ConfigLoader;
//!
//! let outcome = ConfigLoader::load_file("theme/static_src/tailwind.config.js")?;
//! for warning in &outcome.warnings {
//!     eprintln!("warning: {warning}");
//! }
//! let globs = outcome.config.content_globs();
//! # let _ = globs;
//! # Ok::<(), themeconf::ConfigError>(())
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use domain::{
    ConfigError, ConfigResult, ConfigWarning, Extensions, PluginDescriptor, ThemeConfig,
    TokenCategory, TokenMap, VariableReference, VariableUsage,
};
pub use infrastructure::config::{ConfigLoader, ConfigSource, LoadOutcome, SourceFormat};
