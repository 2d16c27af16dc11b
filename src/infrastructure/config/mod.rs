//! Configuration management infrastructure
//!
//! - Theme configuration loading from JSON, YAML or JS module sources
//! - Shape validation with non-fatal warnings
//! - Layered tool settings using figment

pub mod js_module;
pub mod loader;
pub mod settings;
mod validator;

pub use js_module::JsModuleError;
pub use loader::{ConfigLoader, ConfigSource, LoadOutcome, SourceFormat};
pub use settings::{Settings, SettingsError};
