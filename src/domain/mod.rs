//! Domain layer for themeconf
//!
//! This module contains the theme configuration model, the warning
//! taxonomy reported while loading it, and the fatal error types.

pub mod errors;
pub mod models;

pub use errors::{ConfigError, ConfigResult};
pub use models::{
    ConfigWarning, Extensions, PluginDescriptor, ThemeConfig, TokenCategory, TokenMap,
    VariableReference, VariableUsage,
};
