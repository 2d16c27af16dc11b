pub mod theme;
pub mod variable;
pub mod warning;

pub use theme::{Extensions, PluginDescriptor, ThemeConfig, TokenCategory, TokenMap};
pub use variable::{VariableReference, VariableUsage};
pub use warning::ConfigWarning;
