//! Table output formatting for CLI commands
//!
//! Renders theme tokens and variable usage with comfy-table.

use crate::domain::{ThemeConfig, VariableReference, VariableUsage};
use comfy_table::{presets, Attribute, Cell, Color, ContentArrangement, Table};
use std::env;

/// Table formatter for CLI output
pub struct TableFormatter {
    /// Whether to use colors in output
    use_colors: bool,
    /// Maximum width for tables (None = auto)
    max_width: Option<u16>,
}

impl TableFormatter {
    pub fn new() -> Self {
        Self {
            use_colors: supports_color(),
            max_width: None,
        }
    }

    pub const fn with_config(use_colors: bool, max_width: Option<u16>) -> Self {
        Self {
            use_colors,
            max_width,
        }
    }

    /// Format every token of a configuration, grouped by category
    pub fn format_tokens(&self, config: &ThemeConfig) -> String {
        let mut table = self.create_base_table();
        table.set_header(vec![
            Cell::new("Category").add_attribute(Attribute::Bold),
            Cell::new("Token").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        for (category, name, value) in config.iter_tokens() {
            let known = category.is_known(name);
            let name_cell = if self.use_colors && !known {
                Cell::new(name).fg(Color::Yellow)
            } else if known {
                Cell::new(name)
            } else {
                Cell::new(format!("{name} (?)"))
            };

            let value_cell = if value.is_empty() {
                let cell = Cell::new("<empty>");
                if self.use_colors {
                    cell.fg(Color::Red)
                } else {
                    cell
                }
            } else if self.use_colors && VariableReference::parse(value).is_some() {
                Cell::new(value).fg(Color::Cyan)
            } else {
                Cell::new(value)
            };

            table.add_row(vec![Cell::new(category.key()), name_cell, value_cell]);
        }

        table.to_string()
    }

    /// Format runtime variables with the tokens that reference them
    pub fn format_variables(&self, variables: &[VariableUsage]) -> String {
        let mut table = self.create_base_table();
        table.set_header(vec![
            Cell::new("Variable").add_attribute(Attribute::Bold),
            Cell::new("Used by").add_attribute(Attribute::Bold),
            Cell::new("Fallback").add_attribute(Attribute::Bold),
        ]);

        for usage in variables {
            let name = format!("--{}", usage.name);
            let name_cell = if self.use_colors {
                Cell::new(name).fg(Color::Cyan)
            } else {
                Cell::new(name)
            };
            let fallback = if usage.fallbacks.is_empty() {
                "-".to_string()
            } else {
                usage.fallbacks.join(", ")
            };
            table.add_row(vec![
                name_cell,
                Cell::new(usage.used_by.join("\n")),
                Cell::new(fallback),
            ]);
        }

        table.to_string()
    }

    /// Create a base table with common settings
    fn create_base_table(&self) -> Table {
        let mut table = Table::new();

        table
            .load_preset(presets::UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        if let Some(width) = self.max_width {
            table.set_width(width);
        }

        table
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Check if color output is supported
fn supports_color() -> bool {
    // Respect NO_COLOR environment variable
    if env::var("NO_COLOR").is_ok() {
        return false;
    }
    console::colors_enabled()
}
