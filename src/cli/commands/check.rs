//! Implementation of the `themeconf check` command.

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::cli::output::{output, CommandOutput};
use crate::domain::ConfigWarning;
use crate::infrastructure::config::ConfigLoader;

/// Exit code used when `--deny-warnings` is set and warnings were raised.
pub const WARNINGS_EXIT_CODE: u8 = 2;

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Configuration file (.js, .json, .yaml)
    pub path: PathBuf,

    /// Exit with status 2 when the configuration loads with warnings
    #[arg(long)]
    pub deny_warnings: bool,
}

#[derive(Debug, serde::Serialize)]
pub struct CheckOutput {
    pub path: PathBuf,
    pub globs: usize,
    pub tokens: usize,
    pub plugins: usize,
    pub warnings: Vec<ConfigWarning>,
}

impl CommandOutput for CheckOutput {
    fn to_human(&self) -> String {
        let summary = format!(
            "{} globs, {} tokens, {} plugins",
            self.globs, self.tokens, self.plugins
        );
        let mut lines = if self.warnings.is_empty() {
            vec![format!("{} {}: valid ({summary})", style("✓").green(), self.path.display())]
        } else {
            vec![format!(
                "{} {}: valid with {} warning(s) ({summary})",
                style("!").yellow(),
                self.path.display(),
                self.warnings.len()
            )]
        };
        for warning in &self.warnings {
            lines.push(format!("  {} {warning}", style("warning:").yellow().bold()));
        }
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub fn execute(args: &CheckArgs, json_mode: bool) -> Result<ExitCode> {
    let outcome = ConfigLoader::load_file(&args.path)
        .with_context(|| format!("Failed to load theme configuration {}", args.path.display()))?;

    let has_warnings = !outcome.is_clean();
    let config = &outcome.config;
    let output_data = CheckOutput {
        path: args.path.clone(),
        globs: config.content_globs().len(),
        tokens: config.token_count(),
        plugins: config.plugins().len(),
        warnings: outcome.warnings,
    };
    output(&output_data, json_mode);

    if has_warnings && args.deny_warnings {
        Ok(ExitCode::from(WARNINGS_EXIT_CODE))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
