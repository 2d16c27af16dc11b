//! Implementation of the `themeconf show` command.

use anyhow::Result;
use clap::Args;
use console::style;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::cli::output::{output, CommandOutput, TableFormatter};
use crate::domain::ThemeConfig;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Configuration file (.js, .json, .yaml)
    pub path: PathBuf,
}

/// The normalized configuration. JSON output is the source document
/// shape, so it can be saved and loaded again.
#[derive(Debug, serde::Serialize)]
pub struct ShowOutput {
    pub config: ThemeConfig,
}

impl CommandOutput for ShowOutput {
    fn to_human(&self) -> String {
        let config = &self.config;
        let mut lines = vec![style("Content").bold().underlined().to_string()];
        lines.extend(config.content_globs().iter().map(|glob| format!("  {glob}")));

        lines.push(String::new());
        lines.push(style("Tokens").bold().underlined().to_string());
        lines.push(TableFormatter::new().format_tokens(config));

        lines.push(String::new());
        lines.push(style("Plugins").bold().underlined().to_string());
        if config.plugins().is_empty() {
            lines.push("  (none)".to_string());
        }
        for plugin in config.plugins() {
            lines.push(format!("  {}", plugin.name().unwrap_or("<inline>")));
        }

        let extensions = config.extensions();
        if !extensions.is_empty() {
            lines.push(String::new());
            lines.push(style("Extensions").bold().underlined().to_string());
            let keys = extensions
                .root
                .keys()
                .cloned()
                .chain(extensions.theme.keys().map(|key| format!("theme.{key}")))
                .chain(extensions.extend.keys().map(|key| format!("theme.extend.{key}")));
            lines.extend(keys.map(|key| format!("  {key}")));
        }

        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        self.config.to_document()
    }
}

pub fn execute(args: &ShowArgs, json_mode: bool) -> Result<ExitCode> {
    let outcome = super::load_with_warnings(&args.path)?;
    output(&ShowOutput { config: outcome.into_config() }, json_mode);
    Ok(ExitCode::SUCCESS)
}
