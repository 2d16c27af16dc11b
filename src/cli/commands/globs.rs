//! Implementation of the `themeconf globs` command.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::cli::output::{output, CommandOutput};

#[derive(Args, Debug)]
pub struct GlobsArgs {
    /// Configuration file (.js, .json, .yaml)
    pub path: PathBuf,
}

#[derive(Debug, serde::Serialize)]
pub struct GlobsOutput {
    pub content: Vec<String>,
}

impl CommandOutput for GlobsOutput {
    fn to_human(&self) -> String {
        self.content.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub fn execute(args: &GlobsArgs, json_mode: bool) -> Result<ExitCode> {
    let outcome = super::load_with_warnings(&args.path)?;
    let output_data = GlobsOutput {
        content: outcome.config.content_globs().to_vec(),
    };
    output(&output_data, json_mode);
    Ok(ExitCode::SUCCESS)
}
