//! Implementation of the `themeconf vars` command.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::cli::output::{output, CommandOutput, TableFormatter};
use crate::domain::{VariableReference, VariableUsage};

#[derive(Args, Debug)]
pub struct VarsArgs {
    /// Configuration file (.js, .json, .yaml)
    pub path: PathBuf,

    /// Print variable names only, one per line
    #[arg(long, short)]
    pub names_only: bool,
}

#[derive(Debug, serde::Serialize)]
pub struct VarsOutput {
    pub variables: Vec<VariableUsage>,
    /// Tokens whose value is not a variable reference
    pub literals: Vec<String>,
    #[serde(skip)]
    names_only: bool,
}

impl CommandOutput for VarsOutput {
    fn to_human(&self) -> String {
        if self.names_only {
            return self
                .variables
                .iter()
                .map(|usage| format!("--{}", usage.name))
                .collect::<Vec<_>>()
                .join("\n");
        }

        let mut rendered = TableFormatter::new().format_variables(&self.variables);
        if !self.literals.is_empty() {
            rendered.push_str("\n\nLiteral values: ");
            rendered.push_str(&self.literals.join(", "));
        }
        rendered
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub fn execute(args: &VarsArgs, json_mode: bool) -> Result<ExitCode> {
    let outcome = super::load_with_warnings(&args.path)?;
    let config = &outcome.config;

    let literals = config
        .iter_tokens()
        .filter(|(_, _, value)| !value.is_empty() && VariableReference::parse(value).is_none())
        .map(|(category, name, _)| category.token_path(name))
        .collect();

    let output_data = VarsOutput {
        variables: config.variable_usage(),
        literals,
        names_only: args.names_only,
    };
    output(&output_data, json_mode);
    Ok(ExitCode::SUCCESS)
}
