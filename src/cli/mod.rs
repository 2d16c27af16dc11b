//! Command-line interface
//!
//! `themeconf check|show|vars|globs <file>` with human or `--json` output.

pub mod commands;
pub mod output;
pub mod types;

pub use types::{Cli, Commands};

use console::style;
use std::process::ExitCode;

/// Dispatch a parsed command line.
pub fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    match &cli.command {
        Commands::Check(args) => commands::check::execute(args, cli.json),
        Commands::Show(args) => commands::show::execute(args, cli.json),
        Commands::Vars(args) => commands::vars::execute(args, cli.json),
        Commands::Globs(args) => commands::globs::execute(args, cli.json),
    }
}

/// Report a fatal error and return the failure exit code.
pub fn handle_error(err: &anyhow::Error, json_mode: bool) -> ExitCode {
    if json_mode {
        let chain: Vec<String> = err.chain().map(ToString::to_string).collect();
        let body = serde_json::json!({
            "success": false,
            "error": err.to_string(),
            "causes": &chain[1..],
        });
        println!("{}", serde_json::to_string_pretty(&body).unwrap_or_default());
    } else {
        eprintln!("{} {err:#}", style("error:").red().bold());
    }
    ExitCode::FAILURE
}
