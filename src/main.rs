//! themeconf CLI entry point.

use clap::Parser;
use std::process::ExitCode;

use themeconf::cli::{handle_error, run, Cli};
use themeconf::infrastructure::config::Settings;
use themeconf::infrastructure::logging::LoggerImpl;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = match Settings::load(cli.settings.as_deref()) {
        Ok(settings) => settings,
        Err(err) => return handle_error(&err, cli.json),
    };
    let _logger = match LoggerImpl::init(&settings.logging) {
        Ok(logger) => logger,
        Err(err) => return handle_error(&err, cli.json),
    };

    run(&cli).unwrap_or_else(|err| handle_error(&err, cli.json))
}
