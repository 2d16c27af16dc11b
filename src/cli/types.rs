//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::commands::check::CheckArgs;
use super::commands::globs::GlobsArgs;
use super::commands::show::ShowArgs;
use super::commands::vars::VarsArgs;

#[derive(Parser, Debug)]
#[command(name = "themeconf")]
#[command(about = "Validate and inspect utility-CSS theme configuration", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Settings file for the tool itself (logging)
    #[arg(long, global = true, env = "THEMECONF_SETTINGS")]
    pub settings: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load a configuration and report warnings
    Check(CheckArgs),

    /// Print the normalized configuration
    Show(ShowArgs),

    /// List the runtime variables the theme references
    Vars(VarsArgs),

    /// Print the content globs in order
    Globs(GlobsArgs),
}
