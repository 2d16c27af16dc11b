//! CLI command implementations.

pub mod check;
pub mod globs;
pub mod show;
pub mod vars;

use std::path::Path;

use anyhow::{Context, Result};

use crate::infrastructure::config::{ConfigLoader, LoadOutcome};

/// Load a configuration file for a read-only command, logging its warnings.
pub(crate) fn load_with_warnings(path: &Path) -> Result<LoadOutcome> {
    let outcome = ConfigLoader::load_file(path)
        .with_context(|| format!("Failed to load theme configuration {}", path.display()))?;
    for warning in &outcome.warnings {
        tracing::warn!(path = %warning.path(), "{warning}");
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use std::process::ExitCode;
    use tempfile::NamedTempFile;

    const THEME: &str = "content:\n  - ./templates/**/*.html\ntheme:\n  extend:\n    colors:\n      accent: var(--accent)\n      mystery: '#fff'\nplugins: []\n";

    fn config_file() -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        write!(file, "{THEME}").unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_with_warnings_keeps_warnings() {
        let file = config_file();
        let outcome = load_with_warnings(file.path()).unwrap();
        assert_eq!(outcome.config.content_globs(), ["./templates/**/*.html"]);
        assert!(!outcome.warnings.is_empty());
    }

    #[test]
    fn test_load_with_warnings_names_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.yaml");
        let err = load_with_warnings(&path).unwrap_err();
        assert!(err.to_string().contains("absent.yaml"));
    }

    #[test]
    fn test_read_only_commands_exit_successfully() {
        let file = config_file();
        let path = file.path().to_path_buf();

        let code = show::execute(&show::ShowArgs { path: path.clone() }, true).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);

        let args = vars::VarsArgs {
            path: path.clone(),
            names_only: true,
        };
        assert_eq!(vars::execute(&args, false).unwrap(), ExitCode::SUCCESS);

        let code = globs::execute(&globs::GlobsArgs { path }, false).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
    }

    #[test]
    fn test_read_only_commands_fail_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path: PathBuf = dir.path().join("absent.js");

        assert!(show::execute(&show::ShowArgs { path: path.clone() }, false).is_err());
        let args = vars::VarsArgs {
            path: path.clone(),
            names_only: false,
        };
        assert!(vars::execute(&args, false).is_err());
        assert!(globs::execute(&globs::GlobsArgs { path }, true).is_err());
    }
}
