use clap::Parser;
use std::path::PathBuf;
use themeconf::cli::{Cli, Commands};

#[test]
fn test_parse_check() {
    let cli = Cli::try_parse_from(["themeconf", "check", "tailwind.config.js"]).unwrap();
    assert!(!cli.json);
    match cli.command {
        Commands::Check(args) => {
            assert_eq!(args.path, PathBuf::from("tailwind.config.js"));
            assert!(!args.deny_warnings);
        }
        other => panic!("Wrong command: {other:?}"),
    }
}

#[test]
fn test_parse_check_deny_warnings_with_global_json() {
    let cli = Cli::try_parse_from([
        "themeconf",
        "check",
        "theme.yaml",
        "--deny-warnings",
        "--json",
    ])
    .unwrap();
    assert!(cli.json);
    assert!(matches!(cli.command, Commands::Check(ref args) if args.deny_warnings));
}

#[test]
fn test_parse_vars_names_only() {
    let cli = Cli::try_parse_from(["themeconf", "--json", "vars", "-n", "theme.json"]).unwrap();
    match cli.command {
        Commands::Vars(args) => {
            assert!(args.names_only);
            assert_eq!(args.path, PathBuf::from("theme.json"));
        }
        other => panic!("Wrong command: {other:?}"),
    }
}

#[test]
fn test_parse_settings_flag() {
    let cli = Cli::try_parse_from([
        "themeconf",
        "--settings",
        "ci.yaml",
        "globs",
        "tailwind.config.js",
    ])
    .unwrap();
    assert_eq!(cli.settings, Some(PathBuf::from("ci.yaml")));
    assert!(matches!(cli.command, Commands::Globs(_)));
}

#[test]
fn test_path_is_required() {
    assert!(Cli::try_parse_from(["themeconf", "show"]).is_err());
    assert!(Cli::try_parse_from(["themeconf"]).is_err());
}
