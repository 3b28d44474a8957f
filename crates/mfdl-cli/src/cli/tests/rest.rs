//! Tests for check and completions subcommands.

use super::parse;
use crate::cli::CliCommand;
use clap_complete::Shell;

#[test]
fn cli_parse_check() {
    match parse(&["mfdl", "check", "www.mediafire.com/?abc123"]) {
        CliCommand::Check { share_link } => {
            assert_eq!(share_link, "www.mediafire.com/?abc123");
        }
        _ => panic!("expected Check"),
    }
}

#[test]
fn cli_parse_completions() {
    match parse(&["mfdl", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, Shell::Bash),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_parse_unknown_subcommand_fails() {
    use clap::Parser;
    assert!(crate::cli::Cli::try_parse_from(["mfdl", "frobnicate"]).is_err());
}
