//! Tests for get and resolve subcommands.

use super::parse;
use crate::cli::CliCommand;

#[test]
fn cli_parse_get() {
    match parse(&["mfdl", "get", "https://mediafire.com/?abc123"]) {
        CliCommand::Get {
            share_link,
            download_dir,
        } => {
            assert_eq!(share_link, "https://mediafire.com/?abc123");
            assert!(download_dir.is_none());
        }
        _ => panic!("expected Get"),
    }
}

#[test]
fn cli_parse_get_download_dir() {
    match parse(&["mfdl", "get", "abc123", "--download-dir", "/tmp"]) {
        CliCommand::Get {
            share_link,
            download_dir,
        } => {
            assert_eq!(share_link, "abc123");
            assert_eq!(download_dir.as_deref(), Some(std::path::Path::new("/tmp")));
        }
        _ => panic!("expected Get with --download-dir"),
    }
}

#[test]
fn cli_parse_resolve() {
    match parse(&["mfdl", "resolve", "abc123"]) {
        CliCommand::Resolve { share_link } => assert_eq!(share_link, "abc123"),
        _ => panic!("expected Resolve"),
    }
}

#[test]
fn cli_parse_get_requires_share_link() {
    use clap::Parser;
    assert!(crate::cli::Cli::try_parse_from(["mfdl", "get"]).is_err());
}
