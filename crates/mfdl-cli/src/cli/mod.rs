//! CLI for the MFDL MediaFire share-link resolver.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use mfdl_core::config;
use std::path::PathBuf;

use commands::{run_check, run_completions, run_get, run_resolve};

/// Top-level CLI for the MFDL resolver.
#[derive(Debug, Parser)]
#[command(name = "mfdl")]
#[command(about = "MFDL: MediaFire share-link resolver and downloader", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve a share link and download the file.
    Get {
        /// Share link: bare identifier, `mediafire.com/?<id>`, or a
        /// `mediafire.com/(file|view|download)/...` page URL.
        share_link: String,
        /// Directory to save into (default: current directory).
        #[arg(long, value_name = "DIR")]
        download_dir: Option<PathBuf>,
    },

    /// Resolve a share link and print the direct-download URL.
    Resolve {
        /// Share link to resolve.
        share_link: String,
    },

    /// Check whether a string is a recognized share link.
    Check {
        /// Candidate share link.
        share_link: String,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Get {
                share_link,
                download_dir,
            } => run_get(&cfg, &share_link, download_dir.as_deref()).await?,
            CliCommand::Resolve { share_link } => run_resolve(&cfg, &share_link).await?,
            CliCommand::Check { share_link } => run_check(&share_link)?,
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
