//! `mfdl completions <shell>` – generate shell completions.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::Cli;

pub fn run_completions(shell: Shell) {
    clap_complete::generate(shell, &mut Cli::command(), "mfdl", &mut std::io::stdout());
}
