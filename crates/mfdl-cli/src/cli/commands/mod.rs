//! CLI command handlers. Each command is in its own file.

mod check;
mod completions;
mod get;
mod resolve;

pub use check::run_check;
pub use completions::run_completions;
pub use get::run_get;
pub use resolve::run_resolve;
