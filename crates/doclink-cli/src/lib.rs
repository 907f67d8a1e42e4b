//! doclink CLI - inspect and cross-reference generated TypeScript API docs.
//!
//! # Architecture
//!
//! - [`cli`] - Argument definitions (clap derive)
//! - [`commands`] - One module per subcommand
//! - [`config`] - Layered configuration plus the builtin symbol table
//! - [`error`] - `CliError` and its miette conversion
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - Status messages on stderr

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result, ResultExt};

/// Dispatch a parsed subcommand.
pub fn run(command: cli::Command, ctx: &config::Context) -> Result<()> {
    match command {
        cli::Command::List(args) => commands::list_execute(args),
        cli::Command::Resolve(args) => commands::resolve_execute(args, ctx),
        cli::Command::Members(args) => commands::members_execute(args, ctx),
        cli::Command::Check(args) => commands::check_execute(args, ctx),
    }
}
