//! Command-line interface definition for doclink.
//!
//! # Command Structure
//!
//! - `doclink list` - Canonical grouped listing of a document
//! - `doclink resolve` - Classify one reference as a link
//! - `doclink members` - Own and inherited members of a class
//! - `doclink check` - Validate a document and report unlinkable references

mod commands;
pub mod enums;
mod validation;

use clap::Parser;
use std::path::PathBuf;

pub use commands::{CheckArgs, Command, ListArgs, MembersArgs, ResolveArgs};
pub use enums::*;
pub use validation::{ScopePath, parse_scope};

/// doclink - cross-reference resolution for generated TypeScript API docs
#[derive(Parser, Debug)]
#[command(
    name = "doclink",
    version,
    about = "Inspect and cross-reference generated TypeScript API docs",
    long_about = "doclink reads the JSON emitted by a TypeScript documentation generator,\n\
                  expands nested namespaces and answers the questions a documentation\n\
                  page asks: what does this name link to, and what does this class expose."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Config file to use instead of ./doclink.toml or ./doclink.json
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
