use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::enums::*;
use crate::cli::validation::{ScopePath, parse_scope};

/// Available doclink subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List every documented symbol in canonical order
    ///
    /// Prints one section per kind with one qualified name per line. Imports
    /// are not listed.
    List(ListArgs),

    /// Resolve a reference the way a documentation page would link it
    ///
    /// Tries the document's scope chain, then import bindings, then the
    /// builtin symbol table, then well-known globals. An unresolved name is
    /// not an error.
    Resolve(ResolveArgs),

    /// Show a class's members including everything it inherits
    Members(MembersArgs),

    /// Validate a document and report references that cannot be linked
    Check(CheckArgs),
}

/// Arguments for the list command
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Doc JSON file produced by the documentation generator
    #[arg(value_name = "DOCS")]
    pub docs: PathBuf,

    /// Print the grouped index as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the resolve command
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Doc JSON file produced by the documentation generator
    #[arg(value_name = "DOCS")]
    pub docs: PathBuf,

    /// Name as written in the source, possibly dotted (`Deno.File`)
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Namespace the reference appears in, dotted (`a.b`)
    #[arg(long, value_parser = parse_scope, default_value = "")]
    pub scope: ScopePath,

    /// Only accept nodes of this kind
    #[arg(long, value_enum)]
    pub must_be: Option<MustBeArg>,

    /// Builtin symbol table; overrides `builtins` from the config
    #[arg(long, value_name = "FILE")]
    pub builtins: Option<PathBuf>,
}

/// Arguments for the members command
#[derive(Args, Debug)]
pub struct MembersArgs {
    /// Doc JSON file produced by the documentation generator
    #[arg(value_name = "DOCS")]
    pub docs: PathBuf,

    /// Class name, possibly dotted
    #[arg(value_name = "CLASS")]
    pub class: String,

    /// Namespace to resolve the class name from, dotted (`a.b`)
    #[arg(long, value_parser = parse_scope, default_value = "")]
    pub scope: ScopePath,

    /// Include private members
    #[arg(long)]
    pub all: bool,

    /// Print members as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Doc JSON file produced by the documentation generator
    #[arg(value_name = "DOCS")]
    pub docs: PathBuf,

    /// Builtin symbol table; overrides `builtins` from the config
    #[arg(long, value_name = "FILE")]
    pub builtins: Option<PathBuf>,
}
