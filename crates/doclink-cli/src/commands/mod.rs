//! Command implementations for the doclink CLI.
//!
//! Each command provides an `execute` function that prints to stdout, and a
//! `render` function producing that output so it can be tested directly.

pub mod check;
pub mod list;
pub mod members;
pub mod resolve;

pub use check::execute as check_execute;
pub use list::execute as list_execute;
pub use members::execute as members_execute;
pub use resolve::execute as resolve_execute;

use std::path::Path;

use doclink_core::Documentation;
use tracing::debug;

use crate::error::Result;

pub(crate) fn load_docs(path: &Path) -> Result<Documentation> {
    let doc = Documentation::from_path(path)?;
    debug!(
        path = %path.display(),
        nodes = doc.flattened().len(),
        "documentation ready"
    );
    Ok(doc)
}
