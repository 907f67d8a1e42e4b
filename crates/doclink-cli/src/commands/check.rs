//! Check command implementation.
//!
//! Loading the document already validates it; this command then reports what
//! a page renderer would see: how many symbols of each kind there are and
//! which references would render as plain text.

use std::fmt::Write as _;

use doclink_core::{DocNode, Documentation, TypeReference};

use crate::cli::CheckArgs;
use crate::commands::list::section_title;
use crate::config::Context;
use crate::error::Result;
use crate::ui;

/// Execute the check command.
pub fn execute(args: CheckArgs, ctx: &Context) -> Result<()> {
    let doc = super::load_docs(&args.docs)?;
    let builtins = ctx.builtins(args.builtins.as_deref())?;
    let resolver = doc.link_resolver_with(builtins.as_ref(), ctx.external_links());

    let unresolved = doc.unresolved(&resolver);
    print!("{}", render(&doc, &unresolved));

    if unresolved.is_empty() {
        ui::success("Every reference resolves");
    } else {
        ui::warning(&format!(
            "{} reference(s) will render as plain text",
            unresolved.len()
        ));
    }
    Ok(())
}

/// Group counts followed by one line per unresolved reference.
pub fn render(doc: &Documentation, unresolved: &[(&DocNode, TypeReference<'_>)]) -> String {
    let mut out = String::new();
    for (kind, nodes) in doc.grouped().sections() {
        let _ = writeln!(out, "{}: {}", section_title(kind), nodes.len());
    }

    if !unresolved.is_empty() {
        out.push_str("\nUnresolved references:\n");
        for (node, reference) in unresolved {
            let _ = writeln!(
                out,
                "  {} -> {} ({})",
                node.qualified_name(),
                reference.name,
                node.location.source_href()
            );
        }
    }
    out
}
