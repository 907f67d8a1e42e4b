//! List command implementation.

use std::fmt::Write as _;

use doclink_core::{DocNodeKind, GroupedNodes, render_json};

use crate::cli::ListArgs;
use crate::error::Result;
use crate::ui;

/// Execute the list command.
pub fn execute(args: ListArgs) -> Result<()> {
    let doc = super::load_docs(&args.docs)?;
    let grouped = doc.grouped();
    if args.json {
        println!("{}", render_json(&grouped)?);
    } else {
        print!("{}", render(&grouped));
        ui::success(&format!("{} symbols", grouped.len()));
    }
    Ok(())
}

/// One section per non-empty group, one qualified name per line.
pub fn render(grouped: &GroupedNodes) -> String {
    let mut out = String::new();
    for (kind, nodes) in grouped.sections().filter(|(_, nodes)| !nodes.is_empty()) {
        if !out.is_empty() {
            out.push('\n');
        }
        let _ = writeln!(out, "{}:", section_title(kind));
        for node in nodes {
            let _ = writeln!(out, "  {}", node.qualified_name());
        }
    }
    out
}

pub(crate) fn section_title(kind: DocNodeKind) -> &'static str {
    match kind {
        DocNodeKind::Function => "Functions",
        DocNodeKind::Variable => "Variables",
        DocNodeKind::Class => "Classes",
        DocNodeKind::Enum => "Enums",
        DocNodeKind::Interface => "Interfaces",
        DocNodeKind::TypeAlias => "Type Aliases",
        DocNodeKind::Namespace => "Namespaces",
        DocNodeKind::Import => "Imports",
    }
}
