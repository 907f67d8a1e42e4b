//! Members command implementation.

use std::fmt::Write as _;

use doclink_core::{ClassNode, DocNode, DocsError, Member, MustBe, VisibleMembers, collect_members};

use crate::cli::MembersArgs;
use crate::config::Context;
use crate::error::Result;
use crate::ui;

/// Execute the members command.
///
/// # Errors
///
/// Fails when the class does not resolve or its `extends` chain is cyclic.
pub fn execute(args: MembersArgs, ctx: &Context) -> Result<()> {
    let doc = super::load_docs(&args.docs)?;
    let class = doc
        .find(&args.class, args.scope.as_slice(), Some(MustBe::Class))
        .ok_or_else(|| DocsError::Other {
            message: format!("class '{}' not found", args.class),
        })?;
    let members = collect_members(doc.flattened(), ClassNode::try_from(class)?)?;
    let visible = members.visible(args.all || ctx.config.include_private);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&visible)?);
    } else {
        println!("{}\n", trail(class));
        print!("{}", render(&visible));
        ui::info(&format!(
            "{} own, {} inherited",
            members.own_count(),
            members.methods.len() + members.properties.len() - members.own_count()
        ));
    }
    Ok(())
}

/// Enclosing namespaces followed by the class itself (`io > io.File`).
pub fn trail(class: &DocNode) -> String {
    let mut anchors = class.breadcrumb_anchors();
    anchors.push(class.anchor());
    anchors.join(" > ")
}

/// Text listing: one section per non-empty member group.
pub fn render(visible: &VisibleMembers<'_>) -> String {
    let mut out = String::new();
    section(&mut out, "Properties", &visible.properties, |p| p.name.as_str());
    section(&mut out, "Static properties", &visible.static_properties, |p| p.name.as_str());
    section(&mut out, "Methods", &visible.methods, |m| m.name.as_str());
    section(&mut out, "Static methods", &visible.static_methods, |m| m.name.as_str());
    out
}

fn section<T>(out: &mut String, title: &str, members: &[Member<'_, T>], name: impl Fn(&T) -> &str) {
    if members.is_empty() {
        return;
    }
    if !out.is_empty() {
        out.push('\n');
    }
    let _ = writeln!(out, "{title}:");
    for member in members {
        if member.inherited {
            let _ = writeln!(out, "  {} (inherited)", name(member.def));
        } else {
            let _ = writeln!(out, "  {}", name(member.def));
        }
    }
}
