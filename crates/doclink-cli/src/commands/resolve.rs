//! Resolve command implementation.

use doclink_core::{Documentation, LinkResult, MustBe};
use serde::Serialize;

use crate::cli::ResolveArgs;
use crate::config::Context;
use crate::error::Result;
use crate::ui;

#[derive(Debug, Serialize)]
struct Resolved<'a> {
    #[serde(flatten)]
    link: &'a LinkResult,
    href: String,
}

/// Execute the resolve command.
///
/// An unresolved name is reported but is not an error.
pub fn execute(args: ResolveArgs, ctx: &Context) -> Result<()> {
    let doc = super::load_docs(&args.docs)?;
    let builtins = ctx.builtins(args.builtins.as_deref())?;
    let must_be = args.must_be.map(MustBe::from);

    match resolve(&doc, builtins.as_ref(), ctx, &args.name, args.scope.as_slice(), must_be) {
        Some(link) => {
            println!("{}", render(&link, &ctx.config.builtin_href_base)?);
        }
        None => {
            println!("unresolved");
            ui::warning(&format!("'{}' does not resolve; it renders as plain text", args.name));
        }
    }
    Ok(())
}

pub fn resolve(
    doc: &Documentation,
    builtins: Option<&Documentation>,
    ctx: &Context,
    name: &str,
    scope: &[String],
    must_be: Option<MustBe>,
) -> Option<LinkResult> {
    doc.link_resolver_with(builtins, ctx.external_links())
        .resolve(name, scope, must_be)
}

/// Pretty JSON of the link with its `href` added.
pub fn render(link: &LinkResult, builtin_href_base: &str) -> Result<String> {
    let resolved = Resolved {
        link,
        href: link.href(builtin_href_base),
    };
    Ok(serde_json::to_string_pretty(&resolved)?)
}
