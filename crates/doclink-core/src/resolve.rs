//! Scoped name resolution and link classification.
//!
//! [`resolve_scoped_name`] answers "which node does `name` refer to when
//! written inside `scope`": it walks outward from the innermost scope and,
//! once the top level has been tried, falls back to top-level import
//! bindings. [`LinkResolver`] layers the builtin symbol table and the
//! external reference table on top of that to produce a [`LinkResult`].

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::external::ExternalLinks;
use crate::model::{DocNode, DocNodeKind, qualify};

/// Restricts which node kinds a reference may resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MustBe {
    /// Class, enum, interface, type alias or namespace.
    Type,
    /// Classes only.
    Class,
}

impl MustBe {
    pub fn accepts(self, kind: DocNodeKind) -> bool {
        match self {
            MustBe::Type => kind.is_type(),
            MustBe::Class => kind == DocNodeKind::Class,
        }
    }
}

impl FromStr for MustBe {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "type" => Ok(MustBe::Type),
            "class" => Ok(MustBe::Class),
            other => Err(format!("expected 'type' or 'class', got '{other}'")),
        }
    }
}

/// Finds the node `name` refers to from `start_scope`.
///
/// Each scope level is tried from the innermost outward, matching nodes whose
/// qualified name equals `scope.name` at that level; the first level with a
/// match wins. After the top level fails, the first top-level import whose
/// binding equals `name` or prefixes it as `binding.` is returned instead.
/// Among nodes sharing a qualified name the earliest in `flattened` wins.
pub fn resolve_scoped_name<'a>(
    flattened: &'a [DocNode],
    name: &str,
    start_scope: &[String],
    must_be: Option<MustBe>,
) -> Option<&'a DocNode> {
    let mut scope = start_scope.to_vec();
    loop {
        let wanted = qualify(&scope, name);
        let found = flattened.iter().find(|node| {
            !node.is_import()
                && must_be.is_none_or(|filter| filter.accepts(node.kind()))
                && has_qualified_name(node, &wanted)
        });
        if let Some(node) = found {
            trace!(reference = name, resolved = %wanted, kind = %node.kind(), "resolved in scope");
            return Some(node);
        }

        if scope.pop().is_none() {
            break;
        }
    }

    let import = flattened.iter().find(|node| {
        node.scope.is_empty()
            && node
                .import_local()
                .is_some_and(|local| binds_name(local, name))
    });
    if import.is_some() {
        trace!(reference = name, "resolved through import binding");
    }
    import
}

/// Compares a node's qualified name with `wanted` without building it.
fn has_qualified_name(node: &DocNode, wanted: &str) -> bool {
    let mut rest = wanted;
    for segment in &node.scope {
        match rest
            .strip_prefix(segment.as_str())
            .and_then(|after| after.strip_prefix('.'))
        {
            Some(after) => rest = after,
            None => return false,
        }
    }
    rest == node.name
}

fn binds_name(local: &str, name: &str) -> bool {
    name == local
        || name
            .strip_prefix(local)
            .is_some_and(|member| member.starts_with('.'))
}

/// Where a reference points, as far as the page renderer is concerned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum LinkResult {
    /// A node of the current document; `anchor` is its qualified name.
    Local { anchor: String },
    /// A symbol of another module reached through an import binding.
    Remote {
        module_specifier: String,
        exported_name: String,
    },
    /// A node of the builtin symbol table.
    Builtin { anchor: String },
    /// A well-known global with an external reference page.
    External { url: String },
}

impl LinkResult {
    /// Hyperlink target for this result. `builtin_base` prefixes builtin anchors.
    pub fn href(&self, builtin_base: &str) -> String {
        match self {
            LinkResult::Local { anchor } => format!("#{anchor}"),
            LinkResult::Builtin { anchor } => format!("{builtin_base}#{anchor}"),
            LinkResult::Remote {
                module_specifier,
                exported_name,
            } => format!("{module_specifier}#{exported_name}"),
            LinkResult::External { url } => url.clone(),
        }
    }
}

/// Resolves references through the local document, then the builtin symbol
/// table, then the external reference table. The first tier that succeeds wins.
#[derive(Debug, Clone)]
pub struct LinkResolver<'a> {
    flattened: &'a [DocNode],
    builtins: Option<&'a [DocNode]>,
    external: ExternalLinks,
}

impl<'a> LinkResolver<'a> {
    pub fn new(flattened: &'a [DocNode]) -> Self {
        Self {
            flattened,
            builtins: None,
            external: ExternalLinks::default(),
        }
    }

    /// Flattened builtin symbol table consulted after the local document.
    pub fn with_builtins(mut self, builtins: &'a [DocNode]) -> Self {
        self.builtins = Some(builtins);
        self
    }

    pub fn with_external(mut self, external: ExternalLinks) -> Self {
        self.external = external;
        self
    }

    /// Classifies `name` as written inside `start_scope`. `None` means the
    /// caller should render plain text.
    pub fn resolve(
        &self,
        name: &str,
        start_scope: &[String],
        must_be: Option<MustBe>,
    ) -> Option<LinkResult> {
        if let Some(node) = resolve_scoped_name(self.flattened, name, start_scope, must_be) {
            return Some(local_link(node, name));
        }

        if let Some(builtins) = self.builtins {
            // Builtins are global declarations; their import bindings are not followed.
            if let Some(node) = resolve_scoped_name(builtins, name, &[], must_be)
                .filter(|node| !node.is_import())
            {
                trace!(reference = name, "resolved in builtin table");
                return Some(LinkResult::Builtin {
                    anchor: node.anchor(),
                });
            }
        }

        if let Some(url) = self.external.lookup(name) {
            trace!(reference = name, "resolved in external table");
            return Some(LinkResult::External {
                url: url.to_string(),
            });
        }

        trace!(reference = name, scope = ?start_scope, "unresolved");
        None
    }
}

fn local_link(node: &DocNode, name: &str) -> LinkResult {
    let (Some(import), Some(local)) = (node.as_import(), node.import_local()) else {
        return LinkResult::Local {
            anchor: node.anchor(),
        };
    };

    let exported_name = match &import.imported {
        Some(imported) => imported.clone(),
        None => match name.strip_prefix(local).and_then(|rest| rest.strip_prefix('.')) {
            Some(member) => member.to_string(),
            None => local.to_string(),
        },
    };

    LinkResult::Remote {
        module_specifier: import.src.clone(),
        exported_name,
    }
}

/// One-shot form of [`LinkResolver::resolve`] with the default external table.
pub fn resolve_link(
    flattened: &[DocNode],
    builtins: Option<&[DocNode]>,
    name: &str,
    start_scope: &[String],
    must_be: Option<MustBe>,
) -> Option<LinkResult> {
    let mut resolver = LinkResolver::new(flattened);
    if let Some(builtins) = builtins {
        resolver = resolver.with_builtins(builtins);
    }
    resolver.resolve(name, start_scope, must_be)
}
