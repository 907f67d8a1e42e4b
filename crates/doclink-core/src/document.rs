//! Loading a generator document and answering queries over it.

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DocsError, Result};
use crate::external::ExternalLinks;
use crate::group::{GroupedNodes, group, sort_canonical};
use crate::hierarchy::{ClassMembers, collect_members};
use crate::model::{ClassNode, DocNode, DocNodeDef};
use crate::namespace::{expand, flatten};
use crate::references::{TypeReference, node_references};
use crate::resolve::{LinkResolver, MustBe, resolve_scoped_name};

/// API envelope some producers wrap the node list in.
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    timestamp: Option<String>,
    nodes: Vec<DocNode>,
}

/// A validated, namespace-expanded document.
///
/// The expanded tree and its flattened listing are computed once on load;
/// every query borrows from them.
#[derive(Debug, Clone, PartialEq)]
pub struct Documentation {
    timestamp: Option<String>,
    nodes: Vec<DocNode>,
    flattened: Vec<DocNode>,
}

impl Documentation {
    /// Validates `nodes` and builds the expanded and flattened views.
    pub fn from_nodes(nodes: Vec<DocNode>) -> Result<Self> {
        validate(&nodes, "")?;

        let nodes = expand(&nodes);
        let flattened = flatten(&nodes);
        debug!(
            top_level = nodes.len(),
            flattened = flattened.len(),
            "expanded documentation"
        );

        Ok(Self {
            timestamp: None,
            nodes,
            flattened,
        })
    }

    /// Parses a bare node array or a `{ "timestamp", "nodes" }` envelope.
    pub fn from_json(json: &str) -> Result<Self> {
        let trimmed = json.trim_start();
        if trimmed.starts_with('{') {
            let envelope: Envelope =
                serde_json::from_str(trimmed).map_err(DocsError::parse_error)?;
            let mut doc = Self::from_nodes(envelope.nodes)?;
            doc.timestamp = envelope.timestamp;
            Ok(doc)
        } else {
            let nodes: Vec<DocNode> =
                serde_json::from_str(trimmed).map_err(DocsError::parse_error)?;
            Self::from_nodes(nodes)
        }
    }

    pub fn from_reader(mut reader: impl Read) -> Result<Self> {
        let mut json = String::new();
        reader
            .read_to_string(&mut json)
            .map_err(|error| DocsError::Read { error })?;
        Self::from_json(&json)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|error| DocsError::Io {
            path: path.to_path_buf(),
            error,
        })?;
        debug!(path = %path.display(), bytes = json.len(), "loaded documentation");
        Self::from_json(&json)
    }

    /// Expanded tree: top-level nodes with absolute scopes all the way down.
    pub fn nodes(&self) -> &[DocNode] {
        &self.nodes
    }

    /// Pre-order listing of every node, the resolver's search space.
    pub fn flattened(&self) -> &[DocNode] {
        &self.flattened
    }

    /// Generation time reported by the envelope, if the input had one.
    pub fn timestamp(&self) -> Option<&str> {
        self.timestamp.as_deref()
    }

    /// Every node in canonical order, partitioned by kind.
    pub fn grouped(&self) -> GroupedNodes {
        group(sort_canonical(self.flattened.clone()))
    }

    pub fn find(&self, name: &str, scope: &[String], must_be: Option<MustBe>) -> Option<&DocNode> {
        resolve_scoped_name(&self.flattened, name, scope, must_be)
    }

    /// Resolver over this document with the default external table.
    pub fn link_resolver(&self) -> LinkResolver<'_> {
        LinkResolver::new(&self.flattened)
    }

    /// Resolver over this document, backed by a builtin document and a custom
    /// external table.
    pub fn link_resolver_with<'a>(
        &'a self,
        builtins: Option<&'a Documentation>,
        external: ExternalLinks,
    ) -> LinkResolver<'a> {
        let resolver = LinkResolver::new(&self.flattened).with_external(external);
        match builtins {
            Some(builtins) => resolver.with_builtins(builtins.flattened()),
            None => resolver,
        }
    }

    /// Own and inherited members of the class `name` as seen from `scope`.
    pub fn class_members(&self, name: &str, scope: &[String]) -> Result<ClassMembers<'_>> {
        let node = self
            .find(name, scope, Some(MustBe::Class))
            .ok_or_else(|| DocsError::Other {
                message: format!("class '{name}' not found"),
            })?;
        collect_members(&self.flattened, ClassNode::try_from(node)?)
    }

    /// Every name referenced by every node, paired with the node using it.
    pub fn references(&self) -> Vec<(&DocNode, TypeReference<'_>)> {
        self.flattened
            .iter()
            .flat_map(|node| node_references(node).into_iter().map(move |r| (node, r)))
            .collect()
    }

    /// References that no tier of `resolver` can link, in document order.
    pub fn unresolved<'a>(
        &'a self,
        resolver: &LinkResolver<'_>,
    ) -> Vec<(&'a DocNode, TypeReference<'a>)> {
        self.references()
            .into_iter()
            .filter(|(node, reference)| {
                resolver
                    .resolve(reference.name, &node.scope, reference.must_be)
                    .is_none()
            })
            .collect()
    }
}

/// Serializes as the generator's bare array of expanded nodes.
impl Serialize for Documentation {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.nodes.serialize(serializer)
    }
}

fn validate(nodes: &[DocNode], parent: &str) -> Result<()> {
    for (index, node) in nodes.iter().enumerate() {
        let blank = node.name.trim().is_empty();
        let path = if blank {
            format!("{parent}[{index}]")
        } else if parent.is_empty() {
            node.name.clone()
        } else {
            format!("{parent}.{}", node.name)
        };

        if blank {
            return Err(DocsError::invalid_node(path, "name is empty"));
        }

        match &node.def {
            DocNodeDef::Import { import_def } if import_def.src.trim().is_empty() => {
                return Err(DocsError::invalid_node(path, "import has an empty `src`"));
            }
            DocNodeDef::Namespace { namespace_def } => validate(&namespace_def.elements, &path)?,
            _ => {}
        }
    }
    Ok(())
}
