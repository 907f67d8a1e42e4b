//! Display grouping and canonical ordering of nodes.

use serde::{Deserialize, Serialize};

use crate::model::{DocNode, DocNodeKind};

/// Nodes partitioned by kind, in the order they were supplied.
///
/// Imports have no group: they only feed resolution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupedNodes {
    pub functions: Vec<DocNode>,
    pub variables: Vec<DocNode>,
    pub classes: Vec<DocNode>,
    pub enums: Vec<DocNode>,
    pub interfaces: Vec<DocNode>,
    pub type_aliases: Vec<DocNode>,
    pub namespaces: Vec<DocNode>,
}

impl GroupedNodes {
    /// Total number of grouped nodes.
    pub fn len(&self) -> usize {
        self.sections().map(|(_, nodes)| nodes.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Groups in display order, each with the kind it holds.
    pub fn sections(&self) -> impl Iterator<Item = (DocNodeKind, &[DocNode])> {
        [
            (DocNodeKind::Function, self.functions.as_slice()),
            (DocNodeKind::Variable, self.variables.as_slice()),
            (DocNodeKind::Class, self.classes.as_slice()),
            (DocNodeKind::Enum, self.enums.as_slice()),
            (DocNodeKind::Interface, self.interfaces.as_slice()),
            (DocNodeKind::TypeAlias, self.type_aliases.as_slice()),
            (DocNodeKind::Namespace, self.namespaces.as_slice()),
        ]
        .into_iter()
    }
}

/// Orders nodes by scope depth (top-level first), then by dotted qualified
/// name. Nodes with equal keys keep no guaranteed relative order.
pub fn sort_canonical(mut nodes: Vec<DocNode>) -> Vec<DocNode> {
    nodes.sort_by_cached_key(|node| (node.scope.len(), node.qualified_name()));
    nodes
}

/// Appends each node to the group matching its kind, dropping imports.
pub fn group(nodes: impl IntoIterator<Item = DocNode>) -> GroupedNodes {
    let mut grouped = GroupedNodes::default();
    for node in nodes {
        let bucket = match node.kind() {
            DocNodeKind::Function => &mut grouped.functions,
            DocNodeKind::Variable => &mut grouped.variables,
            DocNodeKind::Class => &mut grouped.classes,
            DocNodeKind::Enum => &mut grouped.enums,
            DocNodeKind::Interface => &mut grouped.interfaces,
            DocNodeKind::TypeAlias => &mut grouped.type_aliases,
            DocNodeKind::Namespace => &mut grouped.namespaces,
            DocNodeKind::Import => continue,
        };
        bucket.push(node);
    }
    grouped
}
