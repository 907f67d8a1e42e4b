//! Namespace expansion and flattening.
//!
//! The generator nests namespace members inside `namespaceDef.elements`
//! without recording where they live. [`expand`] rebuilds the tree so every
//! descendant carries its absolute scope path; [`flatten`] then lists every
//! node of the expanded tree in pre-order for lookups.

use crate::model::{DocNode, DocNodeDef, NamespaceDef};

/// Rebuilds `nodes` so that every namespace member's `scope` is the parent's
/// scope followed by the parent's name, recursively.
///
/// Non-namespace nodes pass through unchanged. The input is not modified and
/// running the rebuild again on its own output yields the same tree.
pub fn expand(nodes: &[DocNode]) -> Vec<DocNode> {
    nodes.iter().map(|node| expand_node(node, &node.scope)).collect()
}

fn expand_node(node: &DocNode, scope: &[String]) -> DocNode {
    let DocNodeDef::Namespace { namespace_def } = &node.def else {
        let mut node = node.clone();
        node.scope = scope.to_vec();
        return node;
    };

    let mut child_scope = scope.to_vec();
    child_scope.push(node.name.clone());

    let elements = namespace_def
        .elements
        .iter()
        .map(|element| expand_node(element, &child_scope))
        .collect();

    // Rebuilt field by field so the old element list is never cloned.
    DocNode {
        name: node.name.clone(),
        scope: scope.to_vec(),
        location: node.location.clone(),
        doc_comment: node.doc_comment.clone(),
        def: DocNodeDef::Namespace {
            namespace_def: NamespaceDef { elements },
        },
    }
}

/// Pre-order listing of every node: each namespace is followed by the
/// flattened contents of its elements.
///
/// Call this on the output of [`expand`] so scope paths are absolute.
pub fn flatten(nodes: &[DocNode]) -> Vec<DocNode> {
    let mut flattened = Vec::with_capacity(nodes.len());
    flatten_into(nodes, &mut flattened);
    flattened
}

fn flatten_into(nodes: &[DocNode], out: &mut Vec<DocNode>) {
    for node in nodes {
        out.push(node.clone());
        if let Some(elements) = node.namespace_elements() {
            flatten_into(elements, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn nodes(value: serde_json::Value) -> Vec<DocNode> {
        serde_json::from_value(value).unwrap()
    }

    fn loc() -> serde_json::Value {
        json!({ "filename": "mod.ts", "line": 1, "col": 0 })
    }

    #[test]
    fn nested_members_receive_absolute_scope() {
        let input = nodes(json!([
            { "kind": "namespace", "name": "a", "location": loc(), "namespaceDef": { "elements": [
                { "kind": "namespace", "name": "b", "location": loc(), "namespaceDef": { "elements": [
                    { "kind": "function", "name": "f", "location": loc(), "functionDef": {} }
                ]}}
            ]}}
        ]));

        let expanded = expand(&input);
        let b = &expanded[0].namespace_elements().unwrap()[0];
        assert_eq!(b.scope, vec!["a"]);
        let f = &b.namespace_elements().unwrap()[0];
        assert_eq!(f.scope, vec!["a", "b"]);

        // Source tree stays untouched.
        assert!(input[0].namespace_elements().unwrap()[0].scope.is_empty());
    }

    #[test]
    fn expand_is_safe_to_rerun() {
        let input = nodes(json!([
            { "kind": "namespace", "name": "ns", "location": loc(), "namespaceDef": { "elements": [
                { "kind": "function", "name": "bar", "location": loc(), "functionDef": {} }
            ]}}
        ]));
        let once = expand(&input);
        assert_eq!(expand(&once), once);
    }

    #[test]
    fn flatten_is_pre_order() {
        let input = nodes(json!([
            { "kind": "function", "name": "foo", "location": loc(), "functionDef": {} },
            { "kind": "namespace", "name": "ns", "location": loc(), "namespaceDef": { "elements": [
                { "kind": "function", "name": "bar", "location": loc(), "functionDef": {} },
                { "kind": "namespace", "name": "inner", "location": loc(), "namespaceDef": { "elements": [
                    { "kind": "variable", "name": "baz", "location": loc(), "variableDef": { "kind": "const" } }
                ]}}
            ]}},
            { "kind": "function", "name": "last", "location": loc(), "functionDef": {} }
        ]));

        let names: Vec<String> = flatten(&expand(&input))
            .iter()
            .map(DocNode::qualified_name)
            .collect();
        assert_eq!(
            names,
            vec!["foo", "ns", "ns.bar", "ns.inner", "ns.inner.baz", "last"]
        );
    }
}
