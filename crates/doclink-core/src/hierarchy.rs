//! Class member collection across `extends` chains.

use rustc_hash::FxHashSet;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{DocsError, Result};
use crate::model::{Accessibility, ClassMethodDef, ClassNode, ClassPropertyDef, DocNode};
use crate::resolve::{MustBe, resolve_scoped_name};

/// A class member borrowed from the document, tagged with where it came from.
#[derive(Debug, PartialEq, Serialize)]
pub struct Member<'a, T> {
    #[serde(flatten)]
    pub def: &'a T,
    /// `false` for members declared on the queried class itself.
    pub inherited: bool,
}

impl<T> Clone for Member<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Member<'_, T> {}

/// Methods and properties a class exposes, own members first.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ClassMembers<'a> {
    pub methods: Vec<Member<'a, ClassMethodDef>>,
    pub properties: Vec<Member<'a, ClassPropertyDef>>,
}

/// Members a class page lists, split the way the page renders them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibleMembers<'a> {
    pub properties: Vec<Member<'a, ClassPropertyDef>>,
    pub static_properties: Vec<Member<'a, ClassPropertyDef>>,
    pub methods: Vec<Member<'a, ClassMethodDef>>,
    pub static_methods: Vec<Member<'a, ClassMethodDef>>,
}

impl<'a> ClassMembers<'a> {
    /// Partitions members into instance and static, dropping private ones
    /// unless `include_private` is set.
    pub fn visible(&self, include_private: bool) -> VisibleMembers<'a> {
        let shown = |accessibility: Option<Accessibility>| {
            include_private || accessibility != Some(Accessibility::Private)
        };

        let mut visible = VisibleMembers::default();
        for property in self.properties.iter().filter(|m| shown(m.def.accessibility)) {
            if property.def.is_static {
                visible.static_properties.push(*property);
            } else {
                visible.properties.push(*property);
            }
        }
        for method in self.methods.iter().filter(|m| shown(m.def.accessibility)) {
            if method.def.is_static {
                visible.static_methods.push(*method);
            } else {
                visible.methods.push(*method);
            }
        }
        visible
    }

    pub fn own_count(&self) -> usize {
        self.methods.iter().filter(|m| !m.inherited).count()
            + self.properties.iter().filter(|m| !m.inherited).count()
    }
}

/// Collects `class`'s own methods and properties followed by everything it
/// inherits through `extends`.
///
/// Each superclass is resolved from the scope of the class naming it, and only
/// class nodes are accepted. The walk stops at the first superclass that does
/// not resolve. Inherited members are all tagged `inherited: true` regardless
/// of depth. Revisiting a class fails with [`DocsError::CyclicExtends`].
pub fn collect_members<'a>(
    flattened: &'a [DocNode],
    class: ClassNode<'a>,
) -> Result<ClassMembers<'a>> {
    let mut members = ClassMembers::default();
    let mut visited: FxHashSet<*const DocNode> = FxHashSet::default();
    visited.insert(std::ptr::from_ref(class.node));
    let mut chain = Vec::new();
    let mut current = class;
    let mut inherited = false;

    loop {
        chain.push(current.node.qualified_name());

        members.methods.extend(
            current
                .def
                .methods
                .iter()
                .map(|def| Member { def, inherited }),
        );
        members.properties.extend(
            current
                .def
                .properties
                .iter()
                .map(|def| Member { def, inherited }),
        );

        let Some(parent_name) = current.def.extends.as_deref() else {
            break;
        };
        let Some(parent) =
            resolve_scoped_name(flattened, parent_name, &current.node.scope, Some(MustBe::Class))
                .and_then(|node| ClassNode::try_from(node).ok())
        else {
            debug!(
                class = %current.node.name,
                extends = parent_name,
                "superclass not in document"
            );
            break;
        };

        if !visited.insert(std::ptr::from_ref(parent.node)) {
            chain.push(parent.node.qualified_name());
            warn!(chain = %chain.join(" -> "), "cyclic extends");
            return Err(DocsError::CyclicExtends { chain });
        }
        current = parent;
        inherited = true;
    }

    Ok(members)
}
