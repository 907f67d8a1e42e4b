use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::DocsError;
use crate::types::{ParamDef, TsTypeDef, TsTypeParamDef};

/// Provenance of a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub filename: String,
    /// One-based line index.
    pub line: u32,
    /// Zero-based column index.
    #[serde(rename = "col", alias = "column")]
    pub column: u32,
}

impl Location {
    pub fn new(filename: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            filename: filename.into(),
            line,
            column,
        }
    }

    /// Link to the declaration in its source file (`file.ts#L12`).
    pub fn source_href(&self) -> String {
        format!("{}#L{}", self.filename, self.line)
    }
}

/// One documented declaration: shared metadata plus a kind-specific payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocNode {
    pub name: String,
    /// Enclosing namespace names, outermost first. Empty at top level.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub scope: Vec<String>,
    pub location: Location,
    /// Raw doc comment text (markdown).
    #[serde(default, rename = "jsDoc", alias = "docComment", skip_serializing_if = "Option::is_none")]
    pub doc_comment: Option<String>,
    #[serde(flatten)]
    pub def: DocNodeDef,
}

/// A `null` scope is the top level, same as an absent one.
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Kind-tagged definition payload of a [`DocNode`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum DocNodeDef {
    Function { function_def: FunctionDef },
    Variable { variable_def: VariableDef },
    Class { class_def: ClassDef },
    Enum { enum_def: EnumDef },
    Interface { interface_def: InterfaceDef },
    TypeAlias { type_alias_def: TypeAliasDef },
    Namespace { namespace_def: NamespaceDef },
    Import { import_def: ImportDef },
}

/// Discriminator of a [`DocNode`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DocNodeKind {
    Function,
    Variable,
    Class,
    Enum,
    Interface,
    TypeAlias,
    Namespace,
    Import,
}

impl DocNodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocNodeKind::Function => "function",
            DocNodeKind::Variable => "variable",
            DocNodeKind::Class => "class",
            DocNodeKind::Enum => "enum",
            DocNodeKind::Interface => "interface",
            DocNodeKind::TypeAlias => "typeAlias",
            DocNodeKind::Namespace => "namespace",
            DocNodeKind::Import => "import",
        }
    }

    /// Kinds that name a type and can therefore be the target of a type reference.
    pub fn is_type(&self) -> bool {
        matches!(
            self,
            DocNodeKind::Class
                | DocNodeKind::Enum
                | DocNodeKind::Interface
                | DocNodeKind::TypeAlias
                | DocNodeKind::Namespace
        )
    }
}

impl fmt::Display for DocNodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl DocNode {
    pub fn new(name: impl Into<String>, location: Location, def: DocNodeDef) -> Self {
        Self {
            name: name.into(),
            scope: Vec::new(),
            location,
            doc_comment: None,
            def,
        }
    }

    pub fn kind(&self) -> DocNodeKind {
        match &self.def {
            DocNodeDef::Function { .. } => DocNodeKind::Function,
            DocNodeDef::Variable { .. } => DocNodeKind::Variable,
            DocNodeDef::Class { .. } => DocNodeKind::Class,
            DocNodeDef::Enum { .. } => DocNodeKind::Enum,
            DocNodeDef::Interface { .. } => DocNodeKind::Interface,
            DocNodeDef::TypeAlias { .. } => DocNodeKind::TypeAlias,
            DocNodeDef::Namespace { .. } => DocNodeKind::Namespace,
            DocNodeDef::Import { .. } => DocNodeKind::Import,
        }
    }

    /// Scope path joined with `.` plus the node's own name.
    pub fn qualified_name(&self) -> String {
        qualify(&self.scope, &self.name)
    }

    /// Fragment identifier used for in-page links.
    pub fn anchor(&self) -> String {
        self.qualified_name()
    }

    /// Anchors of every enclosing namespace, outermost first (`a`, `a.b`, ...).
    pub fn breadcrumb_anchors(&self) -> Vec<String> {
        (1..=self.scope.len())
            .map(|depth| self.scope[..depth].join("."))
            .collect()
    }

    pub fn is_import(&self) -> bool {
        matches!(self.def, DocNodeDef::Import { .. })
    }

    pub fn as_class(&self) -> Option<&ClassDef> {
        match &self.def {
            DocNodeDef::Class { class_def } => Some(class_def),
            _ => None,
        }
    }

    pub fn as_import(&self) -> Option<&ImportDef> {
        match &self.def {
            DocNodeDef::Import { import_def } => Some(import_def),
            _ => None,
        }
    }

    pub fn namespace_elements(&self) -> Option<&[DocNode]> {
        match &self.def {
            DocNodeDef::Namespace { namespace_def } => Some(&namespace_def.elements),
            _ => None,
        }
    }

    /// Name the import binds in its scope; `None` for non-import nodes.
    ///
    /// The generator stores the binding as the node name; an explicit
    /// `importDef.local` takes precedence when present.
    pub fn import_local(&self) -> Option<&str> {
        self.as_import()
            .map(|import| import.local.as_deref().unwrap_or(&self.name))
    }
}

/// Joins a scope path and a name with `.`, omitting the separator at top level.
pub fn qualify(scope: &[String], name: &str) -> String {
    if scope.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", scope.join("."), name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionDef {
    #[serde(default)]
    pub params: Vec<ParamDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_type: Option<TsTypeDef>,
    #[serde(default)]
    pub is_async: bool,
    #[serde(default)]
    pub is_generator: bool,
    #[serde(default)]
    pub type_params: Vec<TsTypeParamDef>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableKind {
    Var,
    Let,
    Const,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ts_type: Option<TsTypeDef>,
    pub kind: VariableKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accessibility {
    Public,
    Protected,
    Private,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassDef {
    #[serde(default)]
    pub is_abstract: bool,
    #[serde(default)]
    pub constructors: Vec<ClassConstructorDef>,
    #[serde(default)]
    pub properties: Vec<ClassPropertyDef>,
    #[serde(default)]
    pub index_signatures: Vec<ClassIndexSignatureDef>,
    #[serde(default)]
    pub methods: Vec<ClassMethodDef>,
    /// Superclass name as written. Resolved lazily against the flattened list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,
    #[serde(default)]
    pub implements: Vec<TsTypeDef>,
    #[serde(default)]
    pub type_params: Vec<TsTypeParamDef>,
    #[serde(default)]
    pub super_type_params: Vec<TsTypeDef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassConstructorDef {
    pub name: String,
    pub location: Location,
    #[serde(default, rename = "jsDoc", alias = "docComment", skip_serializing_if = "Option::is_none")]
    pub doc_comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessibility: Option<Accessibility>,
    #[serde(default)]
    pub params: Vec<ParamDef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassPropertyDef {
    pub name: String,
    pub location: Location,
    #[serde(default, rename = "jsDoc", alias = "docComment", skip_serializing_if = "Option::is_none")]
    pub doc_comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ts_type: Option<TsTypeDef>,
    #[serde(default)]
    pub readonly: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessibility: Option<Accessibility>,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub is_abstract: bool,
    #[serde(default)]
    pub is_static: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MethodKind {
    Method,
    Getter,
    Setter,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassMethodDef {
    pub name: String,
    pub location: Location,
    #[serde(default, rename = "jsDoc", alias = "docComment", skip_serializing_if = "Option::is_none")]
    pub doc_comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessibility: Option<Accessibility>,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub is_abstract: bool,
    #[serde(default)]
    pub is_static: bool,
    pub kind: MethodKind,
    pub function_def: FunctionDef,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassIndexSignatureDef {
    #[serde(default)]
    pub readonly: bool,
    #[serde(default)]
    pub params: Vec<ParamDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ts_type: Option<TsTypeDef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumMemberDef {
    pub name: String,
    #[serde(default, rename = "jsDoc", alias = "docComment", skip_serializing_if = "Option::is_none")]
    pub doc_comment: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnumDef {
    #[serde(default)]
    pub members: Vec<EnumMemberDef>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceDef {
    #[serde(default)]
    pub extends: Vec<TsTypeDef>,
    #[serde(default)]
    pub methods: Vec<InterfaceMethodDef>,
    #[serde(default)]
    pub properties: Vec<InterfacePropertyDef>,
    #[serde(default)]
    pub call_signatures: Vec<InterfaceCallSignatureDef>,
    #[serde(default)]
    pub index_signatures: Vec<InterfaceIndexSignatureDef>,
    #[serde(default)]
    pub type_params: Vec<TsTypeParamDef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceMethodDef {
    pub name: String,
    pub location: Location,
    #[serde(default, rename = "jsDoc", alias = "docComment", skip_serializing_if = "Option::is_none")]
    pub doc_comment: Option<String>,
    #[serde(default)]
    pub params: Vec<ParamDef>,
    #[serde(default)]
    pub optional: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_type: Option<TsTypeDef>,
    #[serde(default)]
    pub type_params: Vec<TsTypeParamDef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfacePropertyDef {
    pub name: String,
    pub location: Location,
    #[serde(default, rename = "jsDoc", alias = "docComment", skip_serializing_if = "Option::is_none")]
    pub doc_comment: Option<String>,
    #[serde(default)]
    pub computed: bool,
    #[serde(default)]
    pub optional: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ts_type: Option<TsTypeDef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceCallSignatureDef {
    pub location: Location,
    #[serde(default, rename = "jsDoc", alias = "docComment", skip_serializing_if = "Option::is_none")]
    pub doc_comment: Option<String>,
    #[serde(default)]
    pub params: Vec<ParamDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ts_type: Option<TsTypeDef>,
    #[serde(default)]
    pub type_params: Vec<TsTypeParamDef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceIndexSignatureDef {
    #[serde(default)]
    pub readonly: bool,
    #[serde(default)]
    pub params: Vec<ParamDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ts_type: Option<TsTypeDef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeAliasDef {
    pub ts_type: TsTypeDef,
    #[serde(default)]
    pub type_params: Vec<TsTypeParamDef>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NamespaceDef {
    #[serde(default)]
    pub elements: Vec<DocNode>,
}

/// An import binding. Kept for resolution only, never rendered as a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportDef {
    /// Module specifier the binding comes from.
    pub src: String,
    /// Bound name, when it differs from the node name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local: Option<String>,
    /// Name as exported by `src` (`import { imported as local }`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imported: Option<String>,
}

/// A node statically known to be a class.
#[derive(Debug, Clone, Copy)]
pub struct ClassNode<'a> {
    pub node: &'a DocNode,
    pub def: &'a ClassDef,
}

impl<'a> TryFrom<&'a DocNode> for ClassNode<'a> {
    type Error = DocsError;

    fn try_from(node: &'a DocNode) -> Result<Self, Self::Error> {
        match node.as_class() {
            Some(def) => Ok(Self { node, def }),
            None => Err(DocsError::NotAClass {
                name: node.qualified_name(),
            }),
        }
    }
}
