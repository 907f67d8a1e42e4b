//! Collection of the names a declaration refers to.
//!
//! Every `typeRef` and `typeQuery` position, plus a class's `extends`, is a
//! link candidate for the page renderer. Collecting them up front lets a
//! caller check a whole document for references that would render as plain
//! text.

use serde::Serialize;

use crate::model::{DocNode, DocNodeDef, FunctionDef};
use crate::resolve::MustBe;
use crate::types::{ObjectPatPropDef, ParamDef, TsType, TsTypeDef, TsTypeParamDef};

/// A name used inside a declaration, with the filter it resolves under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeReference<'a> {
    pub name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub must_be: Option<MustBe>,
}

/// References inside one type expression, in source order.
pub fn type_references(ty: &TsTypeDef) -> Vec<TypeReference<'_>> {
    let mut collector = Collector::default();
    collector.ty(ty);
    collector.out
}

/// References made by a node's own definition. Namespace elements are not
/// descended into: they appear separately in the flattened list.
pub fn node_references(node: &DocNode) -> Vec<TypeReference<'_>> {
    let mut c = Collector::default();
    match &node.def {
        DocNodeDef::Function { function_def } => c.function(function_def),
        DocNodeDef::Variable { variable_def } => c.opt_ty(variable_def.ts_type.as_ref()),
        DocNodeDef::Class { class_def } => {
            if let Some(extends) = &class_def.extends {
                c.push(extends, Some(MustBe::Class));
            }
            c.types(&class_def.super_type_params);
            c.types(&class_def.implements);
            c.type_params(&class_def.type_params);
            for constructor in &class_def.constructors {
                c.params(&constructor.params);
            }
            for property in &class_def.properties {
                c.opt_ty(property.ts_type.as_ref());
            }
            for signature in &class_def.index_signatures {
                c.params(&signature.params);
                c.opt_ty(signature.ts_type.as_ref());
            }
            for method in &class_def.methods {
                c.function(&method.function_def);
            }
        }
        DocNodeDef::Enum { .. } | DocNodeDef::Namespace { .. } | DocNodeDef::Import { .. } => {}
        DocNodeDef::Interface { interface_def } => {
            c.types(&interface_def.extends);
            c.type_params(&interface_def.type_params);
            for method in &interface_def.methods {
                c.type_params(&method.type_params);
                c.params(&method.params);
                c.opt_ty(method.return_type.as_ref());
            }
            for property in &interface_def.properties {
                c.opt_ty(property.ts_type.as_ref());
            }
            for signature in &interface_def.call_signatures {
                c.type_params(&signature.type_params);
                c.params(&signature.params);
                c.opt_ty(signature.ts_type.as_ref());
            }
            for signature in &interface_def.index_signatures {
                c.params(&signature.params);
                c.opt_ty(signature.ts_type.as_ref());
            }
        }
        DocNodeDef::TypeAlias { type_alias_def } => {
            c.type_params(&type_alias_def.type_params);
            c.ty(&type_alias_def.ts_type);
        }
    }
    c.out
}

#[derive(Default)]
struct Collector<'a> {
    out: Vec<TypeReference<'a>>,
}

impl<'a> Collector<'a> {
    fn push(&mut self, name: &'a str, must_be: Option<MustBe>) {
        self.out.push(TypeReference { name, must_be });
    }

    fn types(&mut self, types: &'a [TsTypeDef]) {
        for ty in types {
            self.ty(ty);
        }
    }

    fn opt_ty(&mut self, ty: Option<&'a TsTypeDef>) {
        if let Some(ty) = ty {
            self.ty(ty);
        }
    }

    fn ty(&mut self, ty: &'a TsTypeDef) {
        match &ty.ty {
            TsType::Keyword { .. } | TsType::Literal { .. } | TsType::This { .. } => {}
            TsType::TypeRef { type_ref } => {
                self.push(&type_ref.type_name, Some(MustBe::Type));
                if let Some(params) = &type_ref.type_params {
                    self.types(params);
                }
            }
            TsType::TypeQuery { type_query } => self.push(type_query, None),
            TsType::Union { union: types }
            | TsType::Intersection {
                intersection: types,
            }
            | TsType::Tuple { tuple: types } => self.types(types),
            TsType::Array { array: inner }
            | TsType::Parenthesized {
                parenthesized: inner,
            }
            | TsType::Rest { rest: inner }
            | TsType::Optional { optional: inner } => self.ty(inner),
            TsType::TypeOperator { type_operator } => self.ty(&type_operator.ts_type),
            TsType::FnOrConstructor { fn_or_constructor } => {
                self.type_params(&fn_or_constructor.type_params);
                self.params(&fn_or_constructor.params);
                self.ty(&fn_or_constructor.ts_type);
            }
            TsType::Conditional { conditional_type } => {
                self.ty(&conditional_type.check_type);
                self.ty(&conditional_type.extends_type);
                self.ty(&conditional_type.true_type);
                self.ty(&conditional_type.false_type);
            }
            TsType::IndexedAccess { indexed_access } => {
                self.ty(&indexed_access.obj_type);
                self.ty(&indexed_access.index_type);
            }
            TsType::TypeLiteral { type_literal } => {
                for signature in &type_literal.call_signatures {
                    self.type_params(&signature.type_params);
                    self.params(&signature.params);
                    self.opt_ty(signature.ts_type.as_ref());
                }
                for method in &type_literal.methods {
                    self.type_params(&method.type_params);
                    self.params(&method.params);
                    self.opt_ty(method.return_type.as_ref());
                }
                for property in &type_literal.properties {
                    self.opt_ty(property.ts_type.as_ref());
                }
                for signature in &type_literal.index_signatures {
                    self.params(&signature.params);
                    self.opt_ty(signature.ts_type.as_ref());
                }
            }
        }
    }

    fn type_params(&mut self, params: &'a [TsTypeParamDef]) {
        for param in params {
            self.opt_ty(param.constraint.as_ref());
            self.opt_ty(param.default.as_ref());
        }
    }

    fn function(&mut self, function: &'a FunctionDef) {
        self.type_params(&function.type_params);
        self.params(&function.params);
        self.opt_ty(function.return_type.as_ref());
    }

    fn params(&mut self, params: &'a [ParamDef]) {
        for param in params {
            self.param(param);
        }
    }

    fn param(&mut self, param: &'a ParamDef) {
        match param {
            ParamDef::Array { elements, .. } => {
                for element in elements.iter().flatten() {
                    self.param(element);
                }
            }
            ParamDef::Assign { left, .. } => self.param(left),
            ParamDef::Identifier { .. } => {}
            ParamDef::Object { props, .. } => {
                for prop in props {
                    match prop {
                        ObjectPatPropDef::Assign { .. } => {}
                        ObjectPatPropDef::KeyValue { value, .. } => self.param(value),
                        ObjectPatPropDef::Rest { arg } => self.param(arg),
                    }
                }
            }
            ParamDef::Rest { arg, .. } => self.param(arg),
        }
        self.opt_ty(param.ts_type());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn collects_type_refs_and_queries_in_order() {
        let ty: TsTypeDef = serde_json::from_value(json!({
            "repr": "",
            "kind": "fnOrConstructor",
            "fnOrConstructor": {
                "constructor": false,
                "params": [{
                    "kind": "identifier", "name": "x", "optional": false,
                    "tsType": { "repr": "typeof config", "kind": "typeQuery", "typeQuery": "config" }
                }],
                "tsType": {
                    "repr": "Promise<Reader>", "kind": "typeRef",
                    "typeRef": { "typeName": "Promise", "typeParams": [
                        { "repr": "Reader", "kind": "typeRef", "typeRef": { "typeName": "Reader" } }
                    ]}
                }
            }
        }))
        .unwrap();

        let refs = type_references(&ty);
        assert_eq!(
            refs,
            vec![
                TypeReference { name: "config", must_be: None },
                TypeReference { name: "Promise", must_be: Some(MustBe::Type) },
                TypeReference { name: "Reader", must_be: Some(MustBe::Type) },
            ]
        );
    }

    #[test]
    fn class_extends_is_a_class_reference() {
        let node: DocNode = serde_json::from_value(json!({
            "kind": "class", "name": "File",
            "location": { "filename": "mod.ts", "line": 1, "col": 0 },
            "classDef": {
                "extends": "Base",
                "implements": [{ "repr": "Closer", "kind": "typeRef", "typeRef": { "typeName": "Closer" } }]
            }
        }))
        .unwrap();

        let refs = node_references(&node);
        assert_eq!(refs[0], TypeReference { name: "Base", must_be: Some(MustBe::Class) });
        assert_eq!(refs[1].name, "Closer");
    }
}
