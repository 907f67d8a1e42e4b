//! Type expression model.
//!
//! Mirrors the JSON the doc generator emits for TypeScript type positions:
//! every [`TsTypeDef`] carries its source `repr` plus a `kind`-tagged payload
//! stored under a key named after the kind (`{"kind": "array", "array": {..}}`).

use serde::{Deserialize, Serialize};

/// A type expression together with its printed source form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TsTypeDef {
    /// Source text of the type as written.
    #[serde(default)]
    pub repr: String,
    /// Kind-specific payload.
    #[serde(flatten)]
    pub ty: TsType,
}

impl TsTypeDef {
    pub fn new(repr: impl Into<String>, ty: TsType) -> Self {
        Self {
            repr: repr.into(),
            ty,
        }
    }

    /// A bare keyword type such as `string` or `void`.
    pub fn keyword(keyword: impl Into<String>) -> Self {
        let keyword = keyword.into();
        Self::new(keyword.clone(), TsType::Keyword { keyword })
    }

    /// An unresolved reference to a named type, without type arguments.
    pub fn type_ref(type_name: impl Into<String>) -> Self {
        let type_name = type_name.into();
        Self::new(
            type_name.clone(),
            TsType::TypeRef {
                type_ref: TsTypeRefDef {
                    type_name,
                    type_params: None,
                },
            },
        )
    }
}

/// Kind-tagged payload of a [`TsTypeDef`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum TsType {
    Keyword {
        keyword: String,
    },
    Literal {
        literal: LiteralDef,
    },
    TypeRef {
        type_ref: TsTypeRefDef,
    },
    Union {
        union: Vec<TsTypeDef>,
    },
    Intersection {
        intersection: Vec<TsTypeDef>,
    },
    Array {
        array: Box<TsTypeDef>,
    },
    Tuple {
        tuple: Vec<TsTypeDef>,
    },
    TypeOperator {
        type_operator: Box<TsTypeOperatorDef>,
    },
    Parenthesized {
        parenthesized: Box<TsTypeDef>,
    },
    Rest {
        rest: Box<TsTypeDef>,
    },
    Optional {
        optional: Box<TsTypeDef>,
    },
    /// `typeof x`; the payload is the queried value name.
    TypeQuery {
        type_query: String,
    },
    This {
        #[serde(default)]
        this: bool,
    },
    FnOrConstructor {
        fn_or_constructor: Box<TsFnOrConstructorDef>,
    },
    Conditional {
        conditional_type: Box<TsConditionalDef>,
    },
    IndexedAccess {
        indexed_access: Box<TsIndexedAccessDef>,
    },
    TypeLiteral {
        type_literal: TsTypeLiteralDef,
    },
}

/// Literal types: `1`, `"a"`, `true`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum LiteralDef {
    Number { number: f64 },
    String { string: String },
    Boolean { boolean: bool },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TsTypeRefDef {
    /// Referenced name as written, possibly dotted (`ns.Type`). Never pre-resolved.
    pub type_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_params: Option<Vec<TsTypeDef>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TsTypeOperatorDef {
    /// `keyof`, `unique`, `readonly`.
    pub operator: String,
    pub ts_type: TsTypeDef,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TsFnOrConstructorDef {
    /// `true` for `new (..) => T`.
    #[serde(default)]
    pub constructor: bool,
    pub ts_type: TsTypeDef,
    #[serde(default)]
    pub params: Vec<ParamDef>,
    #[serde(default)]
    pub type_params: Vec<TsTypeParamDef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TsConditionalDef {
    pub check_type: TsTypeDef,
    pub extends_type: TsTypeDef,
    pub true_type: TsTypeDef,
    pub false_type: TsTypeDef,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TsIndexedAccessDef {
    #[serde(default)]
    pub readonly: bool,
    pub obj_type: TsTypeDef,
    pub index_type: TsTypeDef,
}

/// An inline object type: `{ a: string; (x: number): void }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TsTypeLiteralDef {
    #[serde(default)]
    pub methods: Vec<LiteralMethodDef>,
    #[serde(default)]
    pub properties: Vec<LiteralPropertyDef>,
    #[serde(default)]
    pub call_signatures: Vec<LiteralCallSignatureDef>,
    #[serde(default)]
    pub index_signatures: Vec<LiteralIndexSignatureDef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiteralMethodDef {
    pub name: String,
    #[serde(default)]
    pub params: Vec<ParamDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_type: Option<TsTypeDef>,
    #[serde(default)]
    pub type_params: Vec<TsTypeParamDef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiteralPropertyDef {
    pub name: String,
    #[serde(default)]
    pub computed: bool,
    #[serde(default)]
    pub optional: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ts_type: Option<TsTypeDef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiteralCallSignatureDef {
    #[serde(default)]
    pub params: Vec<ParamDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ts_type: Option<TsTypeDef>,
    #[serde(default)]
    pub type_params: Vec<TsTypeParamDef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiteralIndexSignatureDef {
    #[serde(default)]
    pub readonly: bool,
    #[serde(default)]
    pub params: Vec<ParamDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ts_type: Option<TsTypeDef>,
}

/// A generic parameter: `T extends Base = Default`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TsTypeParamDef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraint: Option<TsTypeDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<TsTypeDef>,
}

/// A function parameter binding pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ParamDef {
    /// `[a, , b]: T`; holes are `None`.
    Array {
        elements: Vec<Option<ParamDef>>,
        #[serde(default)]
        optional: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        ts_type: Option<TsTypeDef>,
    },
    /// `left = right`; `right` is the default value's source text.
    Assign {
        left: Box<ParamDef>,
        right: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        ts_type: Option<TsTypeDef>,
    },
    Identifier {
        name: String,
        #[serde(default)]
        optional: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        ts_type: Option<TsTypeDef>,
    },
    Object {
        props: Vec<ObjectPatPropDef>,
        #[serde(default)]
        optional: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        ts_type: Option<TsTypeDef>,
    },
    Rest {
        arg: Box<ParamDef>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        ts_type: Option<TsTypeDef>,
    },
}

impl ParamDef {
    /// Declared type annotation of this parameter, if any.
    pub fn ts_type(&self) -> Option<&TsTypeDef> {
        match self {
            ParamDef::Array { ts_type, .. }
            | ParamDef::Assign { ts_type, .. }
            | ParamDef::Identifier { ts_type, .. }
            | ParamDef::Object { ts_type, .. }
            | ParamDef::Rest { ts_type, .. } => ts_type.as_ref(),
        }
    }
}

/// A property inside an object destructuring pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ObjectPatPropDef {
    /// `{ key = value }` or shorthand `{ key }`.
    Assign {
        key: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<String>,
    },
    KeyValue {
        key: String,
        value: Box<ParamDef>,
    },
    Rest {
        arg: Box<ParamDef>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_nested_type_ref() {
        let ty: TsTypeDef = serde_json::from_value(json!({
            "repr": "Promise<Deno.File[]>",
            "kind": "typeRef",
            "typeRef": {
                "typeName": "Promise",
                "typeParams": [{
                    "repr": "Deno.File[]",
                    "kind": "array",
                    "array": { "repr": "Deno.File", "kind": "typeRef", "typeRef": { "typeName": "Deno.File" } }
                }]
            }
        }))
        .unwrap();

        let TsType::TypeRef { type_ref } = &ty.ty else {
            panic!("expected typeRef, got {:?}", ty.ty);
        };
        assert_eq!(type_ref.type_name, "Promise");
        let params = type_ref.type_params.as_ref().unwrap();
        assert!(matches!(&params[0].ty, TsType::Array { array } if array.repr == "Deno.File"));
    }

    #[test]
    fn decodes_literal_and_this() {
        let ty: TsTypeDef = serde_json::from_value(json!({
            "repr": "",
            "kind": "union",
            "union": [
                { "repr": "1", "kind": "literal", "literal": { "kind": "number", "number": 1 } },
                { "repr": "\"a\"", "kind": "literal", "literal": { "kind": "string", "string": "a" } },
                { "repr": "this", "kind": "this", "this": true }
            ]
        }))
        .unwrap();

        let TsType::Union { union } = ty.ty else {
            panic!("expected union");
        };
        assert_eq!(
            union[0].ty,
            TsType::Literal {
                literal: LiteralDef::Number { number: 1.0 }
            }
        );
        assert!(matches!(union[2].ty, TsType::This { this: true }));
    }

    #[test]
    fn rejects_unknown_type_kind() {
        let result = serde_json::from_value::<TsTypeDef>(json!({
            "repr": "x",
            "kind": "notAType",
        }));
        assert!(result.is_err());
    }

    #[test]
    fn param_type_is_reachable_through_every_pattern() {
        let param: ParamDef = serde_json::from_value(json!({
            "kind": "rest",
            "arg": { "kind": "identifier", "name": "args", "optional": false },
            "tsType": { "repr": "string[]", "kind": "array", "array": { "repr": "string", "kind": "keyword", "keyword": "string" } }
        }))
        .unwrap();
        assert_eq!(param.ts_type().map(|t| t.repr.as_str()), Some("string[]"));
    }
}
