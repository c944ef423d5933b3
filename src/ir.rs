//! IR input model.
//!
//! This is the boundary with the front end: an already-parsed library as a
//! flat, source-ordered list of declarations. It deserializes from JSON and
//! can also be built in memory:
//!
//! ```rust
//! use declsum::ir::{IrConstValue, IrDecl, IrLibrary};
//!
//! let ir = IrLibrary::new("example")
//!     .with_decl(IrDecl::constant("example/A", "uint8", IrConstValue::numeric("0x1")))
//!     .with_decl(IrDecl::constant("example/B", "uint8", IrConstValue::identifier("example/A")));
//! assert_eq!(ir.declarations.len(), 2);
//! ```
//!
//! Names and values are kept as raw text here; validation happens during
//! summarization.

use serde::{Deserialize, Serialize};

use crate::core::DeclKind;

/// A parsed library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IrLibrary {
    /// Dotted library name.
    pub name: String,

    /// Declarations in source order.
    #[serde(default)]
    pub declarations: Vec<IrDecl>,
}

/// One declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IrDecl {
    /// Fully-qualified name, `library/Declaration`.
    pub name: String,

    #[serde(flatten)]
    pub kind: IrDeclKind,
}

/// Kind-specific payload of a declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IrDeclKind {
    Const(IrConst),
    Struct(IrOpaque),
    Enum(IrOpaque),
    Bits(IrOpaque),
    Protocol(IrOpaque),
    Alias(IrOpaque),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IrConst {
    /// Declared type as written, e.g. `uint16` or `string:32`.
    #[serde(rename = "type")]
    pub type_name: String,

    pub value: IrConstValue,

    /// Raw doc comment blocks, one per doc attribute.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub doc_comments: Vec<String>,
}

/// Payload of a non-constant declaration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IrOpaque {
    /// Names of declarations this one mentions (member types, aliased type,
    /// composed protocols). May include other libraries.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub references: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub doc_comments: Vec<String>,
}

/// How a constant's value is expressed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IrConstValue {
    Literal { literal: IrLiteral },
    Identifier { identifier: String },
}

/// A literal as it appeared in source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum IrLiteral {
    Bool(bool),
    /// Source text of the literal, sign and radix prefix included.
    Numeric(String),
    /// String payload without quotes.
    String(String),
}

impl IrLiteral {
    /// Short category name used in diagnostics.
    pub fn category(&self) -> &'static str {
        match self {
            IrLiteral::Bool(_) => "bool",
            IrLiteral::Numeric(_) => "numeric",
            IrLiteral::String(_) => "string",
        }
    }
}

impl IrLibrary {
    /// Create an empty library.
    pub fn new(name: impl Into<String>) -> Self {
        IrLibrary {
            name: name.into(),
            declarations: Vec::new(),
        }
    }

    /// Append a declaration (source order is append order).
    pub fn with_decl(mut self, decl: IrDecl) -> Self {
        self.declarations.push(decl);
        self
    }

    /// Parse the JSON form.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl IrDecl {
    pub fn new(name: impl Into<String>, kind: IrDeclKind) -> Self {
        IrDecl {
            name: name.into(),
            kind,
        }
    }

    /// A constant declaration.
    pub fn constant(
        name: impl Into<String>,
        type_name: impl Into<String>,
        value: IrConstValue,
    ) -> Self {
        IrDecl::new(
            name,
            IrDeclKind::Const(IrConst {
                type_name: type_name.into(),
                value,
                doc_comments: Vec::new(),
            }),
        )
    }

    /// A non-constant declaration of `kind` that mentions `references`.
    ///
    /// `DeclKind::Const` is not opaque and yields a struct.
    pub fn opaque<I, S>(name: impl Into<String>, kind: DeclKind, references: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let opaque = IrOpaque {
            references: references.into_iter().map(Into::into).collect(),
            doc_comments: Vec::new(),
        };
        let kind = match kind {
            DeclKind::Const | DeclKind::Struct => IrDeclKind::Struct(opaque),
            DeclKind::Enum => IrDeclKind::Enum(opaque),
            DeclKind::Bits => IrDeclKind::Bits(opaque),
            DeclKind::Protocol => IrDeclKind::Protocol(opaque),
            DeclKind::Alias => IrDeclKind::Alias(opaque),
        };
        IrDecl::new(name, kind)
    }

    /// Attach one raw doc comment block.
    pub fn with_doc_comment(mut self, block: impl Into<String>) -> Self {
        self.doc_comments_mut().push(block.into());
        self
    }

    pub fn decl_kind(&self) -> DeclKind {
        match &self.kind {
            IrDeclKind::Const(_) => DeclKind::Const,
            IrDeclKind::Struct(_) => DeclKind::Struct,
            IrDeclKind::Enum(_) => DeclKind::Enum,
            IrDeclKind::Bits(_) => DeclKind::Bits,
            IrDeclKind::Protocol(_) => DeclKind::Protocol,
            IrDeclKind::Alias(_) => DeclKind::Alias,
        }
    }

    pub fn doc_comments(&self) -> &[String] {
        match &self.kind {
            IrDeclKind::Const(c) => &c.doc_comments,
            IrDeclKind::Struct(o)
            | IrDeclKind::Enum(o)
            | IrDeclKind::Bits(o)
            | IrDeclKind::Protocol(o)
            | IrDeclKind::Alias(o) => &o.doc_comments,
        }
    }

    fn doc_comments_mut(&mut self) -> &mut Vec<String> {
        match &mut self.kind {
            IrDeclKind::Const(c) => &mut c.doc_comments,
            IrDeclKind::Struct(o)
            | IrDeclKind::Enum(o)
            | IrDeclKind::Bits(o)
            | IrDeclKind::Protocol(o)
            | IrDeclKind::Alias(o) => &mut o.doc_comments,
        }
    }
}

impl IrConstValue {
    pub fn bool(value: bool) -> Self {
        IrConstValue::Literal {
            literal: IrLiteral::Bool(value),
        }
    }

    pub fn numeric(text: impl Into<String>) -> Self {
        IrConstValue::Literal {
            literal: IrLiteral::Numeric(text.into()),
        }
    }

    pub fn string(payload: impl Into<String>) -> Self {
        IrConstValue::Literal {
            literal: IrLiteral::String(payload.into()),
        }
    }

    pub fn identifier(name: impl Into<String>) -> Self {
        IrConstValue::Identifier {
            identifier: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json() {
        let ir = IrLibrary::from_json(
            r#"{
                "name": "example",
                "declarations": [
                    {
                        "name": "example/A",
                        "kind": "const",
                        "type": "int32",
                        "value": { "kind": "literal", "literal": { "kind": "numeric", "value": "-0x10" } },
                        "doc_comments": [" Doc.\n"]
                    },
                    {
                        "name": "example/B",
                        "kind": "const",
                        "type": "bool",
                        "value": { "kind": "literal", "literal": { "kind": "bool", "value": true } }
                    },
                    {
                        "name": "example/C",
                        "kind": "const",
                        "type": "int32",
                        "value": { "kind": "identifier", "identifier": "example/A" }
                    },
                    { "name": "example/S", "kind": "struct", "references": ["example/C"] },
                    { "name": "example/P", "kind": "protocol" }
                ]
            }"#,
        )
        .unwrap();

        let expected = IrLibrary::new("example")
            .with_decl(
                IrDecl::constant("example/A", "int32", IrConstValue::numeric("-0x10"))
                    .with_doc_comment(" Doc.\n"),
            )
            .with_decl(IrDecl::constant("example/B", "bool", IrConstValue::bool(true)))
            .with_decl(IrDecl::constant(
                "example/C",
                "int32",
                IrConstValue::identifier("example/A"),
            ))
            .with_decl(IrDecl::opaque("example/S", DeclKind::Struct, ["example/C"]))
            .with_decl(IrDecl::opaque(
                "example/P",
                DeclKind::Protocol,
                Vec::<String>::new(),
            ));

        assert_eq!(ir, expected);
        assert_eq!(ir.declarations[0].doc_comments(), [" Doc.\n"]);
        assert_eq!(ir.declarations[4].decl_kind(), DeclKind::Protocol);
    }

    #[test]
    fn test_json_round_trip_is_stable() {
        let ir = IrLibrary::new("example")
            .with_decl(IrDecl::constant("example/S", "string", IrConstValue::string("XXX")))
            .with_decl(IrDecl::opaque("example/E", DeclKind::Enum, ["example/S"]));

        let json = ir.to_json().unwrap();
        assert_eq!(IrLibrary::from_json(&json).unwrap(), ir);
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let err = IrLibrary::from_json(
            r#"{ "name": "example", "declarations": [ { "name": "example/X", "kind": "service" } ] }"#,
        );
        assert!(err.is_err());
    }
}
