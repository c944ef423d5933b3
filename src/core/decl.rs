//! Summarized declarations.
//!
//! Declaration kinds form a closed set. Constants carry a canonicalized
//! value; every other kind is opaque and only records identity, comments
//! and the same-library declarations it depends on.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::Name;

/// The value category of a constant, independent of its bit width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    Bool,
    Integer,
    String,
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeKind::Bool => write!(f, "bool"),
            TypeKind::Integer => write!(f, "integer"),
            TypeKind::String => write!(f, "string"),
        }
    }
}

/// Discriminant of a [`Decl`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclKind {
    Const,
    Struct,
    Enum,
    Bits,
    Protocol,
    Alias,
}

impl fmt::Display for DeclKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DeclKind::Const => "const",
            DeclKind::Struct => "struct",
            DeclKind::Enum => "enum",
            DeclKind::Bits => "bits",
            DeclKind::Protocol => "protocol",
            DeclKind::Alias => "alias",
        };
        write!(f, "{}", s)
    }
}

/// A summarized constant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Const {
    pub name: Name,

    #[serde(rename = "type_kind")]
    pub kind: TypeKind,

    /// The type as written in source, e.g. `uint16`.
    #[serde(rename = "type")]
    pub type_name: String,

    /// Canonical value text.
    pub value: String,

    /// The constant this one is defined in terms of, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Name>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,
}

/// A declaration that takes part in ordering but is not canonicalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Opaque {
    pub name: Name,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,

    /// Same-library declarations this one depends on, in first-mention order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub references: Vec<Name>,
}

/// A summarized declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Decl {
    Const(Const),
    Struct(Opaque),
    Enum(Opaque),
    Bits(Opaque),
    Protocol(Opaque),
    Alias(Opaque),
}

impl Decl {
    pub fn name(&self) -> &Name {
        match self {
            Decl::Const(c) => &c.name,
            Decl::Struct(o) | Decl::Enum(o) | Decl::Bits(o) | Decl::Protocol(o) | Decl::Alias(o) => {
                &o.name
            }
        }
    }

    pub fn kind(&self) -> DeclKind {
        match self {
            Decl::Const(_) => DeclKind::Const,
            Decl::Struct(_) => DeclKind::Struct,
            Decl::Enum(_) => DeclKind::Enum,
            Decl::Bits(_) => DeclKind::Bits,
            Decl::Protocol(_) => DeclKind::Protocol,
            Decl::Alias(_) => DeclKind::Alias,
        }
    }

    pub fn comments(&self) -> &[String] {
        match self {
            Decl::Const(c) => &c.comments,
            Decl::Struct(o) | Decl::Enum(o) | Decl::Bits(o) | Decl::Protocol(o) | Decl::Alias(o) => {
                &o.comments
            }
        }
    }

    pub fn is_const(&self) -> bool {
        matches!(self, Decl::Const(_))
    }

    pub fn as_const(&self) -> Option<&Const> {
        match self {
            Decl::Const(c) => Some(c),
            _ => None,
        }
    }
}
