//! Summary - the ordered, canonicalized view of one library.
//!
//! A Summary is built once per IR input and ordering policy and is
//! read-only afterwards. Emitters walk `decls()` front to back.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{Const, Decl, LibraryName, Name};

/// How the declarations of a [`Summary`] are ordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclOrder {
    /// The order in which declarations appear in the IR.
    #[default]
    Source,
    /// Every declaration after the declarations it depends on; ties broken
    /// by source order.
    Dependency,
}

impl fmt::Display for DeclOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeclOrder::Source => write!(f, "source"),
            DeclOrder::Dependency => write!(f, "dependency"),
        }
    }
}

impl FromStr for DeclOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "source" => Ok(DeclOrder::Source),
            "dependency" => Ok(DeclOrder::Dependency),
            _ => Err(format!(
                "invalid declaration order '{}'; expected 'source' or 'dependency'",
                s
            )),
        }
    }
}

/// A summarized library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    name: LibraryName,
    order: DeclOrder,
    decls: Vec<Decl>,
}

impl Summary {
    pub(crate) fn new(name: LibraryName, order: DeclOrder, decls: Vec<Decl>) -> Self {
        Summary { name, order, decls }
    }

    /// The library name.
    pub fn name(&self) -> &LibraryName {
        &self.name
    }

    /// The ordering policy the declarations follow.
    pub fn order(&self) -> DeclOrder {
        self.order
    }

    /// All declarations, in `order()`.
    pub fn decls(&self) -> &[Decl] {
        &self.decls
    }

    /// Only the constants, in `order()`.
    pub fn consts(&self) -> impl Iterator<Item = &Const> {
        self.decls.iter().filter_map(Decl::as_const)
    }

    /// Look up a declaration by name.
    pub fn get(&self, name: &Name) -> Option<&Decl> {
        self.decls.iter().find(|d| d.name() == name)
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} decls, {} order)", self.name, self.decls.len(), self.order)
    }
}
