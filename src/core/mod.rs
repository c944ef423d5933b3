//! Core data structures for declsum.
//!
//! This module contains the types a summary is made of:
//! - Names (library names and fully-qualified declaration names)
//! - Declarations (constants and opaque kinds)
//! - The summary itself and its ordering policy

pub mod decl;
pub mod name;
pub mod summary;

pub use decl::{Const, Decl, DeclKind, Opaque, TypeKind};
pub use name::{LibraryName, Name};
pub use summary::{DeclOrder, Summary};
