//! declsum - declaration summaries for IDL binding generators
//!
//! This crate turns the parsed IR of an interface-definition library into a
//! [`Summary`]: every declaration uniquely named, constants classified and
//! canonicalized, in either source order or dependency order. Emitters for
//! the individual target languages consume the summary.
//!
//! The transformation is pure: no I/O, no global state, and identical input
//! always produces an identical summary.

pub mod comment;
pub mod core;
pub mod errors;
pub mod graph;
pub mod ir;
pub mod ops;
pub mod util;
pub mod value;

/// Test utilities for declsum unit tests.
///
/// Only compiled with `--cfg test`. Provides IR fixtures shared across
/// modules.
#[cfg(test)]
pub mod test_support;

pub use crate::core::{Const, Decl, DeclKind, DeclOrder, LibraryName, Name, Opaque, Summary, TypeKind};

pub use errors::SummaryError;
pub use ir::IrLibrary;
pub use ops::{new_summary, summarize_with_config};
pub use util::Config;
