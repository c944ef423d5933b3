//! Test utilities for declsum unit tests.
//!
//! Only compiled for tests. Provides IR fixtures and small helpers for
//! inspecting summaries.

pub mod fixtures;

pub use fixtures::*;

use crate::core::Summary;

/// Declaration names of `summary`, in order.
pub fn decl_names(summary: &Summary) -> Vec<String> {
    summary.decls().iter().map(|d| d.name().to_string()).collect()
}
