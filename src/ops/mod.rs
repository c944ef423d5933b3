//! High-level operations.
//!
//! This module contains the entry points that turn IR into summaries.

pub mod summarize;

pub use summarize::{new_summary, summarize_with_config};
