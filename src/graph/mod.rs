//! Declaration dependency graph.
//!
//! One node per declaration, added in source order so that a node's index is
//! its source rank. An edge `a -> b` means "a depends on b".

mod builder;
mod order;

pub use builder::build;

use std::collections::HashMap;
use std::ops::Index;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;

use crate::core::Name;

/// Per-declaration data kept on a graph node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclNode {
    pub name: Name,
    /// Target of an identifier-valued constant.
    pub identifier: Option<Name>,
    /// Same-library references of an opaque declaration, deduplicated.
    pub references: Vec<Name>,
}

/// The dependency graph of one library.
#[derive(Debug, Clone)]
pub struct DeclGraph {
    graph: DiGraph<DeclNode, ()>,
    index: HashMap<Name, NodeIndex>,
}

impl DeclGraph {
    /// Number of declarations.
    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// The node at source rank `rank`.
    pub fn node(&self, rank: usize) -> Option<&DeclNode> {
        self.graph.node_weight(NodeIndex::new(rank))
    }

    /// Source rank of the declaration called `name`.
    pub fn rank_of(&self, name: &Name) -> Option<usize> {
        self.index.get(name).map(|n| n.index())
    }

    /// Ranks of the declarations `rank` depends on, ascending.
    pub fn dependencies(&self, rank: usize) -> Vec<usize> {
        self.neighbors(rank, Direction::Outgoing)
    }

    /// Ranks of the declarations that depend on `rank`, ascending.
    pub fn dependents(&self, rank: usize) -> Vec<usize> {
        self.neighbors(rank, Direction::Incoming)
    }

    fn neighbors(&self, rank: usize, direction: Direction) -> Vec<usize> {
        if rank >= self.len() {
            return Vec::new();
        }
        let mut ranks: Vec<usize> = self
            .graph
            .neighbors_directed(NodeIndex::new(rank), direction)
            .map(|n| n.index())
            .collect();
        ranks.sort_unstable();
        ranks
    }

    /// Ranks in source order.
    pub fn source_order(&self) -> Vec<usize> {
        (0..self.len()).collect()
    }
}

impl Index<usize> for DeclGraph {
    type Output = DeclNode;

    /// The node at source rank `rank`. Panics when out of range.
    fn index(&self, rank: usize) -> &DeclNode {
        &self.graph[NodeIndex::new(rank)]
    }
}
