//! Topological ordering with source-order tie-breaking.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use petgraph::algo::tarjan_scc;
use petgraph::graph::NodeIndex;
use petgraph::Direction;

use super::DeclGraph;
use crate::errors::SummaryError;

impl DeclGraph {
    /// Ranks ordered so that every declaration follows its dependencies.
    ///
    /// Among the declarations whose dependencies have all been emitted, the
    /// one earliest in source is emitted next, so the result is fully
    /// determined by the input.
    pub fn dependency_order(&self) -> Result<Vec<usize>, SummaryError> {
        let n = self.len();

        // Unemitted dependencies per node.
        let mut pending: Vec<usize> = self
            .graph
            .node_indices()
            .map(|node| {
                self.graph
                    .neighbors_directed(node, Direction::Outgoing)
                    .count()
            })
            .collect();

        let mut ready: BinaryHeap<Reverse<usize>> = pending
            .iter()
            .enumerate()
            .filter(|(_, &count)| count == 0)
            .map(|(rank, _)| Reverse(rank))
            .collect();

        let mut order = Vec::with_capacity(n);
        while let Some(Reverse(rank)) = ready.pop() {
            order.push(rank);

            for dependent in self
                .graph
                .neighbors_directed(NodeIndex::new(rank), Direction::Incoming)
            {
                let count = &mut pending[dependent.index()];
                *count -= 1;
                if *count == 0 {
                    ready.push(Reverse(dependent.index()));
                }
            }
        }

        if order.len() < n {
            return Err(self.cycle_error());
        }

        tracing::debug!(decls = n, "computed dependency order");
        Ok(order)
    }

    /// The cycle containing the earliest declaration that is on one.
    fn cycle_error(&self) -> SummaryError {
        let mut cycles: Vec<Vec<usize>> = tarjan_scc(&self.graph)
            .into_iter()
            .filter(|scc| {
                scc.len() > 1 || scc.iter().any(|&node| self.graph.contains_edge(node, node))
            })
            .map(|scc| {
                let mut ranks: Vec<usize> = scc.into_iter().map(|node| node.index()).collect();
                ranks.sort_unstable();
                ranks
            })
            .collect();
        cycles.sort();

        let decls = cycles
            .into_iter()
            .next()
            .unwrap_or_default()
            .into_iter()
            .filter_map(|rank| self.node(rank).map(|node| node.name.clone()))
            .collect();

        SummaryError::CyclicDependency { decls }
    }
}
