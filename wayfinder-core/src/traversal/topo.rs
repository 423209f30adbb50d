//! Kahn's algorithm for topological ordering.

use std::collections::VecDeque;

use tracing::{debug, instrument, warn};

use crate::{Graph, NodeId};

/// Outcome of [`topo_sort`].
///
/// A cycle is reported explicitly; callers never have to compare lengths to
/// find out whether an ordering is complete.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TopologicalOrder {
    /// Every node, ordered so that each edge `u -> v` has `u` before `v`.
    Complete(Vec<NodeId>),
    /// The graph contains at least one cycle.
    Cycle {
        /// Nodes that were released before the search stalled. They form a
        /// valid prefix ordering of the acyclic part of the graph.
        ordered: Vec<NodeId>,
        /// Nodes that never reached in-degree zero, in ascending order. Each
        /// lies on a cycle or downstream of one.
        unresolved: Vec<NodeId>,
    },
}

impl TopologicalOrder {
    /// Returns `true` when a full ordering exists.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }

    /// Returns `true` when a cycle blocked the ordering.
    #[must_use]
    pub const fn cycle_detected(&self) -> bool {
        !self.is_complete()
    }

    /// The complete ordering, or `None` when a cycle was found.
    #[must_use]
    pub fn order(&self) -> Option<&[NodeId]> {
        match self {
            Self::Complete(order) => Some(order),
            Self::Cycle { .. } => None,
        }
    }

    /// Consumes the result, returning the complete ordering if there is one.
    #[must_use]
    pub fn into_order(self) -> Option<Vec<NodeId>> {
        match self {
            Self::Complete(order) => Some(order),
            Self::Cycle { .. } => None,
        }
    }
}

/// Orders the nodes of a directed graph so every edge points forward.
///
/// Zero in-degree nodes seed a FIFO queue in ascending id order; releasing a
/// node decrements the in-degree of its successors and enqueues any that
/// reach zero. If fewer than `node_count` nodes are released the remaining
/// ones sit on or behind a cycle and [`TopologicalOrder::Cycle`] is returned.
///
/// The ordering is deterministic for a given adjacency list. An undirected
/// graph with at least one edge always reports a cycle because every edge is
/// stored in both directions.
///
/// # Examples
/// ```
/// use wayfinder_core::{Graph, TopologicalOrder, topo_sort};
///
/// let dag = Graph::directed(3, [(2, 0), (0, 1)])?;
/// assert_eq!(topo_sort(&dag), TopologicalOrder::Complete(vec![2, 0, 1]));
///
/// let cyclic = Graph::directed(3, [(0, 1), (1, 2), (2, 0)])?;
/// assert!(topo_sort(&cyclic).cycle_detected());
/// # Ok::<(), wayfinder_core::GraphError>(())
/// ```
#[must_use]
#[instrument(
    name = "traversal.topo_sort",
    level = "debug",
    skip(graph),
    fields(nodes = graph.node_count()),
)]
pub fn topo_sort(graph: &Graph) -> TopologicalOrder {
    let adjacency = graph.adjacency();
    let mut in_degree = vec![0_usize; adjacency.len()];
    for &head in adjacency.iter().flatten() {
        in_degree[head] += 1;
    }

    let mut ready: VecDeque<NodeId> = in_degree
        .iter()
        .enumerate()
        .filter_map(|(node, &degree)| (degree == 0).then_some(node))
        .collect();
    let mut ordered = Vec::with_capacity(adjacency.len());

    while let Some(node) = ready.pop_front() {
        ordered.push(node);
        for &head in &adjacency[node] {
            in_degree[head] -= 1;
            if in_degree[head] == 0 {
                ready.push_back(head);
            }
        }
    }

    if ordered.len() == adjacency.len() {
        debug!(ordered = ordered.len(), "topological order complete");
        return TopologicalOrder::Complete(ordered);
    }

    let unresolved: Vec<NodeId> = in_degree
        .iter()
        .enumerate()
        .filter_map(|(node, &degree)| (degree > 0).then_some(node))
        .collect();
    warn!(
        ordered = ordered.len(),
        unresolved = unresolved.len(),
        "cycle detected; no topological order exists"
    );
    TopologicalOrder::Cycle {
        ordered,
        unresolved,
    }
}
