//! Traversal algorithms over [`crate::Graph`] and [`crate::WeightedGraph`].
//!
//! Every algorithm owns its working buffers for the duration of one call and
//! returns its counters in [`TraversalStats`] alongside the result, so no
//! state survives between invocations.

mod bfs;
mod components;
mod dijkstra;
mod topo;

use crate::NodeId;

pub use self::{
    bfs::bfs_shortest,
    components::{ComponentId, Components, count_components, count_components_with_union_find},
    dijkstra::dijkstra,
    topo::{TopologicalOrder, topo_sort},
};

/// Work counters reported by a traversal.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TraversalStats {
    /// Nodes removed from the frontier and expanded.
    pub nodes_settled: usize,
    /// Adjacency entries inspected.
    pub edges_scanned: usize,
    /// Priority-queue entries discarded because a shorter distance had
    /// already been settled. Always zero for unweighted traversals.
    pub stale_entries: usize,
}

/// Single-source distances.
///
/// `None` marks a node that the source cannot reach; it is the only
/// sentinel and cannot collide with a real distance.
///
/// # Examples
/// ```
/// use wayfinder_core::{bfs_shortest, build_graph};
///
/// let graph = build_graph(3, [(0, 1)])?;
/// let paths = bfs_shortest(&graph, 0)?;
/// assert_eq!(paths.distance(1), Some(1));
/// assert_eq!(paths.distance(2), None);
/// assert_eq!(paths.reachable().count(), 2);
/// # Ok::<(), wayfinder_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ShortestPaths<D> {
    source: NodeId,
    distances: Vec<Option<D>>,
    stats: TraversalStats,
}

impl<D: Copy> ShortestPaths<D> {
    /// Node the search started from.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> NodeId { self.source }

    /// Distance to `node`, or `None` when unreachable or out of range.
    #[must_use]
    pub fn distance(&self, node: NodeId) -> Option<D> {
        self.distances.get(node).copied().flatten()
    }

    /// All distances indexed by node.
    #[must_use]
    #[rustfmt::skip]
    pub fn distances(&self) -> &[Option<D>] { &self.distances }

    /// Reachable nodes paired with their distances, in node order.
    pub fn reachable(&self) -> impl Iterator<Item = (NodeId, D)> + '_ {
        self.distances
            .iter()
            .enumerate()
            .filter_map(|(node, distance)| distance.map(|d| (node, d)))
    }

    /// Counters collected while searching.
    #[must_use]
    #[rustfmt::skip]
    pub const fn stats(&self) -> TraversalStats { self.stats }

    /// Consumes the result and returns the raw distance vector.
    #[must_use]
    pub fn into_distances(self) -> Vec<Option<D>> {
        self.distances
    }
}
