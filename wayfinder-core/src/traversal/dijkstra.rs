//! Dijkstra's algorithm with a lazily pruned binary heap.
//!
//! The heap has no decrease-key. Improving a distance pushes a fresh entry
//! and the outdated one is discarded when it surfaces, which costs
//! `O(E log E)` instead of `O(E log V)`.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::{debug, instrument};

use super::{ShortestPaths, TraversalStats};
use crate::error::{GraphError, Result, check_node};
use crate::{NodeId, WeightedGraph};

/// Computes minimum path weights from `source`.
///
/// Weights are non-negative by construction of [`WeightedGraph`], which is
/// the precondition for settled distances never improving later.
///
/// A relaxation whose sum exceeds `u64::MAX` cannot beat any representable
/// distance, so it is skipped. The target is remembered, and the call fails
/// only if no other path gives it a representable distance.
///
/// # Errors
/// Returns [`GraphError::NodeOutOfBounds`] if `source` is not a node, and
/// [`GraphError::DistanceOverflow`] if a reachable node's shortest path
/// weight exceeds `u64::MAX`.
///
/// # Examples
/// ```
/// use wayfinder_core::{WeightedGraph, dijkstra};
///
/// let graph = WeightedGraph::directed(
///     5,
///     [
///         (0, 1, 10), (0, 3, 5), (1, 2, 1), (1, 3, 2), (2, 4, 4),
///         (3, 1, 3), (3, 2, 9), (3, 4, 2), (4, 0, 7), (4, 2, 6),
///     ],
/// )?;
/// let paths = dijkstra(&graph, 0)?;
/// assert_eq!(
///     paths.distances(),
///     &[Some(0), Some(8), Some(9), Some(5), Some(7)]
/// );
/// # Ok::<(), wayfinder_core::GraphError>(())
/// ```
#[instrument(
    name = "traversal.dijkstra",
    level = "debug",
    err,
    skip(graph),
    fields(nodes = graph.node_count()),
)]
pub fn dijkstra(graph: &WeightedGraph, source: NodeId) -> Result<ShortestPaths<u64>> {
    check_node(source, graph.node_count())?;
    let adjacency = graph.adjacency();

    let mut distances: Vec<Option<u64>> = vec![None; adjacency.len()];
    let mut stats = TraversalStats::default();
    let mut heap = BinaryHeap::from([Reverse((0_u64, source))]);
    let mut overflowed = Vec::new();
    distances[source] = Some(0);

    while let Some(Reverse((distance, node))) = heap.pop() {
        if distances[node].is_some_and(|best| distance > best) {
            stats.stale_entries += 1;
            continue;
        }
        stats.nodes_settled += 1;

        for edge in &adjacency[node] {
            stats.edges_scanned += 1;
            let target = edge.target();
            let Some(candidate) = distance.checked_add(edge.weight()) else {
                overflowed.push(target);
                continue;
            };
            if distances[target].is_none_or(|best| candidate < best) {
                distances[target] = Some(candidate);
                heap.push(Reverse((candidate, target)));
            }
        }
    }

    if let Some(&node) = overflowed.iter().find(|&&node| distances[node].is_none()) {
        return Err(GraphError::DistanceOverflow { node });
    }

    debug!(
        settled = stats.nodes_settled,
        stale_entries = stats.stale_entries,
        "dijkstra completed"
    );
    Ok(ShortestPaths {
        source,
        distances,
        stats,
    })
}
