//! Breadth-first shortest paths for unweighted graphs.

use std::collections::VecDeque;

use tracing::{debug, instrument};

use super::{ShortestPaths, TraversalStats};
use crate::error::{Result, check_node};
use crate::{Graph, NodeId};

/// Computes hop distances from `source` by breadth-first search.
///
/// Nodes leave the FIFO frontier in non-decreasing distance order, so the
/// first time a node is reached fixes its shortest distance. Each node is
/// enqueued at most once: `O(V + E)`.
///
/// Directed graphs are followed along edge direction.
///
/// # Errors
/// Returns [`crate::GraphError::NodeOutOfBounds`] if `source` is not a node.
///
/// # Examples
/// ```
/// use wayfinder_core::{bfs_shortest, build_graph};
///
/// let graph = build_graph(5, [(0, 1), (1, 2), (1, 3), (2, 4)])?;
/// let paths = bfs_shortest(&graph, 0)?;
/// assert_eq!(
///     paths.distances(),
///     &[Some(0), Some(1), Some(2), Some(2), Some(3)]
/// );
/// # Ok::<(), wayfinder_core::GraphError>(())
/// ```
#[instrument(
    name = "traversal.bfs",
    level = "debug",
    err,
    skip(graph),
    fields(nodes = graph.node_count()),
)]
pub fn bfs_shortest(graph: &Graph, source: NodeId) -> Result<ShortestPaths<usize>> {
    check_node(source, graph.node_count())?;
    let adjacency = graph.adjacency();

    let mut distances: Vec<Option<usize>> = vec![None; adjacency.len()];
    let mut stats = TraversalStats::default();
    let mut frontier = VecDeque::from([source]);
    distances[source] = Some(0);

    while let Some(node) = frontier.pop_front() {
        stats.nodes_settled += 1;
        let next = distances[node].map_or(0, |d| d + 1);
        for &neighbour in &adjacency[node] {
            stats.edges_scanned += 1;
            if distances[neighbour].is_none() {
                distances[neighbour] = Some(next);
                frontier.push_back(neighbour);
            }
        }
    }

    debug!(
        reached = stats.nodes_settled,
        edges_scanned = stats.edges_scanned,
        "bfs completed"
    );
    Ok(ShortestPaths {
        source,
        distances,
        stats,
    })
}
