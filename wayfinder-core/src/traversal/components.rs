//! Connected components of undirected graphs.
//!
//! The depth-first walk keeps its pending nodes on an explicit stack, so a
//! long path costs heap memory proportional to the frontier instead of call
//! depth.

use std::fmt;

use tracing::{debug, instrument};

use super::TraversalStats;
use crate::error::Result;
use crate::{DisjointSet, Graph, NodeId};

/// Identifier of a connected component.
///
/// Ids are contiguous from zero and numbered by the smallest node in each
/// component.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ComponentId(usize);

impl ComponentId {
    /// Creates a component identifier.
    #[rustfmt::skip]
    #[must_use]
    pub const fn new(id: usize) -> Self { Self(id) }

    /// Returns the underlying index.
    #[rustfmt::skip]
    #[must_use]
    pub const fn get(self) -> usize { self.0 }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Partition of a graph's nodes into connected components.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Components {
    labels: Vec<ComponentId>,
    count: usize,
    stats: TraversalStats,
}

impl Components {
    /// Number of components. Zero only for an empty graph.
    #[must_use]
    #[rustfmt::skip]
    pub const fn count(&self) -> usize { self.count }

    /// Component of every node, indexed by node.
    #[must_use]
    #[rustfmt::skip]
    pub fn labels(&self) -> &[ComponentId] { &self.labels }

    /// Component containing `node`, or `None` for an unknown node.
    #[must_use]
    pub fn component_of(&self, node: NodeId) -> Option<ComponentId> {
        self.labels.get(node).copied()
    }

    /// Nodes of component `id` in ascending order.
    pub fn members(&self, id: ComponentId) -> impl Iterator<Item = NodeId> + '_ {
        self.labels
            .iter()
            .enumerate()
            .filter_map(move |(node, label)| (*label == id).then_some(node))
    }

    /// Counters collected while labelling.
    #[must_use]
    #[rustfmt::skip]
    pub const fn stats(&self) -> TraversalStats { self.stats }
}

/// Labels the connected components of an undirected graph.
///
/// Nodes are scanned in ascending order; each unlabelled node seeds a
/// depth-first walk that claims everything reachable from it. `O(V + E)`.
///
/// A directed graph is walked along its edge direction only, which yields
/// reachability sets from each seed rather than weak components; build the
/// graph undirected for a true partition.
///
/// # Examples
/// ```
/// use wayfinder_core::{build_graph, count_components};
///
/// let graph = build_graph(6, [(0, 1), (1, 2), (3, 4)])?;
/// let components = count_components(&graph);
/// assert_eq!(components.count(), 3);
/// assert_eq!(components.component_of(5).map(|id| id.get()), Some(2));
/// # Ok::<(), wayfinder_core::GraphError>(())
/// ```
#[must_use]
#[instrument(
    name = "traversal.components",
    level = "debug",
    skip(graph),
    fields(nodes = graph.node_count()),
)]
pub fn count_components(graph: &Graph) -> Components {
    let adjacency = graph.adjacency();
    let mut labels: Vec<Option<ComponentId>> = vec![None; adjacency.len()];
    let mut stats = TraversalStats::default();
    let mut stack = Vec::new();
    let mut count = 0;

    for seed in graph.nodes() {
        if labels[seed].is_some() {
            continue;
        }
        let id = ComponentId(count);
        count += 1;
        labels[seed] = Some(id);
        stack.push(seed);

        while let Some(node) = stack.pop() {
            stats.nodes_settled += 1;
            for &neighbour in &adjacency[node] {
                stats.edges_scanned += 1;
                if labels[neighbour].is_none() {
                    labels[neighbour] = Some(id);
                    stack.push(neighbour);
                }
            }
        }
    }

    debug!(components = count, "components labelled");
    Components {
        labels: labels.into_iter().flatten().collect(),
        count,
        stats,
    }
}

/// Counts the connected components of an undirected edge list with a
/// [`DisjointSet`], without building adjacency lists.
///
/// Starts from `node_count` singleton sets and unions the endpoints of every
/// edge; the remaining set count is the component count.
///
/// # Errors
/// Returns [`crate::GraphError::NodeOutOfBounds`] if an endpoint is not below
/// `node_count`.
///
/// # Examples
/// ```
/// use wayfinder_core::count_components_with_union_find;
///
/// assert_eq!(count_components_with_union_find(5, Vec::new())?, 5);
/// assert_eq!(count_components_with_union_find(4, [(0, 1), (1, 2), (2, 3)])?, 1);
/// # Ok::<(), wayfinder_core::GraphError>(())
/// ```
#[instrument(name = "traversal.components_union_find", level = "debug", err, skip(edges))]
pub fn count_components_with_union_find<I>(node_count: usize, edges: I) -> Result<usize>
where
    I: IntoIterator<Item = (NodeId, NodeId)>,
{
    let mut sets = DisjointSet::new(node_count);
    for (left, right) in edges {
        sets.union(left, right)?;
    }
    debug!(components = sets.count(), "union-find components counted");
    Ok(sets.count())
}
