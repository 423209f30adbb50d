//! Weighted adjacency lists for shortest-path search.
//!
//! Weights arrive as signed integers so callers can hand over data verbatim;
//! construction rejects anything negative and stores the rest as `u64`.

use tracing::{Span, debug, field, instrument};

use super::{NodeId, Orientation};
use crate::error::{GraphError, Result, check_node};

/// Adjacency entry of a [`WeightedGraph`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct WeightedEdge {
    target: NodeId,
    weight: u64,
}

impl WeightedEdge {
    /// Head of the edge.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> NodeId { self.target }

    /// Non-negative edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> u64 { self.weight }
}

/// Adjacency-list graph whose entries carry non-negative weights.
///
/// # Examples
/// ```
/// use wayfinder_core::WeightedGraph;
///
/// let graph = WeightedGraph::directed(2, [(0, 1, 4)])?;
/// let edge = graph.edges_from(0)?[0];
/// assert_eq!((edge.target(), edge.weight()), (1, 4));
///
/// let err = WeightedGraph::directed(2, [(0, 1, -4)]).unwrap_err();
/// assert_eq!(err.code().as_str(), "GRAPH_NEGATIVE_WEIGHT");
/// # Ok::<(), wayfinder_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WeightedGraph {
    adjacency: Vec<Vec<WeightedEdge>>,
    orientation: Orientation,
    edge_count: usize,
}

impl WeightedGraph {
    /// Builds a directed weighted graph from `(tail, head, weight)` triples.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeOutOfBounds`] for an endpoint not below
    /// `node_count` and [`GraphError::NegativeWeight`] for a weight below zero.
    pub fn directed<I>(node_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (NodeId, NodeId, i64)>,
    {
        assemble_weighted(node_count, Orientation::Directed, edges)
    }

    /// Builds an undirected weighted graph, mirroring each edge.
    ///
    /// # Errors
    /// Same conditions as [`Self::directed`].
    pub fn undirected<I>(node_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (NodeId, NodeId, i64)>,
    {
        assemble_weighted(node_count, Orientation::Undirected, edges)
    }

    /// Adopts caller-built `(neighbour, weight)` lists as a directed graph.
    ///
    /// # Errors
    /// Same conditions as [`Self::directed`], reported for the first offending
    /// entry in node order.
    pub fn from_adjacency(lists: Vec<Vec<(NodeId, i64)>>) -> Result<Self> {
        let node_count = lists.len();
        let adjacency = lists
            .into_iter()
            .enumerate()
            .map(|(origin, entries)| {
                entries
                    .into_iter()
                    .map(|(target, weight)| weighted_edge(node_count, origin, target, weight))
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;
        let edge_count = adjacency.iter().map(Vec::len).sum();
        Ok(Self {
            adjacency,
            orientation: Orientation::Directed,
            edge_count,
        })
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges as supplied.
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns `true` when the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// How edges were stored.
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Outgoing edges of `node`, in insertion order.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeOutOfBounds`] for an unknown node.
    pub fn edges_from(&self, node: NodeId) -> Result<&[WeightedEdge]> {
        check_node(node, self.node_count())?;
        Ok(&self.adjacency[node])
    }

    pub(crate) fn adjacency(&self) -> &[Vec<WeightedEdge>] {
        &self.adjacency
    }
}

fn weighted_edge(
    node_count: usize,
    origin: NodeId,
    target: NodeId,
    weight: i64,
) -> Result<WeightedEdge> {
    check_node(origin, node_count)?;
    check_node(target, node_count)?;
    let weight = u64::try_from(weight).map_err(|_| GraphError::NegativeWeight {
        origin,
        target,
        weight,
    })?;
    Ok(WeightedEdge { target, weight })
}

#[instrument(
    name = "graph.build_weighted",
    level = "debug",
    err,
    skip(orientation, edges),
    fields(orientation = orientation.as_str(), edges = field::Empty),
)]
fn assemble_weighted<I>(
    node_count: usize,
    orientation: Orientation,
    edges: I,
) -> Result<WeightedGraph>
where
    I: IntoIterator<Item = (NodeId, NodeId, i64)>,
{
    let mut adjacency = vec![Vec::new(); node_count];
    let mut edge_count = 0;
    for (tail, head, weight) in edges {
        let forward = weighted_edge(node_count, tail, head, weight)?;
        adjacency[tail].push(forward);
        if orientation == Orientation::Undirected {
            adjacency[head].push(WeightedEdge {
                target: tail,
                weight: forward.weight,
            });
        }
        edge_count += 1;
    }

    Span::current().record("edges", edge_count);
    debug!(node_count, edge_count, "weighted graph assembled");
    Ok(WeightedGraph {
        adjacency,
        orientation,
        edge_count,
    })
}
