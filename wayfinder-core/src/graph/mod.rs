//! Adjacency-list graphs over dense node ids.
//!
//! Nodes are the integers `0..node_count`. Graphs are built once, validated
//! at construction and never mutated afterwards, so the traversal algorithms
//! can index adjacency lists without re-checking bounds.

mod builder;
mod weighted;

use std::ops::Range;

use tracing::{Span, debug, field, instrument};

use crate::error::{Result, check_node};

pub use self::{
    builder::GraphBuilder,
    weighted::{WeightedEdge, WeightedGraph},
};

/// Dense node identifier in `0..node_count`.
pub type NodeId = usize;

/// Whether an edge `(u, v)` is stored one way or both ways.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Orientation {
    /// `(u, v)` is stored as `u -> v` only.
    Directed,
    /// `(u, v)` is stored as `u -> v` and `v -> u`.
    #[default]
    Undirected,
}

impl Orientation {
    /// Lower-case label used in logs and CLI output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Directed => "directed",
            Self::Undirected => "undirected",
        }
    }
}

/// Unweighted adjacency-list graph.
///
/// Parallel edges and self-loops are kept exactly as supplied. In an
/// undirected graph a self-loop `(u, u)` therefore appears twice in `u`'s
/// neighbour list.
///
/// # Examples
/// ```
/// use wayfinder_core::{Graph, Orientation};
///
/// let graph = Graph::directed(3, [(0, 1), (1, 2)])?;
/// assert_eq!(graph.orientation(), Orientation::Directed);
/// assert_eq!(graph.neighbours(1)?, &[2]);
/// # Ok::<(), wayfinder_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Graph {
    adjacency: Vec<Vec<NodeId>>,
    orientation: Orientation,
    edge_count: usize,
}

impl Graph {
    /// Builds a directed graph from `(tail, head)` pairs.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::NodeOutOfBounds`] if an endpoint is not
    /// below `node_count`.
    pub fn directed<I>(node_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (NodeId, NodeId)>,
    {
        assemble(node_count, Orientation::Directed, edges)
    }

    /// Builds an undirected graph, storing every edge at both endpoints.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::NodeOutOfBounds`] if an endpoint is not
    /// below `node_count`.
    pub fn undirected<I>(node_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (NodeId, NodeId)>,
    {
        assemble(node_count, Orientation::Undirected, edges)
    }

    /// Adopts caller-built adjacency lists as a directed graph.
    ///
    /// Symmetry is not checked; lists that happen to be symmetric can be fed
    /// to the undirected algorithms unchanged.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::NodeOutOfBounds`] if any neighbour index
    /// is not below `lists.len()`.
    pub fn from_adjacency(lists: Vec<Vec<NodeId>>) -> Result<Self> {
        let node_count = lists.len();
        for &neighbour in lists.iter().flatten() {
            check_node(neighbour, node_count)?;
        }
        let edge_count = lists.iter().map(Vec::len).sum();
        Ok(Self {
            adjacency: lists,
            orientation: Orientation::Directed,
            edge_count,
        })
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges as supplied, not counting the mirrored copies of an
    /// undirected graph.
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

    /// Iterates over every node id.
    #[must_use]
    pub fn nodes(&self) -> Range<NodeId> {
        0..self.node_count()
    }

    /// Outgoing neighbours of `node`, in insertion order.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::NodeOutOfBounds`] for an unknown node.
    pub fn neighbours(&self, node: NodeId) -> Result<&[NodeId]> {
        check_node(node, self.node_count())?;
        Ok(&self.adjacency[node])
    }

    pub(crate) fn adjacency(&self) -> &[Vec<NodeId>] {
        &self.adjacency
    }
}

/// Builds an undirected graph from an edge list.
///
/// Each edge `(u, v)` is appended to both `u`'s and `v`'s neighbour lists.
/// Duplicates and self-loops are stored as given.
///
/// # Errors
/// Returns [`crate::GraphError::NodeOutOfBounds`] if an endpoint is not below
/// `node_count`.
///
/// # Examples
/// ```
/// use wayfinder_core::build_graph;
///
/// let graph = build_graph(3, [(0, 1), (1, 2)])?;
/// assert_eq!(graph.neighbours(1)?, &[0, 2]);
/// # Ok::<(), wayfinder_core::GraphError>(())
/// ```
pub fn build_graph<I>(node_count: usize, edges: I) -> Result<Graph>
where
    I: IntoIterator<Item = (NodeId, NodeId)>,
{
    Graph::undirected(node_count, edges)
}

#[instrument(
    name = "graph.build",
    level = "debug",
    err,
    skip(orientation, edges),
    fields(orientation = orientation.as_str(), edges = field::Empty),
)]
fn assemble<I>(node_count: usize, orientation: Orientation, edges: I) -> Result<Graph>
where
    I: IntoIterator<Item = (NodeId, NodeId)>,
{
    let mut adjacency = vec![Vec::new(); node_count];
    let mut edge_count = 0;
    for (tail, head) in edges {
        check_node(tail, node_count)?;
        check_node(head, node_count)?;
        adjacency[tail].push(head);
        if orientation == Orientation::Undirected {
            adjacency[head].push(tail);
        }
        edge_count += 1;
    }

    Span::current().record("edges", edge_count);
    debug!(node_count, edge_count, "graph assembled");
    Ok(Graph {
        adjacency,
        orientation,
        edge_count,
    })
}
