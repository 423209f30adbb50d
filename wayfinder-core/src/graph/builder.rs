//! Incremental configuration surface for graph construction.
//!
//! The builder collects edges and an orientation, then produces either an
//! unweighted [`Graph`] or a [`WeightedGraph`] from the same edge set.

use super::{Graph, NodeId, Orientation, WeightedGraph};
use crate::error::Result;

/// Collects edges before building a graph.
///
/// Edges added with [`Self::with_edge`] carry weight `1`, so the weighted
/// build of an unweighted edge set measures hop counts.
///
/// # Examples
/// ```
/// use wayfinder_core::{GraphBuilder, Orientation};
///
/// let builder = GraphBuilder::new(3)
///     .with_orientation(Orientation::Directed)
///     .with_edge(0, 1)
///     .with_weighted_edge(1, 2, 5);
/// assert_eq!(builder.node_count(), 3);
///
/// let graph = builder.clone().build()?;
/// assert_eq!(graph.neighbours(0)?, &[1]);
///
/// let weighted = builder.build_weighted()?;
/// assert_eq!(weighted.edges_from(1)?[0].weight(), 5);
/// # Ok::<(), wayfinder_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct GraphBuilder {
    node_count: usize,
    orientation: Orientation,
    edges: Vec<(NodeId, NodeId, i64)>,
}

impl GraphBuilder {
    /// Starts an undirected builder over `node_count` nodes.
    #[must_use]
    pub fn new(node_count: usize) -> Self {
        Self {
            node_count,
            ..Self::default()
        }
    }

    /// Overrides the orientation.
    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Appends an edge of weight `1`.
    #[must_use]
    pub fn with_edge(self, tail: NodeId, head: NodeId) -> Self {
        self.with_weighted_edge(tail, head, 1)
    }

    /// Appends a weighted edge. The weight is validated at build time.
    #[must_use]
    pub fn with_weighted_edge(mut self, tail: NodeId, head: NodeId, weight: i64) -> Self {
        self.edges.push((tail, head, weight));
        self
    }

    /// Appends an edge without consuming the builder.
    pub fn push_edge(&mut self, tail: NodeId, head: NodeId, weight: i64) -> &mut Self {
        self.edges.push((tail, head, weight));
        self
    }

    /// Configured node count.
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.node_count
    }

    /// Configured orientation.
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Number of edges collected so far.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Builds an unweighted graph, discarding weights.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::NodeOutOfBounds`] for an endpoint not
    /// below the configured node count.
    pub fn build(self) -> Result<Graph> {
        let edges = self.edges.into_iter().map(|(tail, head, _)| (tail, head));
        match self.orientation {
            Orientation::Directed => Graph::directed(self.node_count, edges),
            Orientation::Undirected => Graph::undirected(self.node_count, edges),
        }
    }

    /// Builds a weighted graph.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::NodeOutOfBounds`] for an endpoint not
    /// below the configured node count and
    /// [`crate::GraphError::NegativeWeight`] for a negative weight.
    pub fn build_weighted(self) -> Result<WeightedGraph> {
        match self.orientation {
            Orientation::Directed => WeightedGraph::directed(self.node_count, self.edges),
            Orientation::Undirected => WeightedGraph::undirected(self.node_count, self.edges),
        }
    }
}
