use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use tracing::{Span, debug, field, instrument};
use wayfinder_core::{Graph, NodeId, NodeLabels, Orientation, WeightedGraph};

use crate::EdgeListError;

/// One edge as read from the input, with its endpoints already interned.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LabelledEdge {
    /// Dense id of the first label on the line.
    pub tail: NodeId,
    /// Dense id of the second label on the line.
    pub head: NodeId,
    /// Weight from the optional third column.
    pub weight: Option<i64>,
    /// One-based line the edge came from.
    pub line: usize,
}

/// Parsed edge list: interned node labels plus the edges between them.
///
/// # Examples
/// ```
/// use wayfinder_core::{Orientation, bfs_shortest};
/// use wayfinder_providers_edgelist::EdgeList;
///
/// let list: EdgeList = "# roads\nparis lyon\nlyon nice\noslo\n".parse()?;
/// assert_eq!(list.node_count(), 4);
///
/// let graph = list.to_graph(Orientation::Undirected)?;
/// let paris = list.id_of("paris").expect("interned");
/// let nice = list.id_of("nice").expect("interned");
/// assert_eq!(bfs_shortest(&graph, paris)?.distance(nice), Some(2));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct EdgeList {
    labels: NodeLabels<String>,
    edges: Vec<LabelledEdge>,
}

impl EdgeList {
    /// Reads an edge list from `reader`.
    ///
    /// # Errors
    /// Returns [`EdgeListError::Io`] if reading fails,
    /// [`EdgeListError::MalformedLine`] for a line with more than three
    /// tokens and [`EdgeListError::InvalidWeight`] for a third column that is
    /// not an `i64`.
    #[instrument(
        name = "edgelist.parse",
        level = "debug",
        err,
        skip(reader),
        fields(nodes = field::Empty, edges = field::Empty),
    )]
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, EdgeListError> {
        let mut list = Self::default();
        for (index, line) in reader.lines().enumerate() {
            list.ingest_line(index + 1, &line?)?;
        }

        let span = Span::current();
        span.record("nodes", list.node_count());
        span.record("edges", list.edge_count());
        debug!(
            nodes = list.node_count(),
            edges = list.edge_count(),
            "edge list parsed"
        );
        Ok(list)
    }

    /// Opens and reads the edge list stored at `path`.
    ///
    /// # Errors
    /// Returns [`EdgeListError::Io`] if the file cannot be opened, plus every
    /// error [`Self::from_reader`] can report.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, EdgeListError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    fn ingest_line(&mut self, line: usize, text: &str) -> Result<(), EdgeListError> {
        let text = text.trim();
        if text.is_empty() || text.starts_with('#') {
            return Ok(());
        }
        let tokens: Vec<&str> = text.split_whitespace().collect();
        match tokens.as_slice() {
            [node] => {
                self.labels.intern((*node).to_owned());
            }
            [tail, head] => self.push_edge(line, tail, head, None),
            [tail, head, weight] => {
                let weight = weight
                    .parse::<i64>()
                    .map_err(|_| EdgeListError::InvalidWeight {
                        line,
                        token: (*weight).to_owned(),
                    })?;
                self.push_edge(line, tail, head, Some(weight));
            }
            _ => {
                return Err(EdgeListError::MalformedLine {
                    line,
                    tokens: tokens.len(),
                });
            }
        }
        Ok(())
    }

    fn push_edge(&mut self, line: usize, tail: &str, head: &str, weight: Option<i64>) {
        let tail = self.labels.intern(tail.to_owned());
        let head = self.labels.intern(head.to_owned());
        self.edges.push(LabelledEdge {
            tail,
            head,
            weight,
            line,
        });
    }

    /// Number of distinct labels seen.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    /// Number of edge lines read.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edges in input order.
    #[must_use]
    pub fn edges(&self) -> &[LabelledEdge] {
        &self.edges
    }

    /// Label-to-id mapping built while reading.
    #[must_use]
    pub const fn labels(&self) -> &NodeLabels<String> {
        &self.labels
    }

    /// Id assigned to `label`, if it appeared in the input.
    #[must_use]
    pub fn id_of(&self, label: &str) -> Option<NodeId> {
        self.labels.id_of(label)
    }

    /// Label that was assigned `id`.
    #[must_use]
    pub fn label_of(&self, id: NodeId) -> Option<&str> {
        self.labels.label_of(id).map(String::as_str)
    }

    /// Returns `true` when every edge carries a weight.
    #[must_use]
    pub fn is_weighted(&self) -> bool {
        self.edges.iter().all(|edge| edge.weight.is_some())
    }

    /// Edge endpoints without weights, in input order.
    pub fn pairs(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.edges.iter().map(|edge| (edge.tail, edge.head))
    }

    /// Builds an unweighted graph, ignoring any weights.
    ///
    /// # Errors
    /// Propagates [`wayfinder_core::GraphError`] from graph construction.
    pub fn to_graph(&self, orientation: Orientation) -> Result<Graph, EdgeListError> {
        let graph = match orientation {
            Orientation::Directed => Graph::directed(self.node_count(), self.pairs())?,
            Orientation::Undirected => Graph::undirected(self.node_count(), self.pairs())?,
        };
        Ok(graph)
    }

    /// Builds a weighted graph.
    ///
    /// # Errors
    /// Returns [`EdgeListError::MissingWeight`] for the first edge without a
    /// weight and [`EdgeListError::Graph`] when a weight is negative.
    pub fn to_weighted_graph(
        &self,
        orientation: Orientation,
    ) -> Result<WeightedGraph, EdgeListError> {
        let triples = self
            .edges
            .iter()
            .map(|edge| {
                edge.weight
                    .map(|weight| (edge.tail, edge.head, weight))
                    .ok_or(EdgeListError::MissingWeight { line: edge.line })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let graph = match orientation {
            Orientation::Directed => WeightedGraph::directed(self.node_count(), triples)?,
            Orientation::Undirected => WeightedGraph::undirected(self.node_count(), triples)?,
        };
        Ok(graph)
    }
}

impl FromStr for EdgeList {
    type Err = EdgeListError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::from_reader(text.as_bytes())
    }
}
