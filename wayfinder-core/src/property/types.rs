//! Fixture types consumed by the property strategies and runners.

use test_strategy::Arbitrary;

/// Topology family of a generated graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum GraphShape {
    /// Roughly one random edge per node, self-loops and duplicates allowed.
    #[weight(3)]
    Sparse,
    /// Each ordered pair is joined with probability one half.
    #[weight(2)]
    Dense,
    /// Random trees, some nodes left as separate roots.
    #[weight(2)]
    Forest,
    /// Edges only run forward along a hidden permutation.
    #[weight(3)]
    Acyclic,
    /// A handful of nodes and no edges at all, possibly none.
    #[weight(1)]
    Isolated,
}

/// Generated graph together with the context needed to diagnose a failure.
#[derive(Clone, Debug)]
pub(super) struct GraphFixture {
    /// Number of nodes.
    pub node_count: usize,
    /// `(tail, head, weight)` triples; weights are non-negative.
    pub edges: Vec<(usize, usize, i64)>,
    /// Start node for single-source searches. Zero when the graph is empty.
    pub source: usize,
    /// Shape that produced the edges.
    pub shape: GraphShape,
}

impl GraphFixture {
    /// Edge endpoints without weights.
    pub(super) fn pairs(&self) -> Vec<(usize, usize)> {
        self.edges.iter().map(|&(tail, head, _)| (tail, head)).collect()
    }
}

/// Sequence of unions applied to a fresh disjoint set.
#[derive(Clone, Debug)]
pub(super) struct UnionScript {
    /// Number of elements.
    pub len: usize,
    /// Pairs passed to `union`, in order.
    pub unions: Vec<(usize, usize)>,
}
