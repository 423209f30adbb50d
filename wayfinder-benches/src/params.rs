//! Benchmark parameter types, rendered into Criterion benchmark ids.

use std::fmt;

/// Parameters for a graph benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct GraphBenchParams {
    /// Number of nodes.
    pub node_count: usize,
    /// Average out-degree of the generated graph.
    pub average_degree: usize,
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},d={}", self.node_count, self.average_degree)
    }
}
