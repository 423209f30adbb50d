//! Seeded synthetic graphs for benchmarks.
//!
//! Every generator is deterministic for a given seed so runs stay comparable.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use wayfinder_core::{Graph, WeightedGraph};

use crate::error::BenchSetupError;
use crate::params::GraphBenchParams;

/// Largest edge weight produced by [`random_weighted_graph`].
pub const MAX_WEIGHT: i64 = 1_000;

/// Uniformly random `(tail, head, weight)` triples, `average_degree` per
/// node on average.
///
/// # Errors
/// Returns [`BenchSetupError::ZeroValue`] when `node_count` is zero.
pub fn random_edges(
    params: GraphBenchParams,
    seed: u64,
) -> Result<Vec<(usize, usize, i64)>, BenchSetupError> {
    if params.node_count == 0 {
        return Err(BenchSetupError::ZeroValue {
            context: "node_count",
        });
    }
    let mut rng = SmallRng::seed_from_u64(seed);
    let edge_count = params.node_count.saturating_mul(params.average_degree);
    Ok((0..edge_count)
        .map(|_| {
            (
                rng.gen_range(0..params.node_count),
                rng.gen_range(0..params.node_count),
                rng.gen_range(0..=MAX_WEIGHT),
            )
        })
        .collect())
}

/// Random undirected graph for breadth-first search and components.
///
/// # Errors
/// Propagates [`random_edges`] and graph construction failures.
pub fn random_graph(params: GraphBenchParams, seed: u64) -> Result<Graph, BenchSetupError> {
    let edges = random_edges(params, seed)?;
    let pairs = edges.into_iter().map(|(tail, head, _)| (tail, head));
    Ok(Graph::undirected(params.node_count, pairs)?)
}

/// Random directed graph for Dijkstra's algorithm.
///
/// # Errors
/// Propagates [`random_edges`] and graph construction failures.
pub fn random_weighted_graph(
    params: GraphBenchParams,
    seed: u64,
) -> Result<WeightedGraph, BenchSetupError> {
    Ok(WeightedGraph::directed(
        params.node_count,
        random_edges(params, seed)?,
    )?)
}

/// Random DAG: every edge runs from a lower to a higher id.
///
/// # Errors
/// Propagates [`random_edges`] and graph construction failures.
pub fn random_dag(params: GraphBenchParams, seed: u64) -> Result<Graph, BenchSetupError> {
    let edges = random_edges(params, seed)?;
    let pairs = edges
        .into_iter()
        .filter(|&(tail, head, _)| tail != head)
        .map(|(tail, head, _)| (tail.min(head), tail.max(head)));
    Ok(Graph::directed(params.node_count, pairs)?)
}
