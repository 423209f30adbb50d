//! Fixtures shared by the integration test binaries.
#![allow(dead_code, reason = "each test binary uses a subset of the helpers")]

use tracing_subscriber::layer::SubscriberExt;
use wayfinder_core::{Graph, WeightedGraph, build_graph};
use wayfinder_test_support::tracing::RecordingLayer;

/// Undirected five-node tree `0-1, 1-2, 1-3, 2-4`.
#[must_use]
pub fn five_node_tree() -> Graph {
    build_graph(5, [(0, 1), (1, 2), (1, 3), (2, 4)]).expect("valid graph")
}

/// Weighted directed graph with distances `[0, 8, 9, 5, 7]` from node 0.
#[must_use]
pub fn weighted_five() -> WeightedGraph {
    WeightedGraph::directed(
        5,
        [
            (0, 1, 10),
            (0, 3, 5),
            (1, 2, 1),
            (1, 3, 2),
            (2, 4, 4),
            (3, 1, 3),
            (3, 2, 9),
            (3, 4, 2),
            (4, 0, 7),
            (4, 2, 6),
        ],
    )
    .expect("valid graph")
}

/// Runs `f` with a fresh [`RecordingLayer`] installed as the default
/// subscriber and returns both the result and the layer.
pub fn recorded<T>(f: impl FnOnce() -> T) -> (T, RecordingLayer) {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    let value = tracing::subscriber::with_default(subscriber, f);
    (value, layer)
}
