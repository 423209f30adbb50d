//! Wayfinder core library.
//!
//! Index-based graph algorithms: breadth-first shortest paths, connected
//! components, topological ordering, Dijkstra's algorithm and a disjoint-set
//! union. Nodes are dense integers `0..n`; [`NodeLabels`] maps arbitrary
//! labels onto them.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod graph;
mod labels;
#[cfg(test)]
mod test_utils;
mod traversal;
mod union_find;

pub use crate::{
    error::{GraphError, GraphErrorCode, Result},
    graph::{Graph, GraphBuilder, NodeId, Orientation, WeightedEdge, WeightedGraph, build_graph},
    labels::NodeLabels,
    traversal::{
        ComponentId, Components, ShortestPaths, TopologicalOrder, TraversalStats, bfs_shortest,
        count_components, count_components_with_union_find, dijkstra, topo_sort,
    },
    union_find::DisjointSet,
};
