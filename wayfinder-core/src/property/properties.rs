//! Property runners shared by the proptest and rstest drivers.

use proptest::prelude::*;
use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{
    DisjointSet, Graph, TopologicalOrder, WeightedGraph, bfs_shortest, count_components,
    count_components_with_union_find, dijkstra, topo_sort,
};

use super::oracle::{
    NaivePartition, bellman_ford, floyd_warshall, has_cycle, mirrored, transitive_closure,
};
use super::types::{GraphFixture, UnionScript};

fn build_failure(fixture: &GraphFixture, err: impl std::fmt::Display) -> TestCaseError {
    TestCaseError::fail(format!(
        "graph construction failed: {err} (shape={:?}, nodes={}, edges={})",
        fixture.shape,
        fixture.node_count,
        fixture.edges.len(),
    ))
}

fn unit_arcs(fixture: &GraphFixture, undirected: bool) -> Vec<(usize, usize, u64)> {
    let unit: Vec<(usize, usize, u64)> = fixture
        .edges
        .iter()
        .map(|&(tail, head, _)| (tail, head, 1))
        .collect();
    if undirected { mirrored(&unit) } else { unit }
}

fn weighted_arcs(fixture: &GraphFixture, undirected: bool) -> Vec<(usize, usize, u64)> {
    let arcs: Vec<(usize, usize, u64)> = fixture
        .edges
        .iter()
        .map(|&(tail, head, weight)| (tail, head, weight.unsigned_abs()))
        .collect();
    if undirected { mirrored(&arcs) } else { arcs }
}

/// BFS distances equal Floyd–Warshall hop counts in both orientations.
pub(super) fn run_bfs_oracle_property(fixture: &GraphFixture) -> TestCaseResult {
    if fixture.node_count == 0 {
        return Ok(());
    }
    for undirected in [false, true] {
        let graph = if undirected {
            Graph::undirected(fixture.node_count, fixture.pairs())
        } else {
            Graph::directed(fixture.node_count, fixture.pairs())
        }
        .map_err(|err| build_failure(fixture, err))?;

        let paths = bfs_shortest(&graph, fixture.source)
            .map_err(|err| TestCaseError::fail(format!("bfs failed: {err}")))?;
        let expected = floyd_warshall(fixture.node_count, &unit_arcs(fixture, undirected));
        let actual: Vec<Option<u64>> = paths
            .distances()
            .iter()
            .map(|d| d.map(|hops| hops as u64))
            .collect();
        prop_assert_eq!(
            &actual,
            &expected[fixture.source],
            "undirected={} fixture={:?}",
            undirected,
            fixture
        );
    }
    Ok(())
}

/// Dijkstra distances equal Bellman–Ford distances in both orientations.
pub(super) fn run_dijkstra_oracle_property(fixture: &GraphFixture) -> TestCaseResult {
    if fixture.node_count == 0 {
        return Ok(());
    }
    for undirected in [false, true] {
        let edges = fixture.edges.iter().copied();
        let graph = if undirected {
            WeightedGraph::undirected(fixture.node_count, edges)
        } else {
            WeightedGraph::directed(fixture.node_count, edges)
        }
        .map_err(|err| build_failure(fixture, err))?;

        let paths = dijkstra(&graph, fixture.source)
            .map_err(|err| TestCaseError::fail(format!("dijkstra failed: {err}")))?;
        let expected = bellman_ford(
            fixture.node_count,
            &weighted_arcs(fixture, undirected),
            fixture.source,
        );
        prop_assert_eq!(
            paths.distances(),
            expected.as_slice(),
            "undirected={} fixture={:?}",
            undirected,
            fixture
        );
    }
    Ok(())
}

/// Component labels form a partition matching undirected reachability, and
/// the union-find count agrees with it.
pub(super) fn run_components_partition_property(fixture: &GraphFixture) -> TestCaseResult {
    let pairs = fixture.pairs();
    let graph = Graph::undirected(fixture.node_count, pairs.iter().copied())
        .map_err(|err| build_failure(fixture, err))?;
    let components = count_components(&graph);
    let labels = components.labels();
    prop_assert_eq!(labels.len(), fixture.node_count);

    let symmetric: Vec<(usize, usize)> = pairs
        .iter()
        .flat_map(|&(tail, head)| [(tail, head), (head, tail)])
        .collect();
    let reach = transitive_closure(fixture.node_count, &symmetric);
    for left in 0..fixture.node_count {
        for right in 0..fixture.node_count {
            let connected = left == right || reach[left][right];
            prop_assert_eq!(
                labels[left] == labels[right],
                connected,
                "nodes {} and {} in {:?}",
                left,
                right,
                fixture
            );
        }
    }

    let mut ids: Vec<usize> = labels.iter().map(|id| id.get()).collect();
    ids.sort_unstable();
    ids.dedup();
    prop_assert_eq!(ids, (0..components.count()).collect::<Vec<_>>());

    let via_union_find = count_components_with_union_find(fixture.node_count, pairs)
        .map_err(|err| TestCaseError::fail(format!("union-find count failed: {err}")))?;
    prop_assert_eq!(via_union_find, components.count());
    Ok(())
}

/// A complete order exists exactly when the graph is acyclic, and it places
/// every edge forward.
pub(super) fn run_topological_order_property(fixture: &GraphFixture) -> TestCaseResult {
    let pairs = fixture.pairs();
    let graph = Graph::directed(fixture.node_count, pairs.iter().copied())
        .map_err(|err| build_failure(fixture, err))?;
    let cyclic = has_cycle(fixture.node_count, &pairs);

    match topo_sort(&graph) {
        TopologicalOrder::Complete(order) => {
            prop_assert!(!cyclic, "complete order for cyclic {:?}", fixture);
            prop_assert_eq!(order.len(), fixture.node_count);
            let mut position = vec![usize::MAX; fixture.node_count];
            for (index, &node) in order.iter().enumerate() {
                prop_assert_eq!(position[node], usize::MAX, "node {} repeated", node);
                position[node] = index;
            }
            for &(tail, head) in &pairs {
                prop_assert!(
                    position[tail] < position[head],
                    "edge {} -> {} points backwards",
                    tail,
                    head
                );
            }
        }
        TopologicalOrder::Cycle {
            ordered,
            unresolved,
        } => {
            prop_assert!(cyclic, "cycle reported for acyclic {:?}", fixture);
            prop_assert_eq!(ordered.len() + unresolved.len(), fixture.node_count);
            prop_assert!(!unresolved.is_empty());
        }
    }
    Ok(())
}

/// `find` agrees with a naive partition after every union, `count` matches
/// the number of distinct representatives, and repeated finds are stable.
pub(super) fn run_disjoint_set_property(script: &UnionScript) -> TestCaseResult {
    let mut sets = DisjointSet::new(script.len);
    let mut naive = NaivePartition::new(script.len);
    let fail = |err: crate::GraphError| TestCaseError::fail(format!("disjoint set failed: {err}"));

    for &(left, right) in &script.unions {
        let merged = sets.union(left, right).map_err(fail)?;
        prop_assert_eq!(merged, !naive.same(left, right));
        naive.merge(left, right);
        prop_assert_eq!(sets.count(), naive.count());
    }

    for left in 0..script.len {
        for right in 0..script.len {
            let same = sets.same_set(left, right).map_err(fail)?;
            prop_assert_eq!(same, naive.same(left, right));
        }
    }

    let first: Vec<usize> = (0..script.len)
        .map(|element| sets.find(element))
        .collect::<Result<_, _>>()
        .map_err(fail)?;
    let second: Vec<usize> = (0..script.len)
        .map(|element| sets.find(element))
        .collect::<Result<_, _>>()
        .map_err(fail)?;
    prop_assert_eq!(&first, &second);

    let mut representatives = first;
    representatives.sort_unstable();
    representatives.dedup();
    prop_assert_eq!(representatives.len(), sets.count());
    Ok(())
}
