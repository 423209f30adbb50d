//! Shared test utilities for `wayfinder-core`.

use proptest::test_runner::Config as ProptestConfig;
use wayfinder_test_support::proptest_profile::ProptestRunProfile;

/// Builds a standard proptest configuration from the shared run profile.
///
/// Keeps every property suite aligned on the same `PROGTEST_CASES` and
/// `WAYFINDER_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Directed acyclic graph from the classic scheduling example.
pub(crate) const SCHEDULING_DAG: [(usize, usize); 6] =
    [(5, 2), (5, 0), (4, 0), (4, 1), (2, 3), (3, 1)];

/// Weighted directed graph whose distances from node 0 are `[0, 8, 9, 5, 7]`.
pub(crate) const WEIGHTED_FIVE: [(usize, usize, i64); 10] = [
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
];

/// Asserts that every edge of `edges` points forward in `order`.
pub(crate) fn assert_respects_edges(order: &[usize], node_count: usize, edges: &[(usize, usize)]) {
    assert_eq!(order.len(), node_count, "order must list every node once");
    let mut position = vec![usize::MAX; node_count];
    for (index, &node) in order.iter().enumerate() {
        assert_eq!(position[node], usize::MAX, "node {node} listed twice");
        position[node] = index;
    }
    for &(tail, head) in edges {
        assert!(
            position[tail] < position[head],
            "edge {tail} -> {head} points backwards in {order:?}"
        );
    }
}
