//! Strategy builders for the property suites.
//!
//! Graphs are generated from a proptest-chosen shape and seed through a
//! [`SmallRng`], so rstest cases can replay a specific seed without going
//! through the proptest runner.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::types::{GraphFixture, GraphShape, UnionScript};

/// Upper bound on nodes for most shapes. Oracles are cubic.
const MAX_NODES: usize = 24;
/// Upper bound on nodes for dense graphs.
const DENSE_MAX_NODES: usize = 12;
/// Largest generated edge weight.
const MAX_WEIGHT: i64 = 20;

/// Generates graph fixtures across every [`GraphShape`].
pub(super) fn graph_fixture_strategy() -> impl Strategy<Value = GraphFixture> {
    (any::<GraphShape>(), any::<u64>()).prop_map(|(shape, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(shape, &mut rng)
    })
}

/// Generates a fixture for a specific shape.
pub(super) fn generate_fixture(shape: GraphShape, rng: &mut SmallRng) -> GraphFixture {
    let (node_count, pairs) = match shape {
        GraphShape::Sparse => generate_sparse(rng),
        GraphShape::Dense => generate_dense(rng),
        GraphShape::Forest => generate_forest(rng),
        GraphShape::Acyclic => generate_acyclic(rng),
        GraphShape::Isolated => (rng.gen_range(0..=6), Vec::new()),
    };
    let edges = pairs
        .into_iter()
        .map(|(tail, head)| (tail, head, rng.gen_range(0..=MAX_WEIGHT)))
        .collect();
    let source = if node_count == 0 {
        0
    } else {
        rng.gen_range(0..node_count)
    };
    GraphFixture {
        node_count,
        edges,
        source,
        shape,
    }
}

/// Generates union scripts with as many as twice the element count unions.
pub(super) fn union_script_strategy() -> impl Strategy<Value = UnionScript> {
    (1_usize..=MAX_NODES).prop_flat_map(|len| {
        proptest::collection::vec((0..len, 0..len), 0..=len * 2)
            .prop_map(move |unions| UnionScript { len, unions })
    })
}

fn generate_sparse(rng: &mut SmallRng) -> (usize, Vec<(usize, usize)>) {
    let node_count = rng.gen_range(1..=MAX_NODES);
    let edge_count = rng.gen_range(0..=node_count);
    let pairs = (0..edge_count)
        .map(|_| (rng.gen_range(0..node_count), rng.gen_range(0..node_count)))
        .collect();
    (node_count, pairs)
}

fn generate_dense(rng: &mut SmallRng) -> (usize, Vec<(usize, usize)>) {
    let node_count = rng.gen_range(2..=DENSE_MAX_NODES);
    let mut pairs = Vec::new();
    for tail in 0..node_count {
        for head in 0..node_count {
            if tail != head && rng.gen_bool(0.5) {
                pairs.push((tail, head));
            }
        }
    }
    (node_count, pairs)
}

fn generate_forest(rng: &mut SmallRng) -> (usize, Vec<(usize, usize)>) {
    let node_count = rng.gen_range(1..=MAX_NODES);
    let mut pairs = Vec::new();
    for child in 1..node_count {
        if rng.gen_bool(0.7) {
            pairs.push((rng.gen_range(0..child), child));
        }
    }
    (node_count, pairs)
}

fn generate_acyclic(rng: &mut SmallRng) -> (usize, Vec<(usize, usize)>) {
    let node_count = rng.gen_range(1..=MAX_NODES);
    let mut rank: Vec<usize> = (0..node_count).collect();
    shuffle(&mut rank, rng);
    let mut pairs = Vec::new();
    for earlier in 0..node_count {
        for later in (earlier + 1)..node_count {
            if rng.gen_bool(0.2) {
                pairs.push((rank[earlier], rank[later]));
            }
        }
    }
    (node_count, pairs)
}

fn shuffle(slice: &mut [usize], rng: &mut SmallRng) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}
