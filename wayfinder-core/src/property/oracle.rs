//! Brute-force reference implementations.
//!
//! Everything here favours obviousness over speed; inputs stay small.

/// All-pairs shortest distances by Floyd–Warshall. `None` means no path.
///
/// Arcs are taken as directed; callers mirror undirected edges themselves.
pub(super) fn floyd_warshall(
    node_count: usize,
    arcs: &[(usize, usize, u64)],
) -> Vec<Vec<Option<u64>>> {
    let mut dist = vec![vec![None; node_count]; node_count];
    for (node, row) in dist.iter_mut().enumerate() {
        row[node] = Some(0);
    }
    for &(tail, head, weight) in arcs {
        let best = dist[tail][head].map_or(weight, |d: u64| d.min(weight));
        dist[tail][head] = Some(best);
    }
    for via in 0..node_count {
        for from in 0..node_count {
            let Some(first) = dist[from][via] else {
                continue;
            };
            for to in 0..node_count {
                let Some(second) = dist[via][to] else {
                    continue;
                };
                let candidate = first + second;
                if dist[from][to].is_none_or(|d| candidate < d) {
                    dist[from][to] = Some(candidate);
                }
            }
        }
    }
    dist
}

/// Single-source distances by Bellman–Ford relaxation over directed arcs.
pub(super) fn bellman_ford(
    node_count: usize,
    arcs: &[(usize, usize, u64)],
    source: usize,
) -> Vec<Option<u64>> {
    let mut dist = vec![None; node_count];
    dist[source] = Some(0);
    for _ in 1..node_count.max(2) {
        let mut changed = false;
        for &(tail, head, weight) in arcs {
            let Some(base) = dist[tail] else {
                continue;
            };
            let candidate = base + weight;
            if dist[head].is_none_or(|d| candidate < d) {
                dist[head] = Some(candidate);
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }
    dist
}

/// Non-reflexive transitive closure: `reach[u][v]` holds when a path of at
/// least one arc leads from `u` to `v`.
pub(super) fn transitive_closure(node_count: usize, arcs: &[(usize, usize)]) -> Vec<Vec<bool>> {
    let mut reach = vec![vec![false; node_count]; node_count];
    for &(tail, head) in arcs {
        reach[tail][head] = true;
    }
    for via in 0..node_count {
        for from in 0..node_count {
            if !reach[from][via] {
                continue;
            }
            for to in 0..node_count {
                if reach[via][to] {
                    reach[from][to] = true;
                }
            }
        }
    }
    reach
}

/// Returns `true` when some node can reach itself.
pub(super) fn has_cycle(node_count: usize, arcs: &[(usize, usize)]) -> bool {
    let reach = transitive_closure(node_count, arcs);
    (0..node_count).any(|node| reach[node][node])
}

/// Arcs of an undirected edge list in both directions.
pub(super) fn mirrored<T: Copy>(edges: &[(usize, usize, T)]) -> Vec<(usize, usize, T)> {
    edges
        .iter()
        .flat_map(|&(tail, head, weight)| [(tail, head, weight), (head, tail, weight)])
        .collect()
}

/// Partition that relabels a whole class on every merge.
#[derive(Clone, Debug)]
pub(super) struct NaivePartition {
    class: Vec<usize>,
}

impl NaivePartition {
    pub(super) fn new(len: usize) -> Self {
        Self {
            class: (0..len).collect(),
        }
    }

    pub(super) fn merge(&mut self, left: usize, right: usize) {
        let (keep, drop) = (self.class[left], self.class[right]);
        if keep == drop {
            return;
        }
        for class in &mut self.class {
            if *class == drop {
                *class = keep;
            }
        }
    }

    pub(super) fn same(&self, left: usize, right: usize) -> bool {
        self.class[left] == self.class[right]
    }

    pub(super) fn count(&self) -> usize {
        let mut classes = self.class.clone();
        classes.sort_unstable();
        classes.dedup();
        classes.len()
    }
}
