//! Disjoint-set union with path compression and union by rank.
//!
//! Together the two heuristics give amortised `O(α(n))` per operation. The
//! structure also tracks how many distinct sets remain, decrementing exactly
//! once per union that actually merges two sets.


use tracing::trace;

use crate::error::{Result, check_node};

/// Partition of `0..len` into disjoint sets.
///
/// # Examples
/// ```
/// use wayfinder_core::DisjointSet;
///
/// let mut sets = DisjointSet::new(5);
/// sets.union(0, 1)?;
/// sets.union(1, 2)?;
/// sets.union(3, 4)?;
/// assert_eq!(sets.count(), 2);
/// assert!(sets.same_set(0, 2)?);
/// assert!(!sets.same_set(0, 3)?);
/// # Ok::<(), wayfinder_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    count: usize,
}

impl DisjointSet {
    /// Creates `len` singleton sets.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
            count: len,
        }
    }

    /// Number of elements in the structure.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.parent.len() }

    /// Returns `true` when the structure holds no elements.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.parent.is_empty() }

    /// Number of distinct sets.
    #[must_use]
    #[rustfmt::skip]
    pub const fn count(&self) -> usize { self.count }

    /// Returns the representative of the set containing `element`.
    ///
    /// The first pass walks to the root; the second re-parents every node on
    /// the walked path directly onto it. Neither pass recurses.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::NodeOutOfBounds`] if `element >= len`.
    pub fn find(&mut self, element: usize) -> Result<usize> {
        check_node(element, self.parent.len())?;
        Ok(self.root_of(element))
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// The root of lower rank is attached beneath the other. On a tie the
    /// root of `left` becomes the parent and its rank grows by one.
    ///
    /// Returns `true` when two distinct sets were merged and `false` when
    /// both elements already shared a set.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::NodeOutOfBounds`] if either element is
    /// out of range. Nothing is modified in that case.
    pub fn union(&mut self, left: usize, right: usize) -> Result<bool> {
        check_node(left, self.parent.len())?;
        check_node(right, self.parent.len())?;

        let mut left = self.root_of(left);
        let mut right = self.root_of(right);
        if left == right {
            return Ok(false);
        }
        let left_rank = self.rank[left];
        let right_rank = self.rank[right];
        if left_rank < right_rank {
            std::mem::swap(&mut left, &mut right);
        }
        self.parent[right] = left;
        if left_rank == right_rank {
            self.rank[left] = left_rank.saturating_add(1);
        }
        self.count -= 1;
        trace!(root = left, absorbed = right, sets = self.count, "sets merged");
        Ok(true)
    }

    /// Returns `true` when `left` and `right` belong to the same set.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::NodeOutOfBounds`] if either element is
    /// out of range.
    pub fn same_set(&mut self, left: usize, right: usize) -> Result<bool> {
        Ok(self.find(left)? == self.find(right)?)
    }

    fn root_of(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }

    #[cfg(test)]
    pub(crate) fn parent_of(&self, element: usize) -> usize {
        self.parent[element]
    }

    #[cfg(test)]
    pub(crate) fn rank_of(&self, element: usize) -> u8 {
        self.rank[element]
    }
}
