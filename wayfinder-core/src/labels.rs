//! Label-to-index mapping for graphs whose nodes have external names.
//!
//! The algorithms work on dense ids only. `NodeLabels` assigns ids in
//! first-seen order so callers can translate labelled input on the way in
//! and results on the way out.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use crate::NodeId;

/// Bidirectional map between caller labels and dense node ids.
///
/// # Examples
/// ```
/// use wayfinder_core::NodeLabels;
///
/// let mut labels = NodeLabels::new();
/// let a = labels.intern("a");
/// let b = labels.intern("b");
/// assert_eq!(labels.intern("a"), a);
/// assert_eq!((a, b), (0, 1));
/// assert_eq!(labels.label_of(b), Some(&"b"));
/// assert_eq!(labels.id_of("c"), None);
/// ```
#[derive(Clone, Debug)]
pub struct NodeLabels<L> {
    ids: HashMap<L, NodeId>,
    labels: Vec<L>,
}

impl<L> Default for NodeLabels<L> {
    fn default() -> Self {
        Self {
            ids: HashMap::new(),
            labels: Vec::new(),
        }
    }
}

impl<L: Clone + Eq + Hash> NodeLabels<L> {
    /// Creates an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id for `label`, assigning the next free id on first sight.
    pub fn intern(&mut self, label: L) -> NodeId {
        if let Some(&id) = self.ids.get(&label) {
            return id;
        }
        let id = self.labels.len();
        self.labels.push(label.clone());
        self.ids.insert(label, id);
        id
    }

    /// Looks up the id of a known label.
    pub fn id_of<Q>(&self, label: &Q) -> Option<NodeId>
    where
        L: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.ids.get(label).copied()
    }
}

impl<L> NodeLabels<L> {
    /// Returns the label assigned to `id`.
    #[must_use]
    pub fn label_of(&self, id: NodeId) -> Option<&L> {
        self.labels.get(id)
    }

    /// Number of interned labels, which is also the node count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns `true` when no label has been interned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterates over `(id, label)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &L)> {
        self.labels.iter().enumerate()
    }
}
