//! Node row-index assignment
//!
//! Every node gets a dense zero-based row index in document order. The map is
//! built once per conversion run and has no public mutators; the feature
//! extractor and edge materializer only ever hold a shared reference.

use citeforge_common::graph::RawNode;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Bijection from external node ID to feature-matrix row index
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeIndexMap {
    index: IndexMap<String, usize>,
}

impl NodeIndexMap {
    /// Assign row indices to every node, in document order
    pub fn build(nodes: &IndexMap<String, RawNode>) -> Self {
        let index = nodes
            .keys()
            .enumerate()
            .map(|(row, node_id)| (node_id.clone(), row))
            .collect();
        Self { index }
    }

    /// Resolve a node ID to its row index
    pub fn row(&self, node_id: &str) -> Option<usize> {
        self.index.get(node_id).copied()
    }

    /// Check whether a node ID is indexed
    pub fn contains(&self, node_id: &str) -> bool {
        self.index.contains_key(node_id)
    }

    /// Number of indexed nodes
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Node IDs in row order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.index.keys().map(String::as_str)
    }
}
