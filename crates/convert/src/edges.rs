//! Edge materialization
//!
//! Resolves edge endpoints through the node index and expands each resolvable
//! edge into a forward and a reverse directed entry sharing one weight, so the
//! undirected input becomes a symmetric edge index. Edges with an unresolvable
//! endpoint are skipped with a warning and reported back to the caller; they
//! never abort the run.

use crate::node_index::NodeIndexMap;
use citeforge_common::graph::RawEdge;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Paired edge-index and weight sequences. For every accepted input edge the
/// two sequences gain exactly two consecutive entries, one the reverse of the
/// other, with identical weight.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeList {
    /// (source row, destination row) pairs
    pub index: Vec<(usize, usize)>,

    /// Weight for the entry at the same position in `index`
    pub weights: Vec<f32>,
}

impl EdgeList {
    /// Number of directed entries (twice the accepted input edges)
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Number of accepted input edges
    pub fn accepted_count(&self) -> usize {
        self.index.len() / 2
    }
}

/// Record of an input edge dropped for an unresolvable endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedEdge {
    pub edge_id: String,
    pub missing_node_id: String,
}

/// Materialize the edge index from the input edges.
///
/// `weight` attributes that are absent or non-numeric fall back to
/// `default_weight`. Parallel input edges produce parallel entries; nothing is
/// deduplicated.
pub fn materialize_edges(
    edges: &IndexMap<String, RawEdge>,
    index: &NodeIndexMap,
    default_weight: f32,
) -> (EdgeList, Vec<SkippedEdge>) {
    let mut list = EdgeList {
        index: Vec::with_capacity(edges.len() * 2),
        weights: Vec::with_capacity(edges.len() * 2),
    };
    let mut skipped = Vec::new();

    for (edge_id, edge) in edges {
        let src = match index.row(&edge.first_node.id) {
            Some(row) => row,
            None => {
                skip(&mut skipped, edge_id, &edge.first_node.id);
                continue;
            }
        };
        let dst = match index.row(&edge.second_node.id) {
            Some(row) => row,
            None => {
                skip(&mut skipped, edge_id, &edge.second_node.id);
                continue;
            }
        };

        let weight = edge.weight_or(default_weight);

        // Undirected input: one entry per direction
        list.index.push((src, dst));
        list.weights.push(weight);
        list.index.push((dst, src));
        list.weights.push(weight);
    }

    (list, skipped)
}

fn skip(skipped: &mut Vec<SkippedEdge>, edge_id: &str, missing_node_id: &str) {
    warn!(
        edge_id = %edge_id,
        missing_node_id = %missing_node_id,
        "Skipping edge with unresolvable endpoint"
    );
    skipped.push(SkippedEdge {
        edge_id: edge_id.to_string(),
        missing_node_id: missing_node_id.to_string(),
    });
}
