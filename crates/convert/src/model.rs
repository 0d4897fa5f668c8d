//! Converted graph model
//!
//! The output bundle handed to the embedding-training collaborator: feature
//! matrix, bidirectional edge index with weights, and the keyword vocabulary.
//! Assembly validates the invariants established upstream; it never repairs
//! them.

use crate::edges::EdgeList;
use crate::features::FeatureMatrix;
use crate::vocabulary::KeywordVocabulary;
use citeforge_common::errors::{ConvertError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The converted graph, produced once per run and immutable afterwards
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphModel {
    /// Node feature matrix, rows x numeric-feature-count
    pub features: FeatureMatrix,

    /// Directed (source row, destination row) pairs, two per accepted edge
    pub edge_index: Vec<(usize, usize)>,

    /// Weight per edge-index entry
    pub edge_weights: Vec<f32>,

    /// Keyword vocabulary for this graph
    pub vocabulary: KeywordVocabulary,
}

impl GraphModel {
    /// Assemble the model from the stage outputs.
    ///
    /// Fails only when an upstream invariant was violated: unpaired
    /// index/weight sequences or an edge row outside the feature matrix.
    pub fn assemble(
        features: FeatureMatrix,
        edges: EdgeList,
        vocabulary: KeywordVocabulary,
    ) -> Result<Self> {
        if edges.index.len() != edges.weights.len() {
            return Err(ConvertError::Internal {
                message: format!(
                    "edge index has {} entries but {} weights",
                    edges.index.len(),
                    edges.weights.len()
                ),
            });
        }

        for &(src, dst) in &edges.index {
            if src >= features.rows() || dst >= features.rows() {
                return Err(ConvertError::Internal {
                    message: format!(
                        "edge ({}, {}) references a row outside the {}-row feature matrix",
                        src,
                        dst,
                        features.rows()
                    ),
                });
            }
        }

        Ok(Self {
            features,
            edge_index: edges.index,
            edge_weights: edges.weights,
            vocabulary,
        })
    }

    /// Number of accepted input edges
    pub fn accepted_edge_count(&self) -> usize {
        self.edge_index.len() / 2
    }

    /// Edge index in the 2 x 2E source/destination layout tensor consumers
    /// expect, rows typed for a signed long tensor
    pub fn edge_index_coo(&self) -> [Vec<i64>; 2] {
        let mut sources = Vec::with_capacity(self.edge_index.len());
        let mut destinations = Vec::with_capacity(self.edge_index.len());
        for &(src, dst) in &self.edge_index {
            sources.push(src as i64);
            destinations.push(dst as i64);
        }
        [sources, destinations]
    }

    /// Serialize the model as JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Write the model to a file for the downstream training collaborator
    pub fn save_to_file(&self, path: impl AsRef<Path>, pretty: bool) -> Result<()> {
        let data = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            self.to_json()?
        };
        std::fs::write(path, data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edges::materialize_edges;
    use crate::features::extract_features;
    use crate::node_index::NodeIndexMap;
    use citeforge_common::RawGraph;

    fn sample_model() -> GraphModel {
        let graph = RawGraph::from_json(
            r#"{
                "Nodes": {
                    "A": {"Attributes": {"x": 1, "keywords": ["k1"]}},
                    "B": {"Attributes": {"x": 2, "keywords": ["k1", "k2"]}}
                },
                "Edges": {
                    "e": {
                        "First_node": {"ID": "A"},
                        "Second_node": {"ID": "B"},
                        "Attributes": {"weight": 3.0}
                    }
                }
            }"#,
        )
        .unwrap();

        let index = NodeIndexMap::build(&graph.nodes);
        let vocabulary = KeywordVocabulary::build(&graph.nodes, "keywords").unwrap();
        let features = extract_features(&graph.nodes, &index, "keywords").unwrap();
        let (edges, _) = materialize_edges(&graph.edges, &index, 1.0);

        GraphModel::assemble(features, edges, vocabulary).unwrap()
    }

    #[test]
    fn test_assembled_model() {
        let model = sample_model();
        assert_eq!(model.accepted_edge_count(), 1);
        assert_eq!(model.edge_index, vec![(0, 1), (1, 0)]);
        assert_eq!(model.edge_weights, vec![3.0, 3.0]);
        assert_eq!(model.vocabulary.len(), 2);
    }

    #[test]
    fn test_coo_layout() {
        let model = sample_model();
        let [sources, destinations] = model.edge_index_coo();
        assert_eq!(sources, vec![0, 1]);
        assert_eq!(destinations, vec![1, 0]);
        assert_eq!(sources.len(), 2 * model.accepted_edge_count());
    }

    #[test]
    fn test_unpaired_sequences_are_rejected() {
        let edges = EdgeList {
            index: vec![(0, 1), (1, 0)],
            weights: vec![1.0],
        };
        let err = GraphModel::assemble(
            FeatureMatrix::default(),
            edges,
            KeywordVocabulary::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ConvertError::Internal { .. }));
    }

    #[test]
    fn test_out_of_range_row_is_rejected() {
        let edges = EdgeList {
            index: vec![(0, 7), (7, 0)],
            weights: vec![1.0, 1.0],
        };
        let err = GraphModel::assemble(
            FeatureMatrix::default(),
            edges,
            KeywordVocabulary::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ConvertError::Internal { .. }));
    }

    #[test]
    fn test_model_round_trips_through_json() {
        let model = sample_model();
        let json = model.to_json().unwrap();
        let parsed: GraphModel = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, model);
    }
}
