//! Numeric feature extraction
//!
//! Classifies each node attribute as a feature, a keyword list, or ignorable,
//! and assembles the numeric features into a rectangular row-major matrix in
//! row-index order. The first node fixes the expected feature count; any node
//! that disagrees fails the run with a schema mismatch.

use crate::node_index::NodeIndexMap;
use citeforge_common::errors::{ConvertError, Result};
use citeforge_common::graph::RawNode;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Classification of a single attribute value
#[derive(Debug, Clone, PartialEq)]
pub enum AttrClass {
    /// Numeric value included in the feature vector.
    /// Booleans are numeric here and map to 0.0 / 1.0.
    Feature(f32),

    /// The reserved keyword-list attribute; consumed by the vocabulary builder
    Keywords(Vec<String>),

    /// Value types a producer may carry but conversion does not use
    Ignored,
}

/// Classify one attribute value.
///
/// Strings and non-keyword sequences are ignorable; null and nested objects
/// have no defined meaning in the graph document and fail the run.
pub fn classify(
    node_id: &str,
    attribute: &str,
    value: &Value,
    keyword_attribute: &str,
) -> Result<AttrClass> {
    match value {
        Value::Number(n) => Ok(AttrClass::Feature(n.as_f64().unwrap_or(0.0) as f32)),
        Value::Bool(b) => Ok(AttrClass::Feature(if *b { 1.0 } else { 0.0 })),
        Value::String(_) => Ok(AttrClass::Ignored),
        Value::Array(items) => {
            if attribute != keyword_attribute {
                return Ok(AttrClass::Ignored);
            }
            let mut words = Vec::with_capacity(items.len());
            for item in items {
                match item.as_str() {
                    Some(word) => words.push(word.to_string()),
                    None => {
                        return Err(ConvertError::MalformedAttribute {
                            node_id: node_id.to_string(),
                            attribute: attribute.to_string(),
                            expected: "a sequence of strings",
                        })
                    }
                }
            }
            Ok(AttrClass::Keywords(words))
        }
        Value::Null | Value::Object(_) => Err(ConvertError::MalformedAttribute {
            node_id: node_id.to_string(),
            attribute: attribute.to_string(),
            expected: "a numeric, string, or keyword-list value",
        }),
    }
}

/// Rectangular row-major feature matrix, row order = node row-index order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f32>,
}

impl FeatureMatrix {
    /// Number of node rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Numeric features per node
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// One node's feature vector
    pub fn row(&self, row: usize) -> &[f32] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Rows in index order
    pub fn iter_rows(&self) -> impl Iterator<Item = &[f32]> {
        (0..self.rows).map(move |r| self.row(r))
    }
}

/// Extract every node's numeric features into a feature matrix.
///
/// Nodes are visited in `index` row order; within a node, features keep the
/// attribute-insertion order of the document.
pub fn extract_features(
    nodes: &IndexMap<String, RawNode>,
    index: &NodeIndexMap,
    keyword_attribute: &str,
) -> Result<FeatureMatrix> {
    let mut data = Vec::with_capacity(nodes.len());
    let mut expected: Option<usize> = None;

    for node_id in index.ids() {
        let node = nodes.get(node_id).ok_or_else(|| ConvertError::Internal {
            message: format!("node index refers to unknown node {}", node_id),
        })?;

        let before = data.len();
        for (attribute, value) in &node.attributes {
            if let AttrClass::Feature(v) = classify(node_id, attribute, value, keyword_attribute)? {
                data.push(v);
            }
        }
        let count = data.len() - before;

        match expected {
            None => expected = Some(count),
            Some(e) if e != count => {
                return Err(ConvertError::SchemaMismatch {
                    node_id: node_id.to_string(),
                    expected: e,
                    actual: count,
                })
            }
            Some(_) => {}
        }
    }

    let cols = expected.unwrap_or(0);
    debug!(rows = index.len(), cols, "Feature matrix extracted");

    Ok(FeatureMatrix {
        rows: index.len(),
        cols,
        data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use citeforge_common::RawGraph;
    use serde_json::json;

    fn extract(json: &str) -> Result<FeatureMatrix> {
        let graph = RawGraph::from_json(json).unwrap();
        let index = NodeIndexMap::build(&graph.nodes);
        extract_features(&graph.nodes, &index, "keywords")
    }

    #[test]
    fn test_single_feature_matrix() {
        let matrix = extract(
            r#"{"Nodes": {
                "A": {"Attributes": {"x": 1}},
                "B": {"Attributes": {"x": 2}},
                "C": {"Attributes": {"x": 3}}
            }}"#,
        )
        .unwrap();

        assert_eq!(matrix.rows(), 3);
        assert_eq!(matrix.cols(), 1);
        assert_eq!(matrix.row(0), &[1.0]);
        assert_eq!(matrix.row(1), &[2.0]);
        assert_eq!(matrix.row(2), &[3.0]);
    }

    #[test]
    fn test_non_numeric_attributes_are_skipped() {
        let matrix = extract(
            r#"{"Nodes": {
                "A": {"Attributes": {"title": "GNNs", "year": 2020, "keywords": ["graphs"], "cites": 14}},
                "B": {"Attributes": {"title": "RNNs", "year": 2015, "keywords": ["sequences"], "cites": 90}}
            }}"#,
        )
        .unwrap();

        assert_eq!(matrix.cols(), 2);
        assert_eq!(matrix.row(0), &[2020.0, 14.0]);
        assert_eq!(matrix.row(1), &[2015.0, 90.0]);
    }

    #[test]
    fn test_features_keep_attribute_order() {
        let matrix = extract(
            r#"{"Nodes": {"A": {"Attributes": {"b": 2, "a": 1, "c": 3}}}}"#,
        )
        .unwrap();
        assert_eq!(matrix.row(0), &[2.0, 1.0, 3.0]);
    }

    #[test]
    fn test_booleans_become_zero_one() {
        let matrix = extract(
            r#"{"Nodes": {
                "A": {"Attributes": {"retracted": false, "year": 2020}},
                "B": {"Attributes": {"retracted": true, "year": 2021}}
            }}"#,
        )
        .unwrap();
        assert_eq!(matrix.row(0), &[0.0, 2020.0]);
        assert_eq!(matrix.row(1), &[1.0, 2021.0]);
    }

    #[test]
    fn test_schema_mismatch_is_detected() {
        let err = extract(
            r#"{"Nodes": {
                "A": {"Attributes": {"x": 1, "y": 2}},
                "B": {"Attributes": {"x": 3}}
            }}"#,
        )
        .unwrap_err();

        match err {
            ConvertError::SchemaMismatch {
                node_id,
                expected,
                actual,
            } => {
                assert_eq!(node_id, "B");
                assert_eq!(expected, 2);
                assert_eq!(actual, 1);
            }
            other => panic!("expected SchemaMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_graph_gives_empty_matrix() {
        let matrix = extract("{}").unwrap();
        assert_eq!(matrix.rows(), 0);
        assert_eq!(matrix.cols(), 0);
        assert_eq!(matrix.iter_rows().count(), 0);
    }

    #[test]
    fn test_nodes_without_numeric_attributes() {
        let matrix = extract(
            r#"{"Nodes": {
                "A": {"Attributes": {"title": "one"}},
                "B": {"Attributes": {"title": "two"}}
            }}"#,
        )
        .unwrap();
        assert_eq!(matrix.rows(), 2);
        assert_eq!(matrix.cols(), 0);
        assert_eq!(matrix.row(1), &[] as &[f32]);
    }

    #[test]
    fn test_classify_null_is_malformed() {
        let err = classify("A", "broken", &Value::Null, "keywords").unwrap_err();
        assert!(matches!(err, ConvertError::MalformedAttribute { .. }));
    }

    #[test]
    fn test_classify_non_keyword_array_is_ignored() {
        let class = classify("A", "scores", &json!([1, 2, 3]), "keywords").unwrap();
        assert_eq!(class, AttrClass::Ignored);
    }

    #[test]
    fn test_classify_keyword_array_with_numbers_fails() {
        let err = classify("A", "keywords", &json!(["ok", 3]), "keywords").unwrap_err();
        assert!(matches!(err, ConvertError::MalformedAttribute { .. }));
    }
}
