//! Raw citation graph document model
//!
//! Serde types matching the JSON emitted by the upstream graph-construction
//! tooling: a top-level object with `Nodes` and `Edges` maps, each element
//! carrying a polymorphic `Attributes` map. Node and edge maps use `IndexMap`
//! so iteration follows document order — row indices and keyword ids are
//! assigned from that order, and it must not be reconstructed downstream.

use crate::errors::{ConvertError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

/// A parsed graph document. Read-only input to the conversion pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawGraph {
    /// Nodes keyed by external node ID, in document order
    #[serde(rename = "Nodes", default)]
    pub nodes: IndexMap<String, RawNode>,

    /// Edges keyed by edge ID, in document order
    #[serde(rename = "Edges", default)]
    pub edges: IndexMap<String, RawEdge>,

    /// Graph kind tag emitted by the producer ("graph", "digraph", "multigraph")
    #[serde(rename = "Type", default, skip_serializing_if = "Option::is_none")]
    pub graph_type: Option<String>,
}

/// A node with its attribute map
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawNode {
    /// External node ID; producers duplicate the map key here
    #[serde(rename = "ID", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Polymorphic attributes: numbers, strings, keyword lists
    #[serde(rename = "Attributes", default)]
    pub attributes: IndexMap<String, Value>,
}

/// An edge between two node references
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawEdge {
    /// First endpoint reference
    #[serde(rename = "First_node")]
    pub first_node: NodeRef,

    /// Second endpoint reference
    #[serde(rename = "Second_node")]
    pub second_node: NodeRef,

    /// Edge attributes; `weight` is the only one the converter reads
    #[serde(rename = "Attributes", default)]
    pub attributes: IndexMap<String, Value>,
}

/// Endpoint reference inside an edge. Producers embed the whole node here;
/// only the ID is meaningful for conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRef {
    #[serde(rename = "ID")]
    pub id: String,
}

impl RawGraph {
    /// Parse a graph document from a JSON string
    pub fn from_json(data: &str) -> Result<Self> {
        serde_json::from_str(data).map_err(|e| ConvertError::InvalidFormat {
            message: format!("failed to parse graph document: {}", e),
        })
    }

    /// Read and parse a graph document from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    /// Number of nodes in the document
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges in the document
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl RawEdge {
    /// Read the edge weight, falling back to `default` when the attribute is
    /// absent or not numeric
    pub fn weight_or(&self, default: f32) -> f32 {
        self.attributes
            .get("weight")
            .and_then(Value::as_f64)
            .map(|w| w as f32)
            .unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "Nodes": {
            "A": {"Attributes": {"year": 2019, "keywords": ["graphs"]}, "ID": "A"},
            "B": {"Attributes": {"year": 2021}, "ID": "B"}
        },
        "Edges": {
            "0": {
                "First_node": {"Attributes": {}, "ID": "A"},
                "Second_node": {"Attributes": {}, "ID": "B"},
                "Attributes": {"weight": 2.5}
            }
        },
        "Type": "graph"
    }"#;

    #[test]
    fn test_parse_sample_document() {
        let graph = RawGraph::from_json(SAMPLE).unwrap();
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.graph_type.as_deref(), Some("graph"));

        let a = &graph.nodes["A"];
        assert_eq!(a.id.as_deref(), Some("A"));
        assert_eq!(a.attributes["year"], Value::from(2019));

        let edge = &graph.edges["0"];
        assert_eq!(edge.first_node.id, "A");
        assert_eq!(edge.second_node.id, "B");
    }

    #[test]
    fn test_document_order_is_preserved() {
        let data = r#"{"Nodes": {"z": {}, "a": {}, "m": {}}, "Edges": {}}"#;
        let graph = RawGraph::from_json(data).unwrap();
        let ids: Vec<&str> = graph.nodes.keys().map(String::as_str).collect();
        assert_eq!(ids, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let graph = RawGraph::from_json("{}").unwrap();
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_missing_endpoint_is_invalid_format() {
        let data = r#"{"Edges": {"0": {"First_node": {"ID": "A"}}}}"#;
        let err = RawGraph::from_json(data).unwrap_err();
        assert!(matches!(err, ConvertError::InvalidFormat { .. }));
    }

    #[test]
    fn test_weight_accessor() {
        let graph = RawGraph::from_json(SAMPLE).unwrap();
        assert_eq!(graph.edges["0"].weight_or(1.0), 2.5);
    }

    #[test]
    fn test_weight_defaults_when_absent_or_non_numeric() {
        let data = r#"{
            "Nodes": {},
            "Edges": {
                "0": {"First_node": {"ID": "A"}, "Second_node": {"ID": "B"}},
                "1": {
                    "First_node": {"ID": "A"},
                    "Second_node": {"ID": "B"},
                    "Attributes": {"weight": "heavy"}
                }
            }
        }"#;
        let graph = RawGraph::from_json(data).unwrap();
        assert_eq!(graph.edges["0"].weight_or(1.0), 1.0);
        assert_eq!(graph.edges["1"].weight_or(1.0), 1.0);
    }
}
