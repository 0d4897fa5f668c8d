//! Conversion pipeline
//!
//! Runs the stages in order over one input graph: vocabulary, node index,
//! feature extraction, edge materialization, assembly. Single-threaded and
//! synchronous; the node index is written once and only read afterwards. Every
//! run builds an independent vocabulary and index map, so converting several
//! graphs never shares state.

use crate::edges::{materialize_edges, SkippedEdge};
use crate::features::extract_features;
use crate::model::GraphModel;
use crate::node_index::NodeIndexMap;
use crate::vocabulary::KeywordVocabulary;
use citeforge_common::config::ConversionConfig;
use citeforge_common::errors::Result;
use citeforge_common::graph::RawGraph;
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::info;

/// Statistics for one conversion run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionSummary {
    pub node_count: usize,
    pub feature_dim: usize,
    pub accepted_edges: usize,
    pub skipped_edges: usize,
    pub keyword_count: usize,
    pub elapsed: Duration,
}

/// Result of a conversion run: the model, the skipped-edge report, and
/// run statistics
#[derive(Debug, Clone)]
pub struct ConversionOutcome {
    pub model: GraphModel,
    pub skipped: Vec<SkippedEdge>,
    pub summary: ConversionSummary,
}

/// Configured graph-to-model converter
pub struct GraphConverter {
    config: ConversionConfig,
}

impl GraphConverter {
    /// Create a converter with the given options
    pub fn new(config: ConversionConfig) -> Self {
        Self { config }
    }

    /// Convert one graph document into a graph model.
    ///
    /// Fatal errors (malformed attributes, inconsistent feature schemas)
    /// abort the run; unresolvable edges are skipped and reported.
    pub fn convert(&self, graph: &RawGraph) -> Result<ConversionOutcome> {
        let start = Instant::now();

        info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "Converting graph document"
        );

        let vocabulary = KeywordVocabulary::build(&graph.nodes, &self.config.keyword_attribute)?;
        let index = NodeIndexMap::build(&graph.nodes);
        let features = extract_features(&graph.nodes, &index, &self.config.keyword_attribute)?;
        let (edges, skipped) =
            materialize_edges(&graph.edges, &index, self.config.default_edge_weight);

        let model = GraphModel::assemble(features, edges, vocabulary)?;

        let elapsed = start.elapsed();
        let summary = ConversionSummary {
            node_count: model.features.rows(),
            feature_dim: model.features.cols(),
            accepted_edges: model.accepted_edge_count(),
            skipped_edges: skipped.len(),
            keyword_count: model.vocabulary.len(),
            elapsed,
        };

        citeforge_common::metrics::record_conversion(
            elapsed.as_secs_f64(),
            summary.node_count,
            summary.accepted_edges,
            summary.skipped_edges,
            summary.keyword_count,
        );

        info!(
            node_count = summary.node_count,
            feature_dim = summary.feature_dim,
            accepted_edges = summary.accepted_edges,
            skipped_edges = summary.skipped_edges,
            keyword_count = summary.keyword_count,
            elapsed_ms = elapsed.as_millis() as u64,
            "Graph conversion complete"
        );

        Ok(ConversionOutcome {
            model,
            skipped,
            summary,
        })
    }
}

impl Default for GraphConverter {
    fn default() -> Self {
        Self::new(ConversionConfig::default())
    }
}
