//! CiteForge Converter
//!
//! Reads the configured graph document, converts it into the numeric graph
//! model, and writes the model for the embedding-training collaborator.
//! Input and output paths come from configuration, not arguments.

use citeforge_common::{config::AppConfig, RawGraph, VERSION};
use citeforge_convert::GraphConverter;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        e
    })?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.observability.log_level));
    if config.observability.json_logging {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    }

    info!("Starting CiteForge converter v{}", VERSION);
    citeforge_common::metrics::register_metrics();

    let graph = RawGraph::from_file(&config.input.graph_path)?;
    info!(
        path = %config.input.graph_path,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "Graph document loaded"
    );

    let converter = GraphConverter::new(config.conversion.clone());
    let outcome = converter.convert(&graph)?;

    outcome
        .model
        .save_to_file(&config.output.model_path, config.output.pretty)?;
    info!(
        path = %config.output.model_path,
        nodes = outcome.summary.node_count,
        accepted_edges = outcome.summary.accepted_edges,
        skipped_edges = outcome.summary.skipped_edges,
        keywords = outcome.summary.keyword_count,
        "Graph model written"
    );

    Ok(())
}
