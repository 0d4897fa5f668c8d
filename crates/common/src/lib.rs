//! CiteForge Common Library
//!
//! Shared code for the CiteForge conversion tooling including:
//! - Raw graph document model (the JSON emitted by the graph builder)
//! - Error types and handling
//! - Configuration management
//! - Embedding collaborator boundary
//! - Metrics and observability

pub mod config;
pub mod embeddings;
pub mod errors;
pub mod graph;
pub mod metrics;

// Re-export commonly used types
pub use config::AppConfig;
pub use errors::{ConvertError, Result};
pub use graph::{RawEdge, RawGraph, RawNode};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Dimension of the sentence-embedding collaborator (all-MiniLM-L6-v2)
pub const DEFAULT_EMBEDDING_DIMENSION: usize = 384;
