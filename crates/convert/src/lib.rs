//! CiteForge Conversion Core
//!
//! Converts a JSON-encoded citation graph into the numeric model consumed by
//! graph-embedding training:
//! - Node feature matrix (numeric attributes, document row order)
//! - Bidirectional edge index with weights
//! - Keyword vocabulary (free text -> dense integer ids)

pub mod edges;
pub mod features;
pub mod model;
pub mod node_index;
pub mod pipeline;
pub mod vocabulary;

pub use edges::{materialize_edges, EdgeList, SkippedEdge};
pub use features::{classify, extract_features, AttrClass, FeatureMatrix};
pub use model::GraphModel;
pub use node_index::NodeIndexMap;
pub use pipeline::{ConversionOutcome, ConversionSummary, GraphConverter};
pub use vocabulary::KeywordVocabulary;
