//! Error types for the CiteForge conversion pipeline
//!
//! Provides:
//! - Distinct error types for different failure modes
//! - Error codes for machine-readable identification
//! - Severity predicates separating per-edge (recoverable) from run-fatal errors

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias using ConvertError
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Error codes for machine-readable error identification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Input document errors (1xxx)
    InvalidFormat,

    // Reference resolution errors (2xxx)
    MissingReference,

    // Feature schema errors (3xxx)
    SchemaMismatch,

    // Attribute errors (4xxx)
    MalformedAttribute,

    // Internal errors (9xxx)
    IoError,
    ConfigurationError,
    SerializationError,
    InternalError,
}

impl ErrorCode {
    /// Get the numeric code for this error
    pub fn as_code(&self) -> u16 {
        match self {
            // Input document (1xxx)
            ErrorCode::InvalidFormat => 1001,

            // References (2xxx)
            ErrorCode::MissingReference => 2001,

            // Schema (3xxx)
            ErrorCode::SchemaMismatch => 3001,

            // Attributes (4xxx)
            ErrorCode::MalformedAttribute => 4001,

            // Internal (9xxx)
            ErrorCode::IoError => 9001,
            ErrorCode::ConfigurationError => 9002,
            ErrorCode::SerializationError => 9003,
            ErrorCode::InternalError => 9004,
        }
    }
}

/// Conversion error types
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The input document does not match the expected graph shape
    #[error("invalid graph document: {message}")]
    InvalidFormat { message: String },

    /// An edge references a node ID absent from the node set.
    /// Recoverable: the edge is skipped and the rest of the graph converts.
    #[error("edge {edge_id} references unknown node {node_id}")]
    MissingReference { edge_id: String, node_id: String },

    /// Node feature vectors have inconsistent lengths; the feature matrix
    /// would be non-rectangular
    #[error("node {node_id} has {actual} numeric features, expected {expected}")]
    SchemaMismatch {
        node_id: String,
        expected: usize,
        actual: usize,
    },

    /// An attribute value could not be classified as feature, keyword list,
    /// or ignorable
    #[error("node {node_id}: attribute '{attribute}' is not {expected}")]
    MalformedAttribute {
        node_id: String,
        attribute: String,
        expected: &'static str,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Configuration(#[from] config::ConfigError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("internal error: {message}")]
    Internal { message: String },

    // Generic
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl ConvertError {
    /// Get the error code for this error
    pub fn code(&self) -> ErrorCode {
        match self {
            ConvertError::InvalidFormat { .. } => ErrorCode::InvalidFormat,
            ConvertError::MissingReference { .. } => ErrorCode::MissingReference,
            ConvertError::SchemaMismatch { .. } => ErrorCode::SchemaMismatch,
            ConvertError::MalformedAttribute { .. } => ErrorCode::MalformedAttribute,
            ConvertError::Io(_) => ErrorCode::IoError,
            ConvertError::Configuration(_) => ErrorCode::ConfigurationError,
            ConvertError::Serialization(_) => ErrorCode::SerializationError,
            ConvertError::Internal { .. } => ErrorCode::InternalError,
            ConvertError::Other(_) => ErrorCode::InternalError,
        }
    }

    /// Check if this error is recoverable at the per-edge level.
    /// Recoverable errors skip the offending edge; everything else aborts the run.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ConvertError::MissingReference { .. })
    }

    /// Check if this error aborts the whole conversion
    pub fn is_fatal(&self) -> bool {
        !self.is_recoverable()
    }
}
