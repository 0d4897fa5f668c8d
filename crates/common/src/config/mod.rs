//! Configuration management for CiteForge
//!
//! Supports loading configuration from:
//! - Environment variables (prefixed with APP__)
//! - Configuration files (config.toml, config.yaml)
//! - Default values

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Input document configuration
    #[serde(default)]
    pub input: InputConfig,

    /// Output artifact configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Conversion options
    #[serde(default)]
    pub conversion: ConversionConfig,

    /// Observability configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InputConfig {
    /// Path to the JSON graph document
    #[serde(default = "default_graph_path")]
    pub graph_path: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Path the converted graph model is written to
    #[serde(default = "default_model_path")]
    pub model_path: String,

    /// Pretty-print the output JSON
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

/// Options controlling the graph-to-model conversion
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConversionConfig {
    /// Node attribute holding the keyword list
    #[serde(default = "default_keyword_attribute")]
    pub keyword_attribute: String,

    /// Weight used when an edge has no usable `weight` attribute
    #[serde(default = "default_edge_weight")]
    pub default_edge_weight: f32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ObservabilityConfig {
    /// Log level (debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Enable JSON logging
    #[serde(default = "default_json_logging")]
    pub json_logging: bool,
}

// Default value functions
fn default_graph_path() -> String { "graph_data.json".to_string() }
fn default_model_path() -> String { "graph_model.json".to_string() }
fn default_pretty() -> bool { false }
fn default_keyword_attribute() -> String { "keywords".to_string() }
fn default_edge_weight() -> f32 { 1.0 }
fn default_log_level() -> String { "info".to_string() }
fn default_json_logging() -> bool { true }

impl AppConfig {
    /// Load configuration from environment and files
    pub fn load() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        let config = Config::builder()
            // Start with defaults
            .set_default("input.graph_path", default_graph_path())?
            .set_default("output.model_path", default_model_path())?

            // Load base config file
            .add_source(File::with_name("config/default").required(false))

            // Load environment-specific config
            .add_source(File::with_name(&format!("config/{}", env)).required(false))

            // Load local overrides
            .add_source(File::with_name("config/local").required(false))

            // Load from environment variables with APP__ prefix
            // e.g., APP__INPUT__GRAPH_PATH=citations.json
            .add_source(
                Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true)
            )

            .build()?;

        config.try_deserialize()
    }

    /// Load from a specific TOML file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::with_name(path))
            .add_source(
                Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true)
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            input: InputConfig::default(),
            output: OutputConfig::default(),
            conversion: ConversionConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            graph_path: default_graph_path(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            model_path: default_model_path(),
            pretty: default_pretty(),
        }
    }
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            keyword_attribute: default_keyword_attribute(),
            default_edge_weight: default_edge_weight(),
        }
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json_logging: default_json_logging(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.input.graph_path, "graph_data.json");
        assert_eq!(config.conversion.keyword_attribute, "keywords");
        assert_eq!(config.conversion.default_edge_weight, 1.0);
    }

    #[test]
    fn test_default_observability() {
        let config = AppConfig::default();
        assert_eq!(config.observability.log_level, "info");
        assert!(config.observability.json_logging);
    }
}
