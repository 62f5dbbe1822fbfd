//! Error types for configuration loading.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Cannot read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid YAML for this schema.
    #[error("Invalid config document: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The values parse but are not usable.
    #[error("Invalid config: {0}")]
    Invalid(String),
}
