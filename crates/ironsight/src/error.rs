//! Error types for configuration loading

use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// TOML parse failure
    #[error("Invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON parse failure
    #[error("Invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    /// Extension is neither `.toml` nor `.json`
    #[error("Unsupported config extension: {0:?}")]
    UnsupportedExtension(String),
}

/// Result type for configuration loading
pub type Result<T> = std::result::Result<T, ConfigError>;
