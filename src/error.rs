//! Error types for cstrans.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TranscriptionError {
    // Configuration errors
    #[error("Configuration file not found at {path}")]
    ConfigFileNotFound { path: String },

    #[error("Invalid configuration value for {key}: {message}")]
    ConfigInvalidValue { key: String, message: String },

    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    // Rule table errors
    #[error("Failed to compile rule {pattern:?}: {source}")]
    RuleCompile {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    // General I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error for cases not covered above
    #[error("{0}")]
    Other(String),
}

// Type alias for convenience
pub type Result<T> = std::result::Result<T, TranscriptionError>;
