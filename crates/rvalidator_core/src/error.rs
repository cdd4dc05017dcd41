//! Error types for the validation adapter.
//!
//! Only usage problems are errors. Rule violations are never returned as
//! errors; they come back as messages.

use thiserror::Error;

/// Result type for adapter operations.
pub type Result<T> = std::result::Result<T, AdapterError>;

/// Errors returned by the adapter.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// The value is not a structured record
    #[error("input must be a struct, got {type_name}")]
    InvalidInputKind {
        /// Type name of the rejected value
        type_name: String,
    },

    /// The engine failed for reasons unrelated to rule violations
    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl AdapterError {
    /// Creates an invalid input kind error for the given type.
    pub fn invalid_input(type_name: impl Into<String>) -> Self {
        Self::InvalidInputKind {
            type_name: type_name.into(),
        }
    }

    /// Whether this is an input shape error.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInputKind { .. })
    }
}

/// Usage-level failures signalled by a validation engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The rules could not be evaluated as declared
    #[error("invalid validation usage: {0}")]
    Usage(String),
}

impl EngineError {
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }
}

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// YAML parsing or deserialization failed
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// TOML parsing or deserialization failed
    #[error("Failed to parse TOML: {0}")]
    Toml(String),

    /// File I/O error
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Unsupported file extension
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    /// Values parsed but are not usable
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
