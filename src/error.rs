//! Error types for the contact registry.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors returned by registry operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A required contact field was missing or empty
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] ValidationError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors that can occur while reading contact requests from a stream.
#[derive(Error, Debug)]
pub enum IngestError {
    /// Reading the input failed
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// A line was not a valid contact request
    #[error("Line {line}: malformed request: {source}")]
    Malformed {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// A line was rejected by the registry
    #[error("Line {line}: {source}")]
    Rejected {
        line: usize,
        #[source]
        source: RegistryError,
    },
}

/// Convenience type alias for Results with RegistryError
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with IngestError
pub type IngestResult<T> = Result<T, IngestError>;
