//! Error types for the storyplan library.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for all compiler operations.
///
/// Only [`PlanError::EmptyInput`] originates in the compilation pipeline
/// itself. Every other anomaly in the input text degrades to a fallback
/// instead of an error; the remaining variants belong to configuration
/// and file loading around the pipeline.
#[derive(Error, Debug)]
pub enum PlanError {
    /// The text handed to the compiler was empty or whitespace only
    #[error("Text input cannot be empty")]
    EmptyInput,
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> PlanError {
        PlanError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl PlanError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }
}

/// Extension trait for Result to provide concise error mapping with
/// anyhow-style context.
pub trait ResultExt<T, E> {
    /// Add context to any error type, converting to PlanError.
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| PlanError::Configuration {
            message: format!("{}: {}", context, e),
        })
    }
}

/// Result type alias for compiler operations
pub type Result<T> = std::result::Result<T, PlanError>;
