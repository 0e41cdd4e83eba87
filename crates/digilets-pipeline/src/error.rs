//! Error types for the preprocessing pipeline

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Errors that can occur in the preprocessing pipeline
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Format layer error
    #[error("Format error: {source}")]
    Format {
        #[from]
        /// Source format error
        source: digilets_format::FormatError,
    },

    /// Invalid parameter value
    #[error("Invalid parameter {parameter}: {value} (expected {constraint})")]
    InvalidParameter {
        /// Parameter name
        parameter: String,
        /// Invalid value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// Named corpus source does not exist
    #[error("Missing source: {path}")]
    MissingSource {
        /// Path that was not found
        path: PathBuf,
    },

    /// Symbol block holds no trajectory instances
    #[error("No instances for symbol {symbol}")]
    NoInstances {
        /// Symbol index that was requested
        symbol: usize,
    },

    /// I/O error while reading corpus data
    #[error("I/O error: {source}")]
    Io {
        #[from]
        /// Source I/O error
        source: std::io::Error,
    },
}

impl PipelineError {
    /// Create an invalid parameter error
    pub fn invalid_parameter(
        parameter: impl Into<String>,
        value: impl Into<String>,
        constraint: impl Into<String>,
    ) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value: value.into(),
            constraint: constraint.into(),
        }
    }

    /// Create a missing source error
    pub fn missing_source(path: impl AsRef<Path>) -> Self {
        Self::MissingSource {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Create a no instances error
    pub fn no_instances(symbol: usize) -> Self {
        Self::NoInstances { symbol }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = PipelineError::invalid_parameter("num_steps", "0", ">= 1");
        assert!(matches!(err, PipelineError::InvalidParameter { .. }));

        let err = PipelineError::missing_source("data/missing_preprocessed");
        assert!(matches!(err, PipelineError::MissingSource { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = PipelineError::no_instances(61);
        let msg = format!("{}", err);
        assert!(msg.contains("No instances for symbol 61"));
    }

    #[test]
    fn test_format_error_conversion() {
        let source = digilets_format::FormatError::non_numeric(3, "abc");
        let err = PipelineError::from(source);
        assert!(matches!(err, PipelineError::Format { .. }));
    }
}
