//! Error types for the format layer

use thiserror::Error;

/// Result type for format operations
pub type Result<T> = std::result::Result<T, FormatError>;

/// Errors that can occur while reading corpus records
#[derive(Error, Debug)]
pub enum FormatError {
    /// A trajectory line contained a token that is not a number
    #[error("Line {line}: non-numeric token {token:?}")]
    NonNumericToken {
        /// 1-based line number in the blob
        line: usize,
        /// Offending token text
        token: String,
    },

    /// A line's token count does not describe whole trajectory points
    #[error("Line {line}: token count {count} is not a positive multiple of {width}",
            width = crate::RAW_FEATURES)]
    TokenCount {
        /// 1-based line number in the blob
        line: usize,
        /// Token count found
        count: usize,
    },

    /// A point matrix does not have trajectory shape
    #[error("Invalid point matrix shape: {rows}x{cols} (expected >= 1 rows, {width} columns)",
            width = crate::RAW_FEATURES)]
    PointShape {
        /// Rows found
        rows: usize,
        /// Columns found
        cols: usize,
    },
}

impl FormatError {
    /// Create a non-numeric token error
    pub fn non_numeric(line: usize, token: impl Into<String>) -> Self {
        Self::NonNumericToken {
            line,
            token: token.into(),
        }
    }

    /// Create a token count error
    pub fn token_count(line: usize, count: usize) -> Self {
        Self::TokenCount { line, count }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = FormatError::non_numeric(3, "abc");
        assert!(matches!(err, FormatError::NonNumericToken { line: 3, .. }));

        let err = FormatError::token_count(7, 12);
        assert!(matches!(err, FormatError::TokenCount { line: 7, count: 12 }));
    }

    #[test]
    fn test_error_display() {
        let err = FormatError::token_count(2, 63);
        let msg = format!("{}", err);
        assert!(msg.contains("Line 2"));
        assert!(msg.contains("63"));
    }
}
