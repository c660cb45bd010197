//! Error types for the brickseek library.
//!
//! All fallible operations in the crate return [`Result`], whose error type is
//! the [`BrickseekError`] enum. Query analysis, expansion, and ranking are
//! total functions and never return errors; errors arise at the boundaries:
//! record validation, provider payload mapping, and catalog I/O.
//!
//! # Examples
//!
//! ```
//! use brickseek::error::{BrickseekError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(BrickseekError::validation("set id must not be empty"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for brickseek operations.
#[derive(Error, Debug)]
pub enum BrickseekError {
    /// I/O errors (catalog file loading, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Record validation errors (blank identifier, negative price, ...)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Query analysis errors (invalid extraction pattern, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Errors mapping a remote provider payload into a catalog record
    #[error("Provider error: {0}")]
    Provider(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with BrickseekError.
pub type Result<T> = std::result::Result<T, BrickseekError>;

impl BrickseekError {
    /// Create a new validation error.
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        BrickseekError::Validation(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        BrickseekError::Analysis(msg.into())
    }

    /// Create a new provider error.
    pub fn provider<S: Into<String>>(msg: S) -> Self {
        BrickseekError::Provider(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        BrickseekError::Other(msg.into())
    }

    /// Create a new not found error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        BrickseekError::Other(format!("Not found: {}", msg.into()))
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        BrickseekError::Other(format!("Invalid argument: {}", msg.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = BrickseekError::validation("empty set id");
        assert_eq!(error.to_string(), "Validation error: empty set id");

        let error = BrickseekError::provider("missing name field");
        assert_eq!(error.to_string(), "Provider error: missing name field");

        let error = BrickseekError::not_found("set 75192");
        assert_eq!(error.to_string(), "Error: Not found: set 75192");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = BrickseekError::from(io_error);

        match error {
            BrickseekError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
    }
}
