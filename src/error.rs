//! Error types for the rslp library.
//!
//! All errors are represented by the [`RslpError`] enum. Stemming itself is
//! total over non-empty input, so errors only surface for precondition
//! violations, malformed rule catalogues and analysis pipeline setup.
//!
//! # Examples
//!
//! ```
//! use rslp::error::{RslpError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(RslpError::invalid_argument("word must not be empty"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

/// The main error type for rslp operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RslpError {
    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// A caller broke an operation's precondition (e.g. an empty word)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A reduction rule catalogue entry is malformed
    #[error("Catalogue error: {0}")]
    Catalogue(String),
}

/// Result type alias for operations that may fail with RslpError.
pub type Result<T> = std::result::Result<T, RslpError>;

impl RslpError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        RslpError::Analysis(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        RslpError::InvalidArgument(msg.into())
    }

    /// Create a new catalogue error.
    pub fn catalogue<S: Into<String>>(msg: S) -> Self {
        RslpError::Catalogue(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = RslpError::analysis("Test analysis error");
        assert_eq!(error.to_string(), "Analysis error: Test analysis error");

        let error = RslpError::invalid_argument("empty word");
        assert_eq!(error.to_string(), "Invalid argument: empty word");

        let error = RslpError::catalogue("rule 'x' in group 'noun'");
        assert_eq!(error.to_string(), "Catalogue error: rule 'x' in group 'noun'");
    }

    #[test]
    fn test_result_alias() {
        fn fails() -> Result<usize> {
            Err(RslpError::invalid_argument("boom"))
        }

        match fails() {
            Err(RslpError::InvalidArgument(msg)) => assert_eq!(msg, "boom"),
            _ => panic!("Expected InvalidArgument variant"),
        }
    }
}
