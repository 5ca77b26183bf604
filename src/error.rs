//! Error types for the tierspell library.
//!
//! The correction engine itself is total: every word, however degenerate,
//! has a defined answer. Errors only come from the layer around it, such as
//! reading a corpus or a test set from disk, parsing configuration, or
//! compiling a custom tokenizer pattern. All of them are represented by
//! [`SpellError`].
//!
//! # Examples
//!
//! ```
//! use tierspell::error::{Result, SpellError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SpellError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for tierspell operations.
#[derive(Error, Debug)]
pub enum SpellError {
    /// I/O errors (corpus files, test sets, configuration files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenizer construction)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Malformed input data, such as a bad test-set line
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration that cannot be used as given
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with SpellError.
pub type Result<T> = std::result::Result<T, SpellError>;

impl SpellError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        SpellError::Analysis(msg.into())
    }

    /// Create a new parse error.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        SpellError::Parse(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        SpellError::InvalidConfig(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        SpellError::InvalidArgument(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SpellError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = SpellError::analysis("bad pattern");
        assert_eq!(error.to_string(), "Analysis error: bad pattern");

        let error = SpellError::parse("line 3: missing ':'");
        assert_eq!(error.to_string(), "Parse error: line 3: missing ':'");

        let error = SpellError::invalid_config("alphabet must not be empty");
        assert_eq!(
            error.to_string(),
            "Invalid configuration: alphabet must not be empty"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let spell_error = SpellError::from(io_error);

        match spell_error {
            SpellError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
