//! Error types for the Sekisho library.
//!
//! Classification itself is total and cannot fail, so errors only arise
//! while building routing tables from caller-supplied sources. All errors
//! are represented by the [`SekishoError`] enum.
//!
//! # Examples
//!
//! ```
//! use sekisho::entity::{EntityKind, PatternDictionary};
//! use sekisho::error::SekishoError;
//!
//! let result = PatternDictionary::new(EntityKind::Condition, ["[unclosed"]);
//! match result {
//!     Err(SekishoError::InvalidPattern { pattern, .. }) => assert_eq!(pattern, "[unclosed"),
//!     _ => panic!("expected a pattern error"),
//! }
//! ```

use thiserror::Error;

/// The main error type for Sekisho operations.
///
/// Uses the `thiserror` crate for automatic `Error` trait implementation
/// and provides convenient constructor methods for specific error types.
#[derive(Error, Debug)]
pub enum SekishoError {
    /// A caller-supplied regular expression failed to compile.
    #[error("invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        /// The pattern source that was rejected.
        pattern: String,
        /// The underlying compilation error.
        #[source]
        source: regex::Error,
    },
}

/// Result type alias for operations that may fail with SekishoError.
pub type Result<T> = std::result::Result<T, SekishoError>;

impl SekishoError {
    /// Create a new invalid-pattern error.
    pub fn invalid_pattern<S: Into<String>>(pattern: S, source: regex::Error) -> Self {
        SekishoError::InvalidPattern {
            pattern: pattern.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let source = regex::Regex::new("(").unwrap_err();
        let error = SekishoError::invalid_pattern("(", source);

        assert!(error.to_string().starts_with("invalid pattern `(`:"));
        match error {
            SekishoError::InvalidPattern { pattern, .. } => assert_eq!(pattern, "("),
        }
    }

    #[test]
    fn test_error_source_chain() {
        use std::error::Error;

        let source = regex::Regex::new("[a-").unwrap_err();
        let error = SekishoError::invalid_pattern("[a-", source);

        assert!(error.source().is_some());
    }
}
