//! Error types for tokenizer construction and dialect resolution.
//!
//! Formatting itself never fails: malformed SQL is absorbed by the
//! tokenizer's fallback rules. Only configuration problems surface here.

use thiserror::Error;

/// Result type for formatter operations.
pub type FormatResult<T> = Result<T, FormatError>;

/// Configuration errors raised before any tokenization begins.
#[derive(Error, Debug)]
pub enum FormatError {
    /// The requested dialect name is not known.
    #[error("Unsupported SQL dialect: {0}")]
    UnsupportedDialect(String),

    /// Open and close paren lists must pair up positionally.
    #[error("mismatched paren lists: {open} open vs {close} close")]
    MismatchedParens { open: usize, close: usize },

    /// A dialect list contains an empty entry.
    #[error("empty entry in dialect category `{category}`")]
    EmptyPattern { category: &'static str },

    /// A dialect entry produced a pattern that does not compile.
    #[error("invalid pattern for dialect category `{category}`: {source}")]
    InvalidPattern {
        category: &'static str,
        #[source]
        source: regex::Error,
    },
}

impl FormatError {
    /// Create an unsupported-dialect error.
    pub fn unsupported(name: impl Into<String>) -> Self {
        Self::UnsupportedDialect(name.into())
    }

    /// Check if this error came from resolving a dialect name.
    pub fn is_unsupported_dialect(&self) -> bool {
        matches!(self, Self::UnsupportedDialect(_))
    }
}
