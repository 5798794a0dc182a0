//! # sqlfmt
//!
//! A dialect-aware SQL formatter.
//!
//! ## Architecture
//!
//! Formatting is a purely lexical transformation. No syntax tree is built
//! and nothing is validated; malformed input is still formatted.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                    Raw SQL text                          │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [tokenizer + dialect profile]
//! ┌─────────────────────────────────────────────────────────┐
//! │                  Token sequence                          │
//! │  (lossless: concatenated text reproduces the input)      │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [layout engine + format options]
//! ┌─────────────────────────────────────────────────────────┐
//! │                  Formatted SQL                           │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```
//! use sqlfmt::{format, Dialect, FormatOptions};
//!
//! let sql = format("select a, b from t", Dialect::StandardSql, &FormatOptions::default())?;
//! assert_eq!(sql, "select\n  a,\n  b\nfrom\n  t");
//! # Ok::<(), sqlfmt::FormatError>(())
//! ```

pub mod config;
pub mod error;
pub mod sql;

// Re-export SQL submodules at crate level
pub use sql::dialect;
pub use sql::layout;
pub use sql::options;
pub use sql::token;
pub use sql::tokenizer;

pub use error::{FormatError, FormatResult};

/// Re-exports for convenient usage.
pub mod prelude {
    pub use crate::dialect::{Dialect, DialectProfile, StringType};
    pub use crate::error::{FormatError, FormatResult};
    pub use crate::options::{FormatOptions, QueryParams, ReservedWordCase};
    pub use crate::token::{Token, TokenKind};
    pub use crate::tokenizer::Tokenizer;
    pub use crate::{format, format_with_language, tokenize, tokenize_with_language};
}

// Also export at crate root for convenience
pub use dialect::{Dialect, DialectProfile};
pub use options::{FormatOptions, QueryParams, ReservedWordCase};
pub use token::{Token, TokenKind};
pub use tokenizer::Tokenizer;

/// Format `query` with a built-in dialect.
pub fn format(query: &str, dialect: Dialect, options: &FormatOptions) -> FormatResult<String> {
    format_with_profile(query, dialect.profile(), options)
}

/// Format `query` with any dialect profile, including custom ones.
#[tracing::instrument(level = "debug", skip_all, fields(dialect = %profile.name))]
pub fn format_with_profile(
    query: &str,
    profile: &DialectProfile,
    options: &FormatOptions,
) -> FormatResult<String> {
    let tokenizer = Tokenizer::new(profile)?;
    let tokens = tokenizer.tokenize(query);
    let formatted = layout::format_tokens(&tokens, options);
    tracing::debug!(
        tokens = tokens.len(),
        input_len = query.len(),
        output_len = formatted.len(),
        "formatted query"
    );
    Ok(formatted)
}

/// Format `query` with a dialect looked up by name (`sql`, `db2`,
/// `n1ql`, `pl/sql`).
///
/// Unknown names fail with [`FormatError::UnsupportedDialect`] before
/// any tokenization.
pub fn format_with_language(
    query: &str,
    language: &str,
    options: &FormatOptions,
) -> FormatResult<String> {
    let dialect: Dialect = language.parse()?;
    format(query, dialect, options)
}

/// Tokenize `query` with a built-in dialect.
pub fn tokenize(query: &str, dialect: Dialect) -> FormatResult<Vec<Token>> {
    tokenize_with_profile(query, dialect.profile())
}

/// Tokenize `query` with any dialect profile.
pub fn tokenize_with_profile(query: &str, profile: &DialectProfile) -> FormatResult<Vec<Token>> {
    Ok(Tokenizer::new(profile)?.tokenize(query))
}

/// Tokenize `query` with a dialect looked up by name.
pub fn tokenize_with_language(query: &str, language: &str) -> FormatResult<Vec<Token>> {
    let dialect: Dialect = language.parse()?;
    tokenize(query, dialect)
}
