//! SQL formatting module.
//!
//! - [`token`] - Token types produced by the tokenizer
//! - [`tokenizer`] - Dialect-parameterized lexer
//! - [`patterns`] - Regex construction for tokenizer matchers
//! - [`layout`] - Layout engine (tokens to formatted text)
//! - [`options`] - Per-call formatting options
//! - [`dialect`] - Dialect profiles and the built-in dialects

pub mod dialect;
pub mod layout;
pub mod options;
pub mod patterns;
pub mod token;
pub mod tokenizer;

// Re-export commonly used types at the sql module level
pub use dialect::{Dialect, DialectProfile, StringType};
pub use layout::{format_tokens, Formatter};
pub use options::{FormatOptions, QueryParams, ReservedWordCase};
pub use token::{Token, TokenKind};
pub use tokenizer::{Tokenizer, Tokens};
