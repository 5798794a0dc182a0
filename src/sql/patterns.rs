//! Regex construction for the tokenizer.
//!
//! Dialect-independent patterns are compiled once into statics. Everything
//! driven by a [`DialectProfile`](super::dialect::DialectProfile) list is
//! compiled per tokenizer; an empty list compiles to `None`, which simply
//! disables that matcher.
//!
//! Every pattern is anchored at the start of the remaining input.

use once_cell::sync::Lazy;
use regex::Regex;

use super::dialect::StringType;
use crate::error::{FormatError, FormatResult};

// =============================================================================
// Fixed patterns
// =============================================================================

pub static WHITESPACE: Lazy<Regex> = Lazy::new(|| fixed(r"^\s+"));

/// Decimal (optionally negative, optionally fractional), hex and binary.
pub static NUMBER: Lazy<Regex> = Lazy::new(|| {
    fixed(r"^(?:(?:-\s*)?[0-9]+(?:\.[0-9]+)?|0x[0-9a-fA-F]+|0b[01]+)\b")
});

/// Multi-character operators, else any single character.
pub static OPERATOR: Lazy<Regex> = Lazy::new(|| {
    fixed(r"^(?:!=|<>|==|<=|>=|!<|!>|\|\||::|->>|->|~~\*|~~|!~~\*|!~~|~\*|!~\*|!~|(?s:.))")
});

/// `/* ... */`, running to end of input when unterminated.
pub static BLOCK_COMMENT: Lazy<Regex> = Lazy::new(|| fixed(r"^/\*(?s:.)*?(?:\*/|$)"));

/// Bare identifier (dots allowed) or a bracket/backtick delimited one.
pub static TABLE_NAME: Lazy<Regex> =
    Lazy::new(|| fixed(r"(?i)^(?:[a-z][\w.]*|[\[`][a-z][\w. \-]*[\]`])"));

pub const INDEXED_PLACEHOLDER_BODY: &str = "[0-9]*";
pub const IDENT_PLACEHOLDER_BODY: &str = "[a-zA-Z0-9._$]+";

fn fixed(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in tokenizer pattern must compile")
}

// =============================================================================
// Dialect-driven patterns
// =============================================================================

/// Line comment markers (`--`, `#`), through the end of the line.
pub fn line_comment(markers: &[String]) -> FormatResult<Option<Regex>> {
    let Some(alternatives) = escaped_alternatives(markers, "line_comment_types")? else {
        return Ok(None);
    };
    compile(
        &format!(r"^(?:{alternatives}).*?(?:\n|$)"),
        "line_comment_types",
    )
    .map(Some)
}

/// Whole-word, case-insensitive match over a word list.
///
/// Spaces inside an entry match any run of whitespace, so `GROUP BY`
/// also matches `group\n  by`.
pub fn reserved_words(words: &[String], category: &'static str) -> FormatResult<Option<Regex>> {
    if words.is_empty() {
        return Ok(None);
    }
    let mut alternatives = Vec::with_capacity(words.len());
    for word in words {
        if word.trim().is_empty() {
            return Err(FormatError::EmptyPattern { category });
        }
        let parts: Vec<String> = word.split_whitespace().map(regex::escape).collect();
        alternatives.push(parts.join(r"\s+"));
    }
    compile(&format!(r"(?i)^(?:{})\b", alternatives.join("|")), category).map(Some)
}

/// Word characters plus any dialect-declared identifier characters.
pub fn word(special_chars: &[String]) -> FormatResult<Regex> {
    let extra: String = special_chars
        .iter()
        .flat_map(|s| s.chars())
        .map(|c| regex::escape(&c.to_string()))
        .collect();
    compile(&format!(r"^[\w{extra}]+"), "special_word_chars")
}

/// Quoted strings for the enabled quote styles.
pub fn string(types: &[StringType]) -> FormatResult<Option<Regex>> {
    if types.is_empty() {
        return Ok(None);
    }
    compile(&format!("^(?:{})", string_body(types)), "string_types").map(Some)
}

/// Alternation of string bodies, unanchored, for embedding in other patterns.
///
/// Every style accepts an unterminated literal running to end of input.
pub fn string_body(types: &[StringType]) -> String {
    types
        .iter()
        .map(|t| match t {
            StringType::Backtick => r"(?:`[^`]*(?:$|`))+",
            StringType::Bracket => r"(?:\[[^\]]*(?:$|\]))(?:\][^\]]*(?:$|\]))*",
            StringType::DoubleQuote => r#"(?:"[^"\\]*(?:\\(?s:.)[^"\\]*)*(?:"|$))+"#,
            StringType::SingleQuote => r"(?:'[^'\\]*(?:\\(?s:.)[^'\\]*)*(?:'|$))+",
            StringType::National => r"(?:N'[^'\\]*(?:\\(?s:.)[^'\\]*)*(?:'|$))+",
        })
        .collect::<Vec<_>>()
        .join("|")
}

/// Paren tokens. Single characters match literally; word parens such as
/// `CASE` match as whole words, case-insensitively.
pub fn parens(parens: &[String], category: &'static str) -> FormatResult<Option<Regex>> {
    if parens.is_empty() {
        return Ok(None);
    }
    let mut alternatives = Vec::with_capacity(parens.len());
    for paren in parens {
        match paren.chars().count() {
            0 => return Err(FormatError::EmptyPattern { category }),
            1 => alternatives.push(regex::escape(paren)),
            _ => alternatives.push(format!(r"\b{}\b", regex::escape(paren))),
        }
    }
    compile(&format!("(?i)^(?:{})", alternatives.join("|")), category).map(Some)
}

/// Prefix followed by `body`; the body is capture group 1.
pub fn placeholder(
    prefixes: &[String],
    body: &str,
    category: &'static str,
) -> FormatResult<Option<Regex>> {
    let Some(alternatives) = escaped_alternatives(prefixes, category)? else {
        return Ok(None);
    };
    compile(&format!("^(?:{alternatives})({body})"), category).map(Some)
}

fn escaped_alternatives(
    items: &[String],
    category: &'static str,
) -> FormatResult<Option<String>> {
    if items.is_empty() {
        return Ok(None);
    }
    if items.iter().any(|i| i.is_empty()) {
        return Err(FormatError::EmptyPattern { category });
    }
    let escaped: Vec<String> = items.iter().map(|i| regex::escape(i)).collect();
    Ok(Some(escaped.join("|")))
}

fn compile(pattern: &str, category: &'static str) -> FormatResult<Regex> {
    Regex::new(pattern).map_err(|source| FormatError::InvalidPattern { category, source })
}
