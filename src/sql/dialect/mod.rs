//! SQL dialect profiles.
//!
//! A [`DialectProfile`] is a declarative bundle of word and symbol lists
//! that parameterizes the tokenizer. No dialect-specific behavior lives in
//! code: every difference between dialects is expressed as data.
//!
//! - Reserved words: plain, toplevel (clause introducers) and newline
//!   (boolean connectives, joins)
//! - Table-name prefixes: words after which a bare identifier is a table
//! - String quoting: `""`, `''`, `N''`, `` ` ` ``, `[]`
//! - Parens: `(`/`)` and word-form pairs like `CASE`/`END`
//! - Placeholders: indexed (`?`, `?1`) and named (`:name`, `@name`, `$name`)
//! - Line comments and extra identifier characters
//!
//! # Usage
//!
//! ```ignore
//! use sqlfmt::dialect::Dialect;
//!
//! let dialect: Dialect = "db2".parse()?;
//! let profile = dialect.profile();
//! ```
//!
//! # Built-in dialects
//!
//! | Dialect | Strings | Parens | Placeholders | Line comments |
//! |---------|---------|--------|--------------|---------------|
//! | `sql` | `""` `N''` `''` `` ` ` `` `[]` | `()` `CASE END` | `?` `@` `:` | `#` `--` |
//! | `db2` | `""` `''` `` ` ` `` `[]` | `()` | `?` `:` | `--` |
//! | `n1ql` | `""` `''` `` ` ` `` | `()` `[]` `{}` | `$` | `#` `--` |
//! | `pl/sql` | `""` `N''` `''` `` ` ` `` | `()` `CASE END` | `?` `:` | `--` |

mod db2;
pub mod helpers;
mod n1ql;
mod plsql;
mod standard;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FormatError;

/// A string quoting style the tokenizer can recognize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StringType {
    /// `` `name` ``, escaped by doubling the backtick.
    #[serde(rename = "``")]
    Backtick,
    /// `[name]`, escaped by doubling the closing bracket.
    #[serde(rename = "[]")]
    Bracket,
    /// `"text"`, escaped by `""` or `\"`.
    #[serde(rename = "\"\"")]
    DoubleQuote,
    /// `'text'`, escaped by `''` or `\'`.
    #[serde(rename = "''")]
    SingleQuote,
    /// `N'text'` national character string.
    #[serde(rename = "N''")]
    National,
}

impl StringType {
    /// The delimiter spelling used in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            StringType::Backtick => "``",
            StringType::Bracket => "[]",
            StringType::DoubleQuote => "\"\"",
            StringType::SingleQuote => "''",
            StringType::National => "N''",
        }
    }
}

/// Declarative word and symbol lists for one SQL variant.
///
/// Profiles are immutable once built and may be shared across threads.
/// Multi-word entries (`GROUP BY`) match any whitespace between words.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialectProfile {
    pub name: String,
    pub reserved_words: Vec<String>,
    pub reserved_toplevel_words: Vec<String>,
    pub reserved_newline_words: Vec<String>,
    pub table_name_prefix_words: Vec<String>,
    pub string_types: Vec<StringType>,
    /// Paired positionally with `close_parens`.
    pub open_parens: Vec<String>,
    pub close_parens: Vec<String>,
    pub indexed_placeholder_types: Vec<String>,
    pub named_placeholder_types: Vec<String>,
    pub line_comment_types: Vec<String>,
    pub special_word_chars: Vec<String>,
}

impl DialectProfile {
    /// Create an empty profile with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn reserved_words(mut self, words: &[&str]) -> Self {
        self.reserved_words = helpers::owned(words);
        self
    }

    pub fn reserved_toplevel_words(mut self, words: &[&str]) -> Self {
        self.reserved_toplevel_words = helpers::owned(words);
        self
    }

    pub fn reserved_newline_words(mut self, words: &[&str]) -> Self {
        self.reserved_newline_words = helpers::owned(words);
        self
    }

    pub fn table_name_prefix_words(mut self, words: &[&str]) -> Self {
        self.table_name_prefix_words = helpers::owned(words);
        self
    }

    pub fn string_types(mut self, types: &[StringType]) -> Self {
        self.string_types = types.to_vec();
        self
    }

    /// Set the open/close paren pairs.
    pub fn parens(mut self, open: &[&str], close: &[&str]) -> Self {
        self.open_parens = helpers::owned(open);
        self.close_parens = helpers::owned(close);
        self
    }

    pub fn indexed_placeholder_types(mut self, prefixes: &[&str]) -> Self {
        self.indexed_placeholder_types = helpers::owned(prefixes);
        self
    }

    pub fn named_placeholder_types(mut self, prefixes: &[&str]) -> Self {
        self.named_placeholder_types = helpers::owned(prefixes);
        self
    }

    pub fn line_comment_types(mut self, markers: &[&str]) -> Self {
        self.line_comment_types = helpers::owned(markers);
        self
    }

    pub fn special_word_chars(mut self, chars: &[&str]) -> Self {
        self.special_word_chars = helpers::owned(chars);
        self
    }
}

/// Built-in SQL dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Dialect {
    #[default]
    #[serde(rename = "sql")]
    StandardSql,
    #[serde(rename = "db2")]
    Db2,
    #[serde(rename = "n1ql")]
    N1ql,
    #[serde(rename = "pl/sql")]
    PlSql,
}

impl Dialect {
    /// Every built-in dialect.
    pub const ALL: [Dialect; 4] = [
        Dialect::StandardSql,
        Dialect::Db2,
        Dialect::N1ql,
        Dialect::PlSql,
    ];

    /// Get the dialect profile.
    pub fn profile(&self) -> &'static DialectProfile {
        match self {
            Dialect::StandardSql => &standard::PROFILE,
            Dialect::Db2 => &db2::PROFILE,
            Dialect::N1ql => &n1ql::PROFILE,
            Dialect::PlSql => &plsql::PROFILE,
        }
    }

    /// Dialect name as accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            Dialect::StandardSql => "sql",
            Dialect::Db2 => "db2",
            Dialect::N1ql => "n1ql",
            Dialect::PlSql => "pl/sql",
        }
    }
}

impl FromStr for Dialect {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dialect::ALL
            .into_iter()
            .find(|d| d.name() == s)
            .ok_or_else(|| FormatError::unsupported(s))
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialect_display() {
        assert_eq!(Dialect::StandardSql.to_string(), "sql");
        assert_eq!(Dialect::Db2.to_string(), "db2");
        assert_eq!(Dialect::N1ql.to_string(), "n1ql");
        assert_eq!(Dialect::PlSql.to_string(), "pl/sql");
    }

    #[test]
    fn test_dialect_from_str() {
        for dialect in Dialect::ALL {
            assert_eq!(dialect.name().parse::<Dialect>().unwrap(), dialect);
        }
    }

    #[test]
    fn test_unknown_dialect() {
        let err = "blah".parse::<Dialect>().unwrap_err();
        assert_eq!(err.to_string(), "Unsupported SQL dialect: blah");
    }

    #[test]
    fn test_default_is_standard() {
        assert_eq!(Dialect::default(), Dialect::StandardSql);
    }

    #[test]
    fn test_profiles_pair_parens() {
        for dialect in Dialect::ALL {
            let profile = dialect.profile();
            assert_eq!(
                profile.open_parens.len(),
                profile.close_parens.len(),
                "{} parens",
                dialect
            );
            assert_eq!(profile.name, dialect.name());
        }
    }

    #[test]
    fn test_profiles_have_no_empty_entries() {
        for dialect in Dialect::ALL {
            let p = dialect.profile();
            let lists = [
                &p.reserved_words,
                &p.reserved_toplevel_words,
                &p.reserved_newline_words,
                &p.table_name_prefix_words,
                &p.open_parens,
                &p.close_parens,
                &p.line_comment_types,
            ];
            for list in lists {
                assert!(list.iter().all(|w| !w.is_empty()), "{}", dialect);
            }
        }
    }

    #[test]
    fn test_string_type_serde() {
        let types: Vec<StringType> = serde_json::from_str(r#"["``", "[]", "N''"]"#).unwrap();
        assert_eq!(
            types,
            vec![StringType::Backtick, StringType::Bracket, StringType::National]
        );
        assert_eq!(StringType::DoubleQuote.as_str(), "\"\"");
    }

    #[test]
    fn test_profile_builder() {
        let profile = DialectProfile::new("tiny")
            .reserved_toplevel_words(&["SELECT", "FROM"])
            .parens(&["("], &[")"])
            .line_comment_types(&["--"]);
        assert_eq!(profile.name, "tiny");
        assert_eq!(profile.reserved_toplevel_words, vec!["SELECT", "FROM"]);
        assert!(profile.reserved_words.is_empty());
    }
}
