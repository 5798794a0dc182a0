//! SQL Tokens - the classified slices of a query.
//!
//! Tokens are produced by the [`Tokenizer`](super::tokenizer::Tokenizer)
//! and consumed read-only by the layout engine. Concatenating the `text`
//! of every token in order reproduces the original input exactly.

use serde::{Deserialize, Serialize};

/// Token kind - every class of lexeme the tokenizer can produce.
///
/// Adding a new variant here will cause compile errors everywhere
/// it needs to be handled (exhaustive matching).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenKind {
    Whitespace,
    Word,
    String,
    Reserved,
    ReservedToplevel,
    ReservedNewline,
    Operator,
    OpenParen,
    CloseParen,
    LineComment,
    BlockComment,
    Number,
    Placeholder,
    #[serde(rename = "tablename")]
    TableName,
}

impl TokenKind {
    /// Stable name of this kind, as used in JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Whitespace => "whitespace",
            TokenKind::Word => "word",
            TokenKind::String => "string",
            TokenKind::Reserved => "reserved",
            TokenKind::ReservedToplevel => "reserved-toplevel",
            TokenKind::ReservedNewline => "reserved-newline",
            TokenKind::Operator => "operator",
            TokenKind::OpenParen => "open-paren",
            TokenKind::CloseParen => "close-paren",
            TokenKind::LineComment => "line-comment",
            TokenKind::BlockComment => "block-comment",
            TokenKind::Number => "number",
            TokenKind::Placeholder => "placeholder",
            TokenKind::TableName => "tablename",
        }
    }

    /// Any of the three reserved-word kinds.
    pub fn is_reserved(&self) -> bool {
        matches!(
            self,
            TokenKind::Reserved | TokenKind::ReservedToplevel | TokenKind::ReservedNewline
        )
    }

    pub fn is_comment(&self) -> bool {
        matches!(self, TokenKind::LineComment | TokenKind::BlockComment)
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified, contiguous substring of the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    #[serde(rename = "type")]
    pub kind: TokenKind,
    #[serde(rename = "value")]
    pub text: String,
    /// Substitution key; only set for placeholders.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl Token {
    /// Create a token without a placeholder key.
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            key: None,
        }
    }

    /// Create a placeholder token with its lookup key.
    pub fn placeholder(text: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::Placeholder,
            text: text.into(),
            key: Some(key.into()),
        }
    }

    pub fn is_whitespace(&self) -> bool {
        self.kind == TokenKind::Whitespace
    }

    pub fn is_comment(&self) -> bool {
        self.kind.is_comment()
    }

    pub fn is_reserved(&self) -> bool {
        self.kind.is_reserved()
    }

    /// True when the text has nothing but whitespace in it.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Length of the text in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Rebuild the source text from a token sequence.
pub fn concat(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.text.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        assert_eq!(TokenKind::ReservedToplevel.as_str(), "reserved-toplevel");
        assert_eq!(TokenKind::TableName.to_string(), "tablename");
        assert_eq!(TokenKind::OpenParen.to_string(), "open-paren");
    }

    #[test]
    fn test_reserved_kinds() {
        assert!(TokenKind::Reserved.is_reserved());
        assert!(TokenKind::ReservedNewline.is_reserved());
        assert!(!TokenKind::Word.is_reserved());
        assert!(TokenKind::BlockComment.is_comment());
    }

    #[test]
    fn test_json_shape() {
        let tok = Token::new(TokenKind::ReservedToplevel, "SELECT");
        assert_eq!(
            serde_json::to_string(&tok).unwrap(),
            r#"{"type":"reserved-toplevel","value":"SELECT"}"#
        );

        let tok = Token::placeholder(":id", "id");
        assert_eq!(
            serde_json::to_string(&tok).unwrap(),
            r#"{"type":"placeholder","value":":id","key":"id"}"#
        );

        let tok = Token::new(TokenKind::TableName, "users");
        assert_eq!(
            serde_json::to_string(&tok).unwrap(),
            r#"{"type":"tablename","value":"users"}"#
        );
    }

    #[test]
    fn test_blank() {
        assert!(Token::new(TokenKind::Whitespace, " \n\t").is_blank());
        assert!(!Token::new(TokenKind::LineComment, "-- x\n").is_blank());
    }

    #[test]
    fn test_concat() {
        let tokens = vec![
            Token::new(TokenKind::Word, "a"),
            Token::new(TokenKind::Whitespace, " "),
            Token::new(TokenKind::Operator, "+"),
        ];
        assert_eq!(concat(&tokens), "a +");
    }
}
