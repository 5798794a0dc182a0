//! Context-sensitive SQL lexer.
//!
//! A [`Tokenizer`] compiles a [`DialectProfile`] into an ordered list of
//! matchers. Each step tries the matchers in priority order against the
//! start of the remaining input and takes the first hit:
//!
//! ```text
//! whitespace → line comment → block comment → string → open paren
//!   → close paren → placeholder (ident, string, indexed) → number
//!   → reserved (toplevel, newline, plain) → table name → word → operator
//! ```
//!
//! The operator matcher accepts any single character, so every step
//! consumes input and tokenizing never fails.
//!
//! Two matchers look back at what was already emitted:
//! - reserved words are skipped right after a `.` (`tbl.from` is a column)
//! - a table name needs a prefix word (`FROM`, `INTO`, ...) two tokens back
//!   with only whitespace in between, or nothing before it at all

use std::iter::FusedIterator;

use regex::Regex;

use super::dialect::DialectProfile;
use super::patterns;
use super::token::{Token, TokenKind};
use crate::error::{FormatError, FormatResult};

/// The two most recently emitted tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lookback<'a> {
    pub previous: Option<&'a Token>,
    pub before_previous: Option<&'a Token>,
}

impl<'a> Lookback<'a> {
    pub fn new(previous: Option<&'a Token>, before_previous: Option<&'a Token>) -> Self {
        Self {
            previous,
            before_previous,
        }
    }

    fn follows_dot(&self) -> bool {
        self.previous.is_some_and(|t| t.text == ".")
    }

    fn admits_table_name(&self, prefix: Option<&Regex>) -> bool {
        if self.previous.is_some_and(|t| !t.is_blank()) {
            return false;
        }
        match self.before_previous {
            Some(token) => prefix.is_some_and(|re| re.is_match(&token.text)),
            None => true,
        }
    }
}

/// How a placeholder's lookup key is derived from its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyStyle {
    /// `:name` → `name`
    Ident,
    /// `@"some name"` → `some name`, with `\"` unescaped
    Quoted,
    /// `?`, `?3` → ``, `3`
    Indexed,
}

impl KeyStyle {
    fn parse(&self, body: &str) -> String {
        match self {
            KeyStyle::Ident | KeyStyle::Indexed => body.to_string(),
            KeyStyle::Quoted => unquote_key(body),
        }
    }
}

/// Strip the delimiters from a quoted placeholder body and unescape
/// backslash-escaped closing delimiters.
fn unquote_key(body: &str) -> String {
    let mut chars = body.chars();
    let Some(open) = chars.next() else {
        return String::new();
    };
    let close = if open == '[' { ']' } else { open };
    let inner = chars.as_str();
    let inner = inner.strip_suffix(close).unwrap_or(inner);
    inner.replace(&format!("\\{close}"), &close.to_string())
}

/// One step of the priority chain.
#[derive(Debug)]
enum Matcher {
    Whitespace,
    LineComment(Regex),
    BlockComment,
    String(Regex),
    OpenParen(Regex),
    CloseParen(Regex),
    Placeholder { regex: Regex, style: KeyStyle },
    Number,
    Reserved { kind: TokenKind, regex: Regex },
    TableName { prefix: Option<Regex> },
    Word(Regex),
    Operator,
}

impl Matcher {
    fn kind(&self) -> TokenKind {
        match self {
            Matcher::Whitespace => TokenKind::Whitespace,
            Matcher::LineComment(_) => TokenKind::LineComment,
            Matcher::BlockComment => TokenKind::BlockComment,
            Matcher::String(_) => TokenKind::String,
            Matcher::OpenParen(_) => TokenKind::OpenParen,
            Matcher::CloseParen(_) => TokenKind::CloseParen,
            Matcher::Placeholder { .. } => TokenKind::Placeholder,
            Matcher::Number => TokenKind::Number,
            Matcher::Reserved { kind, .. } => *kind,
            Matcher::TableName { .. } => TokenKind::TableName,
            Matcher::Word(_) => TokenKind::Word,
            Matcher::Operator => TokenKind::Operator,
        }
    }

    fn regex(&self) -> &Regex {
        match self {
            Matcher::Whitespace => &patterns::WHITESPACE,
            Matcher::BlockComment => &patterns::BLOCK_COMMENT,
            Matcher::Number => &patterns::NUMBER,
            Matcher::TableName { .. } => &patterns::TABLE_NAME,
            Matcher::Operator => &patterns::OPERATOR,
            Matcher::LineComment(regex)
            | Matcher::String(regex)
            | Matcher::OpenParen(regex)
            | Matcher::CloseParen(regex)
            | Matcher::Placeholder { regex, .. }
            | Matcher::Reserved { regex, .. }
            | Matcher::Word(regex) => regex,
        }
    }

    fn try_match(&self, input: &str, lookback: &Lookback<'_>) -> Option<Token> {
        match self {
            Matcher::Reserved { .. } if lookback.follows_dot() => return None,
            Matcher::TableName { prefix } if !lookback.admits_table_name(prefix.as_ref()) => {
                return None
            }
            _ => {}
        }

        if let Matcher::Placeholder { regex, style } = self {
            let caps = regex.captures(input)?;
            let text = caps.get(0)?.as_str();
            let body = caps.get(1).map_or("", |m| m.as_str());
            return Some(Token::placeholder(text, style.parse(body)));
        }

        let text = self.regex().find(input)?.as_str();
        if text.is_empty() {
            return None;
        }
        Some(Token::new(self.kind(), text))
    }
}

/// Compiled tokenizer for one dialect profile.
#[derive(Debug)]
pub struct Tokenizer {
    dialect: String,
    matchers: Vec<Matcher>,
}

impl Tokenizer {
    /// Compile a dialect profile into matchers.
    ///
    /// Fails on configuration problems only: mismatched paren lists, empty
    /// list entries, or entries that do not form a valid pattern. An empty
    /// category is legal and disables its matcher.
    pub fn new(profile: &DialectProfile) -> FormatResult<Self> {
        if profile.open_parens.len() != profile.close_parens.len() {
            return Err(FormatError::MismatchedParens {
                open: profile.open_parens.len(),
                close: profile.close_parens.len(),
            });
        }

        let mut matchers = vec![Matcher::Whitespace];
        if let Some(regex) = patterns::line_comment(&profile.line_comment_types)? {
            matchers.push(Matcher::LineComment(regex));
        }
        matchers.push(Matcher::BlockComment);
        if let Some(regex) = patterns::string(&profile.string_types)? {
            matchers.push(Matcher::String(regex));
        }
        if let Some(regex) = patterns::parens(&profile.open_parens, "open_parens")? {
            matchers.push(Matcher::OpenParen(regex));
        }
        if let Some(regex) = patterns::parens(&profile.close_parens, "close_parens")? {
            matchers.push(Matcher::CloseParen(regex));
        }

        let named = &profile.named_placeholder_types;
        if let Some(regex) = patterns::placeholder(
            named,
            patterns::IDENT_PLACEHOLDER_BODY,
            "named_placeholder_types",
        )? {
            matchers.push(Matcher::Placeholder {
                regex,
                style: KeyStyle::Ident,
            });
        }
        if !profile.string_types.is_empty() {
            let body = patterns::string_body(&profile.string_types);
            if let Some(regex) = patterns::placeholder(named, &body, "named_placeholder_types")? {
                matchers.push(Matcher::Placeholder {
                    regex,
                    style: KeyStyle::Quoted,
                });
            }
        }
        if let Some(regex) = patterns::placeholder(
            &profile.indexed_placeholder_types,
            patterns::INDEXED_PLACEHOLDER_BODY,
            "indexed_placeholder_types",
        )? {
            matchers.push(Matcher::Placeholder {
                regex,
                style: KeyStyle::Indexed,
            });
        }

        matchers.push(Matcher::Number);

        let reserved = [
            (
                TokenKind::ReservedToplevel,
                &profile.reserved_toplevel_words,
                "reserved_toplevel_words",
            ),
            (
                TokenKind::ReservedNewline,
                &profile.reserved_newline_words,
                "reserved_newline_words",
            ),
            (TokenKind::Reserved, &profile.reserved_words, "reserved_words"),
        ];
        for (kind, words, category) in reserved {
            if let Some(regex) = patterns::reserved_words(words, category)? {
                matchers.push(Matcher::Reserved { kind, regex });
            }
        }

        let prefix = patterns::reserved_words(
            &profile.table_name_prefix_words,
            "table_name_prefix_words",
        )?;
        matchers.push(Matcher::TableName { prefix });
        matchers.push(Matcher::Word(patterns::word(&profile.special_word_chars)?));
        matchers.push(Matcher::Operator);

        tracing::debug!(
            dialect = %profile.name,
            matchers = matchers.len(),
            "compiled tokenizer"
        );

        Ok(Self {
            dialect: profile.name.clone(),
            matchers,
        })
    }

    /// Name of the profile this tokenizer was built from.
    pub fn dialect(&self) -> &str {
        &self.dialect
    }

    /// Lazily tokenize `input`.
    pub fn tokens<'t, 'i>(&'t self, input: &'i str) -> Tokens<'t, 'i> {
        Tokens {
            tokenizer: self,
            rest: input,
            previous: None,
            before_previous: None,
        }
    }

    /// Tokenize `input` into a vector.
    pub fn tokenize(&self, input: &str) -> Vec<Token> {
        let tokens: Vec<Token> = self.tokens(input).collect();
        tracing::trace!(
            dialect = %self.dialect,
            count = tokens.len(),
            "tokenized input"
        );
        tokens
    }

    /// Classify the token at the start of `input`.
    ///
    /// `input` must be non-empty.
    pub fn next_token(&self, input: &str, lookback: Lookback<'_>) -> Token {
        self.matchers
            .iter()
            .find_map(|m| m.try_match(input, &lookback))
            .unwrap_or_else(|| {
                let end = input.chars().next().map_or(input.len(), char::len_utf8);
                Token::new(TokenKind::Operator, &input[..end])
            })
    }
}

/// Lazy token sequence over one input. Finite and not restartable.
#[derive(Debug)]
pub struct Tokens<'t, 'i> {
    tokenizer: &'t Tokenizer,
    rest: &'i str,
    previous: Option<Token>,
    before_previous: Option<Token>,
}

impl Iterator for Tokens<'_, '_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.rest.is_empty() {
            return None;
        }
        let lookback = Lookback::new(self.previous.as_ref(), self.before_previous.as_ref());
        let token = self.tokenizer.next_token(self.rest, lookback);
        self.rest = &self.rest[token.text.len()..];
        self.before_previous = self.previous.replace(token.clone());
        Some(token)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.rest.len();
        (usize::from(remaining > 0), Some(remaining))
    }
}

impl FusedIterator for Tokens<'_, '_> {}
