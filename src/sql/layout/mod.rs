//! Layout engine - turns a token sequence into formatted SQL text.
//!
//! A single left-to-right pass. Whitespace tokens from the source are
//! dropped and all spacing is synthesized from token kinds:
//!
//! | token                 | layout                                          |
//! |-----------------------|-------------------------------------------------|
//! | toplevel reserved     | own line at clause depth, body indented below   |
//! | newline reserved      | starts a new line at the current depth          |
//! | open paren            | inline group, or indented block                 |
//! | close paren           | closes the group or block                       |
//! | comments              | own line at the current depth                   |
//! | `,`                   | binds left, breaks outside inline groups        |
//! | `;`                   | binds left, resets depth, separates statements  |
//! | everything else       | followed by a single space                      |

mod indentation;
mod inline_block;
mod params;

pub use indentation::Indentation;
pub use inline_block::{InlineBlock, INLINE_MAX_LENGTH};
pub use params::Params;

use super::options::FormatOptions;
use super::token::{Token, TokenKind};

/// Format a token sequence with the given options.
pub fn format_tokens(tokens: &[Token], options: &FormatOptions) -> String {
    Formatter::new(options).format(tokens)
}

/// Single-use layout state for one token sequence.
#[derive(Debug)]
pub struct Formatter<'a> {
    options: &'a FormatOptions,
    indentation: Indentation,
    inline_block: InlineBlock,
    params: Params<'a>,
}

impl<'a> Formatter<'a> {
    pub fn new(options: &'a FormatOptions) -> Self {
        Self {
            options,
            indentation: Indentation::new(options.indent.as_str()),
            inline_block: InlineBlock::new(),
            params: Params::new(&options.params),
        }
    }

    /// Lay out `tokens`, consuming the formatter.
    pub fn format(mut self, tokens: &[Token]) -> String {
        let mut out = String::new();
        let mut previous_reserved: Option<&Token> = None;

        for (index, token) in tokens.iter().enumerate() {
            if token.is_whitespace() {
                continue;
            }
            tracing::trace!(
                kind = %token.kind,
                text = %token.text,
                depth = self.indentation.depth(),
                "layout token"
            );

            match token.kind {
                TokenKind::LineComment => self.line_comment(token, &mut out),
                TokenKind::BlockComment => self.block_comment(token, &mut out),
                TokenKind::ReservedToplevel => {
                    self.toplevel_word(token, &mut out);
                    previous_reserved = Some(token);
                }
                TokenKind::ReservedNewline => {
                    self.newline_word(token, &mut out);
                    previous_reserved = Some(token);
                }
                TokenKind::Reserved => {
                    out.push_str(&self.reserved_text(token));
                    out.push(' ');
                    previous_reserved = Some(token);
                }
                TokenKind::OpenParen => {
                    let previous = index.checked_sub(1).and_then(|i| tokens.get(i));
                    self.open_paren(tokens, index, previous, &mut out);
                }
                TokenKind::CloseParen => self.close_paren(token, &mut out),
                TokenKind::Placeholder => {
                    out.push_str(self.params.get(token));
                    out.push(' ');
                }
                _ => match token.text.as_str() {
                    "," => self.comma(previous_reserved, &mut out),
                    ":" => with_space_after(&token.text, &mut out),
                    "." => without_spaces(&token.text, &mut out),
                    ";" => self.query_separator(&mut out),
                    text => {
                        out.push_str(text);
                        out.push(' ');
                    }
                },
            }
        }

        out.trim().to_string()
    }

    fn line_comment(&self, token: &Token, out: &mut String) {
        out.push_str(token.text.trim_end());
        self.add_newline(out);
    }

    fn block_comment(&self, token: &Token, out: &mut String) {
        self.add_newline(out);
        out.push_str(&self.indent_comment(&token.text));
        self.add_newline(out);
    }

    fn toplevel_word(&mut self, token: &Token, out: &mut String) {
        self.indentation.decrease_top_level();
        self.add_newline(out);
        self.indentation.increase_top_level();
        out.push_str(&self.reserved_text(token));
        self.add_newline(out);
    }

    fn newline_word(&self, token: &Token, out: &mut String) {
        self.add_newline(out);
        out.push_str(&self.reserved_text(token));
        out.push(' ');
    }

    fn open_paren(
        &mut self,
        tokens: &[Token],
        index: usize,
        previous: Option<&Token>,
        out: &mut String,
    ) {
        let keeps_space = previous.is_some_and(|t| {
            matches!(
                t.kind,
                TokenKind::Whitespace | TokenKind::OpenParen | TokenKind::LineComment
            )
        });
        if !keeps_space {
            trim_spaces_end(out);
        }
        out.push_str(&self.options.reserved_word_case.apply(&tokens[index].text));

        self.inline_block.begin_if_possible(tokens, index);
        if !self.inline_block.is_active() {
            self.indentation.increase_block_level();
            self.add_newline(out);
        }
    }

    fn close_paren(&mut self, token: &Token, out: &mut String) {
        let text = self.options.reserved_word_case.apply(&token.text);
        if self.inline_block.is_active() {
            self.inline_block.end();
            with_space_after(&text, out);
        } else {
            self.indentation.decrease_block_level();
            self.add_newline(out);
            out.push_str(&text);
            out.push(' ');
        }
    }

    fn comma(&self, previous_reserved: Option<&Token>, out: &mut String) {
        with_space_after(",", out);
        let after_limit = previous_reserved.is_some_and(|t| t.text.eq_ignore_ascii_case("LIMIT"));
        if !self.inline_block.is_active() && !after_limit {
            self.add_newline(out);
        }
    }

    fn query_separator(&mut self, out: &mut String) {
        self.indentation.reset();
        trim_spaces_end(out);
        out.push(';');
        for _ in 0..self.options.lines_between_queries.max(1) {
            out.push('\n');
        }
    }

    /// Case-normalized text with internal whitespace runs collapsed.
    fn reserved_text(&self, token: &Token) -> String {
        let text = token.text.split_whitespace().collect::<Vec<_>>().join(" ");
        self.options.reserved_word_case.apply(&text)
    }

    /// Shift block comment continuation lines to the current depth.
    ///
    /// Lines already at that depth are left alone so reformatting is
    /// stable; blank lines stay empty.
    fn indent_comment(&self, comment: &str) -> String {
        let indent = self.indentation.indent();
        let mut lines = comment.lines();
        let mut result = lines.next().unwrap_or_default().trim_end().to_string();
        for line in lines {
            result.push('\n');
            let line = line.trim_end();
            if !line.is_empty() && !line.starts_with(&indent) {
                result.push_str(&indent);
            }
            result.push_str(line);
        }
        result
    }

    /// Break the line and indent to the current depth. Consecutive line
    /// breaks already in the output are kept.
    fn add_newline(&self, out: &mut String) {
        trim_spaces_end(out);
        if !out.ends_with('\n') {
            out.push('\n');
        }
        out.push_str(&self.indentation.indent());
    }
}

fn trim_spaces_end(out: &mut String) {
    let len = out.trim_end_matches([' ', '\t']).len();
    out.truncate(len);
}

fn with_space_after(text: &str, out: &mut String) {
    trim_spaces_end(out);
    out.push_str(text);
    out.push(' ');
}

fn without_spaces(text: &str, out: &mut String) {
    trim_spaces_end(out);
    out.push_str(text);
}
