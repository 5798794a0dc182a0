//! Detection of parenthesized groups short enough to stay on one line.

use crate::sql::token::{Token, TokenKind};

/// Longest group, in characters, that is kept on one line.
pub const INLINE_MAX_LENGTH: usize = 50;

/// Nesting counter for inline paren groups.
///
/// Once a group is inline, every group nested in it is inline too.
#[derive(Debug, Clone, Default)]
pub struct InlineBlock {
    level: usize,
}

impl InlineBlock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called on an open paren at `index`. Enters inline mode when the
    /// group starting there qualifies.
    pub fn begin_if_possible(&mut self, tokens: &[Token], index: usize) {
        if self.level == 0 && is_inline_block(tokens, index) {
            self.level = 1;
        } else if self.level > 0 {
            self.level += 1;
        } else {
            self.level = 0;
        }
    }

    /// Called on the close paren of an inline group.
    pub fn end(&mut self) {
        self.level = self.level.saturating_sub(1);
    }

    pub fn is_active(&self) -> bool {
        self.level > 0
    }
}

/// Scan from the open paren at `index` to its matching close paren.
fn is_inline_block(tokens: &[Token], index: usize) -> bool {
    let mut length = 0;
    let mut level = 0usize;

    for token in tokens.iter().skip(index) {
        length += token.char_len();
        if length > INLINE_MAX_LENGTH {
            return false;
        }

        match token.kind {
            TokenKind::OpenParen => level += 1,
            TokenKind::CloseParen => {
                level = level.saturating_sub(1);
                if level == 0 {
                    return true;
                }
            }
            _ => {}
        }

        if breaks_line(token) {
            return false;
        }
    }
    false
}

fn breaks_line(token: &Token) -> bool {
    matches!(
        token.kind,
        TokenKind::ReservedToplevel
            | TokenKind::ReservedNewline
            | TokenKind::LineComment
            | TokenKind::BlockComment
    ) || token.text == ";"
}
