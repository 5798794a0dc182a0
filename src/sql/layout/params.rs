//! Placeholder substitution.

use crate::sql::options::QueryParams;
use crate::sql::token::Token;

/// Resolves placeholder tokens against [`QueryParams`].
#[derive(Debug)]
pub struct Params<'a> {
    params: &'a QueryParams,
    /// Next positional slot for key-less placeholders.
    index: usize,
}

impl<'a> Params<'a> {
    pub fn new(params: &'a QueryParams) -> Self {
        Self { params, index: 0 }
    }

    /// Replacement text for a placeholder, or its original text when no
    /// value is supplied.
    pub fn get<'t>(&mut self, token: &'t Token) -> &'t str
    where
        'a: 't,
    {
        let params: &'a QueryParams = self.params;
        let value = match token.key.as_deref() {
            Some(key) if !key.is_empty() => params.get(key),
            _ => {
                let slot = self.index.to_string();
                self.index += 1;
                params.get(&slot)
            }
        };
        value.unwrap_or(&token.text)
    }
}
