//! Runtime options for the layout engine.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Case applied to reserved words on output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservedWordCase {
    Upper,
    Lower,
    /// Leave reserved words as written.
    #[default]
    Unchanged,
}

impl ReservedWordCase {
    pub fn apply(&self, text: &str) -> String {
        match self {
            ReservedWordCase::Upper => text.to_uppercase(),
            ReservedWordCase::Lower => text.to_lowercase(),
            ReservedWordCase::Unchanged => text.to_string(),
        }
    }
}

/// Placeholder substitutions, keyed by placeholder key.
///
/// Named placeholders (`:id`, `?3`) are looked up by their key. Bare
/// indexed placeholders (`?`) are looked up positionally as `"0"`, `"1"`, ...
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryParams(BTreeMap<String, String>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Positional values for bare `?` placeholders, in order.
    pub fn positional<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        values
            .into_iter()
            .enumerate()
            .map(|(i, v)| (i.to_string(), v.into()))
            .collect()
    }

    /// Add or replace a value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Options for one format call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// One level of indentation.
    pub indent: String,
    pub reserved_word_case: ReservedWordCase,
    pub params: QueryParams,
    /// Line breaks emitted after a `;` statement separator.
    pub lines_between_queries: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            indent: "  ".to_string(),
            reserved_word_case: ReservedWordCase::Unchanged,
            params: QueryParams::new(),
            lines_between_queries: 1,
        }
    }
}

impl FormatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    pub fn with_reserved_word_case(mut self, case: ReservedWordCase) -> Self {
        self.reserved_word_case = case;
        self
    }

    pub fn uppercase(self) -> Self {
        self.with_reserved_word_case(ReservedWordCase::Upper)
    }

    pub fn lowercase(self) -> Self {
        self.with_reserved_word_case(ReservedWordCase::Lower)
    }

    pub fn with_params(mut self, params: QueryParams) -> Self {
        self.params = params;
        self
    }

    /// Add a single placeholder substitution.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key, value);
        self
    }

    /// Clamped to at least one line break.
    pub fn with_lines_between_queries(mut self, lines: usize) -> Self {
        self.lines_between_queries = lines.max(1);
        self
    }
}
