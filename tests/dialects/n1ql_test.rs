//! N1QL dialect behavior.

use sqlfmt::{format, tokenize, Dialect, FormatOptions, Token, TokenKind};

fn fmt(query: &str) -> String {
    format(query, Dialect::N1ql, &FormatOptions::default()).unwrap()
}

#[test]
fn test_dollar_placeholders() {
    let tokens = tokenize("SELECT $name, $1", Dialect::N1ql).unwrap();
    let placeholders: Vec<&Token> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Placeholder)
        .collect();
    assert_eq!(
        placeholders,
        vec![&Token::placeholder("$name", "name"), &Token::placeholder("$1", "1")]
    );
}

#[test]
fn test_dollar_placeholders_replaced() {
    let options = FormatOptions::default()
        .with_param("id", "'doc::1'")
        .with_param("1", "10");
    let formatted = format(
        "SELECT * FROM bucket WHERE id = $id LIMIT $1",
        Dialect::N1ql,
        &options,
    )
    .unwrap();
    assert_eq!(
        formatted,
        "SELECT\n  *\nFROM\n  bucket\nWHERE\n  id = 'doc::1'\nLIMIT\n  10"
    );
}

#[test]
fn test_question_mark_is_not_placeholder() {
    let tokens = tokenize("?", Dialect::N1ql).unwrap();
    assert_eq!(tokens, vec![Token::new(TokenKind::Operator, "?")]);
}

#[test]
fn test_array_literal_inline() {
    assert_eq!(fmt("SELECT [1, 2, 3] AS arr"), "SELECT\n  [1, 2, 3] AS arr");
}

#[test]
fn test_object_literal_inline() {
    assert_eq!(
        fmt("SELECT {\"a\": 1, \"b\": 2} AS obj"),
        "SELECT\n  {\"a\": 1, \"b\": 2} AS obj"
    );
}

#[test]
fn test_use_keys() {
    assert_eq!(
        fmt("SELECT * FROM b USE KEYS ['k1']"),
        "SELECT\n  *\nFROM\n  b\nUSE KEYS\n  ['k1']"
    );
}

#[test]
fn test_hash_comment() {
    assert_eq!(fmt("SELECT a # note\nFROM t"), "SELECT\n  a # note\nFROM\n  t");
}

#[test]
fn test_no_bracket_strings() {
    let tokens = tokenize("[x]", Dialect::N1ql).unwrap();
    assert_eq!(tokens[0], Token::new(TokenKind::OpenParen, "["));
}
