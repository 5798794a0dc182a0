//! DB2 dialect behavior.

use sqlfmt::{format, tokenize, Dialect, FormatOptions, Token, TokenKind};

fn fmt(query: &str) -> String {
    format(query, Dialect::Db2, &FormatOptions::default()).unwrap()
}

#[test]
fn test_fetch_first_is_toplevel() {
    assert_eq!(
        fmt("SELECT col1 FROM tbl ORDER BY col2 DESC FETCH FIRST 20 ROWS ONLY;"),
        "SELECT\n  col1\nFROM\n  tbl\nORDER BY\n  col2 DESC\nFETCH FIRST\n  20 ROWS ONLY;"
    );
}

#[test]
fn test_only_dashes_start_line_comments() {
    assert_eq!(
        fmt("SELECT col FROM\n-- This is a comment\nMyTable;\n"),
        "SELECT\n  col\nFROM\n  -- This is a comment\n  MyTable;"
    );

    let tokens = tokenize("SELECT # not a comment", Dialect::Db2).unwrap();
    assert!(tokens.iter().all(|t| t.kind != TokenKind::LineComment));
}

#[test]
fn test_at_and_hash_in_identifiers() {
    assert_eq!(
        fmt("SELECT col#1, @col2 FROM tbl\n"),
        "SELECT\n  col#1,\n  @col2\nFROM\n  tbl"
    );
}

#[test]
fn test_colon_variables() {
    assert_eq!(fmt("SELECT :variable;"), "SELECT\n  :variable;");
}

#[test]
fn test_colon_variables_replaced() {
    let options = FormatOptions::default().with_param("variable", "\"variable value\"");
    let formatted = format("SELECT :variable", Dialect::Db2, &options).unwrap();
    assert_eq!(formatted, "SELECT\n  \"variable value\"");
}

#[test]
fn test_tokenizes_simple_select() {
    let tokens = tokenize("SELECT col FROM\nMyTable;\n", Dialect::Db2).unwrap();
    let json = serde_json::to_value(&tokens).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            {"type": "reserved-toplevel", "value": "SELECT"},
            {"type": "whitespace", "value": " "},
            {"type": "word", "value": "col"},
            {"type": "whitespace", "value": " "},
            {"type": "reserved-toplevel", "value": "FROM"},
            {"type": "whitespace", "value": "\n"},
            {"type": "tablename", "value": "MyTable"},
            {"type": "operator", "value": ";"},
            {"type": "whitespace", "value": "\n"}
        ])
    );
}

#[test]
fn test_no_word_parens() {
    // CASE is an ordinary reserved word here, so the expression stays on one line
    let tokens = tokenize("CASE", Dialect::Db2).unwrap();
    assert_ne!(tokens[0].kind, TokenKind::OpenParen);
    assert_eq!(
        fmt("SELECT CASE WHEN a THEN b END FROM t"),
        "SELECT\n  CASE WHEN a THEN b END\nFROM\n  t"
    );
}

#[test]
fn test_indexed_placeholder() {
    let tokens = tokenize("WHERE a = ?", Dialect::Db2).unwrap();
    assert_eq!(tokens.last(), Some(&Token::placeholder("?", "")));
}
