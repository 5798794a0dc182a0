//! PL/SQL dialect behavior.

use sqlfmt::{
    format, format_with_language, tokenize, Dialect, FormatOptions, Token, TokenKind,
};

fn fmt(query: &str) -> String {
    format(query, Dialect::PlSql, &FormatOptions::default()).unwrap()
}

#[test]
fn test_special_word_chars() {
    let tokens = tokenize("SELECT v$session.sid", Dialect::PlSql).unwrap();
    assert_eq!(tokens[2], Token::new(TokenKind::Word, "v$session.sid"));
    assert_eq!(
        fmt("SELECT v$session.sid, emp#no FROM dual"),
        "SELECT\n  v$session.sid,\n  emp#no\nFROM\n  dual"
    );
}

#[test]
fn test_hierarchical_query() {
    assert_eq!(
        fmt("SELECT id FROM t START WITH pid IS NULL CONNECT BY PRIOR id = pid"),
        "SELECT\n  id\nFROM\n  t\nSTART WITH\n  pid IS NULL\nCONNECT BY\n  PRIOR id = pid"
    );
}

#[test]
fn test_begin_end_block() {
    assert_eq!(fmt("BEGIN NULL; END;"), "BEGIN\n  NULL;\nEND;");
}

#[test]
fn test_case_expression() {
    let options = FormatOptions::default().uppercase();
    let formatted = format(
        "select case when qty = 1 then 'x' else 'y' end from dual",
        Dialect::PlSql,
        &options,
    )
    .unwrap();
    assert_eq!(
        formatted,
        "SELECT\n  CASE\n    WHEN qty = 1 THEN 'x'\n    ELSE 'y'\n  END\nFROM\n  dual"
    );
}

#[test]
fn test_national_strings() {
    let tokens = tokenize("N'text'", Dialect::PlSql).unwrap();
    assert_eq!(tokens, vec![Token::new(TokenKind::String, "N'text'")]);
}

#[test]
fn test_only_dashes_start_line_comments() {
    let tokens = tokenize("-- c\n# x", Dialect::PlSql).unwrap();
    assert_eq!(tokens[0], Token::new(TokenKind::LineComment, "-- c\n"));
    assert!(tokens[1..].iter().all(|t| t.kind != TokenKind::LineComment));
}

#[test]
fn test_by_language_name() {
    let options = FormatOptions::default().with_param("bind", "1");
    let formatted = format_with_language("SELECT :bind FROM dual", "pl/sql", &options).unwrap();
    assert_eq!(formatted, "SELECT\n  1\nFROM\n  dual");
}
