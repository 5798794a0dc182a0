//! Standard SQL dialect behavior.

use sqlfmt::{format, tokenize, Dialect, FormatOptions, Token, TokenKind};

fn fmt(query: &str) -> String {
    format(query, Dialect::StandardSql, &FormatOptions::default()).unwrap()
}

#[test]
fn test_joins_break_at_current_depth() {
    assert_eq!(
        fmt("SELECT * FROM a LEFT JOIN b ON a.id = b.id"),
        "SELECT\n  *\nFROM\n  a\n  LEFT JOIN b ON a.id = b.id"
    );
}

#[test]
fn test_cross_apply() {
    assert_eq!(
        fmt("SELECT a FROM t CROSS APPLY f(t.x)"),
        "SELECT\n  a\nFROM\n  t\n  CROSS APPLY f(t.x)"
    );
}

#[test]
fn test_quoted_identifiers_and_strings() {
    assert_eq!(
        fmt("SELECT [col name], `other`, N'nat' FROM [my table]"),
        "SELECT\n  [col name],\n  `other`,\n  N'nat'\nFROM\n  [my table]"
    );
}

#[test]
fn test_string_escapes() {
    let tokens = tokenize(r#"'a''b' 'c\'d' "e""f" `g``h` [i]]j]"#, Dialect::StandardSql).unwrap();
    let strings: Vec<&str> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::String)
        .map(|t| t.text.as_str())
        .collect();
    assert_eq!(
        strings,
        vec!["'a''b'", r"'c\'d'", r#""e""f""#, "`g``h`", "[i]]j]"]
    );
}

#[test]
fn test_union_all() {
    assert_eq!(
        fmt("SELECT a FROM t UNION ALL SELECT b FROM u"),
        "SELECT\n  a\nFROM\n  t\nUNION ALL\nSELECT\n  b\nFROM\n  u"
    );
}

#[test]
fn test_at_and_colon_placeholders() {
    let tokens = tokenize("@a :b", Dialect::StandardSql).unwrap();
    assert_eq!(tokens[0], Token::placeholder("@a", "a"));
    assert_eq!(tokens[2], Token::placeholder(":b", "b"));
}

#[test]
fn test_hash_comment() {
    assert_eq!(fmt("SELECT a # c\nFROM t"), "SELECT\n  a # c\nFROM\n  t");
}

#[test]
fn test_group_by_having_order_by() {
    assert_eq!(
        fmt("SELECT a, count(*) FROM t GROUP BY a HAVING count(*) > 1 ORDER BY a"),
        "SELECT\n  a,\n  count(*)\nFROM\n  t\nGROUP BY\n  a\nHAVING\n  count(*) > 1\nORDER BY\n  a"
    );
}
