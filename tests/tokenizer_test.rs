//! Integration tests for the tokenizer.
//!
//! Covers the stream-level guarantees (lossless, always terminates) and
//! the context rules that depend on previously emitted tokens.

use sqlfmt::token::concat;
use sqlfmt::{tokenize, tokenize_with_language, Dialect, DialectProfile, Token, TokenKind, Tokenizer};

fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|t| t.kind).collect()
}

fn non_blank(tokens: &[Token]) -> Vec<(TokenKind, &str)> {
    tokens
        .iter()
        .filter(|t| !t.is_whitespace())
        .map(|t| (t.kind, t.text.as_str()))
        .collect()
}

const SAMPLES: &[&str] = &[
    "",
    " ",
    "SELECT * FROM t",
    "select a.b, c.from, count(*) from dbo.users u left join x on u.id = x.id",
    "SELECT 'it''s', \"q\"\"uote\", N'nat', `tick`, [brack]]et] FROM t",
    "SELECT 'unterminated",
    "/* unterminated block",
    "-- only a comment",
    "# hash comment\nSELECT 1",
    "SELECT a->>'k', b::int, c || d FROM t WHERE e !~~* f AND g <> h",
    "SELECT ?, ?1, :name, @var, $1, @\"quoted name\" FROM t",
    "INSERT INTO t (a, b) VALUES (1, -2.5), (0x1F, 0b101);",
    "CASE WHEN a THEN b ELSE c END",
    "SELECT naïve, 日本 FROM données",
    "SELECT {\"a\": [1, 2]} FROM `bucket`",
    "\t\r\n  SELECT\r\n1;;\n",
    "§±∆ ~ ^ % & |",
];

// ============================================================================
// Stream guarantees
// ============================================================================

#[test]
fn test_lossless_for_every_dialect() {
    for dialect in Dialect::ALL {
        for sample in SAMPLES {
            let tokens = tokenize(sample, dialect).unwrap();
            assert_eq!(concat(&tokens), *sample, "{} / {:?}", dialect, sample);
        }
    }
}

#[test]
fn test_every_token_consumes_input() {
    for dialect in Dialect::ALL {
        for sample in SAMPLES {
            let tokens = tokenize(sample, dialect).unwrap();
            assert!(tokens.len() <= sample.chars().count());
            assert!(tokens.iter().all(|t| !t.text.is_empty()));
        }
    }
}

#[test]
fn test_empty_input_has_no_tokens() {
    assert!(tokenize("", Dialect::StandardSql).unwrap().is_empty());
}

#[test]
fn test_unknown_characters_become_operators() {
    let tokens = tokenize("§", Dialect::StandardSql).unwrap();
    assert_eq!(tokens, vec![Token::new(TokenKind::Operator, "§")]);
}

#[test]
fn test_unknown_language() {
    let err = tokenize_with_language("SELECT 1", "blah").unwrap_err();
    assert!(err.is_unsupported_dialect());
    assert_eq!(err.to_string(), "Unsupported SQL dialect: blah");
}

// ============================================================================
// Context rules
// ============================================================================

#[test]
fn test_reserved_word_after_dot_is_word() {
    let tokens = tokenize("SELECT tbl.from FROM tbl", Dialect::StandardSql).unwrap();
    assert_eq!(
        non_blank(&tokens),
        vec![
            (TokenKind::ReservedToplevel, "SELECT"),
            (TokenKind::Word, "tbl"),
            (TokenKind::Operator, "."),
            (TokenKind::Word, "from"),
            (TokenKind::ReservedToplevel, "FROM"),
            (TokenKind::TableName, "tbl"),
        ]
    );
}

#[test]
fn test_table_name_after_prefix_word() {
    let tokens = tokenize("SELECT col FROM\nMyTable;\n", Dialect::Db2).unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::new(TokenKind::ReservedToplevel, "SELECT"),
            Token::new(TokenKind::Whitespace, " "),
            Token::new(TokenKind::Word, "col"),
            Token::new(TokenKind::Whitespace, " "),
            Token::new(TokenKind::ReservedToplevel, "FROM"),
            Token::new(TokenKind::Whitespace, "\n"),
            Token::new(TokenKind::TableName, "MyTable"),
            Token::new(TokenKind::Operator, ";"),
            Token::new(TokenKind::Whitespace, "\n"),
        ]
    );
}

#[test]
fn test_table_name_needs_whitespace_after_prefix() {
    // a comment between FROM and the name breaks the lookback
    let tokens = tokenize("SELECT a FROM -- c\nusers", Dialect::StandardSql).unwrap();
    assert_eq!(tokens.last(), Some(&Token::new(TokenKind::Word, "users")));
}

#[test]
fn test_qualified_and_bracketed_table_names() {
    let tokens = tokenize("UPDATE dbo.users SET a = 1", Dialect::Db2).unwrap();
    assert_eq!(tokens[2], Token::new(TokenKind::TableName, "dbo.users"));

    let tokens = tokenize("SELECT 1 FROM `my-table`", Dialect::N1ql).unwrap();
    // backtick strings win over the delimited table-name form
    assert_eq!(
        tokens.last(),
        Some(&Token::new(TokenKind::String, "`my-table`"))
    );
}

#[test]
fn test_join_prefixes_table_name() {
    let tokens = tokenize("SELECT * FROM a LEFT OUTER JOIN b ON a.id = b.id", Dialect::StandardSql)
        .unwrap();
    let tables: Vec<&str> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::TableName)
        .map(|t| t.text.as_str())
        .collect();
    assert_eq!(tables, vec!["a", "b"]);
}

#[test]
fn test_multi_word_reserved_spans_whitespace() {
    let tokens = tokenize("SELECT a GROUP\n  BY a", Dialect::StandardSql).unwrap();
    assert!(tokens.contains(&Token::new(TokenKind::ReservedToplevel, "GROUP\n  BY")));
}

#[test]
fn test_reserved_words_are_whole_words() {
    let tokens = tokenize("SELECT selected, order_id FROM t", Dialect::StandardSql).unwrap();
    assert_eq!(
        kinds(&tokens[..5]),
        vec![
            TokenKind::ReservedToplevel,
            TokenKind::Whitespace,
            TokenKind::Word,
            TokenKind::Operator,
            TokenKind::Whitespace,
        ]
    );
    assert_eq!(tokens[5], Token::new(TokenKind::Word, "order_id"));
}

#[test]
fn test_case_insensitive_reserved_words() {
    let tokens = tokenize("select 1 uNiOn AlL select 2", Dialect::StandardSql).unwrap();
    assert!(tokens.contains(&Token::new(TokenKind::ReservedToplevel, "uNiOn AlL")));
}

// ============================================================================
// Lexemes
// ============================================================================

#[test]
fn test_numbers() {
    let tokens = tokenize("SELECT 42, 3.14, - 7, 0xFF, 0b10", Dialect::StandardSql).unwrap();
    let numbers: Vec<&str> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Number)
        .map(|t| t.text.as_str())
        .collect();
    assert_eq!(numbers, vec!["42", "3.14", "- 7", "0xFF", "0b10"]);
}

#[test]
fn test_multi_character_operators() {
    let tokens = tokenize("a->>b != c::d", Dialect::StandardSql).unwrap();
    let operators: Vec<&str> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Operator)
        .map(|t| t.text.as_str())
        .collect();
    assert_eq!(operators, vec!["->>", "!=", "::"]);
}

#[test]
fn test_unterminated_string_runs_to_end() {
    let tokens = tokenize("SELECT 'abc\ndef", Dialect::StandardSql).unwrap();
    assert_eq!(tokens.last(), Some(&Token::new(TokenKind::String, "'abc\ndef")));
}

#[test]
fn test_unterminated_block_comment_runs_to_end() {
    let tokens = tokenize("SELECT /* open\ncomment", Dialect::StandardSql).unwrap();
    assert_eq!(
        tokens.last(),
        Some(&Token::new(TokenKind::BlockComment, "/* open\ncomment"))
    );
}

#[test]
fn test_line_comment_keeps_newline() {
    let tokens = tokenize("-- note\nSELECT", Dialect::StandardSql).unwrap();
    assert_eq!(tokens[0], Token::new(TokenKind::LineComment, "-- note\n"));
    assert_eq!(tokens[1], Token::new(TokenKind::ReservedToplevel, "SELECT"));
}

#[test]
fn test_word_parens() {
    let tokens = tokenize("case when a then b end", Dialect::StandardSql).unwrap();
    assert_eq!(tokens[0], Token::new(TokenKind::OpenParen, "case"));
    assert_eq!(tokens.last(), Some(&Token::new(TokenKind::CloseParen, "end")));
}

#[test]
fn test_unicode_words() {
    let tokens = tokenize("SELECT naïve", Dialect::StandardSql).unwrap();
    assert_eq!(tokens[2], Token::new(TokenKind::Word, "naïve"));
}

// ============================================================================
// Custom profiles
// ============================================================================

#[test]
fn test_custom_profile() {
    let profile = DialectProfile::new("mini")
        .reserved_toplevel_words(&["FIND"])
        .line_comment_types(&["//"])
        .named_placeholder_types(&["%"]);
    let tokenizer = Tokenizer::new(&profile).unwrap();
    let tokens = tokenizer.tokenize("FIND %who // trailing");
    assert_eq!(
        non_blank(&tokens),
        vec![
            (TokenKind::ReservedToplevel, "FIND"),
            (TokenKind::Placeholder, "%who"),
            (TokenKind::LineComment, "// trailing"),
        ]
    );
}

#[test]
fn test_json_output_shape() {
    let tokens = tokenize("SELECT :id", Dialect::Db2).unwrap();
    let json = serde_json::to_value(&tokens).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            {"type": "reserved-toplevel", "value": "SELECT"},
            {"type": "whitespace", "value": " "},
            {"type": "placeholder", "value": ":id", "key": "id"}
        ])
    );
}
