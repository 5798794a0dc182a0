//! Couchbase N1QL dialect.
//!
//! N1QL queries JSON documents, so besides parentheses it nests on `[`
//! and `{`. Parameters are `$name` or `$1`; there is no `?` form.

use once_cell::sync::Lazy;

use super::helpers;
use super::{DialectProfile, StringType};

pub(super) static PROFILE: Lazy<DialectProfile> = Lazy::new(|| {
    DialectProfile::new("n1ql")
        .reserved_words(RESERVED_WORDS)
        .reserved_toplevel_words(TOPLEVEL_WORDS)
        .reserved_newline_words(NEWLINE_WORDS)
        .table_name_prefix_words(helpers::TABLE_NAME_PREFIX_WORDS)
        .string_types(&[
            StringType::DoubleQuote,
            StringType::SingleQuote,
            StringType::Backtick,
        ])
        .parens(&["(", "[", "{"], &[")", "]", "}"])
        .named_placeholder_types(&["$"])
        .line_comment_types(&["#", "--"])
});

const NEWLINE_WORDS: &[&str] = &[
    "AND",
    "INNER JOIN",
    "JOIN",
    "LEFT JOIN",
    "LEFT OUTER JOIN",
    "OR",
    "OUTER JOIN",
    "RIGHT JOIN",
    "RIGHT OUTER JOIN",
    "XOR",
];

const TOPLEVEL_WORDS: &[&str] = &[
    "DELETE FROM",
    "EXCEPT ALL",
    "EXCEPT",
    "EXPLAIN DELETE FROM",
    "EXPLAIN UPDATE",
    "EXPLAIN UPSERT",
    "FROM",
    "GROUP BY",
    "HAVING",
    "INFER",
    "INSERT INTO",
    "INTERSECT ALL",
    "INTERSECT",
    "LET",
    "LIMIT",
    "MERGE",
    "NEST",
    "ORDER BY",
    "PREPARE",
    "SELECT",
    "SET CURRENT SCHEMA",
    "SET SCHEMA",
    "SET",
    "UNION ALL",
    "UNION",
    "UNNEST",
    "UPDATE",
    "UPSERT",
    "USE KEYS",
    "VALUES",
    "WHERE",
];

const RESERVED_WORDS: &[&str] = &[
    "ALL",
    "ALTER",
    "ANALYZE",
    "AND",
    "ANY",
    "ARRAY",
    "AS",
    "ASC",
    "BEGIN",
    "BETWEEN",
    "BINARY",
    "BOOLEAN",
    "BREAK",
    "BUCKET",
    "BUILD",
    "BY",
    "CALL",
    "CASE",
    "CAST",
    "CLUSTER",
    "COLLATE",
    "COLLECTION",
    "COMMIT",
    "CONNECT",
    "CONTINUE",
    "CORRELATE",
    "COVER",
    "CREATE",
    "DATABASE",
    "DATASET",
    "DATASTORE",
    "DECLARE",
    "DECREMENT",
    "DELETE",
    "DERIVED",
    "DESC",
    "DESCRIBE",
    "DISTINCT",
    "DO",
    "DROP",
    "EACH",
    "ELEMENT",
    "ELSE",
    "END",
    "EVERY",
    "EXCEPT",
    "EXCLUDE",
    "EXECUTE",
    "EXISTS",
    "EXPLAIN",
    "FALSE",
    "FETCH",
    "FIRST",
    "FLATTEN",
    "FOR",
    "FORCE",
    "FROM",
    "FUNCTION",
    "GRANT",
    "GROUP",
    "GSI",
    "HAVING",
    "IF",
    "IGNORE",
    "ILIKE",
    "IN",
    "INCLUDE",
    "INCREMENT",
    "INDEX",
    "INFER",
    "INLINE",
    "INNER",
    "INSERT",
    "INTERSECT",
    "INTO",
    "IS",
    "JOIN",
    "KEY",
    "KEYS",
    "KEYSPACE",
    "KNOWN",
    "LAST",
    "LEFT",
    "LET",
    "LETTING",
    "LIKE",
    "LIMIT",
    "LSM",
    "MAP",
    "MAPPING",
    "MATCHED",
    "MATERIALIZED",
    "MERGE",
    "MISSING",
    "NAMESPACE",
    "NEST",
    "NOT",
    "NULL",
    "NUMBER",
    "OBJECT",
    "OFFSET",
    "ON",
    "OPTION",
    "OR",
    "ORDER",
    "OUTER",
    "OVER",
    "PARSE",
    "PARTITION",
    "PASSWORD",
    "PATH",
    "POOL",
    "PREPARE",
    "PRIMARY",
    "PRIVATE",
    "PRIVILEGE",
    "PROCEDURE",
    "PUBLIC",
    "RAW",
    "REALM",
    "REDUCE",
    "RENAME",
    "RETURN",
    "RETURNING",
    "REVOKE",
    "RIGHT",
    "ROLE",
    "ROLLBACK",
    "SATISFIES",
    "SCHEMA",
    "SELECT",
    "SELF",
    "SEMI",
    "SET",
    "SHOW",
    "SOME",
    "START",
    "STATISTICS",
    "STRING",
    "SYSTEM",
    "THEN",
    "TO",
    "TRANSACTION",
    "TRIGGER",
    "TRUE",
    "TRUNCATE",
    "UNDER",
    "UNION",
    "UNIQUE",
    "UNKNOWN",
    "UNNEST",
    "UNSET",
    "UPDATE",
    "UPSERT",
    "USE",
    "USER",
    "USING",
    "VALIDATE",
    "VALUE",
    "VALUED",
    "VALUES",
    "VIA",
    "VIEW",
    "WHEN",
    "WHERE",
    "WHILE",
    "WITH",
    "WITHIN",
    "WORK",
    "XOR",
];
