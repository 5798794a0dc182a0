//! Shared word lists for the built-in dialect profiles.
//!
//! Dialects compose these with their own lists so the common SQL core is
//! spelled out once.

/// Copy a static word list into owned strings.
pub fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_string()).collect()
}

/// Concatenate several static lists, preserving order.
pub fn concat(lists: &[&[&str]]) -> Vec<String> {
    lists.iter().flat_map(|l| owned(l)).collect()
}

// =============================================================================
// Table-name detection
// =============================================================================

/// Words after which a bare identifier is classified as a table name.
///
/// Matched against the start of the token two positions back, so
/// multi-word tokens such as `DELETE FROM` need their own entries.
pub const TABLE_NAME_PREFIX_WORDS: &[&str] = &[
    "FROM",
    "DELETE FROM",
    "INSERT INTO",
    "INTO",
    "UPDATE",
    "JOIN",
    "INNER JOIN",
    "LEFT JOIN",
    "LEFT OUTER JOIN",
    "RIGHT JOIN",
    "RIGHT OUTER JOIN",
    "OUTER JOIN",
    "CROSS JOIN",
    "ALTER TABLE",
    "TABLE",
];

// =============================================================================
// Newline words
// =============================================================================

/// Join keywords that start a new line in every dialect.
pub const JOIN_WORDS: &[&str] = &[
    "CROSS JOIN",
    "INNER JOIN",
    "JOIN",
    "LEFT JOIN",
    "LEFT OUTER JOIN",
    "OUTER JOIN",
    "RIGHT JOIN",
    "RIGHT OUTER JOIN",
];

/// `CROSS APPLY` / `OUTER APPLY` (T-SQL style lateral joins).
pub const APPLY_WORDS: &[&str] = &["CROSS APPLY", "OUTER APPLY"];

// =============================================================================
// Toplevel words
// =============================================================================

/// Clause introducers shared by the SQL-family dialects.
pub const COMMON_TOPLEVEL_WORDS: &[&str] = &[
    "ADD",
    "AFTER",
    "ALTER COLUMN",
    "ALTER TABLE",
    "DELETE FROM",
    "EXCEPT",
    "FETCH FIRST",
    "FROM",
    "GROUP BY",
    "GO",
    "HAVING",
    "INSERT INTO",
    "INSERT",
    "INTERSECT",
    "LIMIT",
    "MODIFY",
    "ORDER BY",
    "SELECT",
    "SET CURRENT SCHEMA",
    "SET SCHEMA",
    "SET",
    "UNION ALL",
    "UNION",
    "UPDATE",
    "VALUES",
    "WHERE",
];
