//! Standard SQL dialect - the default profile.
//!
//! Covers the common ANSI core plus the MySQL/T-SQL flavored vocabulary
//! that turns up in everyday queries: `#` comments, `[bracket]` and
//! `` `backtick` `` identifiers, `@name` / `:name` parameters.

use once_cell::sync::Lazy;

use super::helpers;
use super::{DialectProfile, StringType};

pub(super) static PROFILE: Lazy<DialectProfile> = Lazy::new(|| {
    let mut profile = DialectProfile::new("sql")
        .reserved_words(RESERVED_WORDS)
        .table_name_prefix_words(helpers::TABLE_NAME_PREFIX_WORDS)
        .string_types(&[
            StringType::DoubleQuote,
            StringType::National,
            StringType::SingleQuote,
            StringType::Backtick,
            StringType::Bracket,
        ])
        .parens(&["(", "CASE"], &[")", "END"])
        .indexed_placeholder_types(&["?"])
        .named_placeholder_types(&["@", ":"])
        .line_comment_types(&["#", "--"]);
    profile.reserved_toplevel_words = helpers::owned(helpers::COMMON_TOPLEVEL_WORDS);
    profile.reserved_newline_words = helpers::concat(&[
        &["AND"],
        helpers::APPLY_WORDS,
        helpers::JOIN_WORDS,
        &["ELSE", "OR", "WHEN", "XOR"],
    ]);
    profile
});

const RESERVED_WORDS: &[&str] = &[
    "ACCESSIBLE",
    "ACTION",
    "AGAINST",
    "AGGREGATE",
    "ALGORITHM",
    "ALL",
    "ALTER",
    "ANALYSE",
    "ANALYZE",
    "AS",
    "ASC",
    "AUTOCOMMIT",
    "AUTO_INCREMENT",
    "BACKUP",
    "BEGIN",
    "BETWEEN",
    "BINLOG",
    "BOTH",
    "CASCADE",
    "CASE",
    "CHANGE",
    "CHANGED",
    "CHARACTER SET",
    "CHARSET",
    "CHECK",
    "CHECKSUM",
    "COLLATE",
    "COLLATION",
    "COLUMN",
    "COLUMNS",
    "COMMENT",
    "COMMIT",
    "COMMITTED",
    "COMPRESSED",
    "CONCURRENT",
    "CONSTRAINT",
    "CONTAINS",
    "CONVERT",
    "CREATE",
    "CROSS",
    "CURRENT_TIMESTAMP",
    "DATABASE",
    "DATABASES",
    "DAY",
    "DAY_HOUR",
    "DAY_MINUTE",
    "DAY_SECOND",
    "DEFAULT",
    "DEFINER",
    "DELAYED",
    "DELETE",
    "DESC",
    "DESCRIBE",
    "DETERMINISTIC",
    "DISTINCT",
    "DISTINCTROW",
    "DIV",
    "DO",
    "DROP",
    "DUMPFILE",
    "DUPLICATE",
    "DYNAMIC",
    "ELSE",
    "ENCLOSED",
    "END",
    "ENGINE",
    "ENGINES",
    "ENGINE_TYPE",
    "ESCAPE",
    "ESCAPED",
    "EVENTS",
    "EXEC",
    "EXECUTE",
    "EXISTS",
    "EXPLAIN",
    "EXTENDED",
    "FAST",
    "FETCH",
    "FIELDS",
    "FILE",
    "FIRST",
    "FIXED",
    "FLUSH",
    "FOR",
    "FORCE",
    "FOREIGN",
    "FULL",
    "FULLTEXT",
    "FUNCTION",
    "GLOBAL",
    "GRANT",
    "GRANTS",
    "GROUP_CONCAT",
    "HEAP",
    "HIGH_PRIORITY",
    "HOSTS",
    "HOUR",
    "HOUR_MINUTE",
    "HOUR_SECOND",
    "IDENTIFIED",
    "IF",
    "IFNULL",
    "IGNORE",
    "IN",
    "INDEX",
    "INDEXES",
    "INFILE",
    "INSERT",
    "INSERT_ID",
    "INSERT_METHOD",
    "INTERVAL",
    "INTO",
    "INVOKER",
    "IS",
    "ISOLATION",
    "KEY",
    "KEYS",
    "KILL",
    "LAST_INSERT_ID",
    "LEADING",
    "LEVEL",
    "LIKE",
    "LINEAR",
    "LINES",
    "LOAD",
    "LOCAL",
    "LOCK",
    "LOCKS",
    "LOGS",
    "LOW_PRIORITY",
    "MASTER",
    "MATCH",
    "MAX_ROWS",
    "MEDIUM",
    "MERGE",
    "MINUTE",
    "MINUTE_SECOND",
    "MIN_ROWS",
    "MODE",
    "MODIFY",
    "MONTH",
    "MYISAM",
    "NAMES",
    "NATURAL",
    "NOT",
    "NULL",
    "OFFSET",
    "ON DELETE",
    "ON UPDATE",
    "ON",
    "ONLY",
    "OPEN",
    "OPTIMIZE",
    "OPTION",
    "OPTIONALLY",
    "OUTFILE",
    "PACK_KEYS",
    "PAGE",
    "PARTIAL",
    "PARTITION",
    "PARTITIONS",
    "PASSWORD",
    "PRIMARY",
    "PRIVILEGES",
    "PROCEDURE",
    "PROCESS",
    "PROCESSLIST",
    "PURGE",
    "QUICK",
    "RANGE",
    "READ",
    "READ_ONLY",
    "READ_WRITE",
    "REFERENCES",
    "REGEXP",
    "RELOAD",
    "RENAME",
    "REPAIR",
    "REPEATABLE",
    "REPLACE",
    "REPLICATION",
    "RESET",
    "RESTORE",
    "RESTRICT",
    "RETURN",
    "RETURNS",
    "REVOKE",
    "RLIKE",
    "ROLLBACK",
    "ROW",
    "ROWS",
    "ROW_FORMAT",
    "SECOND",
    "SECURITY",
    "SEPARATOR",
    "SERIALIZABLE",
    "SESSION",
    "SHARE",
    "SHOW",
    "SHUTDOWN",
    "SLAVE",
    "SONAME",
    "SOUNDS",
    "SQL",
    "SQL_CACHE",
    "SQL_CALC_FOUND_ROWS",
    "SQL_NO_CACHE",
    "START",
    "STARTING",
    "STATUS",
    "STOP",
    "STORAGE",
    "STRAIGHT_JOIN",
    "STRING",
    "STRIPED",
    "SUPER",
    "TABLE",
    "TABLES",
    "TEMPORARY",
    "TERMINATED",
    "THEN",
    "TO",
    "TRAILING",
    "TRANSACTIONAL",
    "TRUE",
    "TRUNCATE",
    "TYPE",
    "TYPES",
    "UNCOMMITTED",
    "UNIQUE",
    "UNLOCK",
    "UNSIGNED",
    "USAGE",
    "USE",
    "USING",
    "VARIABLES",
    "VIEW",
    "WHEN",
    "WITH",
    "WORK",
    "WRITE",
    "YEAR_MONTH",
];
