//! SQL DDL for initializing the response storage.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema with:
/// - `id` INTEGER PRIMARY KEY AUTOINCREMENT
/// - Five free-form text fields, nullable (a field missing from the
///   submitted form is stored as NULL rather than rejected)
/// - `happiness` INTEGER by declared affinity only; the submitted text is
///   bound verbatim, so non-numeric input lands as TEXT in this column
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS responses (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NULL,
    hobby TEXT NULL,
    education TEXT NULL,
    interest TEXT NULL,
    job TEXT NULL,
    happiness INTEGER NULL
);
"#;
