//! Database schema definitions

/// SQL to create the expenses store.
///
/// `AUTOINCREMENT` keeps ids from being reused after the highest row is deleted.
pub const CREATE_EXPENSES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS expenses (
    id              INTEGER PRIMARY KEY AUTOINCREMENT,
    item            TEXT NOT NULL,
    amount          REAL NOT NULL,
    date            TEXT NOT NULL
)
"#;

/// SQL to check whether the expenses store exists
pub const STORE_EXISTS: &str =
    "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?";

/// All table creation statements in order
pub const CREATE_ALL_TABLES: &[&str] = &[CREATE_EXPENSES_TABLE];
