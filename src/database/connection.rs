//! Database connection management

use std::path::{Path, PathBuf};
use log::{error, info};
use rusqlite::Connection;
use crate::error::{TrackerError, Result};
use super::migrations;

/// Storage handle wrapping the SQLite connection.
///
/// Created once and handed to the repository; there is no process-wide handle.
pub struct Database {
    /// Path to the database file (`None` for in-memory stores)
    path: Option<PathBuf>,
    /// SQLite connection
    conn: Option<Connection>,
}

impl Database {
    /// Open the database at the specified path, creating the expenses store if absent
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path).map_err(|e| {
            error!("Database error: failed to open {}: {}", path.display(), e);
            TrackerError::open(e)
        })?;

        let db = Self::init(conn, Some(path.to_path_buf()))?;
        info!("Opened {} at {}", crate::DB_NAME, path.display());
        Ok(db)
    }

    /// Open a fresh in-memory database
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|e| {
            error!("Database error: failed to open in-memory store: {}", e);
            TrackerError::open(e)
        })?;

        Self::init(conn, None)
    }

    fn init(conn: Connection, path: Option<PathBuf>) -> Result<Self> {
        migrations::get_database_version(&conn)
            .and_then(|version| migrations::upgrade_database(&conn, version))
            .inspect_err(|e| error!("Database error: {}", e))?;

        Ok(Self {
            path,
            conn: Some(conn),
        })
    }

    /// Get a reference to the connection
    pub fn connection(&self) -> Result<&Connection> {
        self.conn.as_ref().ok_or(TrackerError::NotOpen)
    }

    /// Get a mutable reference to the connection
    pub fn connection_mut(&mut self) -> Result<&mut Connection> {
        self.conn.as_mut().ok_or(TrackerError::NotOpen)
    }

    /// Get the database path
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Current schema version
    pub fn version(&self) -> Result<u32> {
        migrations::get_database_version(self.connection()?)
    }

    /// Close the database connection
    pub fn close(&mut self) {
        self.conn = None;
    }

    /// Check if database is open
    pub fn is_open(&self) -> bool {
        self.conn.is_some()
    }
}

impl Drop for Database {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tempfile::TempDir;

    static LOGGED_ERRORS: Mutex<Vec<String>> = Mutex::new(Vec::new());

    struct CaptureLogger;

    impl log::Log for CaptureLogger {
        fn enabled(&self, metadata: &log::Metadata) -> bool {
            metadata.level() <= log::Level::Error
        }

        fn log(&self, record: &log::Record) {
            if self.enabled(record.metadata()) {
                LOGGED_ERRORS.lock().unwrap().push(record.args().to_string());
            }
        }

        fn flush(&self) {}
    }

    static LOGGER: CaptureLogger = CaptureLogger;

    fn capture_errors() {
        // Another test in this binary may have installed it already
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(log::LevelFilter::Error);
    }

    #[test]
    fn test_open_creates_store() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.sqlite3");

        let db = Database::open(&db_path).unwrap();

        assert!(db.is_open());
        assert_eq!(db.path(), Some(db_path.as_path()));
        assert_eq!(db.version().unwrap(), crate::DB_VERSION);
        assert!(migrations::store_exists(db.connection().unwrap(), crate::STORE_NAME).unwrap());
    }

    #[test]
    fn test_reopen_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.sqlite3");

        {
            let db = Database::open(&db_path).unwrap();
            db.connection().unwrap().execute(
                "INSERT INTO expenses (item, amount, date) VALUES (?, ?, ?)",
                rusqlite::params!["Lunch", 250.0, "2024-12-05T12:00:00.000Z"],
            ).unwrap();
        }

        let db = Database::open(&db_path).unwrap();
        let count: i64 = db.connection().unwrap()
            .query_row("SELECT COUNT(*) FROM expenses", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
        assert_eq!(db.version().unwrap(), crate::DB_VERSION);
    }

    #[test]
    fn test_open_rejects_newer_schema() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.sqlite3");

        {
            let conn = Connection::open(&db_path).unwrap();
            conn.execute_batch("PRAGMA user_version = 9").unwrap();
        }

        assert!(matches!(Database::open(&db_path), Err(TrackerError::InvalidVersion(9))));
    }

    #[test]
    fn test_open_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("missing").join("test.sqlite3");

        let err = Database::open(&db_path).err().unwrap();
        assert!(matches!(err, TrackerError::StorageOpen(_)));
    }

    #[test]
    fn test_open_garbage_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.sqlite3");
        std::fs::write(&db_path, vec![b'A'; 4096]).unwrap();
        capture_errors();

        let err = Database::open(&db_path).err().unwrap();
        assert!(matches!(err, TrackerError::StorageOpen(_)));

        let logged = LOGGED_ERRORS.lock().unwrap();
        assert!(logged.iter().any(|line| line.starts_with("Database error:") && line.contains(&err.to_string())));
    }

    #[test]
    fn test_closed_connection() {
        let mut db = Database::open_in_memory().unwrap();
        assert!(db.path().is_none());

        db.close();
        assert!(!db.is_open());
        assert!(matches!(db.connection(), Err(TrackerError::NotOpen)));
    }
}
