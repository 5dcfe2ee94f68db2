//! Error types for Expense Tracker Core

use thiserror::Error;

/// Main error type for tracker operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// The store could not be opened or initialized
    #[error("Storage open error: {0}")]
    StorageOpen(String),

    /// A read-write transaction failed
    #[error("Write error: {0}")]
    Write(String),

    /// A read-only transaction failed
    #[error("Read error: {0}")]
    Read(String),

    /// User input was rejected before reaching storage
    #[error("Validation error: {0}")]
    Validation(String),

    /// Stored schema version is newer than this library understands
    #[error("Invalid database version: {0}")]
    InvalidVersion(u32),

    /// Storage handle used after close
    #[error("Database not open")]
    NotOpen,

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error taxonomy used to decide what the user gets to see
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Opening the store failed
    StorageOpen,
    /// Transaction or write failure
    Write,
    /// Transaction or read failure
    Read,
    /// Invalid user input
    Validation,
}

impl TrackerError {
    /// Category of this error
    pub fn category(&self) -> ErrorCategory {
        match self {
            TrackerError::StorageOpen(_)
            | TrackerError::InvalidVersion(_)
            | TrackerError::Config(_)
            | TrackerError::Io(_) => ErrorCategory::StorageOpen,
            TrackerError::Write(_) => ErrorCategory::Write,
            TrackerError::Read(_) | TrackerError::NotOpen => ErrorCategory::Read,
            TrackerError::Validation(_) => ErrorCategory::Validation,
        }
    }

    /// Only validation failures are surfaced to the user
    pub fn is_user_facing(&self) -> bool {
        self.category() == ErrorCategory::Validation
    }
}

/// Unqualified SQLite failures are treated as read failures; write paths
/// map their errors explicitly with [`TrackerError::write`].
impl From<rusqlite::Error> for TrackerError {
    fn from(err: rusqlite::Error) -> Self {
        TrackerError::Read(err.to_string())
    }
}

impl TrackerError {
    /// Wrap a storage error raised inside a read-write transaction
    pub fn write(err: rusqlite::Error) -> Self {
        TrackerError::Write(err.to_string())
    }

    /// Wrap a storage error raised while opening or migrating the store
    pub fn open(err: rusqlite::Error) -> Self {
        TrackerError::StorageOpen(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        TrackerError::Config(err.to_string())
    }
}

/// Result type alias for tracker operations
pub type Result<T> = std::result::Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TrackerError::StorageOpen("/path/to/db".to_string());
        assert!(err.to_string().contains("/path/to/db"));

        let err = TrackerError::NotOpen;
        assert_eq!(err.to_string(), "Database not open");

        let err = TrackerError::InvalidVersion(7);
        assert!(err.to_string().contains('7'));

        let err = TrackerError::Validation(crate::INVALID_INPUT_MESSAGE.to_string());
        assert!(err.to_string().contains("valid item and amount"));
    }

    #[test]
    fn test_error_category() {
        assert_eq!(TrackerError::StorageOpen(String::new()).category(), ErrorCategory::StorageOpen);
        assert_eq!(TrackerError::Write(String::new()).category(), ErrorCategory::Write);
        assert_eq!(TrackerError::Read(String::new()).category(), ErrorCategory::Read);
        assert_eq!(TrackerError::NotOpen.category(), ErrorCategory::Read);
        assert!(TrackerError::Validation(String::new()).is_user_facing());
        assert!(!TrackerError::Write(String::new()).is_user_facing());
    }

    #[test]
    fn test_error_from_rusqlite() {
        let err: TrackerError = rusqlite::Error::QueryReturnedNoRows.into();
        assert_eq!(err.category(), ErrorCategory::Read);

        let err = TrackerError::write(rusqlite::Error::QueryReturnedNoRows);
        assert_eq!(err.category(), ErrorCategory::Write);

        let err = TrackerError::open(rusqlite::Error::InvalidQuery);
        match err {
            TrackerError::StorageOpen(msg) => assert!(!msg.is_empty()),
            _ => panic!("Expected StorageOpen"),
        }
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: TrackerError = json_err.into();
        match err {
            TrackerError::Config(msg) => assert!(!msg.is_empty()),
            _ => panic!("Expected Config"),
        }
    }
}
