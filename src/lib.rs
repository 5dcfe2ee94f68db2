//! # Expense Tracker Core
//!
//! A local, single-user expense ledger that keeps records in an embedded
//! SQLite store and renders the current month's expenses with a running total.
//!
//! ## Features
//!
//! - Auto-incrementing expense store with versioned schema
//! - One transaction per create/list/delete operation
//! - Current-month filtering in the local calendar
//! - Full-replace HTML rendering onto a pluggable surface
//! - Form validation with user-facing alerts
//!
//! ## Example
//!
//! ```no_run
//! use expcore::{ExpenseTracker, ExpenseForm, HtmlSurface, TrackerConfig};
//!
//! let mut surface = HtmlSurface::default();
//! let mut tracker = ExpenseTracker::open(&TrackerConfig::default(), &mut surface).unwrap();
//!
//! tracker.submit(&mut surface, &ExpenseForm::new("Lunch", "250"));
//! println!("{}", surface.total_text());
//! ```

pub mod database;
pub mod business;
pub mod utils;
pub mod config;
pub mod error;

// Re-export main types
pub use error::{TrackerError, ErrorCategory, Result};
pub use config::TrackerConfig;
pub use database::{Database, Expense};
pub use business::{
    ExpenseRepository, MonthFilter, MonthView, ExpenseRow, ExpenseSurface, HtmlSurface,
    ExpenseForm, ValidExpense, ExpenseTracker,
};

/// Logical database name
pub const DB_NAME: &str = "expensesDB";

/// Name of the expense collection (table)
pub const STORE_NAME: &str = "expenses";

/// Schema version
pub const DB_VERSION: u32 = 1;

/// Default database filename
pub const DATABASE_FILENAME: &str = "expensesDB.sqlite3";

/// Currency label prefixed to every displayed amount
pub const CURRENCY_LABEL: &str = "KES";

/// Message shown in place of the list when the month has no expenses
pub const EMPTY_STATE_MESSAGE: &str = "No expenses for this month yet. Add your first expense above!";

/// Alert shown when a submission fails validation
pub const INVALID_INPUT_MESSAGE: &str = "Please enter a valid item and amount.";
