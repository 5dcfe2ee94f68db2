//! Expense repository
//!
//! Create, list and delete operations over an owned storage handle. Each call
//! runs in its own transaction and nothing is cached between calls.

use std::path::Path;
use chrono::{DateTime, Utc};
use log::{debug, error};
use crate::error::Result;
use crate::database::{Database, Expense, queries};
use crate::database::queries::format_timestamp;

/// Repository over the expenses store
pub struct ExpenseRepository {
    db: Database,
}

impl ExpenseRepository {
    /// Wrap an already opened storage handle
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Open the store at `path`
    pub fn open(path: &Path) -> Result<Self> {
        Ok(Self::new(Database::open(path)?))
    }

    /// Open an in-memory store
    pub fn in_memory() -> Result<Self> {
        Ok(Self::new(Database::open_in_memory()?))
    }

    /// Underlying storage handle
    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Create an expense dated now
    pub fn create(&mut self, item: &str, amount: f64) -> Result<Expense> {
        self.create_at(item, amount, Utc::now())
    }

    /// Create an expense with an explicit creation time
    pub fn create_at(&mut self, item: &str, amount: f64, date: DateTime<Utc>) -> Result<Expense> {
        let date = format_timestamp(&date);
        let conn = self.db.connection_mut()?;

        let id = queries::insert_expense(conn, item, amount, &date)
            .inspect_err(|e| error!("Error adding expense: {}", e))?;
        debug!("Added expense {} ({}: {})", id, item, amount);

        Ok(Expense {
            id,
            item: item.to_string(),
            amount,
            date,
        })
    }

    /// Every stored expense, in key order
    pub fn list_all(&self) -> Result<Vec<Expense>> {
        let conn = self.db.connection()?;
        queries::get_all_expenses(conn)
            .inspect_err(|e| error!("Error reading expenses: {}", e))
    }

    /// Get an expense by id
    pub fn get(&self, id: i64) -> Result<Option<Expense>> {
        queries::get_expense(self.db.connection()?, id)
    }

    /// Delete an expense; deleting an absent id succeeds without changes
    pub fn delete(&mut self, id: i64) -> Result<()> {
        let conn = self.db.connection_mut()?;

        let removed = queries::delete_expense(conn, id)
            .inspect_err(|e| error!("Error deleting expense: {}", e))?;
        if !removed {
            debug!("Delete of expense {} matched nothing", id);
        }

        Ok(())
    }

    /// Number of stored expenses
    pub fn count(&self) -> Result<usize> {
        queries::count_expenses(self.db.connection()?)
    }
}
