//! SQL query operations for the expenses store
//!
//! Every function runs in its own transaction: writes take an immediate
//! (read-write) lock, reads use a deferred (read-only) one.
//! For application-level operations, use the `ExpenseRepository` API.

use rusqlite::{Connection, TransactionBehavior, params};
use chrono::{DateTime, SecondsFormat, Utc};
use crate::error::{TrackerError, Result};
use super::models::Expense;

/// Format a DateTime the way records store it (`2024-12-05T09:30:00.000Z`)
pub fn format_timestamp(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse a stored timestamp
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Get current timestamp formatted for storage
pub fn now_timestamp() -> String {
    format_timestamp(&Utc::now())
}

/// Insert a new expense and return its storage-assigned id
pub fn insert_expense(conn: &mut Connection, item: &str, amount: f64, date: &str) -> Result<i64> {
    let tx = conn
        .transaction_with_behavior(TransactionBehavior::Immediate)
        .map_err(TrackerError::write)?;

    tx.execute(
        "INSERT INTO expenses (item, amount, date) VALUES (?, ?, ?)",
        params![item, amount, date],
    ).map_err(TrackerError::write)?;
    let id = tx.last_insert_rowid();

    tx.commit().map_err(TrackerError::write)?;
    Ok(id)
}

/// Read every stored expense in key order
pub fn get_all_expenses(conn: &Connection) -> Result<Vec<Expense>> {
    let tx = conn.unchecked_transaction()?;

    let expenses = {
        let mut stmt = tx.prepare("SELECT id, item, amount, date FROM expenses ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            Ok(Expense {
                id: row.get(0)?,
                item: row.get(1)?,
                amount: row.get(2)?,
                date: row.get(3)?,
            })
        })?;
        rows.collect::<std::result::Result<Vec<_>, _>>()?
    };

    tx.commit()?;
    Ok(expenses)
}

/// Get a single expense by id
pub fn get_expense(conn: &Connection, id: i64) -> Result<Option<Expense>> {
    let result = conn.query_row(
        "SELECT id, item, amount, date FROM expenses WHERE id = ?",
        [id],
        |row| {
            Ok(Expense {
                id: row.get(0)?,
                item: row.get(1)?,
                amount: row.get(2)?,
                date: row.get(3)?,
            })
        },
    );

    match result {
        Ok(expense) => Ok(Some(expense)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Delete an expense. Returns whether a record was removed; a missing id is not an error.
pub fn delete_expense(conn: &mut Connection, id: i64) -> Result<bool> {
    let tx = conn
        .transaction_with_behavior(TransactionBehavior::Immediate)
        .map_err(TrackerError::write)?;

    let removed = tx
        .execute("DELETE FROM expenses WHERE id = ?", [id])
        .map_err(TrackerError::write)?;

    tx.commit().map_err(TrackerError::write)?;
    Ok(removed > 0)
}

/// Count stored expenses
pub fn count_expenses(conn: &Connection) -> Result<usize> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM expenses", [], |row| row.get(0))?;
    Ok(count as usize)
}
