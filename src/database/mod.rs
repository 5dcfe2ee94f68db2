//! Database layer for Expense Tracker
//!
//! Handles SQLite storage operations including:
//! - Opening the store and creating the schema on first use
//! - Version upgrades through `PRAGMA user_version`
//! - Single-transaction create, list and delete of expenses

pub mod models;
pub mod schema;
pub mod connection;
pub mod migrations;
pub mod queries;

pub use connection::Database;
pub use models::*;
