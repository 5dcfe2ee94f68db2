//! Schema versioning
//!
//! The schema version is kept in `PRAGMA user_version`. A fresh file reports
//! version 0; every open upgrades it to [`CURRENT_VERSION`].

use log::info;
use rusqlite::Connection;
use crate::error::{TrackerError, Result};
use crate::STORE_NAME;
use super::schema;

/// Current schema version
pub const CURRENT_VERSION: u32 = crate::DB_VERSION;

/// Upgrade the schema to the latest version
pub fn upgrade_database(conn: &Connection, current_version: u32) -> Result<()> {
    if !is_version_compatible(current_version) {
        return Err(TrackerError::InvalidVersion(current_version));
    }

    if current_version < 1 {
        upgrade_to_v1(conn)?;
    }

    if current_version != CURRENT_VERSION {
        set_database_version(conn, CURRENT_VERSION)?;
        info!("Upgraded schema from v{} to v{}", current_version, CURRENT_VERSION);
    }

    Ok(())
}

/// Version 1 introduces the expenses store
fn upgrade_to_v1(conn: &Connection) -> Result<()> {
    if store_exists(conn, STORE_NAME)? {
        return Ok(());
    }

    for sql in schema::CREATE_ALL_TABLES {
        conn.execute(sql, []).map_err(TrackerError::open)?;
    }
    info!("Created object store '{}'", STORE_NAME);

    Ok(())
}

/// Check whether a table with the given name exists
pub fn store_exists(conn: &Connection, name: &str) -> Result<bool> {
    let count: i64 = conn
        .query_row(schema::STORE_EXISTS, [name], |row| row.get(0))
        .map_err(TrackerError::open)?;
    Ok(count > 0)
}

/// Check if a stored schema version can be opened
pub fn is_version_compatible(version: u32) -> bool {
    version <= CURRENT_VERSION
}

/// Read the schema version
pub fn get_database_version(conn: &Connection) -> Result<u32> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(TrackerError::open)
}

/// Write the schema version
pub fn set_database_version(conn: &Connection, version: u32) -> Result<()> {
    conn.execute_batch(&format!("PRAGMA user_version = {}", version))
        .map_err(TrackerError::open)
}
