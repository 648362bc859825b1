// src/db/migrations.rs
//
// Database schema initialization and migrations
//
// PRINCIPLES:
// - Explicit schema versions
// - No automatic migrations
// - Idempotent operations

use rusqlite::Connection;

use crate::error::{PersistenceError, PersistenceResult};

/// Current schema version
/// Increment this when adding migrations
const CURRENT_SCHEMA_VERSION: i32 = 1;

/// Initialize the database schema
///
/// Safe to call multiple times (idempotent).
pub fn initialize_database(conn: &Connection) -> PersistenceResult<()> {
    let current_version = get_schema_version(conn)?;

    if current_version == 0 {
        apply_initial_schema(conn)?;
        set_schema_version(conn, CURRENT_SCHEMA_VERSION)?;
        log::info!("Initialized shelter database at schema version {}", CURRENT_SCHEMA_VERSION);
    } else if current_version < CURRENT_SCHEMA_VERSION {
        return Err(PersistenceError::Corrupt(format!(
            "Schema version {} is outdated. Expected {}. Manual migration required.",
            current_version, CURRENT_SCHEMA_VERSION
        )));
    } else if current_version > CURRENT_SCHEMA_VERSION {
        return Err(PersistenceError::Corrupt(format!(
            "Schema version {} is newer than supported {}. Update the application.",
            current_version, CURRENT_SCHEMA_VERSION
        )));
    }

    Ok(())
}

/// Get current schema version
/// Returns 0 if schema_version table doesn't exist (fresh database)
fn get_schema_version(conn: &Connection) -> PersistenceResult<i32> {
    let table_exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
        [],
        |row| row.get(0),
    )?;

    if !table_exists {
        return Ok(0);
    }

    let version: Option<i32> =
        conn.query_row("SELECT MAX(version) FROM schema_version", [], |row| row.get(0))?;

    Ok(version.unwrap_or(0))
}

fn set_schema_version(conn: &Connection, version: i32) -> PersistenceResult<()> {
    conn.execute(
        "INSERT OR IGNORE INTO schema_version (version, applied_at) VALUES (?1, datetime('now'))",
        [version],
    )?;
    Ok(())
}

/// Apply initial schema (version 1)
fn apply_initial_schema(conn: &Connection) -> PersistenceResult<()> {
    let schema = include_str!("../../schema.sql");
    conn.execute_batch(schema)?;
    Ok(())
}

/// Verify database integrity
///
/// Runs SQLite's integrity check.
pub fn verify_database_integrity(conn: &Connection) -> PersistenceResult<()> {
    let result: String = conn.query_row("PRAGMA integrity_check", [], |row| row.get(0))?;

    if result != "ok" {
        return Err(PersistenceError::Corrupt(format!(
            "Database integrity check failed: {}",
            result
        )));
    }

    Ok(())
}

/// Get database statistics
pub fn get_database_stats(conn: &Connection) -> PersistenceResult<DatabaseStats> {
    let page_count: i64 = conn.query_row("PRAGMA page_count", [], |row| row.get(0))?;
    let page_size: i64 = conn.query_row("PRAGMA page_size", [], |row| row.get(0))?;

    let count_list = |list: &str| -> PersistenceResult<i64> {
        Ok(conn.query_row("SELECT COUNT(*) FROM dogs WHERE list = ?1", [list], |row| {
            row.get(0)
        })?)
    };

    Ok(DatabaseStats {
        size_bytes: page_count * page_size,
        page_count,
        page_size,
        shelter_count: count_list("shelter")?,
        adopted_count: count_list("adopted")?,
    })
}

/// Database statistics
#[derive(Debug)]
pub struct DatabaseStats {
    pub size_bytes: i64,
    pub page_count: i64,
    pub page_size: i64,
    pub shelter_count: i64,
    pub adopted_count: i64,
}
