// src/db/connection.rs
//
// Database connection management
//
// PRINCIPLES:
// - Explicit connection pooling
// - No hidden connection creation
// - Clear error propagation

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use std::path::Path;

use crate::error::{PersistenceError, PersistenceResult};

/// Type alias for connection pool
pub type ConnectionPool = Pool<SqliteConnectionManager>;

/// Type alias for a pooled connection
pub type PooledConn = PooledConnection<SqliteConnectionManager>;

/// Create a connection pool over the database file at `db_path`
///
/// Pool configuration:
/// - Max 4 connections (the shelter has a single logical writer)
/// - SQLite in WAL mode
/// - Busy timeout set to avoid immediate errors
pub fn create_connection_pool(db_path: &Path) -> PersistenceResult<ConnectionPool> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let manager = SqliteConnectionManager::file(db_path).with_init(|conn| {
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;
             PRAGMA busy_timeout = 5000;",
        )?;
        Ok(())
    });

    Pool::builder()
        .max_size(4)
        .build(manager)
        .map_err(|e| PersistenceError::Pool(format!("Failed to create connection pool: {}", e)))
}

/// Create a pool over a private in-memory database.
///
/// The pool holds a single connection, otherwise every connection would
/// see its own empty database.
pub fn create_memory_pool() -> PersistenceResult<ConnectionPool> {
    Pool::builder()
        .max_size(1)
        .build(SqliteConnectionManager::memory())
        .map_err(|e| PersistenceError::Pool(format!("Failed to create memory pool: {}", e)))
}

/// Get a connection from the pool with a descriptive error
pub fn get_connection(pool: &ConnectionPool) -> PersistenceResult<PooledConn> {
    pool.get()
        .map_err(|e| PersistenceError::Pool(format!("Failed to get database connection: {}", e)))
}
