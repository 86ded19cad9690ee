//! SQLite-backed key-value store

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use std::sync::{Mutex, MutexGuard};

use super::{queries, schema, KvStore, StoreError};

/// SQLite database wrapper holding the key-value table
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open or create database at the specified path
    pub fn open(path: &str) -> Result<Self, StoreError> {
        let conn = if path == ":memory:" {
            Connection::open_in_memory()?
        } else {
            // Create parent directory if needed
            if let Some(parent) = std::path::Path::new(path).parent() {
                std::fs::create_dir_all(parent)?;
            }
            Connection::open(path)?
        };

        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA synchronous=NORMAL;")?;
        conn.execute_batch(schema::CREATE_TABLES)?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Number of keys currently stored
    pub fn key_count(&self) -> Result<i64, StoreError> {
        let conn = self.lock()?;
        let count: i64 = conn.query_row(queries::COUNT_KEYS, [], |row| row.get(0))?;
        Ok(count)
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn.lock().map_err(|_| StoreError::Poisoned)
    }
}

impl KvStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let conn = self.lock()?;
        let value = conn
            .query_row(queries::SELECT_VALUE, params![key], |row| row.get::<_, Vec<u8>>(0))
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        let conn = self.lock()?;
        conn.execute(
            queries::UPSERT_VALUE,
            params![key, value, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }
}
