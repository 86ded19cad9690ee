//! Key-value persistence for small preference blobs

pub mod memory;
pub mod queries;
pub mod schema;
pub mod sqlite;

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Storage failures
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("store lock poisoned")]
    Poisoned,
}

/// Byte-oriented key-value store scoped by string keys.
///
/// Writes replace the whole value stored under a key.
pub trait KvStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    fn set(&self, key: &str, value: &[u8]) -> Result<(), StoreError>;
}

/// Read a JSON collection stored under `key`.
///
/// A missing key yields the default value. A value that does not parse is
/// logged and also treated as the default.
pub fn read_json<T>(store: &dyn KvStore, key: &str) -> Result<T, StoreError>
where
    T: DeserializeOwned + Default,
{
    let Some(bytes) = store.get(key)? else {
        return Ok(T::default());
    };

    match serde_json::from_slice(&bytes) {
        Ok(value) => Ok(value),
        Err(e) => {
            tracing::warn!(key, error = %e, "Discarding malformed stored value");
            Ok(T::default())
        }
    }
}

/// Serialize `value` as JSON and overwrite whatever is stored under `key`.
pub fn write_json<T>(store: &dyn KvStore, key: &str, value: &T) -> Result<(), StoreError>
where
    T: Serialize + ?Sized,
{
    let bytes = serde_json::to_vec(value)?;
    store.set(key, &bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_reads_as_default() {
        let store = MemoryStore::new();
        let value: Vec<String> = read_json(&store, "nothing").unwrap();
        assert!(value.is_empty());
    }

    #[test]
    fn malformed_json_reads_as_default() {
        let store = MemoryStore::new();
        store.set("favoriteIps", b"{not json").unwrap();

        let value: Vec<String> = read_json(&store, "favoriteIps").unwrap();
        assert!(value.is_empty());
    }

    #[test]
    fn json_written_is_read_back() {
        let store = MemoryStore::new();
        write_json(&store, "k", &vec!["a", "b"]).unwrap();

        let value: Vec<String> = read_json(&store, "k").unwrap();
        assert_eq!(value, vec!["a".to_string(), "b".to_string()]);
    }
}
