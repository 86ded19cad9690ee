//! SQL statements for the key-value table

pub const SELECT_VALUE: &str = "SELECT value FROM kv_store WHERE key = ?1";

pub const UPSERT_VALUE: &str = r#"
    INSERT INTO kv_store (key, value, updated)
    VALUES (?1, ?2, ?3)
    ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated = excluded.updated
"#;

pub const COUNT_KEYS: &str = "SELECT COUNT(*) FROM kv_store";
