//! Database schema definitions

pub const CREATE_TABLES: &str = r#"
    CREATE TABLE IF NOT EXISTS kv_store (
        key TEXT PRIMARY KEY,
        value BLOB NOT NULL,
        updated TEXT NOT NULL
    );

    CREATE INDEX IF NOT EXISTS idx_kv_updated ON kv_store(updated);
"#;
