//! libSQL-backed key-value store

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use super::KeyValueStore;
use crate::db::Database;
use crate::error::Result;

/// Key-value store persisted in the `kv_store` table
#[derive(Clone)]
pub struct LibSqlStore {
    db: Arc<Database>,
}

impl LibSqlStore {
    /// Wrap an open database
    pub fn new(db: Database) -> Self {
        Self { db: Arc::new(db) }
    }

    /// Open (or create) the database file at `path`
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(Self::new(Database::open(path).await?))
    }

    pub async fn open_in_memory() -> Result<Self> {
        Ok(Self::new(Database::open_in_memory().await?))
    }
}

impl KeyValueStore for LibSqlStore {
    async fn get(&self, keys: &[&str]) -> Result<HashMap<String, String>> {
        let conn = self.db.connection();
        let mut values = HashMap::with_capacity(keys.len());

        for key in keys {
            let mut rows = conn
                .query("SELECT value FROM kv_store WHERE key = ?", [*key])
                .await?;
            if let Some(row) = rows.next().await? {
                let value: String = row.get(0)?;
                values.insert((*key).to_string(), value);
            }
        }

        Ok(values)
    }

    async fn set(&self, entries: &[(&str, &str)]) -> Result<()> {
        let conn = self.db.connection();
        for (key, value) in entries {
            conn.execute(
                "INSERT OR REPLACE INTO kv_store (key, value) VALUES (?, ?)",
                [*key, *value],
            )
            .await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[tokio::test(flavor = "multi_thread")]
    async fn test_missing_keys_are_absent() {
        let store = LibSqlStore::open_in_memory().await.unwrap();
        let values = store.get(&["theme"]).await.unwrap();
        assert!(values.is_empty());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_set_overwrites() {
        let store = LibSqlStore::open_in_memory().await.unwrap();
        store.set(&[("theme", "light")]).await.unwrap();
        store
            .set(&[("theme", "dark"), ("markdownText", "draft")])
            .await
            .unwrap();

        let values = store.get(&["theme", "markdownText"]).await.unwrap();
        assert_eq!(values.get("theme").map(String::as_str), Some("dark"));
        assert_eq!(values.get("markdownText").map(String::as_str), Some("draft"));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_values_survive_reopen() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("nested").join("mdpad.db");

        {
            let store = LibSqlStore::open(&path).await.unwrap();
            store.set(&[("markdownText", "keep me")]).await.unwrap();
        }

        let store = LibSqlStore::open(&path).await.unwrap();
        let values = store.get(&["markdownText"]).await.unwrap();
        assert_eq!(values["markdownText"], "keep me");
    }
}
