//! Persistence for the note text and theme
//!
//! [`KeyValueStore`] is the backend contract (`get(keys)` / `set(entries)`).
//! [`EditorStore`] is the two-slot adapter the session uses on top of it.

mod libsql_store;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

pub use libsql_store::LibSqlStore;

use crate::error::Result;
use crate::models::ThemeMode;

/// Storage key holding the note text
pub const TEXT_KEY: &str = "markdownText";

/// Storage key holding the theme mode name
pub const THEME_KEY: &str = "theme";

/// Trait for key-value storage backends (async)
#[allow(async_fn_in_trait)]
pub trait KeyValueStore {
    /// Read the given keys; absent keys are missing from the returned map
    async fn get(&self, keys: &[&str]) -> Result<HashMap<String, String>>;

    /// Write all entries
    async fn set(&self, entries: &[(&str, &str)]) -> Result<()>;
}

/// Volatile store, shared between clones
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of `key`, for inspection
    #[must_use]
    pub fn peek(&self, key: &str) -> Option<String> {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }
}

impl KeyValueStore for MemoryStore {
    async fn get(&self, keys: &[&str]) -> Result<HashMap<String, String>> {
        let values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(keys
            .iter()
            .filter_map(|key| values.get(*key).map(|v| ((*key).to_string(), v.clone())))
            .collect())
    }

    async fn set(&self, entries: &[(&str, &str)]) -> Result<()> {
        let mut values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        for (key, value) in entries {
            values.insert((*key).to_string(), (*value).to_string());
        }
        Ok(())
    }
}

/// Saved text and theme, as loaded at popup open
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SavedState {
    pub text: String,
    pub theme: ThemeMode,
}

/// Two-slot adapter over a [`KeyValueStore`]
#[derive(Debug, Clone)]
pub struct EditorStore<S> {
    backend: S,
}

impl<S: KeyValueStore> EditorStore<S> {
    pub const fn new(backend: S) -> Self {
        Self { backend }
    }

    pub const fn backend(&self) -> &S {
        &self.backend
    }

    /// Load both slots; missing text is empty and a missing theme is Auto
    pub async fn load(&self) -> Result<SavedState> {
        let mut values = self.backend.get(&[TEXT_KEY, THEME_KEY]).await?;
        Ok(SavedState {
            text: values.remove(TEXT_KEY).unwrap_or_default(),
            theme: ThemeMode::from_stored(values.get(THEME_KEY).map(String::as_str)),
        })
    }

    pub async fn save_text(&self, text: &str) -> Result<()> {
        self.backend.set(&[(TEXT_KEY, text)]).await
    }

    pub async fn save_theme(&self, theme: ThemeMode) -> Result<()> {
        self.backend.set(&[(THEME_KEY, theme.as_str())]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_load_defaults_when_empty() {
        let store = EditorStore::new(MemoryStore::new());
        assert_eq!(store.load().await.unwrap(), SavedState::default());
    }

    #[tokio::test]
    async fn test_save_and_load() {
        let store = EditorStore::new(MemoryStore::new());
        store.save_text("draft").await.unwrap();
        store.save_theme(ThemeMode::Dark).await.unwrap();

        assert_eq!(store.backend().peek(THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(
            store.load().await.unwrap(),
            SavedState {
                text: "draft".to_string(),
                theme: ThemeMode::Dark,
            }
        );
    }

    #[tokio::test]
    async fn test_unknown_theme_loads_as_auto() {
        let backend = MemoryStore::new();
        backend.set(&[(THEME_KEY, "neon")]).await.unwrap();
        let store = EditorStore::new(backend);
        assert_eq!(store.load().await.unwrap().theme, ThemeMode::Auto);
    }
}
