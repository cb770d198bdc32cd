//! Storage service for the desktop application

use mdpad_core::config::Config;
use mdpad_core::storage::LibSqlStore;
use mdpad_core::Result;

/// Open the key-value store at the configured (or default) path
pub async fn open_store(config: &Config) -> Result<LibSqlStore> {
    let db_path = config.database_path()?;
    tracing::info!("Opening store at {}", db_path.display());
    LibSqlStore::open(&db_path).await
}
