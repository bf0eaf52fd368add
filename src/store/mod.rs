pub mod file;
pub mod memory;

use std::sync::Arc;

use async_trait::async_trait;

use crate::catalog::Catalog;
use crate::config::AppConfig;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("catalog storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("catalog (de)serialization failed: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Key-value persistence for the course catalog. Mutations are whole-catalog
/// replace: callers load the full map, change it in memory, and save it back.
/// No locking and no transactions — last write wins.
#[async_trait]
pub trait CourseStore: Send + Sync {
    /// Load the full catalog. A missing backing file is an empty catalog,
    /// never an error.
    async fn load_all(&self) -> Result<Catalog, StoreError>;

    /// Replace the persisted catalog with `catalog`.
    async fn save_all(&self, catalog: &Catalog) -> Result<(), StoreError>;
}

/// Pick the backend named by the configuration.
pub fn from_config(config: &AppConfig) -> anyhow::Result<Arc<dyn CourseStore>> {
    match config.courses_backend.as_str() {
        "file" => Ok(Arc::new(file::FileStore::new(&config.courses_file))),
        "memory" => Ok(Arc::new(memory::MemoryStore::default())),
        other => anyhow::bail!("unknown COURSES_BACKEND '{other}' (expected 'file' or 'memory')"),
    }
}
