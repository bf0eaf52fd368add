use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::catalog::Catalog;

use super::{CourseStore, StoreError};

/// In-memory backend for tests and ephemeral runs. Contents are lost when
/// the process exits.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Catalog>,
}

impl MemoryStore {
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            inner: Mutex::new(catalog),
        }
    }
}

#[async_trait]
impl CourseStore for MemoryStore {
    async fn load_all(&self) -> Result<Catalog, StoreError> {
        Ok(self.inner.lock().await.clone())
    }

    async fn save_all(&self, catalog: &Catalog) -> Result<(), StoreError> {
        *self.inner.lock().await = catalog.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Area, Course};

    #[tokio::test]
    async fn starts_empty_and_keeps_saved_entries() {
        let store = MemoryStore::default();
        assert!(store.load_all().await.unwrap().is_empty());

        let mut catalog = Catalog::new();
        catalog.insert(
            "A".to_string(),
            Course {
                area: Area::Humanas,
                link: "l1".to_string(),
            },
        );
        store.save_all(&catalog).await.unwrap();

        assert_eq!(store.load_all().await.unwrap(), catalog);
    }
}
