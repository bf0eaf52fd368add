use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::catalog::Catalog;

use super::{CourseStore, StoreError};

/// JSON file backend. The file holds the whole catalog as one object:
/// `{ "<name>": { "area": "...", "link": "..." } }`.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl CourseStore for FileStore {
    async fn load_all(&self) -> Result<Catalog, StoreError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Catalog::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn save_all(&self, catalog: &Catalog) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(catalog)?;
        tokio::fs::write(&self.path, bytes).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Area, Course};

    #[tokio::test]
    async fn missing_file_loads_as_empty_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("cursos.json"));

        let catalog = store.load_all().await.unwrap();
        assert!(catalog.is_empty());
    }

    #[tokio::test]
    async fn save_then_load_returns_the_same_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("cursos.json"));

        let mut catalog = Catalog::new();
        catalog.insert(
            "Calculo 1".to_string(),
            Course {
                area: Area::Matematica,
                link: "http://x".to_string(),
            },
        );
        store.save_all(&catalog).await.unwrap();

        assert_eq!(store.load_all().await.unwrap(), catalog);
    }

    #[tokio::test]
    async fn persisted_file_uses_the_name_keyed_json_shape() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cursos.json");
        let store = FileStore::new(&path);

        let mut catalog = Catalog::new();
        catalog.insert(
            "Calculo 1".to_string(),
            Course {
                area: Area::Matematica,
                link: "http://x".to_string(),
            },
        );
        store.save_all(&catalog).await.unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(
            raw,
            serde_json::json!({"Calculo 1": {"area": "matematica", "link": "http://x"}})
        );
    }

    #[tokio::test]
    async fn corrupt_file_surfaces_a_serde_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cursos.json");
        std::fs::write(&path, "not json").unwrap();

        let store = FileStore::new(&path);
        assert!(matches!(
            store.load_all().await,
            Err(StoreError::Serde(_))
        ));
    }
}
