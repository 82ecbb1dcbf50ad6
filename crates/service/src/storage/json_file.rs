use std::{path::PathBuf, sync::Arc};

use async_trait::async_trait;
use models::course::Catalog;
use tokio::fs;
use tracing::info;

use crate::errors::ServiceError;
use crate::storage::CatalogStorage;

/// JSON file-backed catalog store.
///
/// Persists the catalog as a pretty-printed `{"courses": [...]}` document.
/// There is no in-process cache: every `load` re-reads the file and every
/// `save` rewrites it wholesale, so concurrent writers are last-write-wins.
#[derive(Clone)]
pub struct JsonCatalogStore {
    file_path: PathBuf,
}

impl JsonCatalogStore {
    /// Initialize the store from a path. Creates the file with an empty
    /// catalog if missing.
    pub async fn new<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).await.ok();
        }

        if fs::metadata(&file_path).await.is_err() {
            let empty = serde_json::to_vec_pretty(&Catalog::default())
                .map_err(|e| ServiceError::Storage(e.to_string()))?;
            fs::write(&file_path, empty)
                .await
                .map_err(|e| ServiceError::Storage(e.to_string()))?;
            info!(path = %file_path.display(), "initialized empty catalog file");
        }

        Ok(Arc::new(Self { file_path }))
    }
}

#[async_trait]
impl CatalogStorage for JsonCatalogStore {
    async fn load(&self) -> Result<Catalog, ServiceError> {
        let bytes = fs::read(&self.file_path)
            .await
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        // A corrupt file is surfaced as a storage fault, not an empty catalog
        serde_json::from_slice(&bytes).map_err(|e| ServiceError::Storage(e.to_string()))
    }

    async fn save(&self, catalog: &Catalog) -> Result<(), ServiceError> {
        let data = serde_json::to_vec_pretty(catalog)
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        fs::write(&self.file_path, data)
            .await
            .map_err(|e| ServiceError::Storage(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::course::Course;

    fn temp_path() -> PathBuf {
        std::env::temp_dir().join(format!("catalog_store_{}.json", uuid::Uuid::new_v4()))
    }

    #[tokio::test]
    async fn bootstraps_empty_catalog_file() -> Result<(), anyhow::Error> {
        let tmp = temp_path();
        let store = JsonCatalogStore::new(&tmp).await?;
        let cat = store.load().await?;
        assert!(cat.courses.is_empty());

        // on-disk shape is the documented {"courses": []}
        let raw: serde_json::Value = serde_json::from_slice(&std::fs::read(&tmp)?)?;
        assert!(raw["courses"].as_array().unwrap().is_empty());

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn save_then_reload_round_trips() -> Result<(), anyhow::Error> {
        let tmp = temp_path();
        let store = JsonCatalogStore::new(&tmp).await?;

        let cat = Catalog {
            courses: vec![Course { id: 1, title: "Rust".into(), description: "intro".into() }],
        };
        store.save(&cat).await?;

        // a fresh store instance sees the persisted state
        let reloaded = JsonCatalogStore::new(&tmp).await?;
        assert_eq!(reloaded.load().await?, cat);

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn corrupt_file_is_a_storage_error() -> Result<(), anyhow::Error> {
        let tmp = temp_path();
        let store = JsonCatalogStore::new(&tmp).await?;
        tokio::fs::write(&tmp, b"{not json").await?;
        assert!(matches!(store.load().await, Err(ServiceError::Storage(_))));
        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }
}
