use std::sync::Arc;

use async_trait::async_trait;
use models::course::Catalog;
use tokio::sync::RwLock;

use crate::errors::ServiceError;
use crate::storage::CatalogStorage;

/// In-memory catalog store, used as a test fixture in place of the JSON file.
#[derive(Clone, Default)]
pub struct MemoryCatalogStore {
    inner: Arc<RwLock<Catalog>>,
}

impl MemoryCatalogStore {
    pub fn new(initial: Catalog) -> Arc<Self> {
        Arc::new(Self { inner: Arc::new(RwLock::new(initial)) })
    }

    /// Snapshot of the current contents, for assertions.
    pub async fn dump(&self) -> Catalog {
        self.inner.read().await.clone()
    }
}

#[async_trait]
impl CatalogStorage for MemoryCatalogStore {
    async fn load(&self) -> Result<Catalog, ServiceError> {
        Ok(self.inner.read().await.clone())
    }

    async fn save(&self, catalog: &Catalog) -> Result<(), ServiceError> {
        *self.inner.write().await = catalog.clone();
        Ok(())
    }
}
