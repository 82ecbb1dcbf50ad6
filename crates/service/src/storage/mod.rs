//! Persistence seam for the catalog.
//!
//! Operations load the whole catalog at entry and rewrite it wholly after a
//! mutation; implementations only need `load`/`save`. This keeps the flat
//! JSON file swappable for an in-memory fixture in tests.

use async_trait::async_trait;
use models::course::Catalog;

use crate::errors::ServiceError;

pub mod json_file;
pub mod memory;

#[async_trait]
pub trait CatalogStorage: Send + Sync {
    /// Read the full catalog from the backing store.
    async fn load(&self) -> Result<Catalog, ServiceError>;

    /// Replace the backing store contents with `catalog`.
    async fn save(&self, catalog: &Catalog) -> Result<(), ServiceError>;
}
