//! In-memory product catalog with optional file persistence.

use async_trait::async_trait;
use std::path::PathBuf;
use tokio::sync::RwLock;

use crate::observability::metrics;
use crate::products::{NewProduct, Product, ProductId, ProductPatch, ProductQuery};
use crate::store::persist::{Catalog, ProductFile};
use crate::store::{ProductStore, StoreResult};

/// The default [`ProductStore`].
///
/// Reads share the lock. Every mutation holds the write lock while it
/// stages a copy of the catalog, persists it, and only then commits it.
pub struct ProductManager {
    catalog: RwLock<Catalog>,
    file: Option<ProductFile>,
}

impl ProductManager {
    /// Create an empty, memory-only store.
    pub fn in_memory() -> Self {
        Self::with_catalog(Catalog::default(), None)
    }

    /// Open a file-backed store, loading whatever the file already holds.
    pub async fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let file = ProductFile::new(path);
        let catalog = file.load().await?;
        Ok(Self::with_catalog(catalog, Some(file)))
    }

    fn with_catalog(catalog: Catalog, file: Option<ProductFile>) -> Self {
        metrics::record_catalog_size(catalog.products.len());
        Self {
            catalog: RwLock::new(catalog),
            file,
        }
    }

    /// Number of products currently held.
    pub async fn len(&self) -> usize {
        self.catalog.read().await.products.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    async fn commit(&self, current: &mut Catalog, staged: Catalog) -> StoreResult<()> {
        if let Some(file) = &self.file {
            file.save(&staged).await?;
        }
        metrics::record_catalog_size(staged.products.len());
        *current = staged;
        Ok(())
    }
}

#[async_trait]
impl ProductStore for ProductManager {
    async fn get_products(&self, query: &ProductQuery) -> StoreResult<Vec<Product>> {
        let catalog = self.catalog.read().await;
        Ok(query.select(&catalog.products))
    }

    async fn get_product_by_id(&self, id: ProductId) -> StoreResult<Option<Product>> {
        let catalog = self.catalog.read().await;
        Ok(catalog.get(id).cloned())
    }

    async fn add_product(&self, product: NewProduct) -> StoreResult<Product> {
        let mut catalog = self.catalog.write().await;

        let mut staged = catalog.clone();
        let id = staged.allocate_id()?;
        let product = product.into_product(id);
        staged.products.push(product.clone());

        self.commit(&mut catalog, staged).await?;
        tracing::info!(id = %id, code = %product.code, "Product added");
        Ok(product)
    }

    async fn delete_product(&self, id: ProductId) -> StoreResult<Option<Product>> {
        let mut catalog = self.catalog.write().await;
        let Some(index) = catalog.position(id) else {
            return Ok(None);
        };

        let mut staged = catalog.clone();
        let removed = staged.products.remove(index);

        self.commit(&mut catalog, staged).await?;
        tracing::info!(id = %id, "Product deleted");
        Ok(Some(removed))
    }

    async fn update_product(&self, id: ProductId, patch: ProductPatch) -> StoreResult<Option<Product>> {
        if !patch.is_valid() {
            tracing::debug!(id = %id, "Rejected invalid product patch");
            return Ok(None);
        }

        let mut catalog = self.catalog.write().await;
        let Some(index) = catalog.position(id) else {
            return Ok(None);
        };

        let mut staged = catalog.clone();
        patch.apply(&mut staged.products[index]);
        let updated = staged.products[index].clone();

        self.commit(&mut catalog, staged).await?;
        tracing::info!(id = %id, "Product updated");
        Ok(Some(updated))
    }
}
