//! JSON file persistence for the product catalog.

use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::products::{Product, ProductId};
use crate::store::{StoreError, StoreResult};

/// The full catalog state, as held in memory and written to disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Id handed to the next created product.
    pub next_id: u64,
    /// Products in insertion order.
    pub products: Vec<Product>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            next_id: 1,
            products: Vec::new(),
        }
    }
}

impl Catalog {
    /// Hand out the next id. Fails once `next_id` cannot move past it.
    pub fn allocate_id(&mut self) -> StoreResult<ProductId> {
        let id = ProductId(self.next_id);
        self.next_id = self.next_id.checked_add(1).ok_or(StoreError::IdsExhausted)?;
        Ok(id)
    }

    pub fn position(&self, id: ProductId) -> Option<usize> {
        self.products.iter().position(|p| p.id == id)
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Never hand out an id that is already taken, even if the file was edited by hand.
    ///
    /// Returns the offending id when a product already holds `u64::MAX`,
    /// since no id after it can be represented.
    fn repair_next_id(&mut self) -> Result<(), ProductId> {
        for product in &self.products {
            let after = product.id.0.checked_add(1).ok_or(product.id)?;
            self.next_id = self.next_id.max(after);
        }
        Ok(())
    }
}

/// Accepted on-disk shapes.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredCatalog {
    Full(Catalog),
    Products(Vec<Product>),
}

/// Location of the catalog file.
#[derive(Debug, Clone)]
pub struct ProductFile {
    path: PathBuf,
}

impl ProductFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the catalog. A missing file is an empty catalog.
    pub async fn load(&self) -> StoreResult<Catalog> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "Product file not found, starting empty");
                return Ok(Catalog::default());
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Catalog::default());
        }

        let stored: StoredCatalog = serde_json::from_slice(&bytes).map_err(|source| StoreError::Decode {
            path: self.path.clone(),
            source,
        })?;

        let mut catalog = match stored {
            StoredCatalog::Full(catalog) => catalog,
            StoredCatalog::Products(products) => Catalog {
                next_id: 1,
                products,
            },
        };
        catalog.repair_next_id().map_err(|id| StoreError::Invalid {
            path: self.path.clone(),
            reason: format!("product id {id} leaves no room for further ids"),
        })?;

        tracing::info!(
            path = %self.path.display(),
            products = catalog.products.len(),
            next_id = catalog.next_id,
            "Loaded product file"
        );
        Ok(catalog)
    }

    /// Write the catalog through a sibling temp file, then rename over the target.
    pub async fn save(&self, catalog: &Catalog) -> StoreResult<()> {
        let json = serde_json::to_vec_pretty(catalog).map_err(StoreError::Encode)?;
        let tmp = self.temp_path();
        let write_err = |source| StoreError::Write {
            path: self.path.clone(),
            source,
        };

        tokio::fs::write(&tmp, json).await.map_err(write_err)?;
        tokio::fs::rename(&tmp, &self.path).await.map_err(write_err)?;

        tracing::debug!(
            path = %self.path.display(),
            products = catalog.products.len(),
            "Saved product file"
        );
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
