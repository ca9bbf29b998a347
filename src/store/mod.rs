//! Product storage subsystem.
//!
//! # Data Flow
//! ```text
//! handler
//!     → ProductStore (trait object held in AppState)
//!     → ProductManager (RwLock<Catalog>)
//!     → persist.rs (optional JSON file, written on every mutation)
//! ```
//!
//! # Design Decisions
//! - Handlers only see the trait, so tests can inject fakes
//! - One write lock covers read-modify-persist, which serializes id assignment
//! - A failed file write leaves the in-memory catalog untouched
//! - Ids are never reused: `next_id` is part of the persisted state

pub mod manager;
pub mod persist;

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

use crate::products::{NewProduct, Product, ProductId, ProductPatch, ProductQuery};

pub use manager::ProductManager;
pub use persist::{Catalog, ProductFile};

/// Errors raised by the backing storage.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read product file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write product file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Product file {} is not valid: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The file decoded but describes an impossible catalog.
    #[error("Product file {} is not valid: {reason}", .path.display())]
    Invalid { path: PathBuf, reason: String },

    #[error("Failed to encode products: {0}")]
    Encode(#[source] serde_json::Error),

    /// Every representable id has been handed out.
    #[error("No product ids left to assign")]
    IdsExhausted,

    /// Storage backend is unavailable for another reason.
    #[error("Product store unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// The authoritative product collection.
///
/// `Ok(None)` means "no such product" (or, for updates, a rejected patch);
/// `Err` is reserved for storage failures.
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn get_products(&self, query: &ProductQuery) -> StoreResult<Vec<Product>>;

    async fn get_product_by_id(&self, id: ProductId) -> StoreResult<Option<Product>>;

    async fn add_product(&self, product: NewProduct) -> StoreResult<Product>;

    async fn delete_product(&self, id: ProductId) -> StoreResult<Option<Product>>;

    async fn update_product(&self, id: ProductId, patch: ProductPatch) -> StoreResult<Option<Product>>;
}
