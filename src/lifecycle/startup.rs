//! Startup orchestration.
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Store opens before the listener binds, so traffic only arrives when ready

use std::sync::Arc;

use crate::config::StorageConfig;
use crate::store::{ProductManager, ProductStore, StoreResult};

/// Open the configured product store.
pub async fn open_store(config: &StorageConfig) -> StoreResult<Arc<dyn ProductStore>> {
    let store = match &config.path {
        Some(path) => {
            tracing::info!(path = %path.display(), "Opening file-backed product store");
            ProductManager::open(path).await?
        }
        None => {
            tracing::info!("Using in-memory product store");
            ProductManager::in_memory()
        }
    };
    Ok(Arc::new(store))
}
