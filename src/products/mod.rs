//! Product domain types.
//!
//! # Data Flow
//! ```text
//! POST body   → ProductDraft  → (presence check) → NewProduct   → store
//! PUT body    → ProductPatch  → (store validates) → Product (updated)
//! path {pid}  → ProductId::parse
//! query       → ProductQuery  → store filter
//! ```

pub mod number;
pub mod query;
pub mod types;

pub use query::ProductQuery;
pub use types::{NewProduct, ParseProductIdError, Product, ProductDraft, ProductId, ProductPatch};
