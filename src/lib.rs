//! Product catalog HTTP API library.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod products;
pub mod store;

pub use config::ProductApiConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use store::{ProductManager, ProductStore};
