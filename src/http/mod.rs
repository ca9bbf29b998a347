//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID, tracing span)
//!     → handlers.rs (validate, call store)
//!     → response.rs / error.rs (shape JSON body and status)
//!     → Send to client
//! ```

pub mod error;
pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use error::ApiError;
pub use request::X_REQUEST_ID;
pub use server::{build_router, AppState, HttpServer};
