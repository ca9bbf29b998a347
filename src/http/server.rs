//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with all product handlers
//! - Wire up middleware (request ID, tracing, timeout, metrics)
//! - Bind server to listener and drain on shutdown

use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ProductApiConfig;
use crate::http::handlers;
use crate::http::request::{make_request_span, propagate_request_id, set_request_id};
use crate::observability::metrics;
use crate::store::ProductStore;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ProductStore>,
}

/// HTTP server for the product API.
pub struct HttpServer {
    router: Router,
    config: ProductApiConfig,
}

impl HttpServer {
    /// Create a new HTTP server serving `store`.
    pub fn new(config: ProductApiConfig, store: Arc<dyn ProductStore>) -> Self {
        let router = build_router(&config, AppState { store });
        Self { router, config }
    }

    /// Run the server until `shutdown` fires, then wait for in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            request_timeout_secs = self.config.timeouts.request_secs,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received, draining requests");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Build the Axum router with all middleware layers.
#[allow(deprecated)]
pub fn build_router(config: &ProductApiConfig, state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::welcome))
        .route(
            "/products",
            get(handlers::list_products).post(handlers::create_product),
        )
        .route(
            "/products/{pid}",
            get(handlers::get_product)
                .put(handlers::update_product)
                .delete(handlers::delete_product),
        )
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(set_request_id())
                .layer(propagate_request_id())
                .layer(TraceLayer::new_for_http().make_span_with(make_request_span::<axum::body::Body>))
                .layer(middleware::from_fn(metrics::track_requests))
                .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs))),
        )
}
