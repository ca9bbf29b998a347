//! Product catalog HTTP API.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request      ┌──────────────────────────────────────────────┐
//!     ────────────────────┼─▶ http::server ─▶ http::handlers ─┐          │
//!                         │   (request id,    (presence check, │          │
//!                         │    trace, timeout) id parsing)     ▼          │
//!                         │                           store::ProductStore │
//!     Client Response     │                           (ProductManager,    │
//!     ◀───────────────────┼── http::response ◀──────── JSON file)        │
//!                         │                                              │
//!                         │   config · observability · lifecycle         │
//!                         └──────────────────────────────────────────────┘
//! ```

use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;

use product_api::config::{load_config, ProductApiConfig};
use product_api::lifecycle::{signals, startup, Shutdown};
use product_api::observability::{logging, metrics};
use product_api::HttpServer;

#[derive(Parser)]
#[command(name = "product-api")]
#[command(about = "HTTP CRUD API for a product catalog", long_about = None)]
struct Args {
    /// TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override `listener.bind_address`.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ProductApiConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
    }

    logging::init(&config.observability);
    tracing::info!("product-api v{} starting", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        bind_address = %config.listener.bind_address,
        storage = ?config.storage.path,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => {
                if let Err(e) = metrics::init_metrics(addr) {
                    tracing::error!(error = %e, "Failed to start metrics exporter");
                }
            }
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let store = startup::open_store(&config.storage).await?;

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        signals::wait_for_shutdown().await;
        shutdown.trigger();
    });

    let server = HttpServer::new(config, store);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
