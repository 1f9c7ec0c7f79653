//! Checkout JSON API Server
//!
//! Serves `POST /basket`, pricing the requested SKUs against a catalog file
//! that is re-read on every request.

use std::{process, sync::Arc};

use salvo::{
    affix_state::inject,
    oapi::{OpenApi, swagger_ui::SwaggerUi},
    prelude::*,
    trailing_slash::remove_slash,
};
use tracing::{error, info, warn};

use crate::{
    catalog::{CatalogService, FileCatalogService},
    config::ServerConfig,
    state::State,
};

mod baskets;
mod catalog;
mod config;
mod extensions;
mod healthcheck;
mod observability;
mod router;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;

/// Checkout JSON API Server entry point
///
/// # Panics
///
/// Panics if the server fails to bind or serve requests
#[tokio::main]
pub async fn main() {
    // Load configuration from .env and CLI arguments
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    if let Err(init_error) = observability::init_subscriber(&config) {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialize, must use eprintln"
        )]
        {
            eprintln!("Logging error: {init_error}");
        }

        process::exit(1);
    }

    let currency = match config.catalog.currency() {
        Ok(currency) => currency,
        Err(currency_error) => {
            error!("invalid currency: {currency_error}");

            process::exit(1);
        }
    };

    let promotions = match config.catalog.promotions() {
        Ok(promotions) => promotions,
        Err(promotions_error) => {
            error!("failed to load promotions: {promotions_error}");

            process::exit(1);
        }
    };

    info!(rules = promotions.len(), "promotions loaded");

    let catalog = FileCatalogService::new(&config.catalog.catalog_path, currency);

    // The catalog is loaded per request; a bad file at startup is not fatal
    if let Err(catalog_error) = catalog.load_catalog().await {
        warn!(
            path = %config.catalog.catalog_path.display(),
            "catalog unavailable at startup: {catalog_error}"
        );
    }

    let addr = config.socket_addr();

    info!("Starting server on {addr}");

    // Bind server
    let listener = TcpListener::new(addr).bind().await;

    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(observability::request_logging)
        .hoop(remove_slash())
        .hoop(inject(State::shared(Arc::new(catalog), promotions)))
        .push(router::app_router());

    let doc = OpenApi::new("Checkout API", env!("CARGO_PKG_VERSION")).merge_router(&router);

    let router = router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"));

    let server = Server::new(listener);

    let handle = server.handle();
    let shutdown_timeout = config.server.shutdown_timeout();

    // Listen for shutdown signal
    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle, shutdown_timeout).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    // Start serving requests
    server.serve(router).await;
}
