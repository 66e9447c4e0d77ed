//! HTTP server bootstrap and runtime wiring.

use std::sync::Arc;

use anyhow::Context;
use catalog_products::{Catalog, CatalogLoadError};

use crate::app;
use crate::config::ApiConfig;

/// Build the catalog the process will serve for its whole lifetime.
pub fn load_catalog(config: &ApiConfig) -> Result<Catalog, CatalogLoadError> {
    match &config.data_path {
        Some(path) => Catalog::load(path),
        None => Ok(Catalog::seeded()?),
    }
}

/// Load the catalog, bind, and serve until Ctrl-C.
pub async fn run(config: ApiConfig) -> anyhow::Result<()> {
    let catalog = load_catalog(&config).with_context(|| match &config.data_path {
        Some(path) => format!("loading catalog from {}", path.display()),
        None => "building built-in catalog".to_string(),
    })?;
    tracing::info!(
        products = catalog.len(),
        source = if config.data_path.is_some() { "file" } else { "built-in" },
        "catalog ready"
    );

    let app = app::build_app(Arc::new(catalog));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated unexpectedly")?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
