use anyhow::Context;
use rmcp::{ServiceExt, transport::stdio};
use std::path::PathBuf;
use std::sync::Arc;
use workout_catalog_search::{CatalogServer, CatalogState, Config};

#[tokio::main]
async fn main() -> workout_catalog_search::error::Result<()> {
    workout_catalog_search::tracing::init();

    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = Config::load(config_path.as_deref()).context("Failed to load configuration")?;

    tracing::info!(
        "Starting workout-catalog-search MCP server (catalog: {})",
        config.catalog_path.display()
    );

    let state = Arc::new(CatalogState::open(config).await);

    // Serve over stdio; logs go to stderr
    let server = CatalogServer::new(state);
    let service = server.serve(stdio()).await.inspect_err(|e| {
        tracing::error!("Error serving MCP server: {:?}", e);
    })?;

    service.waiting().await?;

    Ok(())
}
