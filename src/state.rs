//! Shared catalog state for tool handlers.
//!
//! Handlers clone the current `Arc<Catalog>` and search it without holding any
//! lock. A reload builds a complete new catalog first and only then swaps it in,
//! so readers never observe a half-built index.

use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::CatalogError;
use std::sync::Arc;
use tokio::sync::RwLock;

pub struct CatalogState {
    config: Config,
    catalog: RwLock<Arc<Catalog>>,
}

impl std::fmt::Debug for CatalogState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogState")
            .field("catalog_path", &self.config.catalog_path)
            .finish_non_exhaustive()
    }
}

impl CatalogState {
    pub fn new(config: Config, catalog: Catalog) -> Self {
        Self {
            config,
            catalog: RwLock::new(Arc::new(catalog)),
        }
    }

    /// Loads the catalog named by `config`.
    ///
    /// A missing or broken catalog file is logged and yields an empty catalog,
    /// so the server still starts and a later `reload` can pick the file up.
    pub async fn open(config: Config) -> Self {
        let catalog = match Catalog::load(&config.catalog_path).await {
            Ok(catalog) => catalog,
            Err(e) => {
                tracing::warn!("Starting with an empty catalog: {}", e);
                Catalog::default()
            }
        };
        Self::new(config, catalog)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Current catalog snapshot.
    pub async fn catalog(&self) -> Arc<Catalog> {
        self.catalog.read().await.clone()
    }

    /// Rebuilds the catalog from the configured file and swaps it in.
    ///
    /// On failure the previous catalog stays in place.
    pub async fn reload(&self) -> Result<Arc<Catalog>, CatalogError> {
        let fresh = Arc::new(Catalog::load(&self.config.catalog_path).await?);
        *self.catalog.write().await = fresh.clone();
        tracing::info!("Catalog reloaded from {}", self.config.catalog_path.display());
        Ok(fresh)
    }
}
