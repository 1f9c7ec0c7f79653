//! Catalog Service

use std::path::PathBuf;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use rusty_money::iso::Currency;
use tracing::debug;

use checkout::catalog::{Catalog, CatalogError, json::parse_json};

/// Catalog backed by a JSON file, re-read on every call.
#[derive(Debug, Clone)]
pub(crate) struct FileCatalogService {
    path: PathBuf,
    currency: &'static Currency,
}

impl FileCatalogService {
    #[must_use]
    pub(crate) fn new(path: impl Into<PathBuf>, currency: &'static Currency) -> Self {
        Self {
            path: path.into(),
            currency,
        }
    }
}

#[async_trait]
impl CatalogService for FileCatalogService {
    async fn load_catalog(&self) -> Result<Catalog<'static>, CatalogError> {
        let contents = tokio::fs::read_to_string(&self.path).await?;

        let catalog = parse_json(&contents, self.currency)?;

        debug!(
            path = %self.path.display(),
            products = catalog.len(),
            "catalog loaded"
        );

        Ok(catalog)
    }
}

#[cfg_attr(test, automock)]
#[async_trait]
pub(crate) trait CatalogService: Send + Sync {
    /// Load the current product catalog.
    async fn load_catalog(&self) -> Result<Catalog<'static>, CatalogError>;
}
