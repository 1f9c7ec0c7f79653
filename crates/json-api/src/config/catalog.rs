//! Catalog Config

use std::path::PathBuf;

use clap::Args;
use rusty_money::iso::Currency;

use checkout::prelude::*;

/// Catalog and promotion sources.
#[derive(Debug, Args)]
pub struct CatalogConfig {
    /// Catalog JSON file, re-read on every request
    #[arg(long, env = "CATALOG_PATH", default_value = "data.json")]
    pub catalog_path: PathBuf,

    /// Promotions YAML file; the standard promotions are used when omitted
    #[arg(long, env = "PROMOTIONS_PATH")]
    pub promotions_path: Option<PathBuf>,

    /// Catalog currency (GBP, USD, EUR)
    #[arg(long, env = "CURRENCY", default_value = "USD")]
    pub currency: String,
}

impl CatalogConfig {
    /// Resolve the configured currency code.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownCurrency`] for unsupported codes.
    pub fn currency(&self) -> Result<&'static Currency, CatalogError> {
        parse_currency(&self.currency)
    }

    /// Load the promotion table, falling back to the standard rules.
    ///
    /// # Errors
    ///
    /// Returns a [`PromotionsError`] if the promotions file cannot be loaded.
    pub fn promotions(&self) -> Result<PromotionTable, PromotionsError> {
        match &self.promotions_path {
            Some(path) => PromotionTable::load_yaml(path),
            None => Ok(PromotionTable::standard()),
        }
    }
}
