//! Catalog
//!
//! An ordered, read-only snapshot of product records. Pricing walks the catalog
//! in this order, so line items come out in catalog order rather than request order.

use std::slice;

use rusty_money::iso::{Currency, EUR, GBP, USD};
use thiserror::Error;

use crate::products::Product;

pub mod json;

/// Errors raised while building or loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog source could not be read.
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog source was not valid JSON for a product list.
    #[error("failed to parse catalog: {0}")]
    Json(#[from] serde_json::Error),

    /// The catalog source contained no products.
    #[error("catalog contains no products")]
    Empty,

    /// A product at the given index has an empty SKU.
    #[error("product {0} has an empty SKU")]
    EmptySku(usize),

    /// A price could not be represented in the catalog currency.
    #[error("invalid price for {sku}: {price}")]
    InvalidPrice {
        /// SKU of the offending product
        sku: String,

        /// Price as it appeared in the source
        price: String,
    },

    /// A product has a price below zero.
    #[error("product {0} has a negative price")]
    NegativePrice(String),

    /// A product's currency differs from the catalog currency (index, product currency, catalog currency).
    #[error("product {0} has currency {1}, but catalog has currency {2}")]
    CurrencyMismatch(usize, &'static str, &'static str),

    /// Unsupported currency code.
    #[error("unknown currency code: {0}")]
    UnknownCurrency(String),
}

/// Ordered product catalog.
#[derive(Debug, Clone)]
pub struct Catalog<'a> {
    products: Vec<Product<'a>>,
    currency: &'static Currency,
}

impl<'a> Catalog<'a> {
    /// Create an empty catalog in the given currency.
    pub fn new(currency: &'static Currency) -> Self {
        Catalog {
            products: Vec::new(),
            currency,
        }
    }

    /// Create a catalog from products, keeping their order.
    ///
    /// Duplicate SKUs are kept; each row is priced on its own.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if a product has an empty SKU, a negative
    /// price, or a price in a different currency.
    pub fn with_products(
        products: impl Into<Vec<Product<'a>>>,
        currency: &'static Currency,
    ) -> Result<Self, CatalogError> {
        let products = products.into();

        products
            .iter()
            .enumerate()
            .try_for_each(|(i, product)| validate(i, product, currency))?;

        Ok(Catalog { products, currency })
    }

    /// Find the first product with the given SKU.
    pub fn find(&self, sku: &str) -> Option<&Product<'a>> {
        self.products.iter().find(|product| product.sku == sku)
    }

    /// Check whether any product has the given SKU.
    pub fn contains(&self, sku: &str) -> bool {
        self.find(sku).is_some()
    }

    /// Iterate over products in catalog order.
    pub fn iter(&self) -> slice::Iter<'_, Product<'a>> {
        self.products.iter()
    }

    /// Get the number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Get the currency of the catalog.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}

impl<'c, 'a> IntoIterator for &'c Catalog<'a> {
    type Item = &'c Product<'a>;
    type IntoIter = slice::Iter<'c, Product<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn validate(
    index: usize,
    product: &Product<'_>,
    currency: &'static Currency,
) -> Result<(), CatalogError> {
    if product.sku.trim().is_empty() {
        return Err(CatalogError::EmptySku(index));
    }

    let product_currency = product.price.currency();

    if product_currency != currency {
        return Err(CatalogError::CurrencyMismatch(
            index,
            product_currency.iso_alpha_code,
            currency.iso_alpha_code,
        ));
    }

    if product.price.to_minor_units() < 0 {
        return Err(CatalogError::NegativePrice(product.sku.clone()));
    }

    Ok(())
}

/// Resolve a supported ISO currency code.
///
/// # Errors
///
/// Returns [`CatalogError::UnknownCurrency`] for anything other than GBP, USD or EUR.
pub fn parse_currency(code: &str) -> Result<&'static Currency, CatalogError> {
    match code.trim().to_ascii_uppercase().as_str() {
        "GBP" => Ok(GBP),
        "USD" => Ok(USD),
        "EUR" => Ok(EUR),
        _ => Err(CatalogError::UnknownCurrency(code.to_string())),
    }
}
