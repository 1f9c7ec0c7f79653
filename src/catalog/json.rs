//! JSON Catalog Loader
//!
//! Reads the `data.json` product list format:
//!
//! ```json
//! [{ "SKU": "120P90", "Name": "Google Home", "Price": 49.99, "Qty": 10 }]
//! ```
//!
//! `Qty` is stock on hand and plays no part in pricing, so it is ignored.

use std::{fs, path::Path};

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rusty_money::{Money, iso::Currency};
use serde::Deserialize;
use tracing::debug;

use crate::{
    catalog::{Catalog, CatalogError},
    products::Product,
};

/// A product record as it appears in the catalog file.
#[derive(Debug, Deserialize)]
pub struct ProductRecord {
    /// Stock keeping unit
    #[serde(rename = "SKU")]
    pub sku: String,

    /// Display name
    #[serde(rename = "Name")]
    pub name: String,

    /// Unit price as a plain JSON number (e.g. `109.50`)
    #[serde(rename = "Price")]
    pub price: serde_json::Number,
}

impl ProductRecord {
    fn into_product(self, currency: &'static Currency) -> Result<Product<'static>, CatalogError> {
        let price = parse_price(&self.sku, &self.price, currency)?;

        Ok(Product::new(self.sku, self.name, price))
    }
}

/// Load a catalog from a JSON file.
///
/// # Errors
///
/// Returns a [`CatalogError`] if the file cannot be read or parsed, is empty,
/// or contains an invalid product.
pub fn load_json(
    path: impl AsRef<Path>,
    currency: &'static Currency,
) -> Result<Catalog<'static>, CatalogError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    debug!(path = %path.display(), "loading catalog");

    parse_json(&contents, currency)
}

/// Parse a catalog from a JSON string.
///
/// # Errors
///
/// Returns a [`CatalogError`] if the JSON is malformed, holds no products, or
/// contains an invalid product.
pub fn parse_json(
    contents: &str,
    currency: &'static Currency,
) -> Result<Catalog<'static>, CatalogError> {
    let records: Vec<ProductRecord> = serde_json::from_str(contents)?;

    if records.is_empty() {
        return Err(CatalogError::Empty);
    }

    let products = records
        .into_iter()
        .map(|record| record.into_product(currency))
        .collect::<Result<Vec<_>, _>>()?;

    Catalog::with_products(products, currency)
}

/// Parse a JSON number into money, rounding half away from zero to the
/// currency's minor unit.
///
/// # Errors
///
/// Returns [`CatalogError::InvalidPrice`] if the number is not a plain decimal
/// or does not fit in minor units, and [`CatalogError::NegativePrice`] if it is
/// below zero.
pub fn parse_price(
    sku: &str,
    price: &serde_json::Number,
    currency: &'static Currency,
) -> Result<Money<'static, Currency>, CatalogError> {
    let invalid = || CatalogError::InvalidPrice {
        sku: sku.to_string(),
        price: price.to_string(),
    };

    let amount = price
        .to_string()
        .parse::<Decimal>()
        .or_else(|_err| Decimal::from_scientific(&price.to_string()))
        .map_err(|_err| invalid())?;

    if amount < Decimal::ZERO {
        return Err(CatalogError::NegativePrice(sku.to_string()));
    }

    let scale = 10_i64
        .checked_pow(currency.exponent)
        .map(Decimal::from)
        .ok_or_else(invalid)?;

    let minor_units = amount
        .checked_mul(scale)
        .map(|value| value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|value| value.to_i64())
        .ok_or_else(invalid)?;

    Ok(Money::from_minor(minor_units, currency))
}
