//! Items
//!
//! Priced rows of a computed basket.

use rusty_money::{Money, iso::Currency};

use crate::products::Product;

/// One priced row in a basket, covering every requested unit of a SKU.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem<'a> {
    /// Stock keeping unit
    pub sku: String,

    /// Product name
    pub name: String,

    /// Total price for the line, already adjusted for quantity and promotions
    pub price: Money<'a, Currency>,

    /// Number of units requested
    pub quantity: usize,
}

impl<'a> LineItem<'a> {
    /// Create a line item for a product at the given total price.
    pub fn new(product: &Product<'a>, price: Money<'a, Currency>, quantity: usize) -> Self {
        Self {
            sku: product.sku.clone(),
            name: product.name.clone(),
            price,
            quantity,
        }
    }
}

/// A free item granted by a promotion.
#[derive(Debug, Clone, PartialEq)]
pub struct BonusItem<'a> {
    /// Stock keeping unit
    pub sku: String,

    /// Product name
    pub name: String,

    /// Price of the bonus; zero for every current promotion
    pub price: Money<'a, Currency>,

    /// Number of units granted
    pub quantity: usize,
}

impl<'a> BonusItem<'a> {
    /// A single unit of `product` at no charge.
    pub fn free(product: &Product<'a>) -> Self {
        Self {
            sku: product.sku.clone(),
            name: product.name.clone(),
            price: Money::from_minor(0, product.price.currency()),
            quantity: 1,
        }
    }
}
