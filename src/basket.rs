//! Basket
//!
//! Joins requested quantities against the catalog and prices every line.

use rusty_money::{Money, iso::Currency};
use tracing::{debug, trace};

use crate::{
    catalog::Catalog,
    items::{BonusItem, LineItem},
    pricing::{PricingError, add_price, extend_price},
    promotions::{PromotionOutcome, table::PromotionTable},
    quantities::Quantities,
};

/// A priced checkout basket.
#[derive(Debug, Clone, PartialEq)]
pub struct Basket<'a> {
    products: Vec<LineItem<'a>>,
    bonus: Vec<BonusItem<'a>>,
    total: Money<'a, Currency>,
}

impl<'a> Basket<'a> {
    /// Create an empty basket.
    pub fn new(currency: &'a Currency) -> Self {
        Basket {
            products: Vec::new(),
            bonus: Vec::new(),
            total: Money::from_minor(0, currency),
        }
    }

    /// Price `requested` SKUs against `catalog` using `promotions`.
    ///
    /// Lines follow catalog order. SKUs missing from the catalog are ignored.
    /// A line whose promotion computed no price is charged unit price times
    /// quantity.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if a price is negative or price arithmetic
    /// overflows.
    pub fn compute<S: AsRef<str>>(
        catalog: &Catalog<'a>,
        requested: &[S],
        promotions: &PromotionTable,
    ) -> Result<Self, PricingError> {
        let quantities = Quantities::aggregate(catalog, requested);

        if !quantities.unknown().is_empty() {
            debug!(skus = ?quantities.unknown(), "ignoring SKUs missing from catalog");
        }

        let mut basket = Basket::new(catalog.currency());

        for product in catalog {
            let quantity = quantities.get(&product.sku);

            if quantity == 0 {
                continue;
            }

            let outcome = match promotions.get(&product.sku) {
                Some(promotion) => {
                    let outcome = promotion.apply(product, quantity, catalog)?;

                    trace!(
                        sku = %product.sku,
                        promotion = promotion.kind(),
                        fired = outcome.fired(),
                        "promotion applied"
                    );

                    outcome
                }
                None => PromotionOutcome::none(),
            };

            let price = match outcome.price {
                Some(price) => price,
                None => extend_price(&product.sku, &product.price, quantity)?,
            };

            basket.push(LineItem::new(product, price, quantity), outcome.bonus)?;
        }

        debug!(
            lines = basket.products.len(),
            bonus = basket.bonus.len(),
            total = %basket.total,
            "basket priced"
        );

        Ok(basket)
    }

    /// Append a line, and any bonus it earned, adding the line price to the total.
    fn push(
        &mut self,
        line: LineItem<'a>,
        bonus: Option<BonusItem<'a>>,
    ) -> Result<(), PricingError> {
        if line.price.is_negative() {
            return Err(PricingError::NegativePrice(line.sku));
        }

        self.total = add_price(&self.total, line.price)?;
        self.products.push(line);
        self.bonus.extend(bonus);

        Ok(())
    }

    /// Priced lines, in catalog order.
    pub fn products(&self) -> &[LineItem<'a>] {
        &self.products
    }

    /// Free items earned by promotions.
    pub fn bonus(&self) -> &[BonusItem<'a>] {
        &self.bonus
    }

    /// Sum of all line prices. Bonus items never contribute.
    pub fn total(&self) -> Money<'a, Currency> {
        self.total
    }

    /// Get the currency of the basket.
    pub fn currency(&self) -> &'a Currency {
        self.total.currency()
    }

    /// Get the number of priced lines.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the basket has no priced lines.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Price `requested` SKUs against `catalog` with the standard promotions.
///
/// # Errors
///
/// Returns a [`PricingError`] if a price is negative or price arithmetic
/// overflows.
pub fn compute_basket<'a, S: AsRef<str>>(
    catalog: &Catalog<'a>,
    requested: &[S],
) -> Result<Basket<'a>, PricingError> {
    Basket::compute(catalog, requested, &PromotionTable::standard())
}
