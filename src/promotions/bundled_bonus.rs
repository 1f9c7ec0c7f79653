//! Bundled Bonus
//!
//! Buying the trigger SKU earns one free unit of a bonus SKU.

use tracing::trace;

use crate::{
    catalog::Catalog, items::BonusItem, products::Product, promotions::PromotionOutcome,
};

/// Grants a free unit of `bonus_sku` whenever the trigger SKU is bought.
///
/// The trigger line is charged for a single unit no matter how many were
/// requested, and only one bonus unit is granted. The bonus SKU's own line, if
/// it was requested too, is priced normally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundledBonusPromotion {
    bonus_sku: String,
}

impl BundledBonusPromotion {
    /// Create a new bundled bonus promotion.
    pub fn new(bonus_sku: impl Into<String>) -> Self {
        Self {
            bonus_sku: bonus_sku.into(),
        }
    }

    /// Return the SKU granted for free
    pub fn bonus_sku(&self) -> &str {
        &self.bonus_sku
    }

    /// Apply to `quantity` units of the trigger product.
    ///
    /// No bonus is granted if the bonus SKU is missing from the catalog.
    pub fn apply<'a>(
        &self,
        product: &Product<'a>,
        quantity: usize,
        catalog: &Catalog<'a>,
    ) -> PromotionOutcome<'a> {
        if quantity == 0 {
            return PromotionOutcome::none();
        }

        let bonus = catalog.find(&self.bonus_sku).map(BonusItem::free);

        if bonus.is_none() {
            trace!(bonus_sku = %self.bonus_sku, "bonus product not in catalog");
        }

        PromotionOutcome::priced(product.price).with_bonus(bonus)
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::{Money, iso::USD};
    use testresult::TestResult;

    use crate::catalog::CatalogError;

    use super::*;

    fn catalog() -> Result<Catalog<'static>, CatalogError> {
        Catalog::with_products(
            [
                Product::new("43N23P", "MacBook Pro", Money::from_minor(5399_99, USD)),
                Product::new("234234", "Apple TV", Money::from_minor(109_50, USD)),
            ],
            USD,
        )
    }

    #[test]
    fn single_unit_earns_free_bonus() -> TestResult {
        let catalog = catalog()?;
        let macbook = catalog.find("43N23P").ok_or("missing product")?;

        let outcome = BundledBonusPromotion::new("234234").apply(macbook, 1, &catalog);

        assert_eq!(outcome.price, Some(Money::from_minor(5399_99, USD)));

        let bonus = outcome.bonus.ok_or("missing bonus")?;
        assert_eq!(bonus.sku, "234234");
        assert_eq!(bonus.name, "Apple TV");
        assert_eq!(bonus.price, Money::from_minor(0, USD));
        assert_eq!(bonus.quantity, 1);

        Ok(())
    }

    #[test]
    fn multiple_units_are_charged_once_with_one_bonus() -> TestResult {
        let catalog = catalog()?;
        let macbook = catalog.find("43N23P").ok_or("missing product")?;

        let outcome = BundledBonusPromotion::new("234234").apply(macbook, 3, &catalog);

        assert_eq!(outcome.price, Some(Money::from_minor(5399_99, USD)));
        assert_eq!(outcome.bonus.map(|bonus| bonus.quantity), Some(1));

        Ok(())
    }

    #[test]
    fn missing_bonus_product_still_prices_line() -> TestResult {
        let catalog = catalog()?;
        let macbook = catalog.find("43N23P").ok_or("missing product")?;

        let outcome = BundledBonusPromotion::new("999999").apply(macbook, 1, &catalog);

        assert_eq!(outcome.price, Some(Money::from_minor(5399_99, USD)));
        assert!(outcome.bonus.is_none());

        Ok(())
    }

    #[test]
    fn zero_quantity_does_not_fire() -> TestResult {
        let catalog = catalog()?;
        let macbook = catalog.find("43N23P").ok_or("missing product")?;

        let outcome = BundledBonusPromotion::new("234234").apply(macbook, 0, &catalog);

        assert!(!outcome.fired());

        Ok(())
    }
}
