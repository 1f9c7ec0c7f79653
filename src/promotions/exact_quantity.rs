//! Exact Quantity Discount
//!
//! A percentage off the line total when exactly a given number of units is bought.

use decimal_percentage::Percentage;

use crate::{
    discounts::percentage_off,
    pricing::{PricingError, extend_price},
    products::Product,
    promotions::PromotionOutcome,
};

/// Takes `percent` off the line total when exactly `quantity` units are bought.
///
/// Any other quantity gets full price.
#[derive(Debug, Clone, Copy)]
pub struct ExactQuantityDiscountPromotion {
    quantity: usize,
    percent: Percentage,
}

impl ExactQuantityDiscountPromotion {
    /// Create a new exact quantity discount promotion.
    pub fn new(quantity: usize, percent: Percentage) -> Self {
        Self { quantity, percent }
    }

    /// Return the quantity that triggers the discount
    pub fn quantity(&self) -> usize {
        self.quantity
    }

    /// Return the discount percentage
    pub fn percent(&self) -> Percentage {
        self.percent
    }

    /// Apply to `quantity` units of `product`.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if the line total overflows or the
    /// percentage cannot be applied.
    pub fn apply<'a>(
        &self,
        product: &Product<'a>,
        quantity: usize,
    ) -> Result<PromotionOutcome<'a>, PricingError> {
        if quantity == 0 || quantity != self.quantity {
            return Ok(PromotionOutcome::none());
        }

        let full_price = extend_price(&product.sku, &product.price, quantity)?;
        let price = percentage_off(&full_price, &self.percent)?;

        Ok(PromotionOutcome::priced(price))
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::{Money, iso::USD};
    use testresult::TestResult;

    use super::*;

    fn alexa<'a>() -> Product<'a> {
        Product::new("A304SD", "Alexa Speaker", Money::from_minor(109_50, USD))
    }

    fn ten_percent_at_three() -> ExactQuantityDiscountPromotion {
        ExactQuantityDiscountPromotion::new(3, Percentage::from(0.1))
    }

    #[test]
    fn three_units_get_ten_percent_off() -> TestResult {
        let outcome = ten_percent_at_three().apply(&alexa(), 3)?;

        assert_eq!(outcome.price, Some(Money::from_minor(295_65, USD)));
        assert!(outcome.bonus.is_none());

        Ok(())
    }

    #[test]
    fn other_quantities_do_not_fire() -> TestResult {
        let promotion = ten_percent_at_three();

        for quantity in [1, 2, 4, 5, 10] {
            assert!(
                !promotion.apply(&alexa(), quantity)?.fired(),
                "quantity {quantity} should not fire"
            );
        }

        Ok(())
    }

    #[test]
    fn zero_trigger_quantity_never_fires() -> TestResult {
        let promotion = ExactQuantityDiscountPromotion::new(0, Percentage::from(0.5));

        assert!(!promotion.apply(&alexa(), 0)?.fired());

        Ok(())
    }

    #[test]
    fn accessors_return_constructor_values() {
        let promotion = ten_percent_at_three();

        assert_eq!(promotion.quantity(), 3);
        assert_eq!(promotion.percent(), Percentage::from(0.1));
    }
}
