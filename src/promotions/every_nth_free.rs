//! Every Nth Free
//!
//! "Buy N, pay for N minus N/n": one unit in every `n` is free.

use std::num::NonZeroUsize;

use crate::{
    pricing::{PricingError, extend_price},
    products::Product,
    promotions::PromotionOutcome,
};

/// Makes every `n`th unit free, but only once strictly more than `n` units
/// are bought.
///
/// At exactly `n` units the promotion does not fire and the line falls back
/// to full price. Below `n` units full price applies as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EveryNthFreePromotion {
    n: NonZeroUsize,
}

impl EveryNthFreePromotion {
    /// Create a new every-nth-free promotion.
    pub fn new(n: NonZeroUsize) -> Self {
        Self { n }
    }

    /// Return the group size
    pub fn n(&self) -> NonZeroUsize {
        self.n
    }

    /// Number of units charged for `quantity` units.
    pub fn payable_units(&self, quantity: usize) -> usize {
        quantity - quantity / self.n
    }

    /// Apply to `quantity` units of `product`.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Overflow`] if the discounted total does not fit
    /// in minor units.
    pub fn apply<'a>(
        &self,
        product: &Product<'a>,
        quantity: usize,
    ) -> Result<PromotionOutcome<'a>, PricingError> {
        if quantity <= self.n.get() {
            return Ok(PromotionOutcome::none());
        }

        let price = extend_price(&product.sku, &product.price, self.payable_units(quantity))?;

        Ok(PromotionOutcome::priced(price))
    }
}
