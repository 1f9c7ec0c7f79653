//! Promotions
//!
//! Per-SKU pricing rules. Each rule looks at one catalog row and its requested
//! quantity and may produce an adjusted line total and a bonus item. Rules never
//! see other SKUs' quantities and at most one rule applies to a SKU.

use rusty_money::{Money, iso::Currency};

use crate::{
    catalog::Catalog,
    items::BonusItem,
    pricing::PricingError,
    products::Product,
    promotions::{
        bundled_bonus::BundledBonusPromotion, every_nth_free::EveryNthFreePromotion,
        exact_quantity::ExactQuantityDiscountPromotion,
    },
};

pub mod bundled_bonus;
pub mod every_nth_free;
pub mod exact_quantity;
pub mod table;

/// What a promotion did to a line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PromotionOutcome<'a> {
    /// Adjusted total price for the line, or `None` if no pricing branch fired
    pub price: Option<Money<'a, Currency>>,

    /// Free item earned by the line
    pub bonus: Option<BonusItem<'a>>,
}

impl<'a> PromotionOutcome<'a> {
    /// Outcome where no rule fired.
    pub fn none() -> Self {
        Self {
            price: None,
            bonus: None,
        }
    }

    /// Outcome with an adjusted line total.
    pub fn priced(price: Money<'a, Currency>) -> Self {
        Self {
            price: Some(price),
            bonus: None,
        }
    }

    /// Attach a bonus item.
    #[must_use]
    pub fn with_bonus(mut self, bonus: Option<BonusItem<'a>>) -> Self {
        self.bonus = bonus;
        self
    }

    /// Whether the promotion changed anything.
    pub fn fired(&self) -> bool {
        self.price.is_some() || self.bonus.is_some()
    }
}

/// Promotion enum
#[derive(Debug, Clone)]
pub enum Promotion {
    /// Buying the trigger SKU grants one unit of another SKU for free
    BundledBonus(BundledBonusPromotion),

    /// Every `n`th unit is free once more than `n` units are bought
    EveryNthFree(EveryNthFreePromotion),

    /// Percentage off the line total at exactly one quantity
    PercentOffAtExactQuantity(ExactQuantityDiscountPromotion),
}

impl Promotion {
    /// Short, stable name of the promotion kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Promotion::BundledBonus(_) => "bundled_bonus",
            Promotion::EveryNthFree(_) => "every_nth_free",
            Promotion::PercentOffAtExactQuantity(_) => "percent_off_at_exact_quantity",
        }
    }

    /// Apply the promotion to `quantity` units of `product`.
    ///
    /// `catalog` is consulted for bonus products only.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if price arithmetic overflows.
    pub fn apply<'a>(
        &self,
        product: &Product<'a>,
        quantity: usize,
        catalog: &Catalog<'a>,
    ) -> Result<PromotionOutcome<'a>, PricingError> {
        match self {
            Promotion::BundledBonus(promotion) => Ok(promotion.apply(product, quantity, catalog)),
            Promotion::EveryNthFree(promotion) => promotion.apply(product, quantity),
            Promotion::PercentOffAtExactQuantity(promotion) => promotion.apply(product, quantity),
        }
    }
}

impl From<BundledBonusPromotion> for Promotion {
    fn from(promotion: BundledBonusPromotion) -> Self {
        Promotion::BundledBonus(promotion)
    }
}

impl From<EveryNthFreePromotion> for Promotion {
    fn from(promotion: EveryNthFreePromotion) -> Self {
        Promotion::EveryNthFree(promotion)
    }
}

impl From<ExactQuantityDiscountPromotion> for Promotion {
    fn from(promotion: ExactQuantityDiscountPromotion) -> Self {
        Promotion::PercentOffAtExactQuantity(promotion)
    }
}
