//! Checkout prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    basket::{Basket, compute_basket},
    catalog::{Catalog, CatalogError, json::load_json, parse_currency},
    discounts::DiscountError,
    items::{BonusItem, LineItem},
    pricing::{PricingError, to_decimal},
    products::Product,
    promotions::{
        Promotion, PromotionOutcome,
        bundled_bonus::BundledBonusPromotion,
        every_nth_free::EveryNthFreePromotion,
        exact_quantity::ExactQuantityDiscountPromotion,
        table::{PromotionTable, PromotionsError},
    },
    quantities::Quantities,
    receipt::ReceiptError,
};
