//! Checkout
//!
//! Prices a checkout basket: requested SKUs are counted, joined against an
//! ordered product catalog, run through per-SKU promotion rules, and collected
//! into line items, free bonus items and a grand total.

pub mod basket;
pub mod catalog;
pub mod discounts;
pub mod items;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod promotions;
pub mod quantities;
pub mod receipt;
