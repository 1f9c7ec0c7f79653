//! Prices

use rust_decimal::Decimal;
use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

use crate::{discounts::DiscountError, items::LineItem};

/// Errors that can occur while pricing a basket.
///
/// None of these occur for a well-formed catalog; they signal a broken invariant.
#[derive(Debug, Error)]
pub enum PricingError {
    /// A line price does not fit in minor units.
    #[error("price overflow for {sku} at quantity {quantity}")]
    Overflow {
        /// SKU being priced
        sku: String,

        /// Requested quantity
        quantity: usize,
    },

    /// The basket total does not fit in minor units.
    #[error("basket total overflow")]
    TotalOverflow,

    /// A negative price reached the pricing engine.
    #[error("negative price for {0}")]
    NegativePrice(String),

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),

    /// Errors bubbled up from discount calculation.
    #[error(transparent)]
    Discount(#[from] DiscountError),
}

/// Multiply a unit price by a quantity.
///
/// # Errors
///
/// Returns [`PricingError::Overflow`] if the result does not fit in minor units.
pub fn extend_price<'a>(
    sku: &str,
    unit_price: &Money<'a, Currency>,
    quantity: usize,
) -> Result<Money<'a, Currency>, PricingError> {
    let overflow = || PricingError::Overflow {
        sku: sku.to_string(),
        quantity,
    };

    let quantity = i64::try_from(quantity).map_err(|_err| overflow())?;

    let minor = unit_price
        .try_to_minor_units()?
        .checked_mul(quantity)
        .ok_or_else(overflow)?;

    Ok(Money::from_minor(minor, unit_price.currency()))
}

/// Sum the prices of a list of line items.
///
/// # Errors
///
/// Returns a [`PricingError::Money`] if the line items mix currencies, or
/// [`PricingError::TotalOverflow`] if the sum does not fit in minor units.
pub fn total_price<'a>(
    items: &[LineItem<'a>],
    currency: &'a Currency,
) -> Result<Money<'a, Currency>, PricingError> {
    items
        .iter()
        .try_fold(Money::from_minor(0, currency), |acc, item| {
            add_price(&acc, item.price)
        })
}

/// Add `price` to a running `total`, keeping the result within minor units.
///
/// # Errors
///
/// Returns [`PricingError::Money`] on a currency mismatch and
/// [`PricingError::TotalOverflow`] if the sum does not fit in minor units.
pub fn add_price<'a>(
    total: &Money<'a, Currency>,
    price: Money<'a, Currency>,
) -> Result<Money<'a, Currency>, PricingError> {
    let sum = total.add(price)?;

    sum.try_to_minor_units()
        .map_err(|_err| PricingError::TotalOverflow)?;

    Ok(sum)
}

/// The decimal amount of `money` in major units (e.g. `5399.99`).
pub fn to_decimal(money: &Money<'_, Currency>) -> Decimal {
    *money.amount()
}
