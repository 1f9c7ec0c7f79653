//! Promotion Table
//!
//! Promotions keyed by the SKU they apply to, optionally loaded from YAML:
//!
//! ```yaml
//! promotions:
//!   43N23P:
//!     type: bundled_bonus
//!     bonus: "234234"
//!   120P90:
//!     type: every_nth_free
//!     n: 3
//!   A304SD:
//!     type: percent_off_at_exact_quantity
//!     quantity: 3
//!     percent: 10%
//! ```

use std::{fs, num::NonZeroUsize, path::Path};

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use serde::Deserialize;
use thiserror::Error;

use crate::promotions::{
    Promotion, bundled_bonus::BundledBonusPromotion, every_nth_free::EveryNthFreePromotion,
    exact_quantity::ExactQuantityDiscountPromotion,
};

/// SKU granted free with a MacBook Pro in the standard table
pub const APPLE_TV_SKU: &str = "234234";

/// MacBook Pro SKU
pub const MACBOOK_PRO_SKU: &str = "43N23P";

/// Google Home SKU
pub const GOOGLE_HOME_SKU: &str = "120P90";

/// Alexa Speaker SKU
pub const ALEXA_SPEAKER_SKU: &str = "A304SD";

/// Promotion table loading errors
#[derive(Debug, Error)]
pub enum PromotionsError {
    /// IO error reading the promotions file
    #[error("failed to read promotions file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("failed to parse promotions YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid percentage format
    #[error("invalid percentage format: {0}")]
    InvalidPercentage(String),

    /// Invalid promotion data
    #[error("invalid promotion for {sku}: {reason}")]
    InvalidPromotion {
        /// SKU the promotion is keyed by
        sku: String,

        /// What is wrong with it
        reason: &'static str,
    },
}

/// Promotions keyed by SKU. At most one promotion per SKU.
#[derive(Debug, Clone, Default)]
pub struct PromotionTable {
    promotions: FxHashMap<String, Promotion>,
}

impl PromotionTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The checkout's standing promotions.
    ///
    /// - MacBook Pro comes with a free Apple TV.
    /// - Google Home: buy more than 3, every third one is free.
    /// - Alexa Speaker: 10% off when buying exactly 3.
    pub fn standard() -> Self {
        Self::new()
            .with(MACBOOK_PRO_SKU, BundledBonusPromotion::new(APPLE_TV_SKU))
            .with(
                GOOGLE_HOME_SKU,
                EveryNthFreePromotion::new(NonZeroUsize::MIN.saturating_add(2)),
            )
            .with(
                ALEXA_SPEAKER_SKU,
                ExactQuantityDiscountPromotion::new(3, Percentage::from(Decimal::new(1, 1))),
            )
    }

    /// Add a promotion for `sku`, replacing any existing one.
    #[must_use]
    pub fn with(mut self, sku: impl Into<String>, promotion: impl Into<Promotion>) -> Self {
        self.insert(sku, promotion);
        self
    }

    /// Insert a promotion for `sku`, returning the one it replaced.
    pub fn insert(
        &mut self,
        sku: impl Into<String>,
        promotion: impl Into<Promotion>,
    ) -> Option<Promotion> {
        self.promotions.insert(sku.into(), promotion.into())
    }

    /// Get the promotion for `sku`.
    pub fn get(&self, sku: &str) -> Option<&Promotion> {
        self.promotions.get(sku)
    }

    /// Get the number of promotions.
    pub fn len(&self) -> usize {
        self.promotions.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.promotions.is_empty()
    }

    /// Load a promotion table from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or a promotion is invalid.
    pub fn load_yaml(path: impl AsRef<Path>) -> Result<Self, PromotionsError> {
        let contents = fs::read_to_string(path)?;

        Self::from_yaml(&contents)
    }

    /// Parse a promotion table from YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or a promotion is invalid.
    pub fn from_yaml(contents: &str) -> Result<Self, PromotionsError> {
        let file: PromotionsFile = serde_norway::from_str(contents)?;

        file.promotions
            .into_iter()
            .try_fold(Self::new(), |table, (sku, entry)| {
                let promotion = entry.try_into_promotion(&sku)?;

                Ok(table.with(sku, promotion))
            })
    }
}

/// Wrapper for promotions in YAML
#[derive(Debug, Deserialize)]
struct PromotionsFile {
    promotions: FxHashMap<String, PromotionEntry>,
}

/// Promotion entry from YAML
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum PromotionEntry {
    BundledBonus { bonus: String },
    EveryNthFree { n: usize },
    PercentOffAtExactQuantity { quantity: usize, percent: String },
}

impl PromotionEntry {
    fn try_into_promotion(self, sku: &str) -> Result<Promotion, PromotionsError> {
        let invalid = |reason| PromotionsError::InvalidPromotion {
            sku: sku.to_string(),
            reason,
        };

        match self {
            PromotionEntry::BundledBonus { bonus } => {
                if bonus.trim().is_empty() {
                    return Err(invalid("bonus SKU must not be empty"));
                }

                Ok(BundledBonusPromotion::new(bonus).into())
            }
            PromotionEntry::EveryNthFree { n } => {
                let n = NonZeroUsize::new(n).ok_or_else(|| invalid("n must be at least 1"))?;

                Ok(EveryNthFreePromotion::new(n).into())
            }
            PromotionEntry::PercentOffAtExactQuantity { quantity, percent } => {
                if quantity == 0 {
                    return Err(invalid("quantity must be at least 1"));
                }

                let percent = parse_percentage(&percent)?;
                let fraction = percent * Decimal::ONE;

                if fraction < Decimal::ZERO || fraction > Decimal::ONE {
                    return Err(invalid("percent must be between 0% and 100%"));
                }

                Ok(ExactQuantityDiscountPromotion::new(quantity, percent).into())
            }
        }
    }
}

/// Parse percentage string (e.g., "15%" or "0.15") into a `Percentage`
///
/// # Errors
///
/// Returns an error if the string is not a decimal number, or is too large to
/// represent.
pub fn parse_percentage(s: &str) -> Result<Percentage, PromotionsError> {
    let invalid = || PromotionsError::InvalidPercentage(s.to_string());
    let trimmed = s.trim();

    let (number, divisor) = match trimmed.strip_suffix('%') {
        Some(percent_str) => (percent_str.trim(), Decimal::ONE_HUNDRED),
        None => (trimmed, Decimal::ONE),
    };

    let value = number
        .parse::<Decimal>()
        .or_else(|_err| Decimal::from_scientific(number))
        .map_err(|_err| invalid())?;

    let fraction = value.checked_div(divisor).ok_or_else(invalid)?;

    Ok(Percentage::from(fraction))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn standard_table_covers_known_skus() {
        let table = PromotionTable::standard();

        assert_eq!(table.len(), 3);
        assert!(matches!(
            table.get(MACBOOK_PRO_SKU),
            Some(Promotion::BundledBonus(promo)) if promo.bonus_sku() == APPLE_TV_SKU
        ));
        assert!(matches!(
            table.get(GOOGLE_HOME_SKU),
            Some(Promotion::EveryNthFree(promo)) if promo.n().get() == 3
        ));
        assert!(matches!(
            table.get(ALEXA_SPEAKER_SKU),
            Some(Promotion::PercentOffAtExactQuantity(promo))
                if promo.quantity() == 3 && promo.percent() == Percentage::from(Decimal::new(1, 1))
        ));
        assert!(table.get(APPLE_TV_SKU).is_none());
    }

    #[test]
    fn insert_replaces_existing_promotion() {
        let mut table = PromotionTable::new();

        assert!(table.insert("X", BundledBonusPromotion::new("Y")).is_none());

        let replaced = table.insert("X", BundledBonusPromotion::new("Z"));

        assert!(matches!(
            replaced,
            Some(Promotion::BundledBonus(promo)) if promo.bonus_sku() == "Y"
        ));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn from_yaml_reads_every_promotion_type() -> TestResult {
        let yaml = r#"
promotions:
  43N23P:
    type: bundled_bonus
    bonus: "234234"
  120P90:
    type: every_nth_free
    n: 3
  A304SD:
    type: percent_off_at_exact_quantity
    quantity: 3
    percent: 10%
"#;

        let table = PromotionTable::from_yaml(yaml)?;

        assert_eq!(table.len(), 3);
        assert_eq!(table.get("43N23P").map(Promotion::kind), Some("bundled_bonus"));
        assert_eq!(table.get("120P90").map(Promotion::kind), Some("every_nth_free"));
        assert!(matches!(
            table.get("A304SD"),
            Some(Promotion::PercentOffAtExactQuantity(promo))
                if promo.percent() == Percentage::from(Decimal::new(1, 1))
        ));

        Ok(())
    }

    #[test]
    fn from_yaml_rejects_unknown_type() {
        let yaml = r"
promotions:
  X:
    type: buy_one_get_two
";

        assert!(matches!(
            PromotionTable::from_yaml(yaml),
            Err(PromotionsError::Yaml(_))
        ));
    }

    #[test]
    fn parse_percentage_accepts_both_notations() -> TestResult {
        let expected = Percentage::from(Decimal::new(15, 2));

        assert_eq!(parse_percentage("15%")?, expected);
        assert_eq!(parse_percentage(" 0.15 ")?, expected);
        assert_eq!(parse_percentage("1.5e-1")?, expected);

        Ok(())
    }

    #[test]
    fn parse_percentage_rejects_out_of_range_numbers() {
        for input in ["1e300%", "1e300", "-1e300", "NaN", "inf", "ten%", "invalid"] {
            assert!(
                matches!(
                    parse_percentage(input),
                    Err(PromotionsError::InvalidPercentage(value)) if value == input
                ),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn from_yaml_rejects_huge_percentage() {
        let yaml = r#"
promotions:
  A304SD:
    type: percent_off_at_exact_quantity
    quantity: 3
    percent: "1e300%"
"#;

        assert!(matches!(
            PromotionTable::from_yaml(yaml),
            Err(PromotionsError::InvalidPercentage(_))
        ));
    }

    #[test]
    fn from_yaml_rejects_zero_n() {
        let yaml = r"
promotions:
  X:
    type: every_nth_free
    n: 0
";

        assert!(matches!(
            PromotionTable::from_yaml(yaml),
            Err(PromotionsError::InvalidPromotion { sku, .. }) if sku == "X"
        ));
    }

    #[test]
    fn from_yaml_rejects_percent_over_one_hundred() {
        let yaml = r"
promotions:
  X:
    type: percent_off_at_exact_quantity
    quantity: 2
    percent: 150%
";

        assert!(matches!(
            PromotionTable::from_yaml(yaml),
            Err(PromotionsError::InvalidPromotion { .. })
        ));
    }
}
