//! Checkout scenarios against the reference catalog.
//!
//! Reference catalog:
//!
//! | SKU    | Name          | Price   |
//! |--------|---------------|---------|
//! | 43N23P | MacBook Pro   | 5399.99 |
//! | 234234 | Apple TV      |  109.50 |
//! | 120P90 | Google Home   |   49.99 |
//! | A304SD | Alexa Speaker |  109.50 |

use rusty_money::{Money, iso::USD};
use testresult::TestResult;

use checkout::{
    basket::{Basket, compute_basket},
    catalog::{Catalog, CatalogError},
    pricing::total_price,
    products::Product,
    promotions::table::PromotionTable,
};

fn reference_catalog() -> Result<Catalog<'static>, CatalogError> {
    Catalog::with_products(
        [
            Product::new("43N23P", "MacBook Pro", Money::from_minor(5399_99, USD)),
            Product::new("234234", "Apple TV", Money::from_minor(109_50, USD)),
            Product::new("120P90", "Google Home", Money::from_minor(49_99, USD)),
            Product::new("A304SD", "Alexa Speaker", Money::from_minor(109_50, USD)),
        ],
        USD,
    )
}

fn repeat(sku: &str, n: usize) -> Vec<String> {
    vec![sku.to_string(); n]
}

#[test]
fn macbook_earns_free_apple_tv() -> TestResult {
    let catalog = reference_catalog()?;

    let basket = compute_basket(&catalog, &["43N23P"])?;

    let [line] = basket.products() else {
        return Err("expected exactly one line".into());
    };

    assert_eq!(line.sku, "43N23P");
    assert_eq!(line.name, "MacBook Pro");
    assert_eq!(line.price, Money::from_minor(5399_99, USD));
    assert_eq!(line.quantity, 1);

    let [bonus] = basket.bonus() else {
        return Err("expected exactly one bonus".into());
    };

    assert_eq!(bonus.sku, "234234");
    assert_eq!(bonus.name, "Apple TV");
    assert_eq!(bonus.price, Money::from_minor(0, USD));
    assert_eq!(bonus.quantity, 1);

    assert_eq!(basket.total(), Money::from_minor(5399_99, USD));

    Ok(())
}

#[test]
fn two_macbooks_are_charged_once() -> TestResult {
    let catalog = reference_catalog()?;

    let basket = compute_basket(&catalog, &repeat("43N23P", 2))?;

    let line = basket.products().first().ok_or("missing line")?;

    assert_eq!(line.quantity, 2);
    assert_eq!(line.price, Money::from_minor(5399_99, USD));
    assert_eq!(basket.bonus().len(), 1);

    Ok(())
}

#[test]
fn three_google_homes_get_no_discount() -> TestResult {
    let catalog = reference_catalog()?;

    let basket = compute_basket(&catalog, &repeat("120P90", 3))?;

    let line = basket.products().first().ok_or("missing line")?;

    assert_eq!(line.price, Money::from_minor(149_97, USD));
    assert_eq!(line.quantity, 3);
    assert_eq!(basket.total(), Money::from_minor(149_97, USD));

    Ok(())
}

#[test]
fn four_google_homes_pay_for_three() -> TestResult {
    let catalog = reference_catalog()?;

    let basket = compute_basket(&catalog, &repeat("120P90", 4))?;

    let line = basket.products().first().ok_or("missing line")?;

    assert_eq!(line.price, Money::from_minor(149_97, USD));
    assert_eq!(line.quantity, 4);

    Ok(())
}

#[test]
fn three_alexas_get_ten_percent_off() -> TestResult {
    let catalog = reference_catalog()?;

    let basket = compute_basket(&catalog, &repeat("A304SD", 3))?;

    assert_eq!(basket.total(), Money::from_minor(295_65, USD));

    Ok(())
}

#[test]
fn one_alexa_is_full_price() -> TestResult {
    let catalog = reference_catalog()?;

    let basket = compute_basket(&catalog, &["A304SD"])?;

    assert_eq!(basket.total(), Money::from_minor(109_50, USD));

    Ok(())
}

#[test]
fn two_or_four_alexas_are_full_price() -> TestResult {
    let catalog = reference_catalog()?;

    let two = compute_basket(&catalog, &repeat("A304SD", 2))?;
    let four = compute_basket(&catalog, &repeat("A304SD", 4))?;

    assert_eq!(two.total(), Money::from_minor(219_00, USD));
    assert_eq!(four.total(), Money::from_minor(438_00, USD));

    Ok(())
}

#[test]
fn unknown_sku_is_ignored() -> TestResult {
    let catalog = reference_catalog()?;

    let basket = compute_basket(&catalog, &["DOESNOTEXIST", "A304SD"])?;

    assert_eq!(basket.len(), 1);
    assert!(basket.products().iter().all(|line| line.sku != "DOESNOTEXIST"));
    assert_eq!(basket.total(), Money::from_minor(109_50, USD));

    Ok(())
}

#[test]
fn only_unknown_skus_yield_empty_basket() -> TestResult {
    let catalog = reference_catalog()?;

    let basket = compute_basket(&catalog, &["NOPE", "NADA"])?;

    assert!(basket.is_empty());
    assert!(basket.bonus().is_empty());
    assert_eq!(basket.total(), Money::from_minor(0, USD));

    Ok(())
}

#[test]
fn mixed_basket_totals_every_rule() -> TestResult {
    let catalog = reference_catalog()?;

    let mut requested = repeat("120P90", 4);
    requested.extend(repeat("A304SD", 3));
    requested.push("43N23P".to_string());
    requested.push("234234".to_string());

    let basket = compute_basket(&catalog, &requested)?;

    let skus: Vec<&str> = basket.products().iter().map(|l| l.sku.as_str()).collect();

    assert_eq!(skus, ["43N23P", "234234", "120P90", "A304SD"]);
    assert_eq!(basket.bonus().len(), 1);

    // 5399.99 + 109.50 + 149.97 + 295.65
    assert_eq!(basket.total(), Money::from_minor(5955_11, USD));
    assert_eq!(basket.total(), total_price(basket.products(), USD)?);

    Ok(())
}

#[test]
fn computing_twice_is_identical() -> TestResult {
    let catalog = reference_catalog()?;
    let promotions = PromotionTable::standard();
    let requested = ["A304SD", "43N23P", "A304SD", "120P90", "A304SD"];

    let first = Basket::compute(&catalog, &requested, &promotions)?;
    let second = Basket::compute(&catalog, &requested, &promotions)?;

    assert_eq!(first, second);

    Ok(())
}

#[test]
fn empty_promotion_table_charges_full_price() -> TestResult {
    let catalog = reference_catalog()?;

    let basket = Basket::compute(&catalog, &repeat("120P90", 4), &PromotionTable::new())?;

    assert_eq!(basket.total(), Money::from_minor(199_96, USD));
    assert!(basket.bonus().is_empty());

    Ok(())
}
