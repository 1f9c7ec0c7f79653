//! Test helpers.

use std::sync::Arc;

use rusty_money::{Money, iso::USD};
use salvo::{affix_state::inject, prelude::*};

use checkout::prelude::*;

use crate::{catalog::MockCatalogService, state::State};

/// The four-product catalog from `fixtures/data.json`.
pub(crate) fn reference_catalog() -> Result<Catalog<'static>, CatalogError> {
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

pub(crate) fn state_with_catalog(catalog: MockCatalogService) -> Arc<State> {
    State::shared(Arc::new(catalog), PromotionTable::standard())
}

pub(crate) fn basket_service(catalog: MockCatalogService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_catalog(catalog)))
            .push(route),
    )
}
