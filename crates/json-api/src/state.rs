//! State

use std::sync::Arc;

use checkout::promotions::table::PromotionTable;

use crate::catalog::CatalogService;

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) catalog: Arc<dyn CatalogService>,
    pub(crate) promotions: PromotionTable,
}

impl State {
    #[must_use]
    pub(crate) fn new(catalog: Arc<dyn CatalogService>, promotions: PromotionTable) -> Self {
        Self {
            catalog,
            promotions,
        }
    }

    #[must_use]
    pub(crate) fn shared(catalog: Arc<dyn CatalogService>, promotions: PromotionTable) -> Arc<Self> {
        Arc::new(Self::new(catalog, promotions))
    }
}
