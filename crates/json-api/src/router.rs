//! App Router

use salvo::Router;

use crate::{baskets, healthcheck};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("basket").post(baskets::create::handler))
}
