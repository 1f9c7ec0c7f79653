//! Errors

use salvo::http::StatusError;
use tracing::error;

use checkout::prelude::{CatalogError, PricingError};

pub(crate) fn catalog_status_error(error: &CatalogError) -> StatusError {
    error!("failed to load catalog: {error}");

    StatusError::service_unavailable().brief("Catalog unavailable")
}

pub(crate) fn pricing_status_error(error: &PricingError) -> StatusError {
    error!("failed to price basket: {error}");

    StatusError::internal_server_error()
}
