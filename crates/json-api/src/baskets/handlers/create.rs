//! Price Basket Handler

use std::sync::Arc;

use rust_decimal::prelude::ToPrimitive;
use rusty_money::{Money, iso::Currency};
use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use checkout::prelude::*;

use crate::{
    baskets::errors::{catalog_status_error, pricing_status_error},
    extensions::*,
    state::State,
};

/// Price Basket Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PriceBasketRequest {
    /// Requested SKUs, one entry per unit
    pub sku: Vec<String>,
}

/// Basket Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BasketItemResponse {
    /// Stock keeping unit
    pub sku: String,

    /// Product name
    pub name: String,

    /// Line price after promotions
    pub price: f64,

    /// Requested units
    pub qty: usize,
}

/// Basket Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BasketResponse {
    /// Priced lines, in catalog order
    pub products: Vec<BasketItemResponse>,

    /// Free items earned through promotions
    pub bonus: Vec<BasketItemResponse>,

    /// Sum of the line prices
    pub total: f64,
}

impl TryFrom<&Basket<'_>> for BasketResponse {
    type Error = StatusError;

    fn try_from(basket: &Basket<'_>) -> Result<Self, Self::Error> {
        let products = basket
            .products()
            .iter()
            .map(|line| item(&line.sku, &line.name, &line.price, line.quantity))
            .collect::<Result<_, _>>()?;

        let bonus = basket
            .bonus()
            .iter()
            .map(|bonus| item(&bonus.sku, &bonus.name, &bonus.price, bonus.quantity))
            .collect::<Result<_, _>>()?;

        Ok(Self {
            products,
            bonus,
            total: amount(&basket.total())?,
        })
    }
}

fn item(
    sku: &str,
    name: &str,
    price: &Money<'_, Currency>,
    qty: usize,
) -> Result<BasketItemResponse, StatusError> {
    Ok(BasketItemResponse {
        sku: sku.to_string(),
        name: name.to_string(),
        price: amount(price)?,
        qty,
    })
}

fn amount(money: &Money<'_, Currency>) -> Result<f64, StatusError> {
    to_decimal(money)
        .to_f64()
        .ok_or("amount out of range")
        .or_500("failed to serialise basket")
}

/// Price Basket Handler
///
/// Prices the requested SKUs against the current catalog.
#[endpoint(
    tags("baskets"),
    summary = "Price Basket",
    responses(
        (status_code = StatusCode::OK, description = "Basket priced"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::SERVICE_UNAVAILABLE, description = "Catalog unavailable"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<PriceBasketRequest>,
    depot: &mut Depot,
) -> Result<Json<BasketResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    let catalog = state
        .catalog
        .load_catalog()
        .await
        .map_err(|error| catalog_status_error(&error))?;

    let basket = Basket::compute(&catalog, request.sku.as_slice(), &state.promotions)
        .map_err(|error| pricing_status_error(&error))?;

    Ok(Json(BasketResponse::try_from(&basket)?))
}
