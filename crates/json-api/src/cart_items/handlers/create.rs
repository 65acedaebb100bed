//! Add Cart Item Handler

use std::sync::Arc;

use jiff::Timestamp;
use salvo::prelude::*;
use serde::{Deserialize, Serialize};

use shopfront_app::domain::cart::models::NewCartItem;

use crate::{
    cart_items::errors::into_api_error,
    errors::ApiError,
    extensions::*,
    products::ProductResponse,
    state::State,
};

/// Add Cart Item Request
///
/// Both fields are optional at the parsing layer so their absence renders
/// a 400 rather than an opaque deserialisation failure.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AddCartItemRequest {
    pub product_id: Option<String>,
    pub quantity: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct AddCartItemResponse {
    /// The product that was added
    pub data: ProductResponse,
}

/// Adds a product to the cart, incrementing the row if one already exists.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<AddCartItemResponse>, ApiError> {
    let state = depot.obtain_or_internal::<Arc<State>>()?;

    let body = req
        .parse_json::<AddCartItemRequest>()
        .await
        .map_err(|_ignored| ApiError::BadRequest("invalid request body".to_string()))?;

    let (Some(product_id), Some(quantity)) = (body.product_id, body.quantity) else {
        return Err(ApiError::BadRequest(
            "productId and quantity are required".to_string(),
        ));
    };

    let product = state
        .app
        .cart
        .add_item(
            NewCartItem {
                product_id,
                quantity,
            },
            Timestamp::now(),
        )
        .await
        .map_err(into_api_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(AddCartItemResponse {
        data: product.into(),
    }))
}
