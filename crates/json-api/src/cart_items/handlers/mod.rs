//! Cart Item Handlers

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod index;
pub(crate) mod update;

use serde::{Deserialize, Serialize};

use shopfront_app::domain::cart::models::{CartItem, CartLine};

use crate::products::ProductResponse;

/// Cart row representation shared by the cart endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CartItemResponse {
    pub id: i64,
    pub product_id: String,
    pub quantity: u32,
    pub delivery_option_id: String,

    /// Only present with `?expand=product`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<ProductResponse>,
}

impl From<CartItem> for CartItemResponse {
    fn from(item: CartItem) -> Self {
        Self {
            id: item.id,
            product_id: item.product_id,
            quantity: item.quantity,
            delivery_option_id: item.delivery_option_id,
            product: None,
        }
    }
}

impl From<CartLine> for CartItemResponse {
    fn from(line: CartLine) -> Self {
        Self {
            product: line.product.map(Into::into),
            ..line.item.into()
        }
    }
}
