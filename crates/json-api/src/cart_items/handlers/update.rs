//! Update Cart Item Handler

use std::sync::Arc;

use salvo::prelude::*;
use serde::{Deserialize, Serialize};

use shopfront_app::domain::cart::models::CartItemUpdate;

use crate::{
    cart_items::{errors::into_api_error, handlers::CartItemResponse},
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Update Cart Item Request
///
/// Omitted fields keep their stored values.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateCartItemRequest {
    pub quantity: Option<u32>,
    pub delivery_option_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct UpdateCartItemResponse {
    /// The updated cart row
    pub data: CartItemResponse,
}

/// Partially updates the cart row for a product.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<UpdateCartItemResponse>, ApiError> {
    let state = depot.obtain_or_internal::<Arc<State>>()?;

    let product_id = req
        .param::<String>("productId")
        .ok_or_else(|| ApiError::BadRequest("productId is required".to_string()))?;

    let body = req
        .parse_json::<UpdateCartItemRequest>()
        .await
        .map_err(|_ignored| ApiError::BadRequest("invalid request body".to_string()))?;

    let item = state
        .app
        .cart
        .update_item(
            product_id,
            CartItemUpdate {
                quantity: body.quantity,
                delivery_option_id: body.delivery_option_id,
            },
        )
        .await
        .map_err(into_api_error)?;

    Ok(Json(UpdateCartItemResponse { data: item.into() }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use shopfront_app::domain::cart::{CartServiceError, MockCartService};

    use crate::{
        errors::ErrorBody,
        test_helpers::{make_cart_item, service, state_with_cart},
    };

    use super::*;

    fn make_service(cart: MockCartService) -> Service {
        service(
            state_with_cart(cart),
            Router::with_path("api/cart-items/{productId}").put(handler),
        )
    }

    #[tokio::test]
    async fn test_update_changes_quantity() -> TestResult {
        let mut cart = MockCartService::new();

        cart.expect_update_item()
            .once()
            .withf(|product_id, update| {
                product_id == "p-1"
                    && update.quantity == Some(5)
                    && update.delivery_option_id.is_none()
            })
            .return_once(|_, _| Ok(make_cart_item(1, "p-1", 5, "1")));

        let response: UpdateCartItemResponse =
            TestClient::put("http://example.com/api/cart-items/p-1")
                .json(&UpdateCartItemRequest {
                    quantity: Some(5),
                    delivery_option_id: None,
                })
                .send(&make_service(cart))
                .await
                .take_json()
                .await?;

        assert_eq!(response.data.quantity, 5);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_unknown_row_returns_404() -> TestResult {
        let mut cart = MockCartService::new();

        cart.expect_update_item()
            .once()
            .return_once(|_, _| Err(CartServiceError::NotFound));

        let mut res = TestClient::put("http://example.com/api/cart-items/missing")
            .json(&UpdateCartItemRequest {
                quantity: Some(1),
                delivery_option_id: None,
            })
            .send(&make_service(cart))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        let body: ErrorBody = res.take_json().await?;

        assert_eq!(body.message, "cart item not found");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_unknown_delivery_option_returns_400() -> TestResult {
        let mut cart = MockCartService::new();

        cart.expect_update_item()
            .once()
            .return_once(|_, _| Err(CartServiceError::DeliveryOptionNotFound("99".to_string())));

        let res = TestClient::put("http://example.com/api/cart-items/p-1")
            .json(&UpdateCartItemRequest {
                quantity: None,
                delivery_option_id: Some("99".to_string()),
            })
            .send(&make_service(cart))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
