//! Cart Item Index Handler

use std::sync::Arc;

use salvo::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    cart_items::{errors::into_api_error, handlers::CartItemResponse},
    errors::ApiError,
    extensions::*,
    state::State,
};

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct CartItemsResponse {
    /// The cart rows in creation order
    pub data: Vec<CartItemResponse>,
}

/// Returns the cart, joined with product records when `?expand=product`
/// is passed.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<CartItemsResponse>, ApiError> {
    let state = depot.obtain_or_internal::<Arc<State>>()?;
    let expand = req.query::<String>("expand");

    let data = if expand.as_deref() == Some("product") {
        state
            .app
            .cart
            .list_items_with_products()
            .await
            .map_err(into_api_error)?
            .into_iter()
            .map(Into::into)
            .collect()
    } else {
        state
            .app
            .cart
            .list_items()
            .await
            .map_err(into_api_error)?
            .into_iter()
            .map(Into::into)
            .collect()
    };

    Ok(Json(CartItemsResponse { data }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use shopfront_app::domain::cart::{MockCartService, models::CartLine};

    use crate::test_helpers::{make_cart_item, make_product, service, state_with_cart};

    use super::*;

    fn make_service(cart: MockCartService) -> Service {
        service(
            state_with_cart(cart),
            Router::with_path("api/cart-items").get(handler),
        )
    }

    #[tokio::test]
    async fn test_index_returns_cart_rows() -> TestResult {
        let mut cart = MockCartService::new();

        cart.expect_list_items()
            .once()
            .return_once(|| Ok(vec![make_cart_item(1, "p-1", 2, "1")]));
        cart.expect_list_items_with_products().never();

        let response: CartItemsResponse = TestClient::get("http://example.com/api/cart-items")
            .send(&make_service(cart))
            .await
            .take_json()
            .await?;

        assert_eq!(response.data.len(), 1);
        assert_eq!(response.data[0].product_id, "p-1");
        assert_eq!(response.data[0].quantity, 2);
        assert!(response.data[0].product.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_index_expand_joins_products() -> TestResult {
        let mut cart = MockCartService::new();

        cart.expect_list_items().never();
        cart.expect_list_items_with_products()
            .once()
            .return_once(|| {
                Ok(vec![CartLine {
                    item: make_cart_item(1, "p-1", 2, "1"),
                    product: Some(make_product("p-1", 1090)),
                }])
            });

        let response: CartItemsResponse =
            TestClient::get("http://example.com/api/cart-items?expand=product")
                .send(&make_service(cart))
                .await
                .take_json()
                .await?;

        let product = response.data[0].product.as_ref();

        assert_eq!(product.map(|p| p.price_cents), Some(1090));

        Ok(())
    }
}
