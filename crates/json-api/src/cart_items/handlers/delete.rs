//! Delete Cart Item Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{cart_items::errors::into_api_error, errors::ApiError, extensions::*, state::State};

/// Removes the cart row for a product.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<StatusCode, ApiError> {
    let state = depot.obtain_or_internal::<Arc<State>>()?;

    let product_id = req
        .param::<String>("productId")
        .ok_or_else(|| ApiError::BadRequest("productId is required".to_string()))?;

    state
        .app
        .cart
        .remove_item(product_id)
        .await
        .map_err(into_api_error)?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use testresult::TestResult;

    use shopfront_app::domain::cart::{CartServiceError, MockCartService};

    use crate::test_helpers::{service, state_with_cart};

    use super::*;

    fn make_service(cart: MockCartService) -> Service {
        service(
            state_with_cart(cart),
            Router::with_path("api/cart-items/{productId}").delete(handler),
        )
    }

    #[tokio::test]
    async fn test_delete_returns_204() -> TestResult {
        let mut cart = MockCartService::new();

        cart.expect_remove_item()
            .once()
            .withf(|product_id| product_id == "p-1")
            .return_once(|_| Ok(()));

        let res = TestClient::delete("http://example.com/api/cart-items/p-1")
            .send(&make_service(cart))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NO_CONTENT));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_unknown_row_returns_404() -> TestResult {
        let mut cart = MockCartService::new();

        cart.expect_remove_item()
            .once()
            .return_once(|_| Err(CartServiceError::NotFound));

        let res = TestClient::delete("http://example.com/api/cart-items/missing")
            .send(&make_service(cart))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
