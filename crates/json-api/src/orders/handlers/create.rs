//! Place Order Handler

use std::sync::Arc;

use jiff::Timestamp;
use salvo::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    errors::ApiError,
    extensions::*,
    orders::{errors::into_api_error, handlers::OrderResponse},
    state::State,
};

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct OrderCreatedResponse {
    /// The newly placed order
    pub data: OrderResponse,
}

/// Places an order from the current cart contents, then clears the cart.
#[handler]
pub(crate) async fn handler(
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<OrderCreatedResponse>, ApiError> {
    let state = depot.obtain_or_internal::<Arc<State>>()?;

    let order = state
        .app
        .orders
        .place_order(Timestamp::now())
        .await
        .map_err(into_api_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(OrderCreatedResponse { data: order.into() }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use shopfront_app::domain::orders::{MockOrdersService, OrdersServiceError};

    use crate::{
        errors::ErrorBody,
        test_helpers::{make_order, service, state_with_orders},
    };

    use super::*;

    fn make_service(orders: MockOrdersService) -> Service {
        service(
            state_with_orders(orders),
            Router::with_path("api/orders").post(handler),
        )
    }

    #[tokio::test]
    async fn test_create_returns_201_with_order() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_place_order()
            .once()
            .return_once(|_| Ok(make_order("o-1", 5251, "p-1")));

        let mut res = TestClient::post("http://example.com/api/orders")
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        let response: OrderCreatedResponse = res.take_json().await?;

        assert_eq!(response.data.id, "o-1");
        assert_eq!(response.data.total_cost_cents, 5251);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_empty_cart_returns_400() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_place_order()
            .once()
            .return_once(|_| Err(OrdersServiceError::EmptyCart));

        let mut res = TestClient::post("http://example.com/api/orders")
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        let body: ErrorBody = res.take_json().await?;

        assert_eq!(body.message, "cart is empty");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_dangling_product_returns_400() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_place_order()
            .once()
            .return_once(|_| Err(OrdersServiceError::ProductNotFound("ghost".to_string())));

        let mut res = TestClient::post("http://example.com/api/orders")
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        let body: ErrorBody = res.take_json().await?;

        assert_eq!(body.message, "product ghost not found");

        Ok(())
    }
}
