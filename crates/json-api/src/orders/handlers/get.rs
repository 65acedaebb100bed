//! Get Order Handler

use std::sync::Arc;

use salvo::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    errors::ApiError,
    extensions::*,
    orders::{errors::into_api_error, handlers::OrderResponse},
    state::State,
};

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct OrderEnvelope {
    pub data: OrderResponse,
}

/// Returns a single order by id.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<OrderEnvelope>, ApiError> {
    let state = depot.obtain_or_internal::<Arc<State>>()?;

    let order_id = req
        .param::<String>("orderId")
        .ok_or_else(|| ApiError::BadRequest("orderId is required".to_string()))?;

    let expand = req.query::<String>("expand");

    let data = if expand.as_deref() == Some("products") {
        state
            .app
            .orders
            .get_order_expanded(order_id)
            .await
            .map_err(into_api_error)?
            .into()
    } else {
        state
            .app
            .orders
            .get_order(order_id)
            .await
            .map_err(into_api_error)?
            .into()
    };

    Ok(Json(OrderEnvelope { data }))
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
            Router::with_path("api/orders/{orderId}").get(handler),
        )
    }

    #[tokio::test]
    async fn test_get_returns_order() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_get_order()
            .once()
            .withf(|order_id| order_id == "o-1")
            .return_once(|_| Ok(make_order("o-1", 5251, "p-1")));
        orders.expect_get_order_expanded().never();

        let response: OrderEnvelope = TestClient::get("http://example.com/api/orders/o-1")
            .send(&make_service(orders))
            .await
            .take_json()
            .await?;

        assert_eq!(response.data.id, "o-1");

        Ok(())
    }

    #[tokio::test]
    async fn test_get_expand_uses_expanded_lookup() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders.expect_get_order().never();
        orders
            .expect_get_order_expanded()
            .once()
            .withf(|order_id| order_id == "o-1")
            .return_once(|_| {
                let order = make_order("o-1", 5251, "p-1");
                let products = order
                    .products
                    .iter()
                    .map(|line| shopfront_app::domain::orders::models::ExpandedOrderLine {
                        line: line.clone(),
                        product: None,
                    })
                    .collect();

                Ok(shopfront_app::domain::orders::models::ExpandedOrder { order, products })
            });

        let res = TestClient::get("http://example.com/api/orders/o-1?expand=products")
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_unknown_order_returns_404() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_get_order()
            .once()
            .return_once(|_| Err(OrdersServiceError::NotFound));

        let mut res = TestClient::get("http://example.com/api/orders/missing")
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        let body: ErrorBody = res.take_json().await?;

        assert_eq!(body.status, "error");
        assert_eq!(body.message, "order not found");

        Ok(())
    }
}
