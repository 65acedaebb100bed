//! Order Index Handler

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
pub(crate) struct OrdersResponse {
    /// The orders, newest first
    pub data: Vec<OrderResponse>,
}

/// Returns order history, joined with the live catalog when
/// `?expand=products` is passed.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<OrdersResponse>, ApiError> {
    let state = depot.obtain_or_internal::<Arc<State>>()?;
    let expand = req.query::<String>("expand");

    let data = if expand.as_deref() == Some("products") {
        state
            .app
            .orders
            .list_orders_expanded()
            .await
            .map_err(into_api_error)?
            .into_iter()
            .map(Into::into)
            .collect()
    } else {
        state
            .app
            .orders
            .list_orders()
            .await
            .map_err(into_api_error)?
            .into_iter()
            .map(Into::into)
            .collect()
    };

    Ok(Json(OrdersResponse { data }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use shopfront_app::domain::orders::{
        MockOrdersService,
        models::{ExpandedOrder, ExpandedOrderLine},
    };

    use crate::test_helpers::{make_order, make_product, service, state_with_orders};

    use super::*;

    fn make_service(orders: MockOrdersService) -> Service {
        service(
            state_with_orders(orders),
            Router::with_path("api/orders").get(handler),
        )
    }

    #[tokio::test]
    async fn test_index_returns_orders() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_list_orders()
            .once()
            .return_once(|| Ok(vec![make_order("o-1", 5251, "p-1")]));
        orders.expect_list_orders_expanded().never();

        let response: OrdersResponse = TestClient::get("http://example.com/api/orders")
            .send(&make_service(orders))
            .await
            .take_json()
            .await?;

        assert_eq!(response.data.len(), 1);
        assert_eq!(response.data[0].id, "o-1");
        assert_eq!(response.data[0].total_cost_cents, 5251);
        assert!(response.data[0].products[0].product_details.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_index_expand_adds_product_details() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders.expect_list_orders().never();
        orders
            .expect_list_orders_expanded()
            .once()
            .return_once(|| {
                let order = make_order("o-1", 5251, "p-1");
                let line = order.products[0].clone();

                Ok(vec![ExpandedOrder {
                    order,
                    products: vec![ExpandedOrderLine {
                        line,
                        product: Some(make_product("p-1", 1090)),
                    }],
                }])
            });

        let response: OrdersResponse =
            TestClient::get("http://example.com/api/orders?expand=products")
                .send(&make_service(orders))
                .await
                .take_json()
                .await?;

        let details = response.data[0].products[0].product_details.as_ref();

        assert_eq!(details.map(|p| p.id.as_str()), Some("p-1"));

        Ok(())
    }
}
