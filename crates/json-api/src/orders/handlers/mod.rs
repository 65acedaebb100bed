//! Order Handlers

pub(crate) mod create;
pub(crate) mod get;
pub(crate) mod index;

use serde::{Deserialize, Serialize};

use shopfront_app::domain::orders::models::{ExpandedOrder, ExpandedOrderLine, Order, OrderLine};

use crate::products::ProductResponse;

/// Order representation shared by the order endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderResponse {
    pub id: String,
    pub order_time_ms: i64,
    pub total_cost_cents: u64,
    pub products: Vec<OrderLineResponse>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderLineResponse {
    pub product_id: String,
    pub quantity: u32,
    pub estimated_delivery_time_ms: i64,

    /// Only present with `?expand=products`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_details: Option<ProductResponse>,
}

impl From<OrderLine> for OrderLineResponse {
    fn from(line: OrderLine) -> Self {
        Self {
            product_id: line.product_id,
            quantity: line.quantity,
            estimated_delivery_time_ms: line.estimated_delivery_time_ms,
            product_details: None,
        }
    }
}

impl From<ExpandedOrderLine> for OrderLineResponse {
    fn from(line: ExpandedOrderLine) -> Self {
        Self {
            product_details: line.product.map(Into::into),
            ..line.line.into()
        }
    }
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            order_time_ms: order.order_time_ms,
            total_cost_cents: order.total_cost_cents,
            products: order.products.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<ExpandedOrder> for OrderResponse {
    fn from(expanded: ExpandedOrder) -> Self {
        Self {
            id: expanded.order.id,
            order_time_ms: expanded.order.order_time_ms,
            total_cost_cents: expanded.order.total_cost_cents,
            products: expanded.products.into_iter().map(Into::into).collect(),
        }
    }
}
