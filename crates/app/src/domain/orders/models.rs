//! Order Models

use serde::{Deserialize, Serialize};

use crate::domain::products::models::Product;

/// An immutable priced snapshot created from the cart at checkout time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: String,
    pub order_time_ms: i64,
    pub total_cost_cents: u64,
    pub products: Vec<OrderLine>,
}

/// One denormalized order line. Stored as JSON so historical orders are
/// immune to later product and delivery-option changes. No price snapshot is
/// kept; only the total survives price changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub product_id: String,
    pub quantity: u32,
    pub estimated_delivery_time_ms: i64,
}

/// An order whose lines are joined with the live product records. The join
/// reflects current catalog data, so expanded prices can disagree with
/// `total_cost_cents`; that is accepted behavior.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpandedOrder {
    pub order: Order,
    pub products: Vec<ExpandedOrderLine>,
}

/// An order line with its live product record, if the product still exists.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpandedOrderLine {
    pub line: OrderLine,
    pub product: Option<Product>,
}
