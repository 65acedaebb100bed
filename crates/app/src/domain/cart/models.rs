//! Cart Models

use crate::domain::products::models::Product;

/// Delivery option assigned to newly added cart rows.
pub const DEFAULT_DELIVERY_OPTION_ID: &str = "1";

/// Cart quantities must stay within this range.
pub const QUANTITY_RANGE: std::ops::RangeInclusive<u32> = 1..=10;

/// One product line pending checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItem {
    pub id: i64,
    pub product_id: String,
    pub quantity: u32,
    pub delivery_option_id: String,
    pub created_at_ms: i64,
}

/// Request to add a product to the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCartItem {
    pub product_id: String,
    pub quantity: u32,
}

/// Partial update of a cart row; each field is applied independently.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CartItemUpdate {
    pub quantity: Option<u32>,
    pub delivery_option_id: Option<String>,
}

/// A cart row joined with its product record for expanded listings. The
/// product is `None` when the referenced row no longer exists; that is not
/// an error.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub item: CartItem,
    pub product: Option<Product>,
}
