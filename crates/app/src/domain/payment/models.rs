use serde::{Deserialize, Serialize};

/// Cost breakdown for the current contents of the cart.
///
/// All monetary fields are integer cents. An empty cart produces a summary
/// of all zeros.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentSummary {
    /// Sum of the quantities of every cart line.
    pub total_items: u32,

    /// Item cost across the cart, before shipping.
    pub products_cost_cents: u64,

    /// Shipping cost across the cart.
    pub shipping_cost_cents: u64,

    /// `products_cost_cents + shipping_cost_cents`.
    pub total_before_tax_cents: u64,

    /// Tax on the pre-tax total.
    pub tax_cents: u64,

    /// Grand total, tax included.
    pub total_cents: u64,
}
