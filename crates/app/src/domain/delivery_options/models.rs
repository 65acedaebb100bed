//! Delivery Option Models

use jiff::Timestamp;

use crate::domain::pricing;

/// A shipping tier with a flat fee and lead time in days. Static reference
/// data seeded at bootstrap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryOption {
    pub id: String,
    pub delivery_days: u32,
    pub price_cents: u64,
    pub created_at_ms: i64,
}

impl DeliveryOption {
    /// Estimated arrival for this tier if ordered at `now`.
    #[must_use]
    pub fn estimated_delivery_time_ms(&self, now: Timestamp) -> i64 {
        pricing::estimated_delivery_time_ms(now, self.delivery_days)
    }
}

/// A delivery option decorated with its estimated arrival timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstimatedDeliveryOption {
    pub option: DeliveryOption,
    pub estimated_delivery_time_ms: i64,
}
