//! Order pricing arithmetic.
//!
//! All money is integer cents. Tax is a flat 10% applied with half-up
//! rounding, pinned so `pre_tax + tax_cents(pre_tax)` always equals
//! `total_with_tax_cents(pre_tax)`.

use jiff::Timestamp;

/// Milliseconds per day, used for delivery estimates.
pub const MS_PER_DAY: i64 = 86_400_000;

/// Cost of a single cart row: product price times quantity plus the flat
/// shipping fee. Shipping is charged per row, not amortized.
#[must_use]
pub fn line_cost_cents(price_cents: u64, quantity: u32, shipping_cents: u64) -> u64 {
    price_cents * u64::from(quantity) + shipping_cents
}

/// Tax-inclusive total: `round(pre_tax * 1.1)`, half-up.
#[must_use]
pub fn total_with_tax_cents(pre_tax_cents: u64) -> u64 {
    (pre_tax_cents * 11 + 5) / 10
}

/// Tax portion only: `round(pre_tax * 0.1)`, half-up.
#[must_use]
pub fn tax_cents(pre_tax_cents: u64) -> u64 {
    (pre_tax_cents + 5) / 10
}

/// Estimated delivery timestamp for a shipping tier, in epoch milliseconds.
#[must_use]
pub fn estimated_delivery_time_ms(now: Timestamp, delivery_days: u32) -> i64 {
    now.as_millisecond() + i64::from(delivery_days) * MS_PER_DAY
}
