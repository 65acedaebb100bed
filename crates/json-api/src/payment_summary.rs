//! Payment Summary Handler

use std::sync::Arc;

use salvo::prelude::*;
use serde::{Deserialize, Serialize};

use shopfront_app::domain::payment::models::PaymentSummary;

use crate::{errors::ApiError, extensions::*, state::State};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PaymentSummaryResponse {
    pub total_items: u32,
    pub products_cost_cents: u64,
    pub shipping_cost_cents: u64,
    pub total_before_tax_cents: u64,
    pub tax_cents: u64,
    pub total_cents: u64,
}

impl From<PaymentSummary> for PaymentSummaryResponse {
    fn from(summary: PaymentSummary) -> Self {
        Self {
            total_items: summary.total_items,
            products_cost_cents: summary.products_cost_cents,
            shipping_cost_cents: summary.shipping_cost_cents,
            total_before_tax_cents: summary.total_before_tax_cents,
            tax_cents: summary.tax_cents,
            total_cents: summary.total_cents,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct PaymentSummaryEnvelope {
    pub data: PaymentSummaryResponse,
}

/// Returns the cost breakdown for the current cart.
#[handler]
pub(crate) async fn get(depot: &mut Depot) -> Result<Json<PaymentSummaryEnvelope>, ApiError> {
    let state = depot.obtain_or_internal::<Arc<State>>()?;

    let summary = state
        .app
        .payment
        .payment_summary()
        .await
        .or_internal("failed to calculate payment summary")?;

    Ok(Json(PaymentSummaryEnvelope {
        data: summary.into(),
    }))
}
