//! Delivery Options Handler

use std::sync::Arc;

use jiff::Timestamp;
use salvo::prelude::*;
use serde::{Deserialize, Serialize};

use shopfront_app::domain::delivery_options::models::{DeliveryOption, EstimatedDeliveryOption};

use crate::{errors::ApiError, extensions::*, state::State};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DeliveryOptionResponse {
    pub id: String,
    pub delivery_days: u32,
    pub price_cents: u64,

    /// Only present with `?expand=estimatedDeliveryTime`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_delivery_time_ms: Option<i64>,
}

impl From<DeliveryOption> for DeliveryOptionResponse {
    fn from(option: DeliveryOption) -> Self {
        Self {
            id: option.id,
            delivery_days: option.delivery_days,
            price_cents: option.price_cents,
            estimated_delivery_time_ms: None,
        }
    }
}

impl From<EstimatedDeliveryOption> for DeliveryOptionResponse {
    fn from(estimated: EstimatedDeliveryOption) -> Self {
        Self {
            estimated_delivery_time_ms: Some(estimated.estimated_delivery_time_ms),
            ..estimated.option.into()
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct DeliveryOptionsResponse {
    /// The list of shipping tiers
    pub data: Vec<DeliveryOptionResponse>,
}

/// Returns the shipping tiers, with arrival estimates when
/// `?expand=estimatedDeliveryTime` is passed.
#[handler]
pub(crate) async fn index(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<DeliveryOptionsResponse>, ApiError> {
    let state = depot.obtain_or_internal::<Arc<State>>()?;
    let expand = req.query::<String>("expand");

    let data = if expand.as_deref() == Some("estimatedDeliveryTime") {
        state
            .app
            .delivery_options
            .list_with_estimates(Timestamp::now())
            .await
            .or_internal("failed to fetch delivery options")?
            .into_iter()
            .map(Into::into)
            .collect()
    } else {
        state
            .app
            .delivery_options
            .list_delivery_options()
            .await
            .or_internal("failed to fetch delivery options")?
            .into_iter()
            .map(Into::into)
            .collect()
    };

    Ok(Json(DeliveryOptionsResponse { data }))
}
