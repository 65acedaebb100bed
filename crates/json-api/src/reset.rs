//! Database Reset Handler

use std::sync::Arc;

use jiff::Timestamp;
use salvo::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{errors::ApiError, extensions::*, state::State};

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ResetResponse {
    pub status: String,
    pub message: String,
}

/// Drops every table, recreates the schema and reseeds the default data.
#[handler]
pub(crate) async fn create(depot: &mut Depot) -> Result<Json<ResetResponse>, ApiError> {
    let state = depot.obtain_or_internal::<Arc<State>>()?;

    state
        .app
        .maintenance
        .reset(Timestamp::now())
        .await
        .or_internal("failed to reset database")?;

    Ok(Json(ResetResponse {
        status: "success".to_string(),
        message: "Database reset and seeded successfully".to_string(),
    }))
}
