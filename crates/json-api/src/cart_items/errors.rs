//! Cart Item Errors

use tracing::error;

use shopfront_app::domain::cart::CartServiceError;

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: CartServiceError) -> ApiError {
    match error {
        CartServiceError::InvalidQuantity(_) | CartServiceError::DeliveryOptionNotFound(_) => {
            ApiError::BadRequest(error.to_string())
        }
        CartServiceError::ProductNotFound(_) | CartServiceError::NotFound => {
            ApiError::NotFound(error.to_string())
        }
        CartServiceError::Sql(source) => {
            error!("cart operation failed: {source}");

            ApiError::Internal
        }
    }
}
