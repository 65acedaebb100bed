//! Order Errors

use tracing::error;

use shopfront_app::domain::orders::OrdersServiceError;

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: OrdersServiceError) -> ApiError {
    match error {
        OrdersServiceError::EmptyCart
        | OrdersServiceError::ProductNotFound(_)
        | OrdersServiceError::DeliveryOptionNotFound(_) => ApiError::BadRequest(error.to_string()),
        OrdersServiceError::NotFound => ApiError::NotFound(error.to_string()),
        OrdersServiceError::Sql(source) => {
            error!("order operation failed: {source}");

            ApiError::Internal
        }
    }
}
