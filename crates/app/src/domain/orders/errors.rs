//! Orders service errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrdersServiceError {
    #[error("cart is empty")]
    EmptyCart,

    /// A cart row references a product that no longer exists. Order
    /// placement treats this as a bad request, not a missing resource.
    #[error("product {0} not found")]
    ProductNotFound(String),

    #[error("delivery option {0} not found")]
    DeliveryOptionNotFound(String),

    #[error("order not found")]
    NotFound,

    #[error("storage error")]
    Sql(#[source] sqlx::Error),
}

impl From<sqlx::Error> for OrdersServiceError {
    fn from(error: sqlx::Error) -> Self {
        match error {
            sqlx::Error::RowNotFound => Self::NotFound,
            other => Self::Sql(other),
        }
    }
}
