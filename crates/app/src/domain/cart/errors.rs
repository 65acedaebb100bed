//! Cart service errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CartServiceError {
    #[error("quantity must be an integer from 1 to 10")]
    InvalidQuantity(u32),

    #[error("product {0} not found")]
    ProductNotFound(String),

    #[error("delivery option {0} not found")]
    DeliveryOptionNotFound(String),

    #[error("cart item not found")]
    NotFound,

    #[error("storage error")]
    Sql(#[source] sqlx::Error),
}

impl From<sqlx::Error> for CartServiceError {
    fn from(error: sqlx::Error) -> Self {
        match error {
            sqlx::Error::RowNotFound => Self::NotFound,
            other => Self::Sql(other),
        }
    }
}
