//! Delivery options service errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeliveryOptionsServiceError {
    #[error("storage error")]
    Sql(#[source] sqlx::Error),
}

impl From<sqlx::Error> for DeliveryOptionsServiceError {
    fn from(error: sqlx::Error) -> Self {
        Self::Sql(error)
    }
}
