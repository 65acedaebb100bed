//! Products service errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductsServiceError {
    #[error("storage error")]
    Sql(#[source] sqlx::Error),
}

impl From<sqlx::Error> for ProductsServiceError {
    fn from(error: sqlx::Error) -> Self {
        Self::Sql(error)
    }
}
