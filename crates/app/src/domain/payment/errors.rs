use thiserror::Error;

#[derive(Debug, Error)]
pub enum PaymentServiceError {
    #[error(transparent)]
    Sql(#[from] sqlx::Error),
}
