use thiserror::Error;

#[derive(Debug, Error)]
pub enum MaintenanceServiceError {
    #[error(transparent)]
    Sql(#[from] sqlx::Error),
}
