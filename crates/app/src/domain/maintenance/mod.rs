//! Database reset and seeding.

pub mod defaults;
pub mod errors;
pub mod service;

pub use errors::MaintenanceServiceError;
pub use service::*;
