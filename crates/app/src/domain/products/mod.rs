//! Products

pub mod errors;
pub mod models;
pub(crate) mod repository;
mod search;
pub mod service;

pub use errors::ProductsServiceError;
pub use service::*;
