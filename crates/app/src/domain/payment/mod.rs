//! Payment Summary

pub mod errors;
pub mod models;
pub mod service;

pub use errors::PaymentServiceError;
pub use service::*;
