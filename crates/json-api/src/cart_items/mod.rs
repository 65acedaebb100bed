//! Cart Items

pub(crate) mod errors;
pub(crate) mod handlers;
