//! Shared storefront domain and persistence modules.

pub mod context;
pub mod database;
pub mod domain;

pub use sqlx;

#[cfg(test)]
mod test;
