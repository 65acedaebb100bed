//! Storefront domain modules.

pub mod cart;
pub mod delivery_options;
pub mod maintenance;
pub mod orders;
pub mod payment;
pub mod pricing;
pub mod products;
