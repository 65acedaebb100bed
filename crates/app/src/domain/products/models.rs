//! Product Models

use serde::{Deserialize, Serialize};

/// Product Model
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub image: String,
    pub rating: Rating,
    pub price_cents: u64,
    pub keywords: Vec<String>,
    pub created_at_ms: i64,
}

/// Customer rating, stored as a JSON column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub rate: f64,
    pub count: u32,
}
