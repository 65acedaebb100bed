//! Product Index Handler

use std::sync::Arc;

use salvo::prelude::*;
use serde::{Deserialize, Serialize};

use shopfront_app::domain::products::models::{Product, Rating};

use crate::{errors::ApiError, extensions::*, state::State};

/// Product representation shared by every endpoint that embeds products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductResponse {
    pub id: String,
    pub name: String,
    pub image: String,
    pub rating: RatingResponse,
    pub price_cents: u64,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct RatingResponse {
    pub rate: f64,
    pub count: u32,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            image: product.image,
            rating: product.rating.into(),
            price_cents: product.price_cents,
            keywords: product.keywords,
        }
    }
}

impl From<Rating> for RatingResponse {
    fn from(rating: Rating) -> Self {
        Self {
            rate: rating.rate,
            count: rating.count,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ProductsResponse {
    /// The list of products
    pub data: Vec<ProductResponse>,
}

/// Returns the catalog, optionally filtered by a fuzzy `search` query.
#[handler]
pub(crate) async fn index(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<ProductsResponse>, ApiError> {
    let state = depot.obtain_or_internal::<Arc<State>>()?;
    let search = req.query::<String>("search");

    let products = state
        .app
        .products
        .list_products(search)
        .await
        .or_internal("failed to fetch products")?;

    Ok(Json(ProductsResponse {
        data: products.into_iter().map(Into::into).collect(),
    }))
}
