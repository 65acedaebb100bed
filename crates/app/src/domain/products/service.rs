//! Products service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::products::{
        errors::ProductsServiceError, models::Product, repository::SqliteProductsRepository,
        search,
    },
};

#[derive(Debug, Clone)]
pub struct SqliteProductsService {
    db: Db,
    repository: SqliteProductsRepository,
}

impl SqliteProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: SqliteProductsRepository::new(),
        }
    }
}

#[async_trait]
impl ProductsService for SqliteProductsService {
    async fn list_products(
        &self,
        search: Option<String>,
    ) -> Result<Vec<Product>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let products = self.repository.list_products(&mut tx).await?;

        tx.commit().await?;

        match search {
            Some(query) => Ok(search::rank(products, &query)),
            None => Ok(products),
        }
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// List the catalog, optionally filtered and ranked by a fuzzy query.
    async fn list_products(
        &self,
        search: Option<String>,
    ) -> Result<Vec<Product>, ProductsServiceError>;
}
