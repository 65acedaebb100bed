//! Products Repository

use sqlx::{FromRow, QueryBuilder, Row, Sqlite, Transaction, query, query_as, sqlite::SqliteRow};

use crate::database::{try_get_cents, try_get_json};
use crate::domain::products::models::Product;

const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const FIND_PRODUCT_SQL: &str = include_str!("sql/find_product.sql");
const INSERT_PRODUCT_SQL: &str = include_str!("sql/insert_product.sql");
const COUNT_PRODUCTS_SQL: &str = include_str!("sql/count_products.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct SqliteProductsRepository;

impl SqliteProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_products(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
    ) -> Result<Vec<Product>, sqlx::Error> {
        query_as::<Sqlite, Product>(LIST_PRODUCTS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn find_product(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        id: &str,
    ) -> Result<Option<Product>, sqlx::Error> {
        query_as::<Sqlite, Product>(FIND_PRODUCT_SQL)
            .bind(id)
            .fetch_optional(&mut **tx)
            .await
    }

    /// Batch lookup for order placement and expansion joins.
    pub(crate) async fn find_products_by_ids(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        ids: &[String],
    ) -> Result<Vec<Product>, sqlx::Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder = QueryBuilder::<Sqlite>::new(
            "SELECT id, name, image, rating, price_cents, keywords, created_at_ms \
             FROM products WHERE id IN (",
        );

        let mut separated = builder.separated(", ");
        for id in ids {
            separated.push_bind(id);
        }
        builder.push(")");

        builder
            .build_query_as::<Product>()
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn insert_product(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        product: &Product,
    ) -> Result<(), sqlx::Error> {
        let price_i64 = i64::try_from(product.price_cents).map_err(|e| sqlx::Error::Encode(Box::new(e)))?;
        let rating = serde_json::to_string(&product.rating).map_err(|e| sqlx::Error::Encode(Box::new(e)))?;
        let keywords = serde_json::to_string(&product.keywords).map_err(|e| sqlx::Error::Encode(Box::new(e)))?;

        query(INSERT_PRODUCT_SQL)
            .bind(&product.id)
            .bind(&product.name)
            .bind(&product.image)
            .bind(rating)
            .bind(price_i64)
            .bind(keywords)
            .bind(product.created_at_ms)
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    pub(crate) async fn count_products(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
    ) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = query_as(COUNT_PRODUCTS_SQL).fetch_one(&mut **tx).await?;

        Ok(count)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Product {
    fn from_row(row: &'r SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            image: row.try_get("image")?,
            rating: try_get_json(row, "rating")?,
            price_cents: try_get_cents(row, "price_cents")?,
            keywords: try_get_json(row, "keywords")?,
            created_at_ms: row.try_get("created_at_ms")?,
        })
    }
}
