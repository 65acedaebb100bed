//! Cart Items Repository

use sqlx::{FromRow, Row, Sqlite, Transaction, query, query_as, sqlite::SqliteRow};

use crate::database::try_get_u32;
use crate::domain::cart::models::CartItem;

const LIST_CART_ITEMS_SQL: &str = include_str!("sql/list_cart_items.sql");
const FIND_CART_ITEM_SQL: &str = include_str!("sql/find_cart_item_by_product.sql");
const INSERT_CART_ITEM_SQL: &str = include_str!("sql/insert_cart_item.sql");
const UPDATE_CART_ITEM_SQL: &str = include_str!("sql/update_cart_item.sql");
const DELETE_CART_ITEM_SQL: &str = include_str!("sql/delete_cart_item.sql");
const CLEAR_CART_SQL: &str = include_str!("sql/clear_cart.sql");
const COUNT_CART_ITEMS_SQL: &str = include_str!("sql/count_cart_items.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct SqliteCartRepository;

impl SqliteCartRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// All cart rows in creation order.
    pub(crate) async fn list_items(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
    ) -> Result<Vec<CartItem>, sqlx::Error> {
        query_as::<Sqlite, CartItem>(LIST_CART_ITEMS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn find_item_by_product(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        product_id: &str,
    ) -> Result<Option<CartItem>, sqlx::Error> {
        query_as::<Sqlite, CartItem>(FIND_CART_ITEM_SQL)
            .bind(product_id)
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn insert_item(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        product_id: &str,
        quantity: u32,
        delivery_option_id: &str,
        created_at_ms: i64,
    ) -> Result<CartItem, sqlx::Error> {
        query_as::<Sqlite, CartItem>(INSERT_CART_ITEM_SQL)
            .bind(product_id)
            .bind(i64::from(quantity))
            .bind(delivery_option_id)
            .bind(created_at_ms)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_item(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        product_id: &str,
        quantity: u32,
        delivery_option_id: &str,
    ) -> Result<CartItem, sqlx::Error> {
        query_as::<Sqlite, CartItem>(UPDATE_CART_ITEM_SQL)
            .bind(i64::from(quantity))
            .bind(delivery_option_id)
            .bind(product_id)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_item(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        product_id: &str,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_CART_ITEM_SQL)
            .bind(product_id)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    /// Delete every cart row; used after a successful order placement.
    pub(crate) async fn clear(&self, tx: &mut Transaction<'_, Sqlite>) -> Result<u64, sqlx::Error> {
        let rows_affected = query(CLEAR_CART_SQL)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn count_items(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
    ) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = query_as(COUNT_CART_ITEMS_SQL).fetch_one(&mut **tx).await?;

        Ok(count)
    }
}

impl<'r> FromRow<'r, SqliteRow> for CartItem {
    fn from_row(row: &'r SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            product_id: row.try_get("product_id")?,
            quantity: try_get_u32(row, "quantity")?,
            delivery_option_id: row.try_get("delivery_option_id")?,
            created_at_ms: row.try_get("created_at_ms")?,
        })
    }
}
