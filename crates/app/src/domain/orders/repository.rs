//! Orders Repository

use sqlx::{FromRow, Row, Sqlite, Transaction, query, query_as, sqlite::SqliteRow};

use crate::database::{try_get_cents, try_get_json};
use crate::domain::orders::models::Order;

const LIST_ORDERS_SQL: &str = include_str!("sql/list_orders.sql");
const FIND_ORDER_SQL: &str = include_str!("sql/find_order.sql");
const INSERT_ORDER_SQL: &str = include_str!("sql/insert_order.sql");
const COUNT_ORDERS_SQL: &str = include_str!("sql/count_orders.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct SqliteOrdersRepository;

impl SqliteOrdersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// All orders, newest first.
    pub(crate) async fn list_orders(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
    ) -> Result<Vec<Order>, sqlx::Error> {
        query_as::<Sqlite, Order>(LIST_ORDERS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn find_order(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        id: &str,
    ) -> Result<Option<Order>, sqlx::Error> {
        query_as::<Sqlite, Order>(FIND_ORDER_SQL)
            .bind(id)
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn insert_order(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        order: &Order,
    ) -> Result<(), sqlx::Error> {
        let total_i64 = i64::try_from(order.total_cost_cents)
            .map_err(|e| sqlx::Error::Encode(Box::new(e)))?;
        let products =
            serde_json::to_string(&order.products).map_err(|e| sqlx::Error::Encode(Box::new(e)))?;

        query(INSERT_ORDER_SQL)
            .bind(&order.id)
            .bind(order.order_time_ms)
            .bind(total_i64)
            .bind(products)
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    pub(crate) async fn count_orders(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
    ) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = query_as(COUNT_ORDERS_SQL).fetch_one(&mut **tx).await?;

        Ok(count)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Order {
    fn from_row(row: &'r SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            order_time_ms: row.try_get("order_time_ms")?,
            total_cost_cents: try_get_cents(row, "total_cost_cents")?,
            products: try_get_json(row, "products")?,
        })
    }
}
