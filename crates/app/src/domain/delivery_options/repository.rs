//! Delivery Options Repository

use sqlx::{FromRow, QueryBuilder, Row, Sqlite, Transaction, query, query_as, sqlite::SqliteRow};

use crate::database::{try_get_cents, try_get_u32};
use crate::domain::delivery_options::models::DeliveryOption;

const LIST_DELIVERY_OPTIONS_SQL: &str = include_str!("sql/list_delivery_options.sql");
const FIND_DELIVERY_OPTION_SQL: &str = include_str!("sql/find_delivery_option.sql");
const INSERT_DELIVERY_OPTION_SQL: &str = include_str!("sql/insert_delivery_option.sql");
const COUNT_DELIVERY_OPTIONS_SQL: &str = include_str!("sql/count_delivery_options.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct SqliteDeliveryOptionsRepository;

impl SqliteDeliveryOptionsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_delivery_options(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
    ) -> Result<Vec<DeliveryOption>, sqlx::Error> {
        query_as::<Sqlite, DeliveryOption>(LIST_DELIVERY_OPTIONS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn find_delivery_option(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        id: &str,
    ) -> Result<Option<DeliveryOption>, sqlx::Error> {
        query_as::<Sqlite, DeliveryOption>(FIND_DELIVERY_OPTION_SQL)
            .bind(id)
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn find_delivery_options_by_ids(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        ids: &[String],
    ) -> Result<Vec<DeliveryOption>, sqlx::Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder = QueryBuilder::<Sqlite>::new(
            "SELECT id, delivery_days, price_cents, created_at_ms \
             FROM delivery_options WHERE id IN (",
        );

        let mut separated = builder.separated(", ");
        for id in ids {
            separated.push_bind(id);
        }
        builder.push(")");

        builder
            .build_query_as::<DeliveryOption>()
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn insert_delivery_option(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        option: &DeliveryOption,
    ) -> Result<(), sqlx::Error> {
        let price_i64 =
            i64::try_from(option.price_cents).map_err(|e| sqlx::Error::Encode(Box::new(e)))?;

        query(INSERT_DELIVERY_OPTION_SQL)
            .bind(&option.id)
            .bind(i64::from(option.delivery_days))
            .bind(price_i64)
            .bind(option.created_at_ms)
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    pub(crate) async fn count_delivery_options(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
    ) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = query_as(COUNT_DELIVERY_OPTIONS_SQL)
            .fetch_one(&mut **tx)
            .await?;

        Ok(count)
    }
}

impl<'r> FromRow<'r, SqliteRow> for DeliveryOption {
    fn from_row(row: &'r SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            delivery_days: try_get_u32(row, "delivery_days")?,
            price_cents: try_get_cents(row, "price_cents")?,
            created_at_ms: row.try_get("created_at_ms")?,
        })
    }
}
