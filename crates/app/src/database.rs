//! Database connection management

use std::str::FromStr;

use serde::de::DeserializeOwned;
use sqlx::{
    Row, Sqlite, SqlitePool, Transaction,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow},
};

const SCHEMA_SQL: &str = include_str!("sql/schema.sql");
const DROP_TABLES_SQL: &str = include_str!("sql/drop_tables.sql");

#[derive(Debug, Clone)]
pub struct Db {
    pool: SqlitePool,
}

impl Db {
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Begin a transaction. Every repository call runs inside one.
    ///
    /// # Errors
    ///
    /// Returns an error when starting the transaction fails.
    pub async fn begin(&self) -> Result<Transaction<'static, Sqlite>, sqlx::Error> {
        self.pool.begin().await
    }

    /// Create all tables if they do not exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error when executing the schema fails.
    pub async fn create_tables(&self) -> Result<(), sqlx::Error> {
        sqlx::raw_sql(SCHEMA_SQL).execute(&self.pool).await?;

        Ok(())
    }

    /// Drop all tables. Used by the reset endpoint before reseeding.
    ///
    /// # Errors
    ///
    /// Returns an error when executing the drop statements fails.
    pub async fn drop_tables(&self) -> Result<(), sqlx::Error> {
        sqlx::raw_sql(DROP_TABLES_SQL).execute(&self.pool).await?;

        Ok(())
    }
}

/// Connect to `SQLite`, creating the database file if missing.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
}

/// Decode a non-negative integer cents column.
pub(crate) fn try_get_cents(row: &SqliteRow, col: &str) -> Result<u64, sqlx::Error> {
    let cents_i64: i64 = row.try_get(col)?;

    u64::try_from(cents_i64).map_err(|e| sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}

/// Decode a small unsigned integer column (quantities, day counts).
pub(crate) fn try_get_u32(row: &SqliteRow, col: &str) -> Result<u32, sqlx::Error> {
    let value_i64: i64 = row.try_get(col)?;

    u32::try_from(value_i64).map_err(|e| sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}

/// Decode a JSON-encoded TEXT column into a structured value.
pub(crate) fn try_get_json<T: DeserializeOwned>(
    row: &SqliteRow,
    col: &str,
) -> Result<T, sqlx::Error> {
    let raw: String = row.try_get(col)?;

    serde_json::from_str(&raw).map_err(|e| sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}
