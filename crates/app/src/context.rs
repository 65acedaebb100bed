//! App Context

use std::sync::Arc;

use jiff::Timestamp;
use thiserror::Error;

use crate::{
    database::{self, Db},
    domain::{
        cart::{CartService, SqliteCartService},
        delivery_options::{DeliveryOptionsService, SqliteDeliveryOptionsService},
        maintenance::{MaintenanceService, MaintenanceServiceError, SqliteMaintenanceService},
        orders::{OrdersService, SqliteOrdersService},
        payment::{PaymentService, SqlitePaymentService},
        products::{ProductsService, SqliteProductsService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to seed default data")]
    Seed(#[source] MaintenanceServiceError),
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub delivery_options: Arc<dyn DeliveryOptionsService>,
    pub cart: Arc<dyn CartService>,
    pub orders: Arc<dyn OrdersService>,
    pub payment: Arc<dyn PaymentService>,
    pub maintenance: Arc<dyn MaintenanceService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// Creates the schema if it does not exist and seeds default data into
    /// any empty tables, so a fresh database serves a populated storefront.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection, creating
    /// the schema or seeding fails.
    pub async fn from_database_url(url: &str) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        let db = Db::new(pool);

        db.create_tables().await.map_err(AppInitError::Database)?;

        let maintenance = SqliteMaintenanceService::new(db.clone());

        maintenance
            .ensure_seeded(Timestamp::now())
            .await
            .map_err(AppInitError::Seed)?;

        Ok(Self {
            products: Arc::new(SqliteProductsService::new(db.clone())),
            delivery_options: Arc::new(SqliteDeliveryOptionsService::new(db.clone())),
            cart: Arc::new(SqliteCartService::new(db.clone())),
            orders: Arc::new(SqliteOrdersService::new(db.clone())),
            payment: Arc::new(SqlitePaymentService::new(db)),
            maintenance: Arc::new(maintenance),
        })
    }
}
