//! Maintenance service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use sqlx::{Sqlite, Transaction};
use tracing::info;

use crate::{
    database::Db,
    domain::{
        cart::repository::SqliteCartRepository,
        delivery_options::repository::SqliteDeliveryOptionsRepository,
        maintenance::{defaults, errors::MaintenanceServiceError},
        orders::repository::SqliteOrdersRepository,
        products::repository::SqliteProductsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct SqliteMaintenanceService {
    db: Db,
    products_repository: SqliteProductsRepository,
    delivery_options_repository: SqliteDeliveryOptionsRepository,
    cart_repository: SqliteCartRepository,
    orders_repository: SqliteOrdersRepository,
}

impl SqliteMaintenanceService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            products_repository: SqliteProductsRepository::new(),
            delivery_options_repository: SqliteDeliveryOptionsRepository::new(),
            cart_repository: SqliteCartRepository::new(),
            orders_repository: SqliteOrdersRepository::new(),
        }
    }

    /// Install the default data into every table that is still empty.
    ///
    /// Called once at startup so that a fresh database serves a populated
    /// storefront. Tables that already hold rows are left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error when any of the seeding queries fail.
    pub async fn ensure_seeded(&self, now: Timestamp) -> Result<(), MaintenanceServiceError> {
        let base_ms = now.as_millisecond();

        let mut tx = self.db.begin().await?;

        if self.products_repository.count_products(&mut tx).await? == 0 {
            info!("seeding default products");
            self.seed_products(&mut tx, base_ms).await?;
        }

        if self
            .delivery_options_repository
            .count_delivery_options(&mut tx)
            .await?
            == 0
        {
            info!("seeding default delivery options");
            self.seed_delivery_options(&mut tx, base_ms).await?;
        }

        if self.cart_repository.count_items(&mut tx).await? == 0 {
            info!("seeding default cart items");
            self.seed_cart_items(&mut tx, base_ms).await?;
        }

        if self.orders_repository.count_orders(&mut tx).await? == 0 {
            info!("seeding default orders");
            self.seed_orders(&mut tx, base_ms).await?;
        }

        tx.commit().await?;

        Ok(())
    }

    async fn seed_products(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        base_ms: i64,
    ) -> Result<(), MaintenanceServiceError> {
        for product in defaults::default_products(base_ms) {
            self.products_repository.insert_product(tx, &product).await?;
        }

        Ok(())
    }

    async fn seed_delivery_options(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        base_ms: i64,
    ) -> Result<(), MaintenanceServiceError> {
        for option in defaults::default_delivery_options(base_ms) {
            self.delivery_options_repository
                .insert_delivery_option(tx, &option)
                .await?;
        }

        Ok(())
    }

    async fn seed_cart_items(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        base_ms: i64,
    ) -> Result<(), MaintenanceServiceError> {
        for item in defaults::default_cart_items(base_ms) {
            self.cart_repository
                .insert_item(
                    tx,
                    &item.product_id,
                    item.quantity,
                    &item.delivery_option_id,
                    item.created_at_ms,
                )
                .await?;
        }

        Ok(())
    }

    async fn seed_orders(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        base_ms: i64,
    ) -> Result<(), MaintenanceServiceError> {
        for order in defaults::default_orders(base_ms) {
            self.orders_repository.insert_order(tx, &order).await?;
        }

        Ok(())
    }
}

#[async_trait]
impl MaintenanceService for SqliteMaintenanceService {
    async fn reset(&self, now: Timestamp) -> Result<(), MaintenanceServiceError> {
        let base_ms = now.as_millisecond();

        self.db.drop_tables().await?;
        self.db.create_tables().await?;

        let mut tx = self.db.begin().await?;

        self.seed_products(&mut tx, base_ms).await?;
        self.seed_delivery_options(&mut tx, base_ms).await?;
        self.seed_cart_items(&mut tx, base_ms).await?;
        self.seed_orders(&mut tx, base_ms).await?;

        tx.commit().await?;

        info!("database reset and seeded");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait MaintenanceService: Send + Sync {
    /// Drop every table, recreate the schema and install the default data.
    async fn reset(&self, now: Timestamp) -> Result<(), MaintenanceServiceError>;
}
