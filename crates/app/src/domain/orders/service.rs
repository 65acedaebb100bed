//! Orders service: retrieval, expansion, and the order-placement workflow.

use std::collections::HashMap;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use sqlx::{Sqlite, Transaction};
use uuid::Uuid;

use crate::{
    database::Db,
    domain::{
        cart::repository::SqliteCartRepository,
        delivery_options::{models::DeliveryOption, repository::SqliteDeliveryOptionsRepository},
        orders::{
            errors::OrdersServiceError,
            models::{ExpandedOrder, ExpandedOrderLine, Order, OrderLine},
            repository::SqliteOrdersRepository,
        },
        pricing,
        products::{models::Product, repository::SqliteProductsRepository},
    },
};

#[derive(Debug, Clone)]
pub struct SqliteOrdersService {
    db: Db,
    orders_repository: SqliteOrdersRepository,
    cart_repository: SqliteCartRepository,
    products_repository: SqliteProductsRepository,
    delivery_options_repository: SqliteDeliveryOptionsRepository,
}

impl SqliteOrdersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            orders_repository: SqliteOrdersRepository::new(),
            cart_repository: SqliteCartRepository::new(),
            products_repository: SqliteProductsRepository::new(),
            delivery_options_repository: SqliteDeliveryOptionsRepository::new(),
        }
    }

    /// Join order lines with the live product catalog.
    async fn expand_orders(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        orders: Vec<Order>,
    ) -> Result<Vec<ExpandedOrder>, OrdersServiceError> {
        let mut product_ids: Vec<String> = orders
            .iter()
            .flat_map(|order| order.products.iter().map(|line| line.product_id.clone()))
            .collect();
        product_ids.sort();
        product_ids.dedup();

        let products = self
            .products_repository
            .find_products_by_ids(tx, &product_ids)
            .await?;

        let by_id: HashMap<String, Product> = products
            .into_iter()
            .map(|product| (product.id.clone(), product))
            .collect();

        Ok(orders
            .into_iter()
            .map(|order| {
                let lines = order
                    .products
                    .iter()
                    .map(|line| ExpandedOrderLine {
                        line: line.clone(),
                        product: by_id.get(&line.product_id).cloned(),
                    })
                    .collect();

                ExpandedOrder {
                    order,
                    products: lines,
                }
            })
            .collect())
    }
}

#[async_trait]
impl OrdersService for SqliteOrdersService {
    async fn list_orders(&self) -> Result<Vec<Order>, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let orders = self.orders_repository.list_orders(&mut tx).await?;

        tx.commit().await?;

        Ok(orders)
    }

    async fn list_orders_expanded(&self) -> Result<Vec<ExpandedOrder>, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let orders = self.orders_repository.list_orders(&mut tx).await?;
        let expanded = self.expand_orders(&mut tx, orders).await?;

        tx.commit().await?;

        Ok(expanded)
    }

    async fn get_order(&self, order_id: String) -> Result<Order, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let order = self
            .orders_repository
            .find_order(&mut tx, &order_id)
            .await?
            .ok_or(OrdersServiceError::NotFound)?;

        tx.commit().await?;

        Ok(order)
    }

    async fn get_order_expanded(
        &self,
        order_id: String,
    ) -> Result<ExpandedOrder, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let order = self
            .orders_repository
            .find_order(&mut tx, &order_id)
            .await?
            .ok_or(OrdersServiceError::NotFound)?;

        let mut expanded = self.expand_orders(&mut tx, vec![order]).await?;

        tx.commit().await?;

        expanded.pop().ok_or(OrdersServiceError::NotFound)
    }

    async fn place_order(&self, now: Timestamp) -> Result<Order, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let items = self.cart_repository.list_items(&mut tx).await?;

        if items.is_empty() {
            return Err(OrdersServiceError::EmptyCart);
        }

        let mut product_ids: Vec<String> = items.iter().map(|i| i.product_id.clone()).collect();
        product_ids.sort();
        product_ids.dedup();

        let mut option_ids: Vec<String> =
            items.iter().map(|i| i.delivery_option_id.clone()).collect();
        option_ids.sort();
        option_ids.dedup();

        let products: HashMap<String, Product> = self
            .products_repository
            .find_products_by_ids(&mut tx, &product_ids)
            .await?
            .into_iter()
            .map(|product| (product.id.clone(), product))
            .collect();

        let options: HashMap<String, DeliveryOption> = self
            .delivery_options_repository
            .find_delivery_options_by_ids(&mut tx, &option_ids)
            .await?
            .into_iter()
            .map(|option| (option.id.clone(), option))
            .collect();

        let mut pre_tax_cents = 0u64;
        let mut lines = Vec::with_capacity(items.len());

        for item in &items {
            let product = products
                .get(&item.product_id)
                .ok_or_else(|| OrdersServiceError::ProductNotFound(item.product_id.clone()))?;

            let option = options.get(&item.delivery_option_id).ok_or_else(|| {
                OrdersServiceError::DeliveryOptionNotFound(item.delivery_option_id.clone())
            })?;

            pre_tax_cents +=
                pricing::line_cost_cents(product.price_cents, item.quantity, option.price_cents);

            lines.push(OrderLine {
                product_id: item.product_id.clone(),
                quantity: item.quantity,
                estimated_delivery_time_ms: pricing::estimated_delivery_time_ms(
                    now,
                    option.delivery_days,
                ),
            });
        }

        let order = Order {
            id: Uuid::new_v4().to_string(),
            order_time_ms: now.as_millisecond(),
            total_cost_cents: pricing::total_with_tax_cents(pre_tax_cents),
            products: lines,
        };

        self.orders_repository.insert_order(&mut tx, &order).await?;

        // The cart is cleared only once the order row is in; an error
        // anywhere above rolls the whole transaction back.
        self.cart_repository.clear(&mut tx).await?;

        tx.commit().await?;

        Ok(order)
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// All orders, newest first.
    async fn list_orders(&self) -> Result<Vec<Order>, OrdersServiceError>;

    /// All orders, newest first, with live product records joined in.
    async fn list_orders_expanded(&self) -> Result<Vec<ExpandedOrder>, OrdersServiceError>;

    /// Fetch one order by id.
    async fn get_order(&self, order_id: String) -> Result<Order, OrdersServiceError>;

    /// Fetch one order by id with live product records joined in.
    async fn get_order_expanded(
        &self,
        order_id: String,
    ) -> Result<ExpandedOrder, OrdersServiceError>;

    /// Convert the persisted cart into a priced, persisted order and clear
    /// the cart. Runs as a single transaction.
    async fn place_order(&self, now: Timestamp) -> Result<Order, OrdersServiceError>;
}
