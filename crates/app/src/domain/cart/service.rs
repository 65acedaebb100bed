//! Cart service.

use std::collections::HashMap;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        cart::{
            errors::CartServiceError,
            models::{
                CartItem, CartItemUpdate, CartLine, DEFAULT_DELIVERY_OPTION_ID, NewCartItem,
                QUANTITY_RANGE,
            },
            repository::SqliteCartRepository,
        },
        delivery_options::repository::SqliteDeliveryOptionsRepository,
        products::{models::Product, repository::SqliteProductsRepository},
    },
};

#[derive(Debug, Clone)]
pub struct SqliteCartService {
    db: Db,
    cart_repository: SqliteCartRepository,
    products_repository: SqliteProductsRepository,
    delivery_options_repository: SqliteDeliveryOptionsRepository,
}

impl SqliteCartService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            cart_repository: SqliteCartRepository::new(),
            products_repository: SqliteProductsRepository::new(),
            delivery_options_repository: SqliteDeliveryOptionsRepository::new(),
        }
    }
}

#[async_trait]
impl CartService for SqliteCartService {
    async fn list_items(&self) -> Result<Vec<CartItem>, CartServiceError> {
        let mut tx = self.db.begin().await?;

        let items = self.cart_repository.list_items(&mut tx).await?;

        tx.commit().await?;

        Ok(items)
    }

    async fn list_items_with_products(&self) -> Result<Vec<CartLine>, CartServiceError> {
        let mut tx = self.db.begin().await?;

        let items = self.cart_repository.list_items(&mut tx).await?;

        let mut product_ids: Vec<String> = items.iter().map(|i| i.product_id.clone()).collect();
        product_ids.sort();
        product_ids.dedup();

        let products = self
            .products_repository
            .find_products_by_ids(&mut tx, &product_ids)
            .await?;

        tx.commit().await?;

        let mut by_id: HashMap<String, Product> = products
            .into_iter()
            .map(|product| (product.id.clone(), product))
            .collect();

        Ok(items
            .into_iter()
            .map(|item| {
                let product = by_id.get(&item.product_id).cloned();
                CartLine { item, product }
            })
            .collect())
    }

    async fn add_item(
        &self,
        item: NewCartItem,
        now: Timestamp,
    ) -> Result<Product, CartServiceError> {
        if !QUANTITY_RANGE.contains(&item.quantity) {
            return Err(CartServiceError::InvalidQuantity(item.quantity));
        }

        let mut tx = self.db.begin().await?;

        let product = self
            .products_repository
            .find_product(&mut tx, &item.product_id)
            .await?
            .ok_or_else(|| CartServiceError::ProductNotFound(item.product_id.clone()))?;

        match self
            .cart_repository
            .find_item_by_product(&mut tx, &item.product_id)
            .await?
        {
            // Existing row: bump the quantity by the requested amount. The
            // sum is not clamped to 10, matching the upstream behavior.
            Some(existing) => {
                self.cart_repository
                    .update_item(
                        &mut tx,
                        &item.product_id,
                        existing.quantity + item.quantity,
                        &existing.delivery_option_id,
                    )
                    .await?;
            }
            None => {
                self.cart_repository
                    .insert_item(
                        &mut tx,
                        &item.product_id,
                        item.quantity,
                        DEFAULT_DELIVERY_OPTION_ID,
                        now.as_millisecond(),
                    )
                    .await?;
            }
        }

        tx.commit().await?;

        Ok(product)
    }

    async fn update_item(
        &self,
        product_id: String,
        update: CartItemUpdate,
    ) -> Result<CartItem, CartServiceError> {
        if let Some(quantity) = update.quantity {
            if !QUANTITY_RANGE.contains(&quantity) {
                return Err(CartServiceError::InvalidQuantity(quantity));
            }
        }

        let mut tx = self.db.begin().await?;

        let existing = self
            .cart_repository
            .find_item_by_product(&mut tx, &product_id)
            .await?
            .ok_or(CartServiceError::NotFound)?;

        let delivery_option_id = match update.delivery_option_id {
            Some(id) => {
                self.delivery_options_repository
                    .find_delivery_option(&mut tx, &id)
                    .await?
                    .ok_or_else(|| CartServiceError::DeliveryOptionNotFound(id.clone()))?;

                id
            }
            None => existing.delivery_option_id,
        };

        let quantity = update.quantity.unwrap_or(existing.quantity);

        let updated = self
            .cart_repository
            .update_item(&mut tx, &product_id, quantity, &delivery_option_id)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn remove_item(&self, product_id: String) -> Result<(), CartServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.cart_repository.delete_item(&mut tx, &product_id).await?;

        if rows_affected == 0 {
            return Err(CartServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait CartService: Send + Sync {
    /// All cart rows in creation order.
    async fn list_items(&self) -> Result<Vec<CartItem>, CartServiceError>;

    /// Cart rows joined with their product records.
    async fn list_items_with_products(&self) -> Result<Vec<CartLine>, CartServiceError>;

    /// Add a product to the cart, incrementing the existing row's quantity
    /// if one is already present. Returns the product record.
    async fn add_item(&self, item: NewCartItem, now: Timestamp)
    -> Result<Product, CartServiceError>;

    /// Partially update a cart row keyed by product id.
    async fn update_item(
        &self,
        product_id: String,
        update: CartItemUpdate,
    ) -> Result<CartItem, CartServiceError>;

    /// Delete the cart row for a product id.
    async fn remove_item(&self, product_id: String) -> Result<(), CartServiceError>;
}
