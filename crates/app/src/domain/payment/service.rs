//! Payment summary service.

use std::collections::HashMap;

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        cart::repository::SqliteCartRepository,
        delivery_options::{models::DeliveryOption, repository::SqliteDeliveryOptionsRepository},
        payment::{errors::PaymentServiceError, models::PaymentSummary},
        pricing,
        products::{models::Product, repository::SqliteProductsRepository},
    },
};

#[derive(Debug, Clone)]
pub struct SqlitePaymentService {
    db: Db,
    cart_repository: SqliteCartRepository,
    products_repository: SqliteProductsRepository,
    delivery_options_repository: SqliteDeliveryOptionsRepository,
}

impl SqlitePaymentService {
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
impl PaymentService for SqlitePaymentService {
    async fn payment_summary(&self) -> Result<PaymentSummary, PaymentServiceError> {
        let mut tx = self.db.begin().await?;

        let items = self.cart_repository.list_items(&mut tx).await?;

        let mut product_ids: Vec<String> = items.iter().map(|i| i.product_id.clone()).collect();
        product_ids.sort();
        product_ids.dedup();

        let mut option_ids: Vec<String> = items
            .iter()
            .map(|i| i.delivery_option_id.clone())
            .collect();
        option_ids.sort();
        option_ids.dedup();

        let products = self
            .products_repository
            .find_products_by_ids(&mut tx, &product_ids)
            .await?;

        let options = self
            .delivery_options_repository
            .find_delivery_options_by_ids(&mut tx, &option_ids)
            .await?;

        tx.commit().await?;

        let products: HashMap<String, Product> = products
            .into_iter()
            .map(|product| (product.id.clone(), product))
            .collect();

        let options: HashMap<String, DeliveryOption> = options
            .into_iter()
            .map(|option| (option.id.clone(), option))
            .collect();

        let mut summary = PaymentSummary::default();

        for item in items {
            // Rows whose product or delivery option no longer exists are
            // skipped rather than failing the whole summary.
            let Some(product) = products.get(&item.product_id) else {
                continue;
            };
            let Some(option) = options.get(&item.delivery_option_id) else {
                continue;
            };

            summary.total_items += item.quantity;
            summary.products_cost_cents += product.price_cents * u64::from(item.quantity);
            summary.shipping_cost_cents += option.price_cents;
        }

        summary.total_before_tax_cents = summary.products_cost_cents + summary.shipping_cost_cents;
        summary.tax_cents = pricing::tax_cents(summary.total_before_tax_cents);
        summary.total_cents = pricing::total_with_tax_cents(summary.total_before_tax_cents);

        Ok(summary)
    }
}

#[automock]
#[async_trait]
pub trait PaymentService: Send + Sync {
    /// Compute the cost breakdown for the current cart.
    async fn payment_summary(&self) -> Result<PaymentSummary, PaymentServiceError>;
}
