//! Delivery options service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;

use crate::{
    database::Db,
    domain::delivery_options::{
        errors::DeliveryOptionsServiceError,
        models::{DeliveryOption, EstimatedDeliveryOption},
        repository::SqliteDeliveryOptionsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct SqliteDeliveryOptionsService {
    db: Db,
    repository: SqliteDeliveryOptionsRepository,
}

impl SqliteDeliveryOptionsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: SqliteDeliveryOptionsRepository::new(),
        }
    }
}

#[async_trait]
impl DeliveryOptionsService for SqliteDeliveryOptionsService {
    async fn list_delivery_options(
        &self,
    ) -> Result<Vec<DeliveryOption>, DeliveryOptionsServiceError> {
        let mut tx = self.db.begin().await?;

        let options = self.repository.list_delivery_options(&mut tx).await?;

        tx.commit().await?;

        Ok(options)
    }

    async fn list_with_estimates(
        &self,
        now: Timestamp,
    ) -> Result<Vec<EstimatedDeliveryOption>, DeliveryOptionsServiceError> {
        let options = self.list_delivery_options().await?;

        Ok(options
            .into_iter()
            .map(|option| EstimatedDeliveryOption {
                estimated_delivery_time_ms: option.estimated_delivery_time_ms(now),
                option,
            })
            .collect())
    }
}

#[automock]
#[async_trait]
pub trait DeliveryOptionsService: Send + Sync {
    /// List all shipping tiers in seed order.
    async fn list_delivery_options(
        &self,
    ) -> Result<Vec<DeliveryOption>, DeliveryOptionsServiceError>;

    /// List all shipping tiers decorated with estimated arrival timestamps.
    async fn list_with_estimates(
        &self,
        now: Timestamp,
    ) -> Result<Vec<EstimatedDeliveryOption>, DeliveryOptionsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{domain::pricing::MS_PER_DAY, test::TestContext};

    use super::*;

    #[tokio::test]
    async fn list_returns_seeded_options_in_order() -> TestResult {
        let ctx = TestContext::seeded().await;

        let options = ctx.delivery_options.list_delivery_options().await?;

        assert_eq!(options.len(), 3);
        assert_eq!(options[0].id, "1");
        assert_eq!(options[0].price_cents, 0);
        assert_eq!(options[2].id, "3");

        Ok(())
    }

    #[tokio::test]
    async fn estimates_add_lead_time_to_now() -> TestResult {
        let ctx = TestContext::seeded().await;
        let now = Timestamp::UNIX_EPOCH;

        let estimated = ctx.delivery_options.list_with_estimates(now).await?;

        for entry in &estimated {
            assert_eq!(
                entry.estimated_delivery_time_ms,
                i64::from(entry.option.delivery_days) * MS_PER_DAY
            );
        }

        Ok(())
    }
}
