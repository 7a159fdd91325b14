use {
    crate::domain::{error::PurchaseCardError, id::DeliveryId, repository::DeliveryFundingRepository},
    sqlx::PgPool,
    std::{future::Future, pin::Pin},
};

pub struct PgDeliveryFundingRepo {
    pool: PgPool,
}

impl PgDeliveryFundingRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl DeliveryFundingRepository for PgDeliveryFundingRepo {
    fn get_total_funding_by_delivery_id(
        &self,
        delivery_id: DeliveryId,
    ) -> Pin<Box<dyn Future<Output = Result<i64, PurchaseCardError>> + Send + '_>> {
        Box::pin(async move { total_funding(&self.pool, delivery_id).await })
    }
}

pub async fn total_funding(pool: &PgPool, delivery_id: DeliveryId) -> Result<i64, PurchaseCardError> {
    let total = sqlx::query_scalar::<_, i64>(
        "SELECT COALESCE(SUM(amount), 0)::BIGINT FROM delivery_funding WHERE delivery_id = $1",
    )
    .bind(delivery_id.get())
    .fetch_one(pool)
    .await?;

    Ok(total)
}
