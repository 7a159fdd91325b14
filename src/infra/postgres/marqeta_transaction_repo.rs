use {
    crate::domain::{
        error::PurchaseCardError, id::DeliveryId, repository::MarqetaTransactionRepository,
    },
    sqlx::PgPool,
    std::{future::Future, pin::Pin},
};

pub struct PgMarqetaTransactionRepo {
    pool: PgPool,
}

impl PgMarqetaTransactionRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl MarqetaTransactionRepository for PgMarqetaTransactionRepo {
    fn get_funded_amount_by_delivery_id(
        &self,
        delivery_id: DeliveryId,
    ) -> Pin<Box<dyn Future<Output = Result<i64, PurchaseCardError>> + Send + '_>> {
        Box::pin(async move { funded_amount(&self.pool, delivery_id).await })
    }

    fn has_associated_marqeta_transaction(
        &self,
        delivery_id: DeliveryId,
        ignore_timed_out: bool,
    ) -> Pin<Box<dyn Future<Output = Result<bool, PurchaseCardError>> + Send + '_>> {
        Box::pin(async move { has_transaction(&self.pool, delivery_id, ignore_timed_out).await })
    }
}

/// Sum of card transaction amounts for a delivery, 0 when there are none.
pub async fn funded_amount(pool: &PgPool, delivery_id: DeliveryId) -> Result<i64, PurchaseCardError> {
    let amount = sqlx::query_scalar::<_, i64>(
        "SELECT COALESCE(SUM(amount), 0)::BIGINT FROM marqeta_transaction WHERE delivery_id = $1",
    )
    .bind(delivery_id.get())
    .fetch_one(pool)
    .await?;

    Ok(amount)
}

/// `timed_out IS NOT TRUE` keeps rows where the flag was never set.
pub async fn has_transaction(
    pool: &PgPool,
    delivery_id: DeliveryId,
    ignore_timed_out: bool,
) -> Result<bool, PurchaseCardError> {
    let exists = sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS(
            SELECT 1 FROM marqeta_transaction
            WHERE delivery_id = $1
              AND (NOT $2 OR timed_out IS NOT TRUE)
        )
        "#,
    )
    .bind(delivery_id.get())
    .bind(ignore_timed_out)
    .fetch_one(pool)
    .await?;

    Ok(exists)
}
