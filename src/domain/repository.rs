use {
    super::error::PurchaseCardError,
    super::id::DeliveryId,
    std::{future::Future, pin::Pin},
};

/// Card transactions issued through Marqeta for a delivery.
pub trait MarqetaTransactionRepository: Send + Sync {
    /// Cents already disbursed on the card for this delivery.
    fn get_funded_amount_by_delivery_id(
        &self,
        delivery_id: DeliveryId,
    ) -> Pin<Box<dyn Future<Output = Result<i64, PurchaseCardError>> + Send + '_>>;

    /// Whether any card transaction exists for the delivery. With
    /// `ignore_timed_out`, transactions that timed out are not counted.
    fn has_associated_marqeta_transaction(
        &self,
        delivery_id: DeliveryId,
        ignore_timed_out: bool,
    ) -> Pin<Box<dyn Future<Output = Result<bool, PurchaseCardError>> + Send + '_>>;
}

/// Funding records allocated against a delivery.
pub trait DeliveryFundingRepository: Send + Sync {
    fn get_total_funding_by_delivery_id(
        &self,
        delivery_id: DeliveryId,
    ) -> Pin<Box<dyn Future<Output = Result<i64, PurchaseCardError>> + Send + '_>>;
}
