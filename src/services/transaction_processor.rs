use {
    crate::domain::{
        error::PurchaseCardError,
        funding::{BufferMultiplier, fundable_amount},
        id::DeliveryId,
        repository::{DeliveryFundingRepository, MarqetaTransactionRepository},
    },
    std::sync::Arc,
    tracing::Instrument,
};

/// Funding lookups for card transactions on deliveries.
///
/// Every operation takes the delivery id as received from the caller and
/// parses it here, so a malformed id fails the same way on every path.
pub struct TransactionProcessor {
    span: tracing::Span,
    marqeta_repository: Arc<dyn MarqetaTransactionRepository>,
    delivery_funding_repository: Arc<dyn DeliveryFundingRepository>,
    buffer_multiplier: BufferMultiplier,
}

impl TransactionProcessor {
    pub fn new(
        marqeta_repository: Arc<dyn MarqetaTransactionRepository>,
        delivery_funding_repository: Arc<dyn DeliveryFundingRepository>,
        buffer_multiplier: BufferMultiplier,
    ) -> Self {
        Self {
            span: tracing::info_span!("transaction_processor"),
            marqeta_repository,
            delivery_funding_repository,
            buffer_multiplier,
        }
    }

    /// Run every operation under `span` instead of the default one.
    pub fn with_span(mut self, span: tracing::Span) -> Self {
        self.span = span;
        self
    }

    pub async fn get_funded_amount_by_delivery_id(
        &self,
        delivery_id: &str,
    ) -> Result<i64, PurchaseCardError> {
        let span = tracing::debug_span!(parent: &self.span, "get_funded_amount", delivery_id);
        async move {
            let delivery_id = DeliveryId::parse(delivery_id)?;
            self.marqeta_repository
                .get_funded_amount_by_delivery_id(delivery_id)
                .await
        }
        .instrument(span)
        .await
    }

    /// base amount + delivery fundings − fundings already used.
    pub async fn get_fundable_amount_by_delivery_id(
        &self,
        delivery_id: &str,
        restaurant_total: i64,
    ) -> Result<i64, PurchaseCardError> {
        let span = tracing::debug_span!(
            parent: &self.span,
            "get_fundable_amount",
            delivery_id,
            restaurant_total
        );
        async move {
            let delivery_id = DeliveryId::parse(delivery_id)?;

            let (funded_amount, total_funding) = tokio::try_join!(
                self.marqeta_repository
                    .get_funded_amount_by_delivery_id(delivery_id),
                self.delivery_funding_repository
                    .get_total_funding_by_delivery_id(delivery_id),
            )?;

            let amount = fundable_amount(
                self.buffer_multiplier,
                restaurant_total,
                total_funding,
                funded_amount,
            )?;

            tracing::debug!(
                %delivery_id,
                funded_amount,
                total_funding,
                fundable_amount = amount,
                "computed fundable amount"
            );
            Ok(amount)
        }
        .instrument(span)
        .await
    }

    pub async fn has_associated_marqeta_transaction(
        &self,
        delivery_id: &str,
        ignore_timed_out: bool,
    ) -> Result<bool, PurchaseCardError> {
        let span = tracing::debug_span!(
            parent: &self.span,
            "has_associated_marqeta_transaction",
            delivery_id,
            ignore_timed_out
        );
        async move {
            let delivery_id = DeliveryId::parse(delivery_id)?;
            self.marqeta_repository
                .has_associated_marqeta_transaction(delivery_id, ignore_timed_out)
                .await
        }
        .instrument(span)
        .await
    }
}
