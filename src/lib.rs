pub mod adapters;
pub mod config;
pub mod domain;
pub mod infra;
pub mod services;

use {
    axum::{
        Router,
        routing::{get, post},
    },
    services::transaction_processor::TransactionProcessor,
    std::sync::Arc,
};

#[derive(Clone)]
pub struct AppState {
    pub processor: Arc<TransactionProcessor>,
    pub stripe_webhook_secret: Arc<str>,
}

pub fn router(state: AppState) -> Router {
    use adapters::{stripe::webhook::wh_handler, transactions};

    Router::new()
        .route("/", get(|| async { "ok" }))
        .route(
            "/purchasecard/transactions/funded-amount",
            get(transactions::funded_amount_handler),
        )
        .route(
            "/purchasecard/transactions/fundable-amount",
            get(transactions::fundable_amount_handler),
        )
        .route(
            "/purchasecard/transactions/associated",
            get(transactions::associated_transaction_handler),
        )
        .route("/webhook/stripe", post(wh_handler))
        .with_state(state)
}
