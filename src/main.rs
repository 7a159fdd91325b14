use {
    axum::{extract::DefaultBodyLimit, http::StatusCode},
    purchase_card::{
        AppState,
        config::Config,
        infra::postgres::{
            delivery_funding_repo::PgDeliveryFundingRepo,
            marqeta_transaction_repo::PgMarqetaTransactionRepo,
        },
        services::transaction_processor::TransactionProcessor,
    },
    sqlx::postgres::PgPoolOptions,
    std::{sync::Arc, time::Duration},
    tokio::signal,
    tower_http::timeout::TimeoutLayer,
};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    dotenvy::dotenv().ok();
    let config = Config::from_env().expect("invalid configuration");

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(3))
        .connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("failed to run migrations");

    let processor = TransactionProcessor::new(
        Arc::new(PgMarqetaTransactionRepo::new(pool.clone())),
        Arc::new(PgDeliveryFundingRepo::new(pool)),
        config.buffer_multiplier,
    )
    .with_span(tracing::info_span!("transaction_processor", service = "purchasecard"));

    let state = AppState {
        processor: Arc::new(processor),
        stripe_webhook_secret: config.stripe_webhook_secret.into(),
    };

    let app = purchase_card::router(state)
        .layer(DefaultBodyLimit::max(64 * 1024))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ));

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .expect("failed to bind listener");
    tracing::info!(
        addr = %config.listen_addr,
        buffer_multiplier = %config.buffer_multiplier,
        "listening"
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("failed to listen for ctrl+c");
    };

    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to listen for SIGTERM")
            .recv()
            .await;
    };

    tokio::select! {
        _ = ctrl_c => tracing::info!("received ctrl+c, shutting down"),
        _ = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
