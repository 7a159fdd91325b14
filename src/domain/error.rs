use thiserror::Error;

#[derive(Debug, Error)]
pub enum PurchaseCardError {
    /// A boundary value could not be parsed; `field` names the input.
    #[error("validation: invalid {field}: {value:?} is not an integer")]
    InvalidField { field: &'static str, value: String },

    #[error("validation: {0}")]
    Validation(String),

    #[error("database: {0}")]
    Database(#[from] sqlx::Error),

    #[error("webhook signature: {0}")]
    WebhookSignature(String),
}
