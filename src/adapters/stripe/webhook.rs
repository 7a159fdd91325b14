use {
    crate::{AppState, adapters::api_errors::ApiError, domain::error::PurchaseCardError},
    axum::{Json, extract::State, http::HeaderMap},
};

/// Inbound webhook request body. The provider's event model is used as-is.
pub type StripeWebhookEvent = stripe::Event;

/// Verify the `Stripe-Signature` header against `secret` and decode the event.
pub fn construct_event(
    body: &str,
    signature: &str,
    secret: &str,
) -> Result<StripeWebhookEvent, PurchaseCardError> {
    stripe::Webhook::construct_event(body, signature, secret)
        .map_err(|e| PurchaseCardError::WebhookSignature(e.to_string()))
}

/// Acknowledge a verified event. Events are not processed further here.
#[tracing::instrument(
    name = "webhook",
    skip_all,
    fields(event_id = tracing::field::Empty, event_type = tracing::field::Empty)
)]
pub async fn wh_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: String,
) -> Result<Json<serde_json::Value>, ApiError> {
    let sig = headers
        .get("Stripe-Signature")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| {
            PurchaseCardError::WebhookSignature("missing Stripe-Signature header".into())
        })?;

    let event = construct_event(&body, sig, &state.stripe_webhook_secret)?;

    tracing::Span::current()
        .record("event_id", tracing::field::display(&event.id))
        .record("event_type", tracing::field::display(&event.type_));

    tracing::info!("webhook event received");
    Ok(Json(serde_json::json!({"status": "received"})))
}
