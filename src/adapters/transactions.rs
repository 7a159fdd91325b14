use {
    crate::{AppState, adapters::api_errors::ApiError, domain::error::PurchaseCardError},
    axum::{
        Json,
        extract::{FromRequestParts, Query, State},
        http::request::Parts,
    },
    serde::{Deserialize, de::DeserializeOwned},
};

/// `Query` whose rejection goes through `ApiError` instead of axum's plain-text 400.
pub struct ApiQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| PurchaseCardError::Validation(rejection.body_text()))?;
        Ok(Self(value))
    }
}

#[derive(Debug, Deserialize)]
pub struct FundedAmountQuery {
    pub delivery_id: String,
}

#[derive(Debug, Deserialize)]
pub struct FundableAmountQuery {
    pub delivery_id: String,
    pub restaurant_total: i64,
}

#[derive(Debug, Deserialize)]
pub struct AssociatedTransactionQuery {
    pub delivery_id: String,
    #[serde(default)]
    pub ignore_timed_out: bool,
}

#[tracing::instrument(name = "funded_amount", skip_all, fields(delivery_id = %query.delivery_id))]
pub async fn funded_amount_handler(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<FundedAmountQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let amount = state
        .processor
        .get_funded_amount_by_delivery_id(&query.delivery_id)
        .await?;

    Ok(Json(serde_json::json!({
        "delivery_id": query.delivery_id,
        "funded_amount": amount,
    })))
}

#[tracing::instrument(name = "fundable_amount", skip_all, fields(delivery_id = %query.delivery_id))]
pub async fn fundable_amount_handler(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<FundableAmountQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let amount = state
        .processor
        .get_fundable_amount_by_delivery_id(&query.delivery_id, query.restaurant_total)
        .await?;

    Ok(Json(serde_json::json!({
        "delivery_id": query.delivery_id,
        "fundable_amount": amount,
    })))
}

#[tracing::instrument(name = "associated_transaction", skip_all, fields(delivery_id = %query.delivery_id))]
pub async fn associated_transaction_handler(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<AssociatedTransactionQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let exists = state
        .processor
        .has_associated_marqeta_transaction(&query.delivery_id, query.ignore_timed_out)
        .await?;

    Ok(Json(serde_json::json!({
        "delivery_id": query.delivery_id,
        "has_associated_marqeta_transaction": exists,
    })))
}
