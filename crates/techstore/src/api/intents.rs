use super::{ApiError, AppState};
use crate::payments::{parse_price, PaymentError, DEFAULT_CURRENCY};
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct IntentBody {
    #[serde(default)]
    pub price: Option<Value>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentResponse {
    pub client_secret: String,
}

/// `{price}` in major units in, `{clientSecret}` out.
pub async fn create_payment_intent(
    State(state): State<AppState>,
    Json(body): Json<IntentBody>,
) -> Result<Json<IntentResponse>, ApiError> {
    let price = body
        .price
        .ok_or_else(|| PaymentError::InvalidAmount("price is required".to_string()))?;
    let amount = parse_price(&price)?;
    let client_secret = state
        .payments()
        .create_intent(amount, DEFAULT_CURRENCY)
        .await?;
    Ok(Json(IntentResponse { client_secret }))
}
