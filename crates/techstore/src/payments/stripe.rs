//! Stripe payment intents over the REST API (no SDK dependency).

use super::{IntentRequest, PaymentError, PaymentIntent, PaymentProcessor};
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use tracing::debug;

pub const STRIPE_API_BASE: &str = "https://api.stripe.com";

/// Issues payment intents with `POST /v1/payment_intents`.
pub struct StripeProcessor {
    http: reqwest::Client,
    secret_key: SecretString,
    api_base: String,
}

impl StripeProcessor {
    pub fn new(secret_key: SecretString, api_base: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            secret_key,
            api_base: api_base.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/payment_intents", self.api_base.trim_end_matches('/'))
    }
}

/// Form-encodes the request the way Stripe expects arrays (`key[0]=...`).
fn form_fields(request: &IntentRequest) -> Vec<(String, String)> {
    let mut form = vec![
        ("amount".to_string(), request.amount.to_string()),
        ("currency".to_string(), request.currency.clone()),
    ];
    for (i, method) in request.payment_method_types.iter().enumerate() {
        form.push((format!("payment_method_types[{i}]"), method.clone()));
    }
    form
}

fn unavailable(e: impl std::fmt::Display) -> PaymentError {
    PaymentError::ProcessorUnavailable(e.to_string())
}

#[async_trait]
impl PaymentProcessor for StripeProcessor {
    async fn create_intent(&self, request: &IntentRequest) -> Result<PaymentIntent, PaymentError> {
        debug!(amount = request.amount, currency = %request.currency, "Creating Stripe payment intent");
        let response = self
            .http
            .post(self.endpoint())
            .basic_auth(self.secret_key.expose_secret(), None::<&str>)
            .form(&form_fields(request))
            .send()
            .await
            .map_err(unavailable)?;

        let status = response.status();
        let body: Value = response.json().await.map_err(unavailable)?;

        if !status.is_success() {
            let message = body["error"]["message"].as_str().unwrap_or("unknown error");
            return Err(unavailable(format!("Stripe returned {status}: {message}")));
        }

        let field = |name: &str| {
            body[name]
                .as_str()
                .map(String::from)
                .ok_or_else(|| unavailable(format!("Stripe response missing {name}")))
        };
        Ok(PaymentIntent {
            id: field("id")?,
            client_secret: field("client_secret")?,
        })
    }
}
