//! # Payment Intent Issuance
//!
//! Turns a price in major currency units into a card payment intent and hands the client
//! secret back to the browser, which completes the payment with the processor directly.
//!
//! Issuing an intent is not linked to any order. The browser later reports the outcome
//! through `OrderClient::attach_payment`.

pub mod stripe;

use async_trait::async_trait;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::Value;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, instrument, warn};

pub use stripe::StripeProcessor;

pub const DEFAULT_CURRENCY: &str = "usd";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum PaymentError {
    /// The price is missing, not numeric, not positive, or too large for minor units.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// The processor could not be reached or refused the request.
    #[error("Payment processor unavailable: {0}")]
    ProcessorUnavailable(String),
}

/// What the processor is asked to create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntentRequest {
    /// Integer minor units (cents for `usd`).
    pub amount: i64,
    pub currency: String,
    pub payment_method_types: Vec<String>,
}

impl IntentRequest {
    pub fn card(amount: i64, currency: &str) -> Self {
        Self {
            amount,
            currency: currency.to_string(),
            payment_method_types: vec!["card".to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentIntent {
    pub id: String,
    pub client_secret: String,
}

/// An external payment processor able to issue payment intents.
#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    async fn create_intent(&self, request: &IntentRequest) -> Result<PaymentIntent, PaymentError>;
}

/// Converts a major-unit amount to integer minor units, rounding half away from zero.
///
/// The rounded amount must be at least one minor unit.
pub fn to_minor_units(amount: Decimal) -> Result<i64, PaymentError> {
    let minor = amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .map(|minor| minor.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|minor| minor.to_i64())
        .ok_or_else(|| PaymentError::InvalidAmount(format!("{amount} is out of range")))?;
    if minor <= 0 {
        return Err(PaymentError::InvalidAmount(format!(
            "{amount} is less than one minor unit"
        )));
    }
    Ok(minor)
}

/// Reads a price sent as a JSON number or a numeric string.
pub fn parse_price(value: &Value) -> Result<Decimal, PaymentError> {
    let text = match value {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.trim().to_string(),
        other => return Err(PaymentError::InvalidAmount(other.to_string())),
    };
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map_err(|_| PaymentError::InvalidAmount(value.to_string()))
}

/// Issues payment intents through a [`PaymentProcessor`].
#[derive(Clone)]
pub struct PaymentService {
    processor: Arc<dyn PaymentProcessor>,
}

impl PaymentService {
    pub fn new(processor: Arc<dyn PaymentProcessor>) -> Self {
        Self { processor }
    }

    /// Requests a card intent for `amount` (major units) and returns its client secret.
    ///
    /// Processor failures are returned as-is; nothing is retried.
    #[instrument(skip(self))]
    pub async fn create_intent(&self, amount: Decimal, currency: &str) -> Result<String, PaymentError> {
        let minor = to_minor_units(amount)?;
        let request = IntentRequest::card(minor, currency);
        let intent = self
            .processor
            .create_intent(&request)
            .await
            .inspect_err(|e| warn!(error = %e, "Payment intent failed"))?;
        info!(intent_id = %intent.id, amount = minor, "Payment intent issued");
        Ok(intent.client_secret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Mutex;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[derive(Default)]
    struct RecordingProcessor {
        requests: Mutex<Vec<IntentRequest>>,
        fail: bool,
    }

    #[async_trait]
    impl PaymentProcessor for RecordingProcessor {
        async fn create_intent(&self, request: &IntentRequest) -> Result<PaymentIntent, PaymentError> {
            self.requests.lock().unwrap().push(request.clone());
            if self.fail {
                return Err(PaymentError::ProcessorUnavailable("connection refused".into()));
            }
            Ok(PaymentIntent {
                id: "pi_test".into(),
                client_secret: "pi_test_secret_abc".into(),
            })
        }
    }

    #[test]
    fn test_minor_unit_conversion() {
        assert_eq!(to_minor_units(dec("19.99")).unwrap(), 1999);
        assert_eq!(to_minor_units(dec("500")).unwrap(), 50000);
        assert_eq!(to_minor_units(dec("0.01")).unwrap(), 1);
        assert_eq!(to_minor_units(dec("10.005")).unwrap(), 1001);
        assert_eq!(to_minor_units(dec("10.004")).unwrap(), 1000);
    }

    #[test]
    fn test_rejects_unusable_amounts() {
        assert!(matches!(to_minor_units(dec("0")), Err(PaymentError::InvalidAmount(_))));
        assert!(matches!(to_minor_units(dec("-5")), Err(PaymentError::InvalidAmount(_))));
        assert!(matches!(to_minor_units(Decimal::MAX), Err(PaymentError::InvalidAmount(_))));
        // Positive, but rounds to zero cents
        assert!(matches!(to_minor_units(dec("0.004")), Err(PaymentError::InvalidAmount(_))));
        assert!(matches!(to_minor_units(dec("-0.004")), Err(PaymentError::InvalidAmount(_))));
        assert_eq!(to_minor_units(dec("0.005")).unwrap(), 1);
    }

    #[test]
    fn test_parse_price_accepts_numbers_and_numeric_strings() {
        assert_eq!(parse_price(&json!(19.99)).unwrap(), dec("19.99"));
        assert_eq!(parse_price(&json!(500)).unwrap(), dec("500"));
        assert_eq!(parse_price(&json!(" 42.50 ")).unwrap(), dec("42.50"));
        assert!(parse_price(&json!("cheap")).is_err());
        assert!(parse_price(&json!(null)).is_err());
        assert!(parse_price(&json!([1])).is_err());
    }

    #[tokio::test]
    async fn test_create_intent_sends_card_request_in_minor_units() {
        let processor = Arc::new(RecordingProcessor::default());
        let service = PaymentService::new(processor.clone());

        let secret = service
            .create_intent(dec("19.99"), DEFAULT_CURRENCY)
            .await
            .unwrap();

        assert_eq!(secret, "pi_test_secret_abc");
        let requests = processor.requests.lock().unwrap();
        assert_eq!(requests.as_slice(), &[IntentRequest::card(1999, "usd")]);
        assert_eq!(requests[0].payment_method_types, vec!["card".to_string()]);
    }

    #[tokio::test]
    async fn test_processor_failure_is_surfaced() {
        let processor = Arc::new(RecordingProcessor {
            fail: true,
            ..Default::default()
        });
        let service = PaymentService::new(processor);

        let result = service.create_intent(dec("5"), DEFAULT_CURRENCY).await;
        assert!(matches!(result, Err(PaymentError::ProcessorUnavailable(_))));
    }

    #[tokio::test]
    async fn test_invalid_amount_skips_processor() {
        let processor = Arc::new(RecordingProcessor::default());
        let service = PaymentService::new(processor.clone());

        let result = service.create_intent(dec("-1"), DEFAULT_CURRENCY).await;
        assert!(matches!(result, Err(PaymentError::InvalidAmount(_))));
        let result = service.create_intent(dec("0.004"), DEFAULT_CURRENCY).await;
        assert!(matches!(result, Err(PaymentError::InvalidAmount(_))));
        assert!(processor.requests.lock().unwrap().is_empty());
    }
}
