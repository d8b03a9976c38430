//! # Order
//!
//! A single purchase attempt.
//!
//! # Actor Framework
//! `Order` implements the [`ActorEntity`](collection_actor::ActorEntity) trait
//! (see [`order_actor::entity`](crate::order_actor::entity)), allowing it to be stored
//! by a [`ResourceActor`](collection_actor::ResourceActor).
//!
//! Only `_id`, `email`, `status` and `payment` are interpreted. Everything else the client
//! sent is kept verbatim in `details` and serialized back inline. An `email` that is not a
//! string, or an explicit `"payment": null`, is not interpreted either: it stays in
//! `details` so the document still reads back as it was sent.

use collection_actor::ObjectId;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Shipment state. Orders start `Pending`; once `Shipped` they stay shipped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    Pending,
    Shipped,
}

/// Payment confirmation payload from the client, stored as received.
///
/// Nothing here is verified against the payment processor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentRecord(pub Value);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub status: OrderStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment: Option<PaymentRecord>,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl Order {
    pub fn is_paid(&self) -> bool {
        self.payment.is_some()
    }
}

/// Payload for creating a new order.
///
/// `email` is set only when the client sent a string; any other `email` value lands in
/// `details`. Likewise `"payment": null` lands in `details` rather than being dropped.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "RawOrderCreate")]
pub struct OrderCreate {
    pub email: Option<String>,
    pub status: Option<OrderStatus>,
    pub payment: Option<PaymentRecord>,
    pub details: Map<String, Value>,
}

#[derive(Deserialize)]
struct RawOrderCreate {
    #[serde(default, deserialize_with = "present")]
    email: Option<Value>,
    #[serde(default)]
    status: Option<OrderStatus>,
    #[serde(default, deserialize_with = "present")]
    payment: Option<Value>,
    #[serde(flatten)]
    details: Map<String, Value>,
}

/// `Some` whenever the key is present, including `Some(Value::Null)`.
fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

impl From<RawOrderCreate> for OrderCreate {
    fn from(raw: RawOrderCreate) -> Self {
        let mut details = raw.details;
        let email = match raw.email {
            Some(Value::String(email)) => Some(email),
            Some(other) => {
                details.insert("email".to_string(), other);
                None
            }
            None => None,
        };
        let payment = match raw.payment {
            Some(Value::Null) => {
                details.insert("payment".to_string(), Value::Null);
                None
            }
            other => other.map(PaymentRecord),
        };
        Self {
            email,
            status: raw.status,
            payment,
            details,
        }
    }
}

impl OrderCreate {
    /// Payload with an email and the given free-form fields.
    pub fn for_email(email: impl Into<String>, details: Map<String, Value>) -> Self {
        Self {
            email: Some(email.into()),
            details,
            ..Self::default()
        }
    }
}

/// Mutations the lifecycle allows on a stored order.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderUpdate {
    MarkShipped,
    AttachPayment(PaymentRecord),
}

#[derive(Debug, Clone, PartialEq)]
pub enum OrderFilter {
    Email(String),
}
