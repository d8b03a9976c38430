use crate::model::{Order, OrderCreate, OrderFilter, OrderStatus, OrderUpdate};
use crate::order_actor::OrderError;
use collection_actor::{ActorEntity, ObjectId};

/// Keys the store always owns; never kept in the free-form payload.
const STORE_KEYS: [&str; 2] = ["_id", "status"];

impl ActorEntity for Order {
    type Id = ObjectId;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Filter = OrderFilter;
    type Error = OrderError;

    fn from_create_params(id: ObjectId, params: OrderCreate) -> Result<Self, Self::Error> {
        let mut details = params.details;
        for key in STORE_KEYS {
            details.remove(key);
        }
        // A typed value replaces whatever the free-form payload carried under that key
        if params.email.is_some() {
            details.remove("email");
        }
        if params.payment.is_some() {
            details.remove("payment");
        }
        Ok(Self {
            id,
            email: params.email,
            status: params.status.unwrap_or_default(),
            payment: params.payment,
            details,
        })
    }

    fn matches(&self, filter: &OrderFilter) -> bool {
        match filter {
            OrderFilter::Email(email) => self.email.as_deref() == Some(email.as_str()),
        }
    }

    fn on_update(&mut self, update: OrderUpdate) -> Result<(), Self::Error> {
        match update {
            OrderUpdate::MarkShipped => self.status = OrderStatus::Shipped,
            // Last write wins; the previous record is not merged.
            OrderUpdate::AttachPayment(record) => {
                self.details.remove("payment");
                self.payment = Some(record);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PaymentRecord;
    use serde_json::json;

    fn payload(value: serde_json::Value) -> OrderCreate {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_create_keeps_payload_and_starts_pending() {
        let id = ObjectId::new();
        let order = Order::from_create_params(
            id,
            payload(json!({ "email": "a@b.com", "price": 500, "items": ["laptop"] })),
        )
        .unwrap();

        assert_eq!(order.id, id);
        assert_eq!(order.email.as_deref(), Some("a@b.com"));
        assert_eq!(order.status, OrderStatus::Pending);
        assert!(!order.is_paid());
        assert_eq!(order.details["price"], json!(500));
        assert_eq!(order.details["items"], json!(["laptop"]));
    }

    #[test]
    fn test_client_supplied_id_is_ignored() {
        let id = ObjectId::new();
        let order = Order::from_create_params(
            id,
            payload(json!({ "_id": "507f1f77bcf86cd799439011", "price": 1 })),
        )
        .unwrap();

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["_id"], json!(id.to_string()));
    }

    #[test]
    fn test_matches_by_email() {
        let order =
            Order::from_create_params(ObjectId::new(), payload(json!({ "email": "a@b.com" })))
                .unwrap();
        assert!(order.matches(&OrderFilter::Email("a@b.com".into())));
        assert!(!order.matches(&OrderFilter::Email("A@B.com".into())));

        let anonymous = Order::from_create_params(ObjectId::new(), payload(json!({}))).unwrap();
        assert!(!anonymous.matches(&OrderFilter::Email(String::new())));
    }

    #[test]
    fn test_payment_overwrites_previous_record() {
        let mut order =
            Order::from_create_params(ObjectId::new(), OrderCreate::default()).unwrap();
        order
            .on_update(OrderUpdate::AttachPayment(PaymentRecord(json!({ "txn": "r1", "last4": "4242" }))))
            .unwrap();
        order
            .on_update(OrderUpdate::AttachPayment(PaymentRecord(json!({ "txn": "r2" }))))
            .unwrap();
        assert_eq!(order.payment, Some(PaymentRecord(json!({ "txn": "r2" }))));
    }

    #[test]
    fn test_non_string_email_is_stored_as_sent() {
        let order = Order::from_create_params(
            ObjectId::new(),
            payload(json!({ "email": 42, "price": 5 })),
        )
        .unwrap();

        assert_eq!(order.email, None);
        assert!(!order.matches(&OrderFilter::Email("42".into())));

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["email"], 42);
        assert_eq!(json["price"], 5);
        assert_eq!(json["status"], "Pending");
    }

    #[test]
    fn test_explicit_nulls_are_kept() {
        let mut order = Order::from_create_params(
            ObjectId::new(),
            payload(json!({ "email": null, "payment": null, "price": 5 })),
        )
        .unwrap();

        assert!(!order.is_paid());
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json.get("email"), Some(&json!(null)));
        assert_eq!(json.get("payment"), Some(&json!(null)));

        // A later payment replaces the null instead of duplicating the key
        order
            .on_update(OrderUpdate::AttachPayment(PaymentRecord(json!({ "txn": "r1" }))))
            .unwrap();
        assert!(!order.details.contains_key("payment"));
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["payment"], json!({ "txn": "r1" }));
    }

    #[test]
    fn test_typed_fields_win_over_free_form_keys() {
        let mut details = serde_json::Map::new();
        details.insert("email".into(), json!("shadow@b.com"));
        details.insert("status".into(), json!("Lost"));
        let order =
            Order::from_create_params(ObjectId::new(), OrderCreate::for_email("a@b.com", details))
                .unwrap();

        assert!(order.details.is_empty());
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["email"], "a@b.com");
        assert_eq!(json["status"], "Pending");
    }

    #[test]
    fn test_wire_shape() {
        let mut order = Order::from_create_params(
            ObjectId::new(),
            payload(json!({ "email": "a@b.com", "price": 500 })),
        )
        .unwrap();
        order.on_update(OrderUpdate::MarkShipped).unwrap();

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["status"], "Shipped");
        assert_eq!(json["price"], 500);
        assert!(json.get("payment").is_none());
    }
}
