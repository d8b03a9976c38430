//! # Order Actor
//!
//! The orders collection. Documents carry the order state machine:
//!
//! ```text
//! Pending --mark_shipped--> Shipped        (status axis)
//! Unpaid  --attach_payment--> Paid         (payment axis, independent)
//! any state --cancel--> removed
//! ```
//!
//! - [`entity`] - [`ActorEntity`](collection_actor::ActorEntity) implementation for [`Order`]
//! - [`error`] - [`OrderError`]
//! - [`new()`] - Factory function that creates the actor and client

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::OrderClient;
use crate::model::Order;
use collection_actor::{ObjectId, ResourceActor};

/// Creates a new Order actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, ObjectId::new);
    let client = OrderClient::new(generic_client);

    (actor, client)
}
