//! # Product Actor
//!
//! The catalog collection: insert, list, point lookup and delete.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::ProductClient;
use crate::model::Product;
use collection_actor::{ObjectId, ResourceActor};

/// Creates a new Product actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Product>, ProductClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, ObjectId::new);
    let client = ProductClient::new(generic_client);

    (actor, client)
}
