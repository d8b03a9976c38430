//! # Review Actor
//!
//! Customer reviews: append and list.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::ReviewClient;
use crate::model::Review;
use collection_actor::{ObjectId, ResourceActor};

pub fn new(buffer_size: usize) -> (ResourceActor<Review>, ReviewClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, ObjectId::new);
    let client = ReviewClient::new(generic_client);

    (actor, client)
}
