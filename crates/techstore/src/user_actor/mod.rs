//! # User Actor
//!
//! The users collection, keyed in practice by email.
//!
//! - [`entity`] - [`ActorEntity`](collection_actor::ActorEntity) implementation for [`User`]
//! - [`error`] - [`UserError`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use techstore::user_actor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = user_actor::new(32);
//!     tokio::spawn(actor.run());
//!
//!     client.grant_admin("root@example.com").await?;
//!     assert!(!client.is_admin("root@example.com").await?);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::UserClient;
use crate::model::User;
use collection_actor::{ObjectId, ResourceActor};

/// Creates a new User actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<User>, UserClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, ObjectId::new);
    let client = UserClient::new(generic_client);

    (actor, client)
}
