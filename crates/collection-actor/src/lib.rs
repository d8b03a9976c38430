//! # Collection Actor
//!
//! An in-process document store built on the **Actor Model**. Each collection (orders,
//! users, ...) is a [`ResourceActor`] task that exclusively owns its documents and processes
//! requests one at a time, which makes every single-document operation atomic without
//! locks. Callers talk to it through a cloneable [`ResourceClient`].
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - document shape, filters and update rules
//! 2. **Runtime Layer** ([`ResourceActor`]) - message processing and storage
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - type-safe communication
//!
//! ## Operations
//!
//! | Request | Reply |
//! |---------|-------|
//! | `Create` | the stored document, with its minted id ([`InsertOutcome`] on the wire) |
//! | `Get` | `Option<T>` |
//! | `Find` | every match in id order |
//! | `Update` | [`UpdateOutcome`] (by id or first filter match, optional upsert) |
//! | `Delete` | [`DeleteOutcome`] |
//!
//! Updating or deleting something that does not exist is not an error; the outcome counts
//! report zero.
//!
//! ```rust
//! use collection_actor::{ActorEntity, ObjectId, ResourceActor};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Ticket { id: ObjectId, owner: String, closed: bool }
//! #[derive(Debug, thiserror::Error)] #[error("ticket error")] struct TicketError;
//!
//! impl ActorEntity for Ticket {
//!     type Id = ObjectId;
//!     type Create = String;
//!     type Update = ();
//!     type Filter = String;
//!     type Error = TicketError;
//!
//!     fn from_create_params(id: ObjectId, owner: String) -> Result<Self, Self::Error> {
//!         Ok(Self { id, owner, closed: false })
//!     }
//!     fn matches(&self, owner: &String) -> bool { &self.owner == owner }
//!     fn on_update(&mut self, _: ()) -> Result<(), Self::Error> {
//!         self.closed = true;
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Ticket>::new(10, ObjectId::new);
//!     tokio::spawn(actor.run());
//!
//!     let ticket = client.create("ana".to_string()).await.unwrap();
//!     let first = client.update_by_id(ticket.id, ()).await.unwrap();
//!     let second = client.update_by_id(ticket.id, ()).await.unwrap();
//!     assert_eq!((first.modified_count, second.modified_count), (1, 0));
//! }
//! ```
//!
//! ## Testing
//!
//! The [`mock`] module provides [`MockClient`](mock::MockClient) for unit testing client
//! logic without spawning a collection.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod object_id;
pub mod outcome;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response, Target};
pub use object_id::{InvalidObjectId, ObjectId};
pub use outcome::{DeleteOutcome, InsertOutcome, UpdateOutcome};
